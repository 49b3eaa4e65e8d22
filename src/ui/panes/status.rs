//! Status bar rendering with step count and run state

use crate::sort::{Algorithm, Direction};
use crate::ui::app::RunState;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction as LayoutDirection, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Data needed to render the status bar
pub struct StatusRenderData<'a> {
    pub message: &'a str,
    pub steps: usize,
    pub algorithm: Algorithm,
    pub direction: Direction,
    pub state: RunState,
}

/// Render the status bar at the bottom
pub fn render_status_bar(frame: &mut Frame, area: Rect, data: StatusRenderData) {
    // Split status bar into left and right
    let layout = Layout::default()
        .direction(LayoutDirection::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    let badge_bg = match data.state {
        RunState::Idle => DEFAULT_THEME.primary,
        RunState::Sorting => DEFAULT_THEME.secondary,
        RunState::Sorted => DEFAULT_THEME.success,
    };

    let left_spans = vec![
        Span::styled(
            format!(" Steps {} ", data.steps),
            Style::default()
                .bg(badge_bg)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            " | ",
            Style::default()
                .bg(DEFAULT_THEME.status_bg)
                .fg(DEFAULT_THEME.comment),
        ),
        Span::styled(
            format!(" {} ", data.message),
            Style::default()
                .bg(DEFAULT_THEME.status_bg)
                .fg(DEFAULT_THEME.fg),
        ),
    ];

    let left_paragraph = Paragraph::new(Line::from(left_spans))
        .style(Style::default().bg(DEFAULT_THEME.status_bg))
        .alignment(Alignment::Left);

    frame.render_widget(left_paragraph, layout[0]);

    let desc_style = Style::default()
        .bg(DEFAULT_THEME.status_bg)
        .fg(DEFAULT_THEME.fg);
    let sep_style = Style::default()
        .bg(DEFAULT_THEME.status_bg)
        .fg(DEFAULT_THEME.comment);

    let badge = match data.state {
        RunState::Idle => " IDLE ",
        RunState::Sorting => " ▶ SORTING ",
        RunState::Sorted => " SORTED ",
    };

    let right_spans = vec![
        Span::styled(format!(" {} ", data.algorithm.name()), desc_style),
        Span::styled("│", sep_style),
        Span::styled(format!(" {} ", data.direction.label()), desc_style),
        Span::styled("│", sep_style),
        Span::styled(
            badge,
            Style::default()
                .bg(badge_bg)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
    ];

    let right_paragraph = Paragraph::new(Line::from(right_spans))
        .style(Style::default().bg(DEFAULT_THEME.status_bg))
        .alignment(Alignment::Right);

    frame.render_widget(right_paragraph, layout[1]);
}
