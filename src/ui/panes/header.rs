//! Title and control hints shown above the chart while idle

use crate::sort::{Algorithm, Direction};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Rows taken by the header
pub const HEADER_HEIGHT: u16 = 4;

const CONTROL_HINTS: &str = "R - Reset | SPACE - Start Sorting | A - Ascending | D - Descending";
const ALGORITHM_HINTS: &str = "I - Insertion Sort | B - Bubble Sort | Q - Quit";

/// Title text, e.g. `Bubble Sort - Ascending`
pub fn title_text(algorithm: Algorithm, direction: Direction) -> String {
    format!("{} - {}", algorithm.name(), direction.label())
}

/// Render the header
pub fn render_header(frame: &mut Frame, area: Rect, algorithm: Algorithm, direction: Direction) {
    let hint_style = Style::default().fg(DEFAULT_THEME.comment);

    let lines = vec![
        Line::from(Span::styled(
            title_text(algorithm, direction),
            Style::default()
                .fg(DEFAULT_THEME.title)
                .add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(Span::styled(CONTROL_HINTS, hint_style)),
        Line::from(Span::styled(ALGORITHM_HINTS, hint_style)),
    ];

    let paragraph = Paragraph::new(lines)
        .style(Style::default().bg(DEFAULT_THEME.bg))
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}
