//! Frame rendering
//!
//! Two frame contracts are exposed:
//!
//! - [`render_idle_frame`]: the full frame shown while no sort is running.
//!   Clears the background and draws the header (title and control hints),
//!   the bars and the status bar.
//! - [`render_sorting_frame`]: the frame drawn after each step of a running
//!   sort. The header is not recomputed: it repeats the algorithm and
//!   direction the run was started with. Only the bars, with the step's
//!   highlights, and the status bar reflect the new step.
//!
//! Both paint the themed background and place the chart in the same
//! rectangle, so nothing flashes or jumps when a sort starts or finishes.
//!
//! # Pane Modules
//!
//! - [`header`]: title and key hints
//! - [`bars`]: the bar chart widget
//! - [`status`]: status bar with step count and run state

pub mod bars;
pub mod header;
pub mod status;

pub use bars::{render_bars, Bars};
pub use header::{render_header, HEADER_HEIGHT};
pub use status::{render_status_bar, StatusRenderData};

use crate::config::Config;
use crate::dataset::Dataset;
use crate::sort::{Algorithm, Direction, Highlights};
use crate::ui::geometry::BarLayout;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Constraint, Direction as LayoutDirection, Layout, Rect},
    style::Style,
    widgets::Block,
    Frame,
};

/// Everything a frame shows
pub struct FrameView<'a> {
    pub config: &'a Config,
    pub dataset: &'a Dataset,
    pub highlights: &'a Highlights,
    pub algorithm: Algorithm,
    pub direction: Direction,
    pub status: StatusRenderData<'a>,
}

/// Header, chart and status bar areas of the frame
pub struct FrameAreas {
    pub header: Rect,
    pub chart: Rect,
    pub status: Rect,
}

impl FrameAreas {
    pub fn split(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(LayoutDirection::Vertical)
            .constraints([
                Constraint::Length(HEADER_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(area);

        FrameAreas {
            header: chunks[0],
            chart: chunks[1],
            status: chunks[2],
        }
    }
}

/// Draw the full idle frame
pub fn render_idle_frame(frame: &mut Frame, view: FrameView) {
    render_frame(frame, view);
}

/// Draw the frame following one step of a running sort
///
/// `view.algorithm` and `view.direction` must be the ones captured when the
/// run started, not the current selection.
pub fn render_sorting_frame(frame: &mut Frame, view: FrameView) {
    render_frame(frame, view);
}

fn render_frame(frame: &mut Frame, view: FrameView) {
    let area = frame.area();
    frame.render_widget(Block::default().style(Style::default().bg(DEFAULT_THEME.bg)), area);

    let areas = FrameAreas::split(area);
    render_header(frame, areas.header, view.algorithm, view.direction);

    let layout = BarLayout::for_area(areas.chart, view.config, view.dataset);
    render_bars(frame, areas.chart, view.dataset.values(), layout, view.highlights);

    render_status_bar(frame, areas.status, view.status);
}
