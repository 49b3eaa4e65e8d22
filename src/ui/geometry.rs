//! Bar geometry derived from the drawing surface and the dataset
//!
//! Horizontal units are terminal columns. Vertical units are sub-cells: each
//! terminal row is split into [`SUBCELLS_PER_ROW`] slices so bar heights can
//! be drawn with the eighth-block glyphs.

use crate::config::Config;
use crate::dataset::Dataset;
use ratatui::layout::Rect;

/// Vertical resolution of one terminal row
pub const SUBCELLS_PER_ROW: u32 = 8;

/// Read-only geometry for one frame of bars
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarLayout {
    /// Columns per bar
    pub bar_width: u16,
    /// Sub-cells per unit of value above the dataset minimum
    pub bar_height: u32,
    /// Column offset of the first bar
    pub start_x: u16,
    /// Dataset minimum, drawn as the shortest bar
    pub min_value: i32,
}

impl BarLayout {
    /// Compute the layout for a surface of `width` columns by `height`
    /// sub-cells.
    ///
    /// Never fails: an all-equal dataset uses a value range of 1, and a
    /// surface too small for the padding still yields bars one column wide
    /// and one sub-cell per unit.
    pub fn compute(
        width: u16,
        height: u32,
        side_pad: u16,
        top_pad: u32,
        dataset: &Dataset,
    ) -> Self {
        let count = dataset.len().max(1) as u64;
        let min_value = dataset.min();
        let max_value = dataset.max();

        let usable_width = u64::from(width.saturating_sub(side_pad));
        let bar_width = u16::try_from(usable_width / count)
            .unwrap_or(u16::MAX)
            .max(1);

        let range = (i64::from(max_value) - i64::from(min_value)).max(1) as u64;
        let usable_height = u64::from(height.saturating_sub(top_pad));
        let bar_height = u32::try_from(usable_height / range)
            .unwrap_or(u32::MAX)
            .max(1);

        BarLayout {
            bar_width,
            bar_height,
            start_x: side_pad / 2,
            min_value,
        }
    }

    /// Layout for the chart drawn into `area`
    pub fn for_area(area: Rect, config: &Config, dataset: &Dataset) -> Self {
        Self::compute(
            area.width,
            u32::from(area.height) * SUBCELLS_PER_ROW,
            config.side_pad,
            u32::from(config.top_pad) * SUBCELLS_PER_ROW,
            dataset,
        )
    }

    /// Column of the left edge of bar `index`, relative to the chart origin
    pub fn bar_x(&self, index: usize) -> u64 {
        u64::from(self.start_x) + index as u64 * u64::from(self.bar_width)
    }

    /// Height of a bar in sub-cells; the minimum value keeps a one sub-cell
    /// sliver so it stays visible
    pub fn bar_extent(&self, value: i32) -> u64 {
        let above_min = (i64::from(value) - i64::from(self.min_value)).max(0) as u64;
        above_min.saturating_mul(u64::from(self.bar_height)).max(1)
    }
}
