//! Bar chart rendering
//!
//! Bars grow upward from the bottom edge of the chart area. Each bar is drawn
//! with full blocks for whole rows and one eighth-block glyph for the
//! remainder, so the vertical resolution is [`SUBCELLS_PER_ROW`] per row.
//! Bars that fall past the right edge are clipped.

use crate::sort::{Highlights, Mark};
use crate::ui::geometry::{BarLayout, SUBCELLS_PER_ROW};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
    Frame,
};

/// Glyphs for a partially filled row, indexed by filled eighths
const PARTIAL_BLOCKS: [&str; 8] = [" ", "▁", "▂", "▃", "▄", "▅", "▆", "▇"];
const FULL_BLOCK: &str = "█";

/// Widget drawing one bar per value
pub struct Bars<'a> {
    pub values: &'a [i32],
    pub layout: BarLayout,
    pub highlights: &'a Highlights,
}

impl Bars<'_> {
    /// Color of bar `index`: its highlight if marked, else the cyclic palette
    pub fn color_for(&self, index: usize) -> Color {
        match self.highlights.get(index) {
            Some(Mark::Destination) => DEFAULT_THEME.destination,
            Some(Mark::Source) => DEFAULT_THEME.source,
            None => DEFAULT_THEME.bar_color(index),
        }
    }
}

impl Widget for Bars<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(DEFAULT_THEME.bg));
        if area.is_empty() {
            return;
        }

        let max_extent = u64::from(area.height) * u64::from(SUBCELLS_PER_ROW);

        for (index, &value) in self.values.iter().enumerate() {
            let left = self.layout.bar_x(index);
            if left >= u64::from(area.width) {
                break;
            }
            let right = (left + u64::from(self.layout.bar_width)).min(u64::from(area.width));
            let extent = self.layout.bar_extent(value).min(max_extent);
            let full_rows = extent / u64::from(SUBCELLS_PER_ROW);
            let remainder = (extent % u64::from(SUBCELLS_PER_ROW)) as usize;
            let color = self.color_for(index);

            for column in left..right {
                // Bounded by area.width above, which is a u16
                let x = area.x + column as u16;
                for row in 0..full_rows {
                    let y = area.bottom() - 1 - row as u16;
                    if let Some(cell) = buf.cell_mut((x, y)) {
                        cell.set_symbol(FULL_BLOCK).set_fg(color);
                    }
                }
                if remainder > 0 && full_rows < u64::from(area.height) {
                    let y = area.bottom() - 1 - full_rows as u16;
                    if let Some(cell) = buf.cell_mut((x, y)) {
                        cell.set_symbol(PARTIAL_BLOCKS[remainder]).set_fg(color);
                    }
                }
            }
        }
    }
}

/// Render only the bars into `area`
pub fn render_bars(
    frame: &mut Frame,
    area: Rect,
    values: &[i32],
    layout: BarLayout,
    highlights: &Highlights,
) {
    frame.render_widget(
        Bars {
            values,
            layout,
            highlights,
        },
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Dataset;

    fn render_to_buffer(values: &[i32], highlights: &Highlights, area: Rect) -> Buffer {
        let dataset = Dataset::from(values.to_vec());
        let layout = BarLayout::compute(
            area.width,
            u32::from(area.height) * SUBCELLS_PER_ROW,
            0,
            0,
            &dataset,
        );
        let mut buf = Buffer::empty(area);
        Bars {
            values,
            layout,
            highlights,
        }
        .render(area, &mut buf);
        buf
    }

    #[test]
    fn test_tallest_bar_fills_column() {
        let area = Rect::new(0, 0, 2, 4);
        let buf = render_to_buffer(&[0, 4], &Highlights::new(), area);

        for y in 0..4u16 {
            assert_eq!(buf[(1, y)].symbol(), FULL_BLOCK);
        }
        // Minimum bar keeps a one-eighth sliver at the bottom
        assert_eq!(buf[(0, 3)].symbol(), "▁");
        assert_eq!(buf[(0, 2)].symbol(), " ");
    }

    #[test]
    fn test_partial_row_glyph() {
        // range 2 over 16 sub-cells: 8 per unit, value 1 fills one row exactly
        let area = Rect::new(0, 0, 3, 2);
        let buf = render_to_buffer(&[0, 1, 2], &Highlights::new(), area);

        assert_eq!(buf[(1, 1)].symbol(), FULL_BLOCK);
        assert_eq!(buf[(1, 0)].symbol(), " ");
        assert_eq!(buf[(2, 0)].symbol(), FULL_BLOCK);
    }

    #[test]
    fn test_highlight_colors() {
        let area = Rect::new(0, 0, 4, 2);
        let highlights = Highlights::pair(1, 2);
        let buf = render_to_buffer(&[4, 3, 2, 1], &highlights, area);

        assert_eq!(buf[(0, 1)].fg, DEFAULT_THEME.bar_color(0));
        assert_eq!(buf[(1, 1)].fg, DEFAULT_THEME.destination);
        assert_eq!(buf[(2, 1)].fg, DEFAULT_THEME.source);
        assert_eq!(buf[(3, 1)].fg, DEFAULT_THEME.bar_color(3));
    }

    #[test]
    fn test_bars_past_right_edge_are_clipped() {
        let area = Rect::new(0, 0, 2, 2);
        // Five bars into two columns: layout clamps width to 1, extra bars dropped
        let buf = render_to_buffer(&[1, 2, 3, 4, 5], &Highlights::new(), area);
        assert_eq!(buf.area, area);
        assert_eq!(buf[(1, 1)].fg, DEFAULT_THEME.bar_color(1));
    }
}
