use ratatui::style::Color;

pub struct Theme {
    pub bg: Color,
    pub fg: Color,
    pub title: Color,
    pub comment: Color,   // Grey
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub success: Color,   // Green
    pub status_bg: Color,
    pub bars: [Color; 3],   // Cycled by index
    pub destination: Color, // Where a moved element landed
    pub source: Color,      // Where a moved element came from
}

pub const DEFAULT_THEME: Theme = Theme {
    bg: Color::Rgb(30, 30, 46),
    fg: Color::Rgb(205, 214, 244),
    title: Color::Rgb(249, 226, 175), // Yellow
    comment: Color::Rgb(108, 112, 134),
    primary: Color::Rgb(137, 180, 250),
    secondary: Color::Rgb(250, 179, 135),
    success: Color::Rgb(166, 227, 161),
    status_bg: Color::Rgb(50, 50, 70),
    bars: [
        Color::Rgb(128, 128, 128),
        Color::Rgb(160, 160, 160),
        Color::Rgb(192, 192, 192),
    ],
    destination: Color::Rgb(0, 255, 0),
    source: Color::Rgb(255, 0, 0),
};

impl Theme {
    /// Palette entry for an unhighlighted bar
    pub fn bar_color(&self, index: usize) -> Color {
        self.bars[index % self.bars.len()]
    }
}
