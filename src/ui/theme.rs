use ratatui::style::Color;

/// Dark reader palette.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub fixation: Color,
    pub dimmed: Color,
    pub surface: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme::dark()
    }
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            background: Color::Rgb(22, 22, 30),
            text: Color::Rgb(200, 205, 230),
            fixation: Color::Rgb(235, 90, 110),
            dimmed: Color::Rgb(100, 105, 135),
            surface: Color::Rgb(35, 36, 48),
        }
    }

    pub fn current() -> Self {
        Self::dark()
    }
}

/// Convenience access to current theme colors.
pub mod colors {
    use super::Theme;
    use ratatui::style::Color;

    pub fn background() -> Color {
        Theme::current().background
    }
    pub fn text() -> Color {
        Theme::current().text
    }
    pub fn fixation() -> Color {
        Theme::current().fixation
    }
    pub fn dimmed() -> Color {
        Theme::current().dimmed
    }
    pub fn surface() -> Color {
        Theme::current().surface
    }
}
