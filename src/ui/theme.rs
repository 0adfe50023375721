use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub border_normal: Color,
    pub status_bg: Color,
    pub surface_bg: Color, // Board canvas background
    pub grid_line: Color,
    pub cross: Color,
    pub nought: Color,
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),   // Blue
    secondary: Color::Rgb(250, 179, 135), // Orange
    comment: Color::Rgb(108, 112, 134),
    border_normal: Color::Rgb(108, 112, 134), // Grey border
    status_bg: Color::Rgb(50, 50, 70),        // Slightly lighter BG for the status bar
    surface_bg: Color::Rgb(255, 255, 255),    // White board surface
    grid_line: Color::Rgb(255, 255, 0),       // Yellow separator lines
    cross: Color::Rgb(0, 0, 255),
    nought: Color::Rgb(255, 0, 0),
};
