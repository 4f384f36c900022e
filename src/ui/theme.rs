use ratatui::style::Color;

pub const HEADER_BACKGROUND_DARK: Color = Color::Rgb(0x1d, 0x3d, 0x47);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const BODY_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const BUTTON_TEXT: Color = Color::Rgb(0xff, 0xff, 0xff);
pub const BUTTON_BACKGROUND: Color = Color::Rgb(0x00, 0x7a, 0xff);
pub const SPINNER: Color = Color::Rgb(0x00, 0x00, 0xff);
pub const STATUS_OK: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
