use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(0x38, 0xbd, 0xf8);
pub const BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const MUTED_TEXT: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const SPINNER: Color = Color::Rgb(0x22, 0xc5, 0x5e);
/// Same red as the web form's error line.
pub const ERROR_TEXT: Color = Color::Rgb(0xff, 0x00, 0x00);
pub const BUTTON_BG: Color = Color::Rgb(0x1d, 0x4e, 0xd8);
