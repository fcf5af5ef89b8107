use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(0x2d, 0xd4, 0x8f);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const TEXT_DIM: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const ACTIVE_HIGHLIGHT: Color = Color::Rgb(0x26, 0x26, 0x26);
pub const FIELD_NORMAL: Color = Color::Rgb(0x1f, 0x29, 0x37);
pub const FIELD_ERROR: Color = Color::Rgb(0x7f, 0x1d, 0x1d);
