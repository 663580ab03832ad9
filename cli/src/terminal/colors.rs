use colored::Color;

pub const PRIMARY: Color = Color::TrueColor { r: 0, g: 191, b: 255 };
pub const ACCENT: Color = Color::TrueColor { r: 255, g: 215, b: 0 };
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::TrueColor { r: 211, g: 211, b: 211 };
/// Section markers such as "-- Reading from ... --".
pub const STATUS: Color = Color::Cyan;
