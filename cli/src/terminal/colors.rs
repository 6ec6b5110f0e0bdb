use colored::Color;

pub const PRIMARY: Color = Color::BrightWhite;
pub const ACCENT: Color = Color::BrightGreen;
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::White;

pub const BRAND: Color = Color::Cyan;
pub const PRICE: Color = Color::Yellow;
pub const BASKET: Color = Color::BrightMagenta;
