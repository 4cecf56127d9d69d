//! VGA text mode colors and cell layout.

/// VGA color codes.
///
/// Standard 16-color VGA palette for text mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Color {
    /// Black color.
    Black = 0,
    /// Blue color.
    Blue = 1,
    /// Green color.
    Green = 2,
    /// Cyan color.
    Cyan = 3,
    /// Red color.
    Red = 4,
    /// Magenta color.
    Magenta = 5,
    /// Brown color.
    Brown = 6,
    /// Light gray color.
    LightGray = 7,
    /// Dark gray color.
    DarkGray = 8,
    /// Light blue color.
    LightBlue = 9,
    /// Light green color.
    LightGreen = 10,
    /// Light cyan color.
    LightCyan = 11,
    /// Light red color.
    LightRed = 12,
    /// Pink color.
    Pink = 13,
    /// Yellow color.
    Yellow = 14,
    /// White color.
    White = 15,
}

/// Combined foreground and background color attribute byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(transparent)]
pub struct ColorCode(u8);

impl ColorCode {
    /// Creates a new color code from foreground and background colors.
    pub const fn new(foreground: Color, background: Color) -> ColorCode {
        ColorCode((background as u8) << 4 | (foreground as u8))
    }
}

impl Default for ColorCode {
    fn default() -> Self {
        ColorCode::new(Color::White, Color::Black)
    }
}

/// A single character cell, laid out exactly as the display hardware reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(C)]
pub struct ScreenChar {
    /// Code page 437 glyph.
    pub ascii_character: u8,
    /// Color attribute.
    pub color_code: ColorCode,
}

impl ScreenChar {
    /// A space in the given color.
    pub const fn blank(color_code: ColorCode) -> Self {
        ScreenChar {
            ascii_character: b' ',
            color_code,
        }
    }
}
