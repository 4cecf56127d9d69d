//! PS/2 scan code set 1 constants.
//!
//! A break (release) code is the make (press) code with the high bit set.

/// High bit marking a break code.
pub const RELEASE_BIT: u8 = 0x80;

/// Left Shift make code.
pub const LEFT_SHIFT: u8 = 0x2A;
/// Right Shift make code.
pub const RIGHT_SHIFT: u8 = 0x36;
/// Caps Lock make code.
pub const CAPS_LOCK: u8 = 0x3A;
/// Num Lock make code.
pub const NUM_LOCK: u8 = 0x45;
/// Backspace make code.
pub const BACKSPACE: u8 = 0x0E;
/// Enter make code.
pub const ENTER: u8 = 0x1C;
/// Arrow Up make code (keypad 8).
pub const ARROW_UP: u8 = 0x48;
/// Arrow Down make code (keypad 2).
pub const ARROW_DOWN: u8 = 0x50;
/// Arrow Left make code (keypad 4).
pub const ARROW_LEFT: u8 = 0x4B;
/// Arrow Right make code (keypad 6).
pub const ARROW_RIGHT: u8 = 0x4D;
/// Home make code (keypad 7).
pub const HOME: u8 = 0x47;
/// End make code (keypad 1).
pub const END: u8 = 0x4F;

/// Returns true for break codes.
#[inline]
pub const fn is_release(code: u8) -> bool {
    code & RELEASE_BIT != 0
}

/// Strips the release bit, yielding the make code.
#[inline]
pub const fn make_code(code: u8) -> u8 {
    code & !RELEASE_BIT
}

/// Break code for a make code.
#[inline]
pub const fn release_of(code: u8) -> u8 {
    code | RELEASE_BIT
}

/// Returns true for either Shift make code.
#[inline]
pub const fn is_shift(code: u8) -> bool {
    code == LEFT_SHIFT || code == RIGHT_SHIFT
}
