//! Scan code set 1 decoding for a US layout.
//!
//! Translation is table driven: one 128-entry layer per modifier combination
//! (base, shifted, numeric keypad), where `0` means "no output".

use dexis_common::scancode::{
    self, ARROW_DOWN, ARROW_LEFT, ARROW_RIGHT, ARROW_UP, BACKSPACE, END, ENTER, HOME,
};
use dexis_common::ModifierState;

/// Builds a layer from `(make code, glyph)` pairs.
const fn layer(pairs: &[(u8, u8)]) -> [u8; 128] {
    let mut table = [0u8; 128];
    let mut i = 0;
    while i < pairs.len() {
        table[pairs[i].0 as usize] = pairs[i].1;
        i += 1;
    }
    table
}

#[rustfmt::skip]
static BASE: [u8; 128] = layer(&[
    (0x02, b'1'), (0x03, b'2'), (0x04, b'3'), (0x05, b'4'), (0x06, b'5'),
    (0x07, b'6'), (0x08, b'7'), (0x09, b'8'), (0x0A, b'9'), (0x0B, b'0'),
    (0x0C, b'-'), (0x0D, b'='), (0x0E, b'\x08'),
    (0x10, b'q'), (0x11, b'w'), (0x12, b'e'), (0x13, b'r'), (0x14, b't'),
    (0x15, b'y'), (0x16, b'u'), (0x17, b'i'), (0x18, b'o'), (0x19, b'p'),
    (0x1A, b'['), (0x1B, b']'), (0x1C, b'\n'),
    (0x1E, b'a'), (0x1F, b's'), (0x20, b'd'), (0x21, b'f'), (0x22, b'g'),
    (0x23, b'h'), (0x24, b'j'), (0x25, b'k'), (0x26, b'l'),
    (0x27, b';'), (0x28, b'\''), (0x29, b'`'), (0x2B, b'\\'),
    (0x2C, b'z'), (0x2D, b'x'), (0x2E, b'c'), (0x2F, b'v'), (0x30, b'b'),
    (0x31, b'n'), (0x32, b'm'),
    (0x33, b','), (0x34, b'.'), (0x35, b'/'), (0x39, b' '),
]);

#[rustfmt::skip]
static SHIFTED: [u8; 128] = layer(&[
    (0x02, b'!'), (0x03, b'@'), (0x04, b'#'), (0x05, b'$'), (0x06, b'%'),
    (0x07, b'^'), (0x08, b'&'), (0x09, b'*'), (0x0A, b'('), (0x0B, b')'),
    (0x0C, b'_'), (0x0D, b'+'), (0x0E, b'\x08'),
    (0x10, b'Q'), (0x11, b'W'), (0x12, b'E'), (0x13, b'R'), (0x14, b'T'),
    (0x15, b'Y'), (0x16, b'U'), (0x17, b'I'), (0x18, b'O'), (0x19, b'P'),
    (0x1A, b'{'), (0x1B, b'}'), (0x1C, b'\n'),
    (0x1E, b'A'), (0x1F, b'S'), (0x20, b'D'), (0x21, b'F'), (0x22, b'G'),
    (0x23, b'H'), (0x24, b'J'), (0x25, b'K'), (0x26, b'L'),
    (0x27, b':'), (0x28, b'"'), (0x29, b'~'), (0x2B, b'|'),
    (0x2C, b'Z'), (0x2D, b'X'), (0x2E, b'C'), (0x2F, b'V'), (0x30, b'B'),
    (0x31, b'N'), (0x32, b'M'),
    (0x33, b'<'), (0x34, b'>'), (0x35, b'?'), (0x39, b' '),
]);

#[rustfmt::skip]
static NUMPAD: [u8; 128] = layer(&[
    (0x47, b'7'), (0x48, b'8'), (0x49, b'9'), (0x4B, b'4'), (0x4C, b'5'),
    (0x4D, b'6'), (0x4F, b'1'), (0x50, b'2'), (0x51, b'3'), (0x52, b'0'),
    (0x53, b'.'), (0x37, b'*'), (0x4A, b'-'), (0x4E, b'+'),
]);

/// Letter keys: the rows `q..p`, `a..l` and `z..m`.
const fn is_letter(code: u8) -> bool {
    matches!(code, 0x10..=0x19 | 0x1E..=0x26 | 0x2C..=0x32)
}

fn lookup(table: &[u8; 128], code: u8) -> Option<u8> {
    match table[usize::from(code & 0x7F)] {
        0 => None,
        glyph => Some(glyph),
    }
}

/// Translates a raw scan code into a glyph.
///
/// Shift make/break codes set/clear [`ModifierState::SHIFT`]; Caps Lock and
/// Num Lock make codes toggle their flag. None of these produce output, and
/// neither does any other break code. Letters are upper case when exactly
/// one of Shift and Caps Lock is active; other keys follow Shift alone. With
/// Num Lock on, keypad codes yield digits and operators.
///
/// Backspace and Enter come back as `b'\x08'` and `b'\n'`.
pub fn translate(code: u8, modifiers: &mut ModifierState) -> Option<u8> {
    match code {
        scancode::LEFT_SHIFT | scancode::RIGHT_SHIFT => {
            modifiers.insert(ModifierState::SHIFT);
            return None;
        }
        c if scancode::is_release(c) && scancode::is_shift(scancode::make_code(c)) => {
            modifiers.remove(ModifierState::SHIFT);
            return None;
        }
        scancode::CAPS_LOCK => {
            modifiers.toggle(ModifierState::CAPS_LOCK);
            log::trace!("caps lock {}", modifiers.caps_lock());
            return None;
        }
        scancode::NUM_LOCK => {
            modifiers.toggle(ModifierState::NUM_LOCK);
            log::trace!("num lock {}", modifiers.num_lock());
            return None;
        }
        c if scancode::is_release(c) => return None,
        _ => {}
    }

    if modifiers.num_lock() {
        if let Some(glyph) = lookup(&NUMPAD, code) {
            return Some(glyph);
        }
    }

    let upper = if is_letter(code) {
        modifiers.shift() ^ modifiers.caps_lock()
    } else {
        modifiers.shift()
    };
    lookup(if upper { &SHIFTED } else { &BASE }, code)
}

/// What a press means to the line reader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// A printable byte to insert.
    Char(u8),
    /// Delete before the cursor.
    Backspace,
    /// Enter went down; the line commits on its release.
    EnterPressed,
    /// Recall an older history entry.
    Up,
    /// Recall a newer history entry.
    Down,
    /// Cursor one left.
    Left,
    /// Cursor one right.
    Right,
    /// Cursor to line start.
    Home,
    /// Cursor to line end.
    End,
}

/// Classifies a make code for the line reader.
///
/// Navigation codes win over the keypad layer: they share make codes with
/// keypad digits, and the `0xE0` prefix that tells them apart on real
/// keyboards is dropped as a break code.
pub fn action(code: u8, modifiers: &mut ModifierState) -> Option<KeyAction> {
    let action = match code {
        ARROW_UP => KeyAction::Up,
        ARROW_DOWN => KeyAction::Down,
        ARROW_LEFT => KeyAction::Left,
        ARROW_RIGHT => KeyAction::Right,
        HOME => KeyAction::Home,
        END => KeyAction::End,
        ENTER => KeyAction::EnterPressed,
        BACKSPACE => {
            translate(code, modifiers)?;
            KeyAction::Backspace
        }
        _ => KeyAction::Char(translate(code, modifiers)?),
    };
    Some(action)
}
