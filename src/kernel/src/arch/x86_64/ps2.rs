//! Polled PS/2 keyboard.

use dexis_hal::ScancodeSource;
use x86_64::instructions::port::PortReadOnly;

/// PS/2 controller data port.
const PS2_DATA_PORT: u16 = 0x60;

/// The keyboard data port, read without waiting on the status register.
///
/// The controller keeps presenting the last byte it latched, so a held key
/// reads back as the same make code on every poll.
pub struct Ps2Keyboard {
    data: PortReadOnly<u8>,
}

impl Ps2Keyboard {
    /// Creates a handle to the data port.
    pub const fn new() -> Self {
        Ps2Keyboard {
            data: PortReadOnly::new(PS2_DATA_PORT),
        }
    }
}

impl Default for Ps2Keyboard {
    fn default() -> Self {
        Self::new()
    }
}

impl ScancodeSource for Ps2Keyboard {
    fn read_raw(&mut self) -> u8 {
        // SAFETY: Reading the PS/2 data port has no side effects beyond
        // acknowledging the controller's output buffer.
        unsafe { self.data.read() }
    }
}
