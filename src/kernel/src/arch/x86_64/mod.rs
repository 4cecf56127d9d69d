//! x86_64 architecture support.
//!
//! VGA text mode, the polled PS/2 keyboard, power control and the COM1
//! serial port.

pub mod power;
pub mod ps2;
pub mod serial;
pub mod vga;

pub use power::IoWait;
pub use ps2::Ps2Keyboard;
pub use serial::SERIAL;
pub use vga::{Crtc, VgaBuffer, VgaGrid, VgaSession};

/// Halts the CPU until the next interrupt.
#[inline]
pub fn hlt() {
    x86_64::instructions::hlt();
}

/// Halts the CPU in an infinite loop.
///
/// Used after unrecoverable errors (panics) and failed power transitions.
pub fn halt_loop() -> ! {
    loop {
        hlt();
    }
}
