//! VGA text mode hardware for x86_64.
//!
//! The cell matrix lives at 0xB8000; the hardware cursor is programmed through
//! the CRTC index/data port pair at 0x3D4/0x3D5.

use core::ptr;
use dexis_common::ScreenChar;
use dexis_console::{ConsoleConfig, ConsoleSession, TextGrid, BUFFER_HEIGHT, BUFFER_WIDTH};
use dexis_hal::{CellBuffer, CursorRegisters};
use x86_64::instructions::port::Port;

/// VGA text buffer memory-mapped I/O address.
const VGA_BUFFER_ADDR: usize = 0xB8000;

/// CRTC index register port.
const CRTC_INDEX_PORT: u16 = 0x3D4;

/// CRTC data register port.
const CRTC_DATA_PORT: u16 = 0x3D5;

/// The VGA text buffer layout.
#[repr(transparent)]
struct Buffer {
    chars: [[ScreenChar; BUFFER_WIDTH]; BUFFER_HEIGHT],
}

/// The memory-mapped VGA cell matrix.
pub struct VgaBuffer {
    /// Pointer to the VGA buffer.
    ///
    /// SAFETY: This pointer is valid for the lifetime of the kernel.
    /// The VGA buffer at 0xB8000 is always mapped in x86 real/protected mode.
    buffer: *mut Buffer,
}

// SAFETY: VgaBuffer only accesses the VGA buffer through volatile operations.
// The buffer is memory-mapped hardware that exists for the kernel's lifetime,
// and the console session that owns it is the only writer.
unsafe impl Send for VgaBuffer {}

impl VgaBuffer {
    /// Creates a handle to the VGA buffer.
    pub fn new() -> Self {
        VgaBuffer {
            // SAFETY: VGA_BUFFER_ADDR (0xB8000) is the standard VGA text buffer
            // address on x86 systems. This memory is always present and mapped
            // when running on x86 hardware or in QEMU.
            buffer: VGA_BUFFER_ADDR as *mut Buffer,
        }
    }
}

impl Default for VgaBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl CellBuffer for VgaBuffer {
    fn read(&self, row: usize, col: usize) -> ScreenChar {
        // SAFETY: Array indexing bounds-checks row and col. The buffer pointer
        // was validated at construction time. Using volatile read because the
        // VGA buffer is memory-mapped I/O.
        unsafe { ptr::read_volatile(&(*self.buffer).chars[row][col]) }
    }

    fn write(&mut self, row: usize, col: usize, cell: ScreenChar) {
        // SAFETY: As for `read`; volatile because the hardware may scan the
        // buffer at any time.
        unsafe { ptr::write_volatile(&mut (*self.buffer).chars[row][col], cell) }
    }
}

/// The CRTC index/data register pair.
pub struct Crtc {
    index: Port<u8>,
    data: Port<u8>,
}

impl Crtc {
    /// Creates a handle to the CRTC ports.
    pub const fn new() -> Self {
        Crtc {
            index: Port::new(CRTC_INDEX_PORT),
            data: Port::new(CRTC_DATA_PORT),
        }
    }
}

impl Default for Crtc {
    fn default() -> Self {
        Self::new()
    }
}

impl CursorRegisters for Crtc {
    fn write(&mut self, index: u8, value: u8) {
        // SAFETY: 0x3D4/0x3D5 are the color CRTC ports present on every VGA
        // compatible adapter; selecting a register and writing it has no
        // effect beyond the display controller.
        unsafe {
            self.index.write(index);
            self.data.write(value);
        }
    }
}

/// The VGA-backed console session.
pub type VgaSession = ConsoleSession<VgaBuffer, Crtc>;

/// A bare VGA-backed text grid.
pub type VgaGrid = TextGrid<VgaBuffer, Crtc>;

/// Creates the console session over the VGA hardware.
///
/// The screen is untouched until the session is initialized.
pub fn session(config: ConsoleConfig) -> VgaSession {
    ConsoleSession::new(VgaBuffer::new(), Crtc::new(), config)
}

/// Creates a standalone grid over the VGA hardware, for the panic path where
/// the session is out of reach.
pub fn grid() -> VgaGrid {
    TextGrid::new(VgaBuffer::new(), Crtc::new())
}
