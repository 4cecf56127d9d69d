//! DexisCore Hardware Abstraction Layer (HAL) traits.
//!
//! This crate defines traits that abstract away platform-specific hardware details,
//! so the console state machines can run against real ports or scripted test doubles.

#![no_std]

use dexis_common::ScreenChar;

/// Trait for a text-based console output.
pub trait Console {
    /// Writes a string to the console.
    fn write_str(&mut self, s: &str);
    /// Clears the console screen.
    fn clear(&mut self);
}

/// Source of raw keyboard bytes.
///
/// Polled, not interrupt-driven: every call samples the device once, so a
/// held key yields the same make code on consecutive reads.
pub trait ScancodeSource {
    /// Reads the next raw scan code byte.
    fn read_raw(&mut self) -> u8;
}

/// Backing storage for a character cell grid.
///
/// Callers guarantee `row < height` and `col < width` of the grid built on top.
pub trait CellBuffer {
    /// Reads the cell at `(row, col)`.
    fn read(&self, row: usize, col: usize) -> ScreenChar;
    /// Writes the cell at `(row, col)`.
    fn write(&mut self, row: usize, col: usize, cell: ScreenChar);
}

/// CRTC index/data register pair controlling the hardware cursor.
pub trait CursorRegisters {
    /// Selects register `index` and stores `value` into it.
    fn write(&mut self, index: u8, value: u8);
}

/// A short, fixed-cost bus delay.
pub trait IoDelay {
    /// Waits for one delay unit.
    fn wait(&mut self);
}
