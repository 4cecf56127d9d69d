//! Boot messages with colored status indicators.
//!
//! Linux-style `[ OK ]` lines written straight to the console grid, each one
//! mirrored to the serial log.

pub mod banner;

use dexis_common::Color;
use dexis_console::TextGrid;
use dexis_hal::{CellBuffer, CursorRegisters};

/// Log a completed boot stage.
///
/// Format: `[ OK ] Message text`
pub fn ok<B: CellBuffer, C: CursorRegisters>(grid: &mut TextGrid<B, C>, message: &str) {
    grid.set_color(Color::LightGreen, Color::Black);
    grid.write("[ OK ]");
    grid.set_color(Color::White, Color::Black);
    grid.write(" ");
    grid.write(message);
    grid.write("\n");
    log::info!("{}", message);
}
