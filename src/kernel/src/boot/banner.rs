//! Boot banner and branding.

use dexis_common::Color;
use dexis_console::TextGrid;
use dexis_hal::{CellBuffer, CursorRegisters};

/// Print the DexisCore boot banner.
pub fn print_banner<B: CellBuffer, C: CursorRegisters>(grid: &mut TextGrid<B, C>) {
    grid.set_color(Color::Cyan, Color::Black);
    grid.write("  ____            _      ____               \n");
    grid.write(" |  _ \\  _____  _(_)___ / ___|___  _ __ ___ \n");
    grid.write(" | | | |/ _ \\ \\/ / / __| |   / _ \\| '__/ _ \\\n");
    grid.write(" | |_| |  __/>  <| \\__ \\ |__| (_) | | |  __/\n");
    grid.write(" |____/ \\___/_/\\_\\_|___/\\____\\___/|_|  \\___|\n");
    grid.write("\n");
    grid.set_color(Color::White, Color::Black);
    grid.write("*DexisCore v0.1*\n");
    grid.write("Architecture: x86 (32bit)\n");
}
