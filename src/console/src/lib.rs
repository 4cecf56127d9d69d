//! DexisCore interactive text console.
//!
//! Turns a polled keyboard byte stream into an edited command line and renders
//! it, along with all other console output, onto an 80x25 character grid.
//!
//! # Architecture
//!
//! - `grid`: text grid renderer and hardware cursor sync
//! - `keymap`: scan code to character translation
//! - `repeat`: typematic repeat emulation for a polled source
//! - `line` / `editor`: command buffer and its on-screen repaint
//! - `history`: bounded ring of committed lines
//! - `session`: the aggregate that owns all of the above
//! - `commands`: the `dsh` command surface
//!
//! Hardware is reached only through the `dexis_hal` traits, so every state
//! machine here runs unchanged against scripted test doubles.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

pub mod commands;
pub mod config;
pub mod editor;
pub mod grid;
pub mod history;
pub mod keymap;
pub mod line;
pub mod repeat;
pub mod session;

#[cfg(test)]
mod testutil;

pub use commands::{Command, Flow};
pub use config::{ConsoleConfig, RepeatConfig, HISTORY_CAPACITY, LINE_CAPACITY};
pub use grid::{MemoryBuffer, TextGrid, BUFFER_HEIGHT, BUFFER_WIDTH};
pub use history::HistoryStore;
pub use keymap::{translate, KeyAction};
pub use line::{CursorMove, Line, LineBuffer};
pub use session::ConsoleSession;
