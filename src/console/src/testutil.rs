//! Scripted hardware doubles for unit tests.

use crate::grid::{MemoryBuffer, TextGrid};
use dexis_common::scancode;
use dexis_hal::{CursorRegisters, IoDelay, ScancodeSource};
use std::collections::VecDeque;

/// CRTC double that records every `(index, value)` write.
#[derive(Debug, Default)]
pub struct RecordingCrtc {
    writes: Vec<(u8, u8)>,
}

impl RecordingCrtc {
    pub fn writes(&self) -> &[(u8, u8)] {
        &self.writes
    }

    /// Linear cursor offset from the most recent low/high register pair.
    pub fn last_position(&self) -> Option<u16> {
        let low = self.writes.iter().rev().find(|(i, _)| *i == 0x0F)?.1;
        let high = self.writes.iter().rev().find(|(i, _)| *i == 0x0E)?.1;
        Some(u16::from(high) << 8 | u16::from(low))
    }
}

impl CursorRegisters for RecordingCrtc {
    fn write(&mut self, index: u8, value: u8) {
        self.writes.push((index, value));
    }
}

/// Byte source that replays a script, then reports an idle bus forever.
///
/// The idle byte is a release code nobody tracks, so a drained script never
/// produces input.
pub struct ScriptedSource {
    bytes: VecDeque<u8>,
    reads: usize,
}

impl ScriptedSource {
    pub fn new(bytes: &[u8]) -> Self {
        Self {
            bytes: bytes.iter().copied().collect(),
            reads: 0,
        }
    }

    /// Script for typing `keys` (make codes): each press followed by its release.
    pub fn taps(keys: &[u8]) -> Self {
        let mut bytes = Vec::new();
        for &key in keys {
            bytes.push(key);
            bytes.push(scancode::release_of(key));
        }
        Self::new(&bytes)
    }

    pub fn is_drained(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl ScancodeSource for ScriptedSource {
    fn read_raw(&mut self) -> u8 {
        self.reads += 1;
        assert!(self.reads < 1_000_000, "scripted source drained without a commit");
        self.bytes.pop_front().unwrap_or(0xFF)
    }
}

/// Delay double that only counts.
#[derive(Debug, Default)]
pub struct CountingDelay {
    pub waits: usize,
}

impl IoDelay for CountingDelay {
    fn wait(&mut self) {
        self.waits += 1;
    }
}

pub fn memory_grid() -> TextGrid<MemoryBuffer, RecordingCrtc> {
    TextGrid::new(MemoryBuffer::new(), RecordingCrtc::default())
}

/// Glyphs of a grid row with trailing blanks trimmed.
pub fn row_text(grid: &TextGrid<MemoryBuffer, RecordingCrtc>, row: usize) -> String {
    let bytes = grid.buffer().row_bytes(row);
    String::from_utf8_lossy(&bytes).trim_end().to_string()
}
