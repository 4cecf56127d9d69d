//! Console configuration.
//!
//! Repeat timing is counted in polling iterations rather than wall-clock time,
//! so the effective repeat rate scales with processor speed. The kernel picks
//! values for its target; tests use small ones.

/// Capacity of a command line buffer, including the reserved terminator slot.
pub const LINE_CAPACITY: usize = 128;

/// Number of committed lines kept by the history ring.
pub const HISTORY_CAPACITY: usize = 10;

/// Typematic repeat thresholds, in polls of the same held code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RepeatConfig {
    /// Polls before the first repeat fires.
    pub initial: u32,
    /// Polls between later repeats.
    pub subsequent: u32,
}

impl RepeatConfig {
    /// Creates repeat thresholds.
    pub const fn new(initial: u32, subsequent: u32) -> Self {
        Self {
            initial,
            subsequent,
        }
    }
}

impl Default for RepeatConfig {
    fn default() -> Self {
        Self::new(2_500_000, 500_000)
    }
}

/// Tunables for a console session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConsoleConfig {
    /// Key repeat thresholds.
    pub repeat: RepeatConfig,
    /// I/O delay units spent after each accepted character edit.
    pub edit_delay: u32,
    /// Prompt written before each line is read.
    pub prompt: &'static str,
}

impl ConsoleConfig {
    /// Creates a configuration.
    pub const fn new(repeat: RepeatConfig, edit_delay: u32, prompt: &'static str) -> Self {
        Self {
            repeat,
            edit_delay,
            prompt,
        }
    }
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self::new(RepeatConfig::default(), 10_000, "dsh> ")
    }
}
