//! Typematic repeat emulation for a polled keyboard.
//!
//! The PS/2 data port keeps returning the last byte it latched, so a held key
//! shows up as the same make code on every poll. The governor lets the first
//! sighting through, then swallows repeats until the initial threshold has
//! elapsed, after which it fires at the shorter subsequent interval.

use crate::config::RepeatConfig;
use dexis_common::scancode;

/// Repeat timer state for the most recently accepted make code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RepeatGovernor {
    config: RepeatConfig,
    last_code: Option<u8>,
    elapsed: u32,
    threshold: u32,
}

impl RepeatGovernor {
    /// A governor tracking nothing.
    pub const fn new(config: RepeatConfig) -> Self {
        Self {
            config,
            last_code: None,
            elapsed: 0,
            threshold: config.initial,
        }
    }

    /// Forgets the tracked key.
    pub fn reset(&mut self) {
        self.last_code = None;
        self.elapsed = 0;
        self.threshold = self.config.initial;
    }

    /// Feeds one polled byte.
    ///
    /// Returns the make code when it should be acted on: a new press, or a
    /// held key whose repeat threshold just elapsed. Break codes never fire;
    /// the break of the tracked key resets tracking so the next press of the
    /// same key counts as new.
    pub fn step(&mut self, raw: u8) -> Option<u8> {
        if scancode::is_release(raw) {
            if self.last_code == Some(scancode::make_code(raw)) {
                self.reset();
            }
            return None;
        }

        if self.last_code == Some(raw) {
            self.elapsed += 1;
            if self.elapsed < self.threshold {
                return None;
            }
            self.elapsed = 0;
            self.threshold = self.config.subsequent;
            log::trace!("repeat {:#04x}", raw);
        } else {
            self.last_code = Some(raw);
            self.elapsed = 0;
            self.threshold = self.config.initial;
        }
        Some(raw)
    }

    /// The make code being tracked, if any.
    pub fn tracked(&self) -> Option<u8> {
        self.last_code
    }
}
