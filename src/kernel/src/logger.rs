//! `log` backend that writes to COM1.
//!
//! Records come out as `[LEVEL] target: message`, one per line.

use crate::serial_println;
use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Logger that forwards every enabled record to the serial port.
struct SerialLogger;

static LOGGER: SerialLogger = SerialLogger;

impl Log for SerialLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            serial_println!("[{:<5}] {}: {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

/// Installs the serial logger with the given level filter.
///
/// Fails if a logger is already installed.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER)?;
    log::set_max_level(level);
    Ok(())
}
