//! DexisCore Kernel
//!
//! A small x86 kernel whose only job is to host the `dsh` console.
//!
//! # Architecture
//!
//! The kernel is structured into the following modules:
//! - `arch`: Platform-specific code (VGA, PS/2, power, serial)
//! - `boot`: Banner and colored boot status lines
//! - `logger`: `log` backend on COM1
//! - `terminal`: The shell loop
//!
//! Everything about reading and editing lines lives in `dexis-console`; this
//! crate binds it to the hardware.
//!
//! # Safety
//!
//! This is a `#![no_std]` kernel. All unsafe code is documented with safety
//! invariants explaining why the usage is correct.

#![no_std]
#![warn(missing_docs)]

pub mod arch;
pub mod boot;
pub mod logger;
pub mod terminal;
pub mod testutil;

use log::LevelFilter;

/// Initializes core kernel subsystems.
///
/// Brings up COM1 and installs the serial logger. Safe to call more than
/// once; only the first call installs the logger.
pub fn init() {
    #[cfg(target_arch = "x86_64")]
    arch::x86_64::serial::init();

    if logger::init(LevelFilter::Info).is_err() {
        serial_println!("logger already installed");
    }
}
