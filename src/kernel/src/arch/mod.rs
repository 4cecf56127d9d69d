//! Architecture-specific implementations.
//!
//! Only x86_64 is supported; everything here talks to PC hardware directly.

#[cfg(target_arch = "x86_64")]
pub mod x86_64;
