//! Shared types for DexisCore.
//!
//! Vocabulary used by both the portable console layer and the kernel glue:
//! VGA cell layout and colors, keyboard modifier flags, and scan code set 1
//! constants.

#![no_std]
#![warn(missing_docs)]

pub mod color;
pub mod modifiers;
pub mod scancode;

pub use color::{Color, ColorCode, ScreenChar};
pub use modifiers::ModifierState;
