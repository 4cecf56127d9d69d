//! Keyboard modifier state.

use bitflags::bitflags;

bitflags! {
    /// Modifier keys that alter how later presses are translated.
    ///
    /// Shift is held state (set on press, cleared on release); the two lock
    /// flags toggle on each press.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct ModifierState: u8 {
        /// Either Shift key held.
        const SHIFT     = 1 << 0;
        /// Caps Lock engaged.
        const CAPS_LOCK = 1 << 1;
        /// Num Lock engaged.
        const NUM_LOCK  = 1 << 2;
    }
}

impl ModifierState {
    /// Whether either Shift key is held.
    pub const fn shift(self) -> bool {
        self.contains(Self::SHIFT)
    }

    /// Whether Caps Lock is active.
    pub const fn caps_lock(self) -> bool {
        self.contains(Self::CAPS_LOCK)
    }

    /// Whether Num Lock is active.
    pub const fn num_lock(self) -> bool {
        self.contains(Self::NUM_LOCK)
    }
}
