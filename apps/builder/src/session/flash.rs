//! The transient "Saved!" confirmation.

/// Visibility plus a generation counter. Each `raise` starts a new
/// generation; a `clear` scheduled for an older generation does nothing, so
/// the most recent save decides when the flash disappears.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SavedFlash {
    generation: u64,
    visible: bool,
}

impl SavedFlash {
    pub fn raise(&mut self) -> u64 {
        self.generation += 1;
        self.visible = true;
        self.generation
    }

    /// Hides the flash if `generation` is still the latest raise.
    pub fn clear(&mut self, generation: u64) -> bool {
        if generation != self.generation || !self.visible {
            return false;
        }
        self.visible = false;
        true
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}
