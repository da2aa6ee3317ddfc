use super::Slot;

/// Per-seat rematch consent. Both flags must be raised before a room
/// restarts; a reset clears them for the next round of negotiation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rematch {
    one: bool,
    two: bool,
}

impl Rematch {
    pub fn request(&mut self, slot: Slot) {
        match slot {
            Slot::One => self.one = true,
            Slot::Two => self.two = true,
        }
    }
    pub fn requested(&self, slot: Slot) -> bool {
        match slot {
            Slot::One => self.one,
            Slot::Two => self.two,
        }
    }
}
