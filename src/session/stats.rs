use super::Slot;
use crate::board::Symbol;
use serde::Serialize;

/// Wins per symbol for one seat. Tracked per symbol rather than as a
/// single count because the seat's symbol changes across rematches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Tally {
    #[serde(rename = "X")]
    x: u32,
    #[serde(rename = "O")]
    o: u32,
}

impl Tally {
    fn bump(&mut self, symbol: Symbol) {
        match symbol {
            Symbol::X => self.x += 1,
            Symbol::O => self.o += 1,
        }
    }
    pub fn of(&self, symbol: Symbol) -> u32 {
        match symbol {
            Symbol::X => self.x,
            Symbol::O => self.o,
        }
    }
    pub fn total(&self) -> u32 {
        self.x + self.o
    }
}

/// Lifetime scoreboard for a room. Survives rematches; only process
/// restart clears it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Stats {
    #[serde(rename = "1")]
    one: Tally,
    #[serde(rename = "2")]
    two: Tally,
    #[serde(rename = "D")]
    draws: u32,
}

impl Stats {
    pub fn credit(&mut self, slot: Slot, symbol: Symbol) {
        match slot {
            Slot::One => self.one.bump(symbol),
            Slot::Two => self.two.bump(symbol),
        }
    }
    pub fn draw(&mut self) {
        self.draws += 1;
    }
    pub fn of(&self, slot: Slot) -> &Tally {
        match slot {
            Slot::One => &self.one,
            Slot::Two => &self.two,
        }
    }
    pub fn draws(&self) -> u32 {
        self.draws
    }
    /// Games concluded in this room across all rematches.
    pub fn total(&self) -> u32 {
        self.one.total() + self.two.total() + self.draws
    }
}
