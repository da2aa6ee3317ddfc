use super::Slot;
use crate::board::Symbol;
use serde::Serialize;

/// The symbol assignment for one game, derived from the room's flip
/// bit. Serializes as the `{"1": "X", "2": "O"}` map carried by the
/// start payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Roles {
    #[serde(rename = "1")]
    one: Symbol,
    #[serde(rename = "2")]
    two: Symbol,
}

impl Roles {
    pub fn of(&self, slot: Slot) -> Symbol {
        match slot {
            Slot::One => self.one,
            Slot::Two => self.two,
        }
    }
    /// The seat holding X, which opens the game.
    pub fn x(&self) -> Slot {
        match self.one {
            Symbol::X => Slot::One,
            Symbol::O => Slot::Two,
        }
    }
}

impl From<bool> for Roles {
    /// An unflipped room seats X in slot 1; a flipped one swaps.
    fn from(flip: bool) -> Self {
        match flip {
            false => Self {
                one: Symbol::X,
                two: Symbol::O,
            },
            true => Self {
                one: Symbol::O,
                two: Symbol::X,
            },
        }
    }
}
