use super::Slot;
use crate::board::Symbol;
use serde::Serialize;

/// Who took a finished game. Draws share the ledger with wins, so the
/// winner column has a third state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Winner {
    #[serde(rename = "1")]
    One,
    #[serde(rename = "2")]
    Two,
    #[serde(rename = "D")]
    Draw,
}

impl From<Slot> for Winner {
    fn from(slot: Slot) -> Self {
        match slot {
            Slot::One => Self::One,
            Slot::Two => Self::Two,
        }
    }
}

/// One line of a room's game history. Serializes as
/// `{"winner": "1", "symbol": "X"}` for wins and
/// `{"winner": "D", "symbol": null}` for draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Outcome {
    winner: Winner,
    symbol: Option<Symbol>,
}

impl Outcome {
    pub fn win(slot: Slot, symbol: Symbol) -> Self {
        Self {
            winner: Winner::from(slot),
            symbol: Some(symbol),
        }
    }
    pub fn draw() -> Self {
        Self {
            winner: Winner::Draw,
            symbol: None,
        }
    }
}
