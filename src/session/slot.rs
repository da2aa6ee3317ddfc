use serde::Deserialize;
use serde::Serialize;

/// A seat in a room. The slot is a player's identity for the life of
/// the room; symbols rotate across games, slots never do. On the wire
/// the slots are the strings `"1"` and `"2"`.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub enum Slot {
    #[serde(rename = "1")]
    One,
    #[serde(rename = "2")]
    Two,
}

impl Slot {
    pub fn other(&self) -> Self {
        match self {
            Self::One => Self::Two,
            Self::Two => Self::One,
        }
    }
}

impl std::fmt::Display for Slot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::One => write!(f, "1"),
            Self::Two => write!(f, "2"),
        }
    }
}
