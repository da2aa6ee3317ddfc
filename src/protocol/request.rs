use crate::board::Symbol;
use crate::session::Slot;
use crate::RoomId;
use serde::Deserialize;

/// Messages received from client over WebSocket. Tagged by `type`,
/// with camelCase payload fields. A frame that does not parse into
/// one of these is dropped by the gateway; a frame that parses but
/// names a stale room or an illegal move is dropped by the lobby.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum ClientMessage {
    /// Enter matchmaking. Carries no payload; the sender's identity
    /// is its connection.
    Join,
    /// Claim a cell. The index arrives signed so that an out-of-range
    /// number is an illegal move, not a malformed frame. The symbol is
    /// an optional hint that overrides the seat's assigned role.
    Move {
        player_id: Slot,
        room: RoomId,
        index: i64,
        #[serde(default)]
        symbol: Option<Symbol>,
    },
    /// Relay a line of chat to the room.
    Chat {
        player_id: Slot,
        room: RoomId,
        message: String,
    },
    /// Ask for another game in the same room.
    Rematch { player_id: Slot, room: RoomId },
}

impl ClientMessage {
    pub fn parse(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }
}
