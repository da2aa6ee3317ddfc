use crate::board::Symbol;
use crate::session::Outcome;
use crate::session::Roles;
use crate::session::Slot;
use crate::session::Stats;
use crate::RoomId;
use serde::Serialize;

/// Messages sent from server to client over WebSocket. Tagged by
/// `type`, with camelCase payload fields. Slots and symbols travel as
/// their wire strings, so payloads key scoreboards by `"1"`/`"2"` and
/// mark cells with `"X"`/`"O"`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum ServerMessage {
    /// Seated alone; matchmaking will fill the other seat.
    Wait { room: RoomId },
    /// A game is beginning. Personalized per seat, since each client
    /// learns its own slot and symbol from this payload. The rematch
    /// flag appears only on restarts, never on the first game.
    Start {
        player_id: Slot,
        symbol: Symbol,
        room: RoomId,
        roles: Roles,
        stats: Stats,
        history: Vec<Outcome>,
        #[serde(skip_serializing_if = "Option::is_none")]
        rematch: Option<bool>,
    },
    /// A move landed on the board.
    Move { index: usize, symbol: Symbol },
    /// The game concluded. Personalized for wins, shared for draws.
    GameOver { message: String },
    /// Scoreboard refresh after a conclusion.
    Stats { stats: Stats },
    /// Outcome ledger refresh after a conclusion.
    History { history: Vec<Outcome> },
    /// A line of chat relayed to the whole room.
    Chat { player_id: Slot, message: String },
    /// Rematch recorded; the other seat has not agreed yet.
    RematchPending,
    /// The other seat asked for a rematch.
    RematchRequest,
}

impl ServerMessage {
    pub fn wait(room: RoomId) -> Self {
        Self::Wait { room }
    }
    pub fn start(
        player_id: Slot,
        symbol: Symbol,
        room: RoomId,
        roles: Roles,
        stats: Stats,
        history: Vec<Outcome>,
        rematch: Option<bool>,
    ) -> Self {
        Self::Start {
            player_id,
            symbol,
            room,
            roles,
            stats,
            history,
            rematch,
        }
    }
    pub fn played(index: usize, symbol: Symbol) -> Self {
        Self::Move { index, symbol }
    }
    pub fn game_over(message: &str) -> Self {
        Self::GameOver {
            message: message.to_string(),
        }
    }
    pub fn stats(stats: Stats) -> Self {
        Self::Stats { stats }
    }
    pub fn history(history: Vec<Outcome>) -> Self {
        Self::History { history }
    }
    pub fn chat(player_id: Slot, message: &str) -> Self {
        Self::Chat {
            player_id,
            message: message.to_string(),
        }
    }
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).expect("serialize server message")
    }
}
