use super::Outbox;
use super::Outcome;
use super::Rematch;
use super::Roles;
use super::Slot;
use super::Stats;
use super::Turn;
use crate::board::Board;
use crate::board::Symbol;
use crate::protocol::ServerMessage;
use crate::ConnId;
use crate::RoomId;

/// Verdict texts shown at the end of a game.
pub const WIN: &str = "You win!";
pub const LOSE: &str = "Unfortunately you lose.";
pub const DRAW: &str = "Draw!";

/// One matched pair of connections and everything they share: the
/// grid, whose turn it is, the lifetime scoreboard, and the rematch
/// negotiation. Rooms never touch sockets; every event returns an
/// [`Outbox`] of addressed messages for the gateway to deliver.
#[derive(Debug)]
pub struct Room {
    id: RoomId,
    one: ConnId,
    two: Option<ConnId>,
    flip: bool,
    board: Board,
    turn: Turn,
    roles: Option<Roles>,
    stats: Stats,
    history: Vec<Outcome>,
    rematch: Rematch,
}

impl Room {
    /// Open a fresh room with its founder in slot 1, waiting for an
    /// opponent.
    pub fn open(id: RoomId, conn: ConnId) -> Self {
        log::info!("[room {}] opened by conn {}", id, conn);
        Self {
            id,
            one: conn,
            two: None,
            flip: false,
            board: Board::default(),
            turn: Turn::Waiting,
            roles: None,
            stats: Stats::default(),
            history: Vec::new(),
            rematch: Rematch::default(),
        }
    }
    pub fn id(&self) -> RoomId {
        self.id
    }
    pub fn is_waiting(&self) -> bool {
        self.two.is_none()
    }
    pub fn turn(&self) -> Turn {
        self.turn
    }
    pub fn board(&self) -> &Board {
        &self.board
    }
    pub fn stats(&self) -> &Stats {
        &self.stats
    }
    pub fn history(&self) -> &[Outcome] {
        &self.history
    }
    pub fn roles(&self) -> Option<Roles> {
        self.roles
    }
    /// Connections currently seated, slot 1 first.
    pub fn seated(&self) -> impl Iterator<Item = ConnId> {
        std::iter::once(self.one).chain(self.two)
    }
    fn conn(&self, slot: Slot) -> Option<ConnId> {
        match slot {
            Slot::One => Some(self.one),
            Slot::Two => self.two,
        }
    }
}

impl Room {
    /// Seat an opponent in slot 2 and begin the first game.
    pub fn sit(&mut self, conn: ConnId) -> Outbox {
        log::info!("[room {}] conn {} seated as P2", self.id, conn);
        let mut outbox = Outbox::default();
        self.two = Some(conn);
        let roles = self.restart();
        self.starts(roles, None, &mut outbox);
        outbox
    }

    /// Apply one move. Every rejection is silent: the sender learns
    /// nothing, exactly as if the frame never arrived. A hint symbol
    /// overrides the seat's assigned role.
    pub fn play(&mut self, slot: Slot, index: i64, hint: Option<Symbol>) -> Outbox {
        let mut outbox = Outbox::default();
        let Some(symbol) = hint.or(self.roles.map(|roles| roles.of(slot))) else {
            log::debug!("[room {}] move without a resolvable symbol", self.id);
            return outbox;
        };
        if !Board::legal(index) {
            log::debug!("[room {}] move out of range: {}", self.id, index);
            return outbox;
        }
        let cell = index as usize;
        if self.board.get(cell).is_some() {
            log::debug!("[room {}] move onto occupied cell {}", self.id, cell);
            return outbox;
        }
        if self.turn != Turn::Choice(slot) {
            log::debug!("[room {}] move by P{} on turn {}", self.id, slot, self.turn);
            return outbox;
        }
        self.board.set(cell, symbol);
        log::debug!("[room {}] P{} played {} at {}", self.id, slot, symbol, cell);
        outbox.broadcast(self, ServerMessage::played(cell, symbol));
        if self.board.is_winning(symbol) {
            self.conclude_win(slot, symbol, &mut outbox);
        } else if self.board.is_full() {
            self.conclude_draw(&mut outbox);
        } else {
            self.turn = Turn::Choice(slot.other());
        }
        outbox
    }

    /// Relay a line of chat to everyone seated. Membership is not
    /// checked; the slot in the payload is taken at face value.
    pub fn chat(&self, slot: Slot, message: &str) -> Outbox {
        log::debug!("[room {}] chat from P{}: {}", self.id, slot, message);
        let mut outbox = Outbox::default();
        outbox.broadcast(self, ServerMessage::chat(slot, message));
        outbox
    }

    /// Record a rematch request. Once both seats have asked, the room
    /// flips its symbol assignment and starts the next game; until
    /// then the requester sees pending while the other seat is
    /// prompted.
    pub fn rematch(&mut self, slot: Slot) -> Outbox {
        log::info!("[room {}] P{} requested a rematch", self.id, slot);
        let mut outbox = Outbox::default();
        self.rematch.request(slot);
        if self.rematch.requested(slot.other()) {
            log::info!("[room {}] rematch agreed, restarting", self.id);
            self.flip = !self.flip;
            let roles = self.restart();
            self.starts(roles, Some(true), &mut outbox);
        } else if let Some(conn) = self.conn(slot) {
            outbox.unicast(conn, ServerMessage::RematchPending);
            match self.conn(slot.other()) {
                Some(other) => outbox.unicast(other, ServerMessage::RematchRequest),
                None => log::warn!("[room {}] no opponent to prompt for rematch", self.id),
            }
        } else {
            log::warn!("[room {}] rematch from an empty seat", self.id);
        }
        outbox
    }
}

impl Room {
    /// Reset the board for a new game under the current flip. Stats
    /// and history carry over; the first turn goes to whoever holds X.
    fn restart(&mut self) -> Roles {
        let roles = Roles::from(self.flip);
        self.roles = Some(roles);
        self.board = Board::default();
        self.turn = Turn::Choice(roles.x());
        self.rematch = Rematch::default();
        roles
    }

    /// Send each seat its personalized start payload.
    fn starts(&self, roles: Roles, rematch: Option<bool>, outbox: &mut Outbox) {
        for seat in [Slot::One, Slot::Two] {
            if let Some(conn) = self.conn(seat) {
                outbox.unicast(
                    conn,
                    ServerMessage::start(
                        seat,
                        roles.of(seat),
                        self.id,
                        roles,
                        self.stats,
                        self.history.clone(),
                        rematch,
                    ),
                );
            }
        }
    }

    fn conclude_win(&mut self, slot: Slot, symbol: Symbol, outbox: &mut Outbox) {
        log::info!("[room {}] P{} wins as {}", self.id, slot, symbol);
        self.stats.credit(slot, symbol);
        self.history.push(Outcome::win(slot, symbol));
        self.turn = Turn::Over;
        for seat in [Slot::One, Slot::Two] {
            if let Some(conn) = self.conn(seat) {
                let text = match seat == slot {
                    true => WIN,
                    false => LOSE,
                };
                outbox.unicast(conn, ServerMessage::game_over(text));
            }
        }
        self.report(outbox);
    }

    fn conclude_draw(&mut self, outbox: &mut Outbox) {
        log::info!("[room {}] drawn", self.id);
        self.stats.draw();
        self.history.push(Outcome::draw());
        self.turn = Turn::Over;
        outbox.broadcast(self, ServerMessage::game_over(DRAW));
        self.report(outbox);
    }

    /// Refresh everyone's scoreboard and ledger after a conclusion.
    fn report(&self, outbox: &mut Outbox) {
        log::debug!("[room {}] settled\n{}", self.id, self.board);
        outbox.broadcast(self, ServerMessage::stats(self.stats));
        outbox.broadcast(self, ServerMessage::history(self.history.clone()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FOUNDER: ConnId = 10;
    const GUEST: ConnId = 20;

    fn paired() -> Room {
        let mut room = Room::open(1, FOUNDER);
        room.sit(GUEST);
        room
    }

    /// Drive a game to its end: X takes the top row while O fills the
    /// middle one. Returns the outbox of the winning move.
    fn sweep(room: &mut Room) -> Outbox {
        room.play(Slot::One, 0, None);
        room.play(Slot::Two, 3, None);
        room.play(Slot::One, 1, None);
        room.play(Slot::Two, 4, None);
        room.play(Slot::One, 2, None)
    }

    #[test]
    fn opening_waits_for_an_opponent() {
        let room = Room::open(1, FOUNDER);
        assert!(room.is_waiting());
        assert_eq!(room.turn(), Turn::Waiting);
        assert_eq!(room.roles(), None);
        assert_eq!(room.seated().collect::<Vec<_>>(), vec![FOUNDER]);
    }

    #[test]
    fn seating_starts_the_first_game() {
        let mut room = Room::open(1, FOUNDER);
        let outbox = room.sit(GUEST);
        assert!(!room.is_waiting());
        assert_eq!(room.turn(), Turn::Choice(Slot::One));
        assert_eq!(room.roles(), Some(Roles::from(false)));
        let messages = outbox.messages();
        assert_eq!(messages.len(), 2);
        assert!(matches!(
            &messages[0],
            (
                FOUNDER,
                ServerMessage::Start {
                    player_id: Slot::One,
                    symbol: Symbol::X,
                    rematch: None,
                    ..
                }
            )
        ));
        assert!(matches!(
            &messages[1],
            (
                GUEST,
                ServerMessage::Start {
                    player_id: Slot::Two,
                    symbol: Symbol::O,
                    rematch: None,
                    ..
                }
            )
        ));
    }

    #[test]
    fn moves_out_of_turn_are_dropped() {
        let mut room = paired();
        assert!(room.play(Slot::Two, 0, None).is_empty());
        assert_eq!(room.board().get(0), None);
        assert!(!room.play(Slot::One, 0, None).is_empty());
        assert!(room.play(Slot::One, 1, None).is_empty());
        assert_eq!(room.board().get(1), None);
    }

    #[test]
    fn moves_out_of_range_are_dropped() {
        let mut room = paired();
        assert!(room.play(Slot::One, 9, None).is_empty());
        assert!(room.play(Slot::One, -1, None).is_empty());
        assert!(room.play(Slot::One, i64::MAX, None).is_empty());
        assert_eq!(room.turn(), Turn::Choice(Slot::One));
    }

    #[test]
    fn moves_onto_occupied_cells_are_dropped() {
        let mut room = paired();
        room.play(Slot::One, 4, None);
        assert!(room.play(Slot::Two, 4, None).is_empty());
        assert_eq!(room.board().get(4), Some(Symbol::X));
        assert_eq!(room.turn(), Turn::Choice(Slot::Two));
    }

    #[test]
    fn waiting_rooms_drop_moves() {
        let mut room = Room::open(1, FOUNDER);
        assert!(room.play(Slot::One, 0, None).is_empty());
        assert_eq!(room.board().get(0), None);
    }

    #[test]
    fn turns_alternate() {
        let mut room = paired();
        room.play(Slot::One, 0, None);
        assert_eq!(room.turn(), Turn::Choice(Slot::Two));
        room.play(Slot::Two, 4, None);
        assert_eq!(room.turn(), Turn::Choice(Slot::One));
    }

    #[test]
    fn accepted_moves_broadcast_to_both_seats() {
        let mut room = paired();
        let outbox = room.play(Slot::One, 8, None);
        let expected = ServerMessage::played(8, Symbol::X);
        assert_eq!(
            outbox.drain(),
            vec![(FOUNDER, expected.clone()), (GUEST, expected)]
        );
    }

    #[test]
    fn hint_symbol_overrides_the_assigned_role() {
        let mut room = paired();
        let outbox = room.play(Slot::One, 0, Some(Symbol::O));
        assert_eq!(room.board().get(0), Some(Symbol::O));
        assert!(matches!(
            &outbox.messages()[0],
            (
                FOUNDER,
                ServerMessage::Move {
                    index: 0,
                    symbol: Symbol::O,
                }
            )
        ));
    }

    #[test]
    fn winning_concludes_with_personalized_verdicts() {
        let mut room = paired();
        let outbox = sweep(&mut room);
        assert_eq!(room.turn(), Turn::Over);
        assert_eq!(room.stats().of(Slot::One).of(Symbol::X), 1);
        assert_eq!(room.history(), &[Outcome::win(Slot::One, Symbol::X)]);
        let messages = outbox.messages();
        assert_eq!(messages.len(), 8);
        assert_eq!(messages[2].0, FOUNDER);
        assert_eq!(messages[2].1, ServerMessage::game_over(WIN));
        assert_eq!(messages[3].0, GUEST);
        assert_eq!(messages[3].1, ServerMessage::game_over(LOSE));
        assert!(matches!(messages[4].1, ServerMessage::Stats { .. }));
        assert!(matches!(messages[6].1, ServerMessage::History { .. }));
    }

    #[test]
    fn full_board_without_a_line_is_a_draw() {
        let mut room = paired();
        room.play(Slot::One, 0, None);
        room.play(Slot::Two, 2, None);
        room.play(Slot::One, 1, None);
        room.play(Slot::Two, 3, None);
        room.play(Slot::One, 5, None);
        room.play(Slot::Two, 4, None);
        room.play(Slot::One, 6, None);
        room.play(Slot::Two, 7, None);
        let outbox = room.play(Slot::One, 8, None);
        assert_eq!(room.turn(), Turn::Over);
        assert_eq!(room.stats().draws(), 1);
        assert_eq!(room.history(), &[Outcome::draw()]);
        let messages = outbox.messages();
        assert_eq!(messages.len(), 8);
        assert_eq!(messages[2].1, ServerMessage::game_over(DRAW));
        assert_eq!(messages[3].1, ServerMessage::game_over(DRAW));
    }

    #[test]
    fn filling_the_board_with_a_line_is_a_win() {
        let mut room = paired();
        room.play(Slot::One, 0, None);
        room.play(Slot::Two, 3, None);
        room.play(Slot::One, 1, None);
        room.play(Slot::Two, 4, None);
        room.play(Slot::One, 5, None);
        room.play(Slot::Two, 6, None);
        room.play(Slot::One, 7, None);
        room.play(Slot::Two, 8, None);
        let outbox = room.play(Slot::One, 2, None);
        assert!(room.board().is_full());
        assert_eq!(room.turn(), Turn::Over);
        assert_eq!(room.history(), &[Outcome::win(Slot::One, Symbol::X)]);
        assert_eq!(room.stats().of(Slot::One).of(Symbol::X), 1);
        assert_eq!(room.stats().draws(), 0);
        let messages = outbox.messages();
        assert_eq!(messages.len(), 8);
        assert_eq!(messages[2], (FOUNDER, ServerMessage::game_over(WIN)));
        assert_eq!(messages[3], (GUEST, ServerMessage::game_over(LOSE)));
    }

    #[test]
    fn concluded_games_drop_further_moves() {
        let mut room = paired();
        sweep(&mut room);
        assert!(room.play(Slot::One, 5, None).is_empty());
        assert!(room.play(Slot::Two, 5, None).is_empty());
        assert_eq!(room.board().get(5), None);
    }

    #[test]
    fn chat_relays_to_both_seats() {
        let room = paired();
        let outbox = room.chat(Slot::Two, "good luck");
        let expected = ServerMessage::chat(Slot::Two, "good luck");
        assert_eq!(
            outbox.drain(),
            vec![(FOUNDER, expected.clone()), (GUEST, expected)]
        );
    }

    #[test]
    fn one_sided_rematch_stays_pending() {
        let mut room = paired();
        sweep(&mut room);
        let outbox = room.rematch(Slot::One);
        assert_eq!(
            outbox.drain(),
            vec![
                (FOUNDER, ServerMessage::RematchPending),
                (GUEST, ServerMessage::RematchRequest),
            ]
        );
        assert_eq!(room.turn(), Turn::Over);
    }

    #[test]
    fn repeated_rematch_requests_prompt_again() {
        let mut room = paired();
        sweep(&mut room);
        room.rematch(Slot::One);
        let outbox = room.rematch(Slot::One);
        assert_eq!(outbox.len(), 2);
        assert_eq!(room.turn(), Turn::Over);
    }

    #[test]
    fn agreed_rematch_swaps_symbols_and_restarts() {
        let mut room = paired();
        sweep(&mut room);
        room.rematch(Slot::Two);
        let outbox = room.rematch(Slot::One);
        assert_eq!(room.roles(), Some(Roles::from(true)));
        assert_eq!(room.turn(), Turn::Choice(Slot::Two));
        assert_eq!(room.board(), &Board::default());
        assert_eq!(room.stats().of(Slot::One).of(Symbol::X), 1);
        assert_eq!(room.history().len(), 1);
        let messages = outbox.messages();
        assert_eq!(messages.len(), 2);
        assert!(matches!(
            &messages[0],
            (
                FOUNDER,
                ServerMessage::Start {
                    player_id: Slot::One,
                    symbol: Symbol::O,
                    rematch: Some(true),
                    ..
                }
            )
        ));
        assert!(matches!(
            &messages[1],
            (
                GUEST,
                ServerMessage::Start {
                    player_id: Slot::Two,
                    symbol: Symbol::X,
                    rematch: Some(true),
                    ..
                }
            )
        ));
    }

    #[test]
    fn rematch_consent_resets_after_restart() {
        let mut room = paired();
        sweep(&mut room);
        room.rematch(Slot::One);
        room.rematch(Slot::Two);
        let outbox = room.rematch(Slot::One);
        assert_eq!(
            outbox.drain(),
            vec![
                (FOUNDER, ServerMessage::RematchPending),
                (GUEST, ServerMessage::RematchRequest),
            ]
        );
    }

    #[test]
    fn second_rematch_flips_symbols_back() {
        let mut room = paired();
        sweep(&mut room);
        room.rematch(Slot::One);
        room.rematch(Slot::Two);
        room.play(Slot::Two, 0, None);
        room.play(Slot::One, 3, None);
        room.play(Slot::Two, 1, None);
        room.play(Slot::One, 4, None);
        room.play(Slot::Two, 2, None);
        assert_eq!(room.stats().of(Slot::Two).of(Symbol::X), 1);
        room.rematch(Slot::One);
        room.rematch(Slot::Two);
        assert_eq!(room.roles(), Some(Roles::from(false)));
        assert_eq!(room.turn(), Turn::Choice(Slot::One));
        assert_eq!(room.history().len() as u32, room.stats().total());
    }

    #[test]
    fn mid_game_rematch_resets_the_board() {
        let mut room = paired();
        room.play(Slot::One, 0, None);
        room.rematch(Slot::One);
        room.rematch(Slot::Two);
        assert_eq!(room.board(), &Board::default());
        assert_eq!(room.turn(), Turn::Choice(Slot::Two));
        assert_eq!(room.stats().total(), 0);
        assert!(room.history().is_empty());
    }

    #[test]
    fn waiting_room_rematch_prompts_nobody() {
        let mut room = Room::open(1, FOUNDER);
        assert!(room.rematch(Slot::Two).is_empty());
        let outbox = room.rematch(Slot::One);
        let messages = outbox.messages();
        assert_eq!(messages.len(), 1);
        assert!(matches!(
            &messages[0],
            (
                FOUNDER,
                ServerMessage::Start {
                    player_id: Slot::One,
                    symbol: Symbol::O,
                    rematch: Some(true),
                    ..
                }
            )
        ));
        assert!(room.is_waiting());
    }
}
