use crate::protocol::ClientMessage;
use crate::protocol::ServerMessage;
use crate::session::Outbox;
use crate::session::Room;
use crate::ConnId;
use crate::RoomId;
use std::collections::HashMap;
use std::collections::VecDeque;

/// The room registry and matchmaking queue. One lobby serves the
/// whole process, serialized behind the gateway's lock, so every
/// handler here runs one event at a time. Rooms are never evicted;
/// they live until the process restarts.
#[derive(Debug, Default)]
pub struct Lobby {
    rooms: HashMap<RoomId, Room>,
    queue: VecDeque<RoomId>,
    count: RoomId,
}

impl Lobby {
    /// Dispatch one parsed client event to its room.
    pub fn handle(&mut self, conn: ConnId, message: ClientMessage) -> Outbox {
        match message {
            ClientMessage::Join => self.join(conn),
            ClientMessage::Move {
                player_id,
                room,
                index,
                symbol,
            } => self.on(room, |room| room.play(player_id, index, symbol)),
            ClientMessage::Chat {
                player_id,
                room,
                message,
            } => self.on(room, |room| room.chat(player_id, &message)),
            ClientMessage::Rematch { player_id, room } => {
                self.on(room, |room| room.rematch(player_id))
            }
        }
    }

    pub fn room(&self, id: RoomId) -> Option<&Room> {
        self.rooms.get(&id)
    }
    pub fn rooms(&self) -> usize {
        self.rooms.len()
    }
    pub fn waiting(&self) -> usize {
        self.queue.len()
    }
}

impl Lobby {
    /// Seat a connection: fill the oldest waiting room, or open a new
    /// one and queue it.
    fn join(&mut self, conn: ConnId) -> Outbox {
        while let Some(id) = self.queue.pop_front() {
            match self.rooms.get_mut(&id) {
                Some(room) if room.is_waiting() => return room.sit(conn),
                Some(_) => log::warn!("[lobby] queued room {} already full", id),
                None => log::warn!("[lobby] queued room {} vanished", id),
            }
        }
        let id = self.next();
        self.rooms.insert(id, Room::open(id, conn));
        self.queue.push_back(id);
        let mut outbox = Outbox::default();
        outbox.unicast(conn, ServerMessage::wait(id));
        outbox
    }

    /// Run one event against a registered room. Events addressed to
    /// unknown rooms are dropped.
    fn on<F>(&mut self, id: RoomId, f: F) -> Outbox
    where
        F: FnOnce(&mut Room) -> Outbox,
    {
        match self.rooms.get_mut(&id) {
            Some(room) => f(room),
            None => {
                log::warn!("[lobby] event for unknown room {}", id);
                Outbox::default()
            }
        }
    }

    fn next(&mut self) -> RoomId {
        self.count += 1;
        self.count
    }
}
