use super::Room;
use crate::protocol::ServerMessage;
use crate::ConnId;

/// Messages produced by one room event, addressed but not yet sent.
/// Rooms are pure state machines with no access to sockets; the
/// gateway drains the outbox under the lobby lock so wire order
/// follows event order.
#[derive(Debug, Default)]
pub struct Outbox(Vec<(ConnId, ServerMessage)>);

impl Outbox {
    pub fn unicast(&mut self, conn: ConnId, message: ServerMessage) {
        self.0.push((conn, message));
    }
    /// Queue a copy for every seated connection in the room.
    pub fn broadcast(&mut self, room: &Room, message: ServerMessage) {
        for conn in room.seated() {
            self.0.push((conn, message.clone()));
        }
    }
    pub fn drain(self) -> Vec<(ConnId, ServerMessage)> {
        self.0
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn messages(&self) -> &[(ConnId, ServerMessage)] {
        &self.0
    }
}
