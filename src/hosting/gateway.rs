use crate::lobby::Lobby;
use crate::protocol::ClientMessage;
use crate::session::Outbox;
use crate::ConnId;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering;
use tokio::sync::Mutex;
use tokio::sync::RwLock;
use tokio::sync::mpsc::UnboundedSender;
use tokio::sync::mpsc::unbounded_channel;

type Tx = UnboundedSender<String>;

/// Owns the lobby and every live connection. Inbound frames funnel
/// through the lobby lock one at a time, which is what makes room
/// updates atomic; outbound messages are queued to their channels
/// before the lock is released, so each connection sees events in
/// the order the lobby applied them.
pub struct Gateway {
    lobby: Mutex<Lobby>,
    conns: RwLock<HashMap<ConnId, Tx>>,
    count: AtomicU64,
}

impl Default for Gateway {
    fn default() -> Self {
        Self {
            lobby: Mutex::new(Lobby::default()),
            conns: RwLock::new(HashMap::new()),
            count: AtomicU64::new(1),
        }
    }
}

impl Gateway {
    /// Register a connection's outbound channel and hand back its id.
    pub async fn attach(&self, tx: Tx) -> ConnId {
        let conn = self.count.fetch_add(1, Ordering::Relaxed);
        self.conns.write().await.insert(conn, tx);
        log::info!("conn {} attached", conn);
        conn
    }

    /// Forget a connection. Its seat stays in its room; messages for
    /// it simply stop being deliverable.
    pub async fn detach(&self, conn: ConnId) {
        self.conns.write().await.remove(&conn);
        log::info!("conn {} detached", conn);
    }

    /// Handle one inbound text frame end to end: parse, run it
    /// through the lobby, deliver the outbox under the same lock so
    /// wire order per connection matches event order.
    pub async fn recv(&self, conn: ConnId, text: &str) {
        match ClientMessage::parse(text) {
            Ok(message) => {
                let mut lobby = self.lobby.lock().await;
                let outbox = lobby.handle(conn, message);
                self.deliver(outbox).await;
            }
            Err(e) => log::warn!("conn {} sent malformed frame: {}", conn, e),
        }
    }

    /// Fan addressed messages out to their sockets. Delivery is fire
    /// and forget; a closed or missing channel drops the message.
    async fn deliver(&self, outbox: Outbox) {
        if outbox.is_empty() {
            return;
        }
        let conns = self.conns.read().await;
        for (conn, message) in outbox.drain() {
            match conns.get(&conn) {
                Some(tx) => {
                    tx.send(message.to_json())
                        .inspect_err(|_| log::warn!("conn {} channel closed", conn))
                        .ok();
                }
                None => log::debug!("conn {} already gone", conn),
            }
        }
    }

    /// Spawn the task bridging one WebSocket to the lobby for the
    /// life of the connection.
    pub fn bridge(
        self: Arc<Self>,
        mut session: actix_ws::Session,
        mut stream: actix_ws::MessageStream,
    ) {
        use futures::StreamExt;
        actix_web::rt::spawn(async move {
            let (tx, mut rx) = unbounded_channel::<String>();
            let conn = self.attach(tx).await;
            'sesh: loop {
                tokio::select! {
                    biased;
                    msg = rx.recv() => match msg {
                        Some(json) => if session.text(json).await.is_err() { break 'sesh },
                        None => break 'sesh,
                    },
                    msg = stream.next() => match msg {
                        Some(Ok(actix_ws::Message::Text(text))) => self.recv(conn, &text).await,
                        Some(Ok(actix_ws::Message::Close(_))) => break 'sesh,
                        Some(Err(_)) => break 'sesh,
                        None => break 'sesh,
                        _ => continue 'sesh,
                    },
                }
            }
            self.detach(conn).await;
        });
    }
}
