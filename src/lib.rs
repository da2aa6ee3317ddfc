//! Matchmaking and turn-based session server for two-player
//! noughts-and-crosses over WebSocket.
//!
//! ## Architecture
//!
//! - [`board`]: pure rules for the grid, win lines, draws, and legality
//! - [`session`]: per-room state machine for seats, turns, scores, rematches
//! - [`lobby`]: the room registry and FIFO matchmaking queue
//! - [`protocol`]: tagged JSON wire messages in both directions
//! - [`hosting`]: actix HTTP/WebSocket surface and outbound delivery
//!
//! Connections are anonymous. A connection id is a delivery address, never an
//! identity; the in-room identities are the slots (`"1"`/`"2"`), which travel
//! in message payloads. All room state lives in memory for the lifetime of
//! the process.

pub mod board;
pub mod hosting;
pub mod lobby;
pub mod protocol;
pub mod session;

/// Opaque per-connection identifier, assigned at WebSocket accept.
pub type ConnId = u64;
/// Stable room identifier, assigned at matchmaking and never reused.
pub type RoomId = u64;

/// Initialize dual logging: INFO to the terminal, DEBUG to a timestamped
/// file under `logs/`.
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let stamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves forward")
        .as_secs();
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config,
        std::fs::File::create(format!("logs/{}.log", stamp)).expect("create log file"),
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}

/// Register a Ctrl+C handler for immediate termination.
pub fn kys() {
    tokio::spawn(async move {
        tokio::signal::ctrl_c().await.expect("install signal handler");
        println!();
        log::warn!("interrupt received, exiting");
        std::process::exit(0);
    });
}
