//! Matchmaking Server Binary
//!
//! Runs the HTTP server for pairing players into rooms and hosting
//! live games over WebSocket connections.

use clap::Parser;
use noughts::*;

#[tokio::main]
async fn main() {
    log();
    kys();
    hosting::Server::run(hosting::Args::parse()).await.unwrap();
}
