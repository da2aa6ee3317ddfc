use clap::Parser;

/// Command line and environment configuration for the server.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Interface to bind.
    #[arg(long, env = "NOUGHTS_HOST", default_value = "0.0.0.0")]
    pub host: String,
    /// Port to listen on.
    #[arg(long, env = "NOUGHTS_PORT", default_value_t = 5001)]
    pub port: u16,
}
