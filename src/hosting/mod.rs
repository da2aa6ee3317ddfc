pub mod args;
pub use args::*;

pub mod gateway;
pub use gateway::*;

pub mod server;
pub use server::*;
