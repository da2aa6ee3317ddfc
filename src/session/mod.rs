pub mod outbox;
pub use outbox::*;

pub mod outcome;
pub use outcome::*;

pub mod rematch;
pub use rematch::*;

pub mod roles;
pub use roles::*;

pub mod room;
pub use room::*;

pub mod slot;
pub use slot::*;

pub mod stats;
pub use stats::*;

pub mod turn;
pub use turn::*;
