pub mod board;
pub use board::*;

pub mod symbol;
pub use symbol::*;
