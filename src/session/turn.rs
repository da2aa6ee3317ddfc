use super::Slot;

/// Whose turn it is, if anyone's. A room starts in [`Turn::Waiting`]
/// with one seat empty, cycles through [`Turn::Choice`] while a game
/// runs, and parks in [`Turn::Over`] until a rematch resets it.
#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq)]
pub enum Turn {
    Waiting,
    Choice(Slot),
    Over,
}

impl std::fmt::Display for Turn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Choice(slot) => write!(f, "P{}", slot),
            Self::Waiting => write!(f, ".."),
            Self::Over => write!(f, "XX"),
        }
    }
}
