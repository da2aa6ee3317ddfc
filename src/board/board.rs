use super::Symbol;

/// Number of cells on the grid.
pub const CELLS: usize = 9;

/// The eight winning lines: three rows, three columns, two diagonals.
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// A 3x3 grid in row-major order. Cells are write-once within a game;
/// the only way back to empty is a wholesale reset via [`Default`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Board([Option<Symbol>; CELLS]);

impl Board {
    /// Whether an incoming index refers to a cell at all. Indices come
    /// off the wire signed, so out-of-range includes negatives.
    pub fn legal(index: i64) -> bool {
        (0..CELLS as i64).contains(&index)
    }
    pub fn get(&self, cell: usize) -> Option<Symbol> {
        self.0[cell]
    }
    pub fn set(&mut self, cell: usize, symbol: Symbol) {
        self.0[cell] = Some(symbol);
    }
    /// Whether this symbol occupies all three cells of any line.
    pub fn is_winning(&self, symbol: Symbol) -> bool {
        LINES
            .iter()
            .any(|line| line.iter().all(|&cell| self.0[cell] == Some(symbol)))
    }
    /// Whether every cell is occupied.
    pub fn is_full(&self) -> bool {
        self.0.iter().all(|cell| cell.is_some())
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for row in self.0.chunks(3) {
            for cell in row {
                match cell {
                    Some(symbol) => write!(f, "{}", symbol)?,
                    None => write!(f, ".")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
