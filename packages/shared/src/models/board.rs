use serde::{Deserialize, Serialize};

pub const BOARD_SIZE: usize = 9;

/// The symbol a player places on the board. X always belongs to player 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Marker {
    X,
    O,
}

impl Marker {
    pub fn next(self) -> Self {
        match self {
            Marker::X => Marker::O,
            Marker::O => Marker::X,
        }
    }
}

impl std::fmt::Display for Marker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Marker::X => write!(f, "X"),
            Marker::O => write!(f, "O"),
        }
    }
}

pub type Cell = Option<Marker>;

/// A 3x3 grid stored row-major. Serialized as a 9-element array of
/// `null`, `"X"` or `"O"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board([Cell; BOARD_SIZE]);

impl Board {
    pub fn new() -> Self {
        Board::default()
    }

    pub fn from_cells(cells: [Cell; BOARD_SIZE]) -> Self {
        Board(cells)
    }

    pub fn cells(&self) -> &[Cell; BOARD_SIZE] {
        &self.0
    }

    pub fn get(&self, position: usize) -> Option<Cell> {
        self.0.get(position).copied()
    }

    pub(crate) fn with(mut self, position: usize, marker: Marker) -> Self {
        self.0[position] = Some(marker);
        self
    }
}
