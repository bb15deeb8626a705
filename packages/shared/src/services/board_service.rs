use crate::{
    models::{
        board::{Board, Marker},
        game::RoundWinner,
    },
    services::errors::board_service_errors::BoardError,
};

/// Rows, then columns, then diagonals. Order decides which line is reported
/// when a board holds more than one.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Stateless rules for a single 3x3 round. Boards are never checked for
/// legality, only for patterns.
#[derive(Clone, Default)]
pub struct BoardService;

impl BoardService {
    /// First line of three identical markers, if any.
    pub fn winning_line(board: &Board) -> Option<[usize; 3]> {
        let cells = board.cells();
        WINNING_LINES.into_iter().find(|&[a, b, c]| {
            cells[a].is_some() && cells[a] == cells[b] && cells[a] == cells[c]
        })
    }

    pub fn evaluate_winner(board: &Board) -> Option<Marker> {
        Self::winning_line(board).and_then(|[a, _, _]| board.cells()[a])
    }

    pub fn is_full(board: &Board) -> bool {
        board.cells().iter().all(Option::is_some)
    }

    pub fn is_over(board: &Board) -> bool {
        Self::evaluate_winner(board).is_some() || Self::is_full(board)
    }

    /// Maps a terminal board to the round outcome; `None` while play continues.
    pub fn classify_result(board: &Board) -> Option<RoundWinner> {
        match Self::evaluate_winner(board) {
            Some(Marker::X) => Some(RoundWinner::Player1),
            Some(Marker::O) => Some(RoundWinner::Player2),
            None if Self::is_full(board) => Some(RoundWinner::Draw),
            None => None,
        }
    }

    /// Returns a copy of `board` with `marker` placed. Turn order is the
    /// caller's concern.
    pub fn apply_move(board: &Board, position: usize, marker: Marker) -> Result<Board, BoardError> {
        match board.get(position) {
            None => Err(BoardError::InvalidPosition(position)),
            Some(Some(_)) => Err(BoardError::IllegalMove(position)),
            Some(None) => Ok(board.with(position, marker)),
        }
    }
}
