use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("Position {0} is already occupied")]
    IllegalMove(usize),
    #[error("Position {0} is outside the board")]
    InvalidPosition(usize),
    #[error("Round is already over")]
    RoundOver,
}
