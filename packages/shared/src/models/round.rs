use serde::{Deserialize, Serialize};

use crate::models::board::{Board, Marker};
use crate::models::game::RoundWinner;
use crate::services::board_service::BoardService;
use crate::services::errors::board_service_errors::BoardError;

/// One round being played on a single shared client. X always opens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Round {
    pub board: Board,
    pub current_marker: Marker,
    pub result: Option<RoundWinner>,
    pub winning_line: Option<[usize; 3]>,
}

impl Default for Round {
    fn default() -> Self {
        Round {
            board: Board::new(),
            current_marker: Marker::X,
            result: None,
            winning_line: None,
        }
    }
}

impl Round {
    pub fn new() -> Self {
        Round::default()
    }

    pub fn is_over(&self) -> bool {
        self.result.is_some()
    }

    /// Places the current marker and returns the outcome once the round ends.
    pub fn play(&mut self, position: usize) -> Result<Option<RoundWinner>, BoardError> {
        if self.is_over() {
            return Err(BoardError::RoundOver);
        }

        self.board = BoardService::apply_move(&self.board, position, self.current_marker)?;

        match BoardService::classify_result(&self.board) {
            Some(result) => {
                self.result = Some(result);
                self.winning_line = BoardService::winning_line(&self.board);
            }
            None => self.current_marker = self.current_marker.next(),
        }
        Ok(self.result)
    }

    pub fn reset(&mut self) {
        *self = Round::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play_all(round: &mut Round, positions: &[usize]) -> Option<RoundWinner> {
        let mut outcome = None;
        for &position in positions {
            outcome = round.play(position).unwrap();
        }
        outcome
    }

    #[test]
    fn test_new_round_starts_with_x() {
        let round = Round::new();
        assert_eq!(round.current_marker, Marker::X);
        assert!(!round.is_over());
        assert_eq!(round.board, Board::new());
    }

    #[test]
    fn test_markers_alternate() {
        let mut round = Round::new();

        round.play(0).unwrap();
        assert_eq!(round.current_marker, Marker::O);
        round.play(4).unwrap();
        assert_eq!(round.current_marker, Marker::X);

        assert_eq!(round.board.get(0), Some(Some(Marker::X)));
        assert_eq!(round.board.get(4), Some(Some(Marker::O)));
    }

    #[test]
    fn test_player1_wins_top_row() {
        let mut round = Round::new();

        let outcome = play_all(&mut round, &[0, 3, 1, 4, 2]);

        assert_eq!(outcome, Some(RoundWinner::Player1));
        assert_eq!(round.winning_line, Some([0, 1, 2]));
        assert_eq!(round.current_marker, Marker::X);
    }

    #[test]
    fn test_player2_wins_column() {
        let mut round = Round::new();

        let outcome = play_all(&mut round, &[0, 1, 3, 4, 8, 7]);

        assert_eq!(outcome, Some(RoundWinner::Player2));
        assert_eq!(round.winning_line, Some([1, 4, 7]));
    }

    #[test]
    fn test_draw_when_board_fills() {
        let mut round = Round::new();

        let outcome = play_all(&mut round, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);

        assert_eq!(outcome, Some(RoundWinner::Draw));
        assert!(round.winning_line.is_none());
    }

    #[test]
    fn test_occupied_cell_keeps_turn() {
        let mut round = Round::new();
        round.play(4).unwrap();

        assert_eq!(round.play(4), Err(BoardError::IllegalMove(4)));
        assert_eq!(round.current_marker, Marker::O);
    }

    #[test]
    fn test_no_moves_after_round_over() {
        let mut round = Round::new();
        play_all(&mut round, &[0, 3, 1, 4, 2]);
        let finished = round.clone();

        assert_eq!(round.play(8), Err(BoardError::RoundOver));
        assert_eq!(round, finished);
    }

    #[test]
    fn test_reset() {
        let mut round = Round::new();
        play_all(&mut round, &[0, 3, 1, 4, 2]);

        round.reset();

        assert_eq!(round, Round::new());
    }
}
