//! Turn state machine - first pick, second pick, match or mismatch
//!
//! [`TurnState::select`] applies a whole transition synchronously and reports
//! what happened; the caller plays the matching feedback (reveal animation,
//! mismatch pause and cover animation, win sequence). Evaluation of the
//! second pick happens inside `select`, so the observable phases are only
//! [`TurnPhase::Idle`] and [`TurnPhase::OneSelected`].

use crate::board::Board;
use crate::reveal::RevealState;
use crate::types::CellPos;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TurnPhase {
    /// No selection this turn
    #[default]
    Idle,
    /// The first cell is face-up, waiting for the second pick
    OneSelected(CellPos),
}

/// Result of a single click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    /// Click on a revealed cell (including the first pick itself) or off-board
    Ignored,
    /// First pick of the turn is now face-up
    FirstRevealed(CellPos),
    /// Both picks show the same icon and stay face-up
    Matched {
        first: CellPos,
        second: CellPos,
        /// Every cell is now face-up
        won: bool,
    },
    /// Icons differ; both cells are covered again
    Mismatched { first: CellPos, second: CellPos },
}

#[derive(Debug, Clone, Default)]
pub struct TurnState {
    phase: TurnPhase,
}

impl TurnState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    /// Forget any pending selection.
    pub fn reset(&mut self) {
        self.phase = TurnPhase::Idle;
    }

    /// Handle a click on `cell`.
    pub fn select(&mut self, board: &Board, revealed: &mut RevealState, cell: CellPos) -> TurnOutcome {
        let Some(icon) = board.icon(cell) else {
            return TurnOutcome::Ignored;
        };
        if revealed.is_revealed(cell) {
            return TurnOutcome::Ignored;
        }
        revealed.reveal(cell);

        match self.phase {
            TurnPhase::Idle => {
                self.phase = TurnPhase::OneSelected(cell);
                TurnOutcome::FirstRevealed(cell)
            }
            TurnPhase::OneSelected(first) => {
                self.phase = TurnPhase::Idle;
                if board.icon(first) == Some(icon) {
                    TurnOutcome::Matched {
                        first,
                        second: cell,
                        won: revealed.all_revealed(),
                    }
                } else {
                    revealed.cover(first);
                    revealed.cover(cell);
                    TurnOutcome::Mismatched {
                        first,
                        second: cell,
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Icon, Shape, BLUE, RED};

    fn two_pair_board() -> Board {
        let a = Icon::new(Shape::Donut, RED);
        let b = Icon::new(Shape::Square, BLUE);
        // (0,0)=a (0,1)=b (1,0)=b (1,1)=a
        Board::from_icons(2, 2, vec![a, b, b, a]).unwrap()
    }

    #[test]
    fn first_click_moves_to_one_selected() {
        let board = two_pair_board();
        let mut revealed = RevealState::new(2, 2, false);
        let mut turn = TurnState::new();

        let out = turn.select(&board, &mut revealed, CellPos::new(0, 0));
        assert_eq!(out, TurnOutcome::FirstRevealed(CellPos::new(0, 0)));
        assert_eq!(turn.phase(), TurnPhase::OneSelected(CellPos::new(0, 0)));
        assert!(revealed.is_revealed(CellPos::new(0, 0)));
    }

    #[test]
    fn same_cell_twice_is_ignored() {
        let board = two_pair_board();
        let mut revealed = RevealState::new(2, 2, false);
        let mut turn = TurnState::new();

        turn.select(&board, &mut revealed, CellPos::new(0, 0));
        let out = turn.select(&board, &mut revealed, CellPos::new(0, 0));
        assert_eq!(out, TurnOutcome::Ignored);
        assert_eq!(turn.phase(), TurnPhase::OneSelected(CellPos::new(0, 0)));
        assert!(revealed.is_revealed(CellPos::new(0, 0)));
    }

    #[test]
    fn mismatch_covers_both() {
        let board = two_pair_board();
        let mut revealed = RevealState::new(2, 2, false);
        let mut turn = TurnState::new();

        turn.select(&board, &mut revealed, CellPos::new(0, 0));
        let out = turn.select(&board, &mut revealed, CellPos::new(1, 0));
        assert_eq!(
            out,
            TurnOutcome::Mismatched {
                first: CellPos::new(0, 0),
                second: CellPos::new(1, 0)
            }
        );
        assert_eq!(turn.phase(), TurnPhase::Idle);
        assert_eq!(revealed.revealed_count(), 0);
    }

    #[test]
    fn match_then_win() {
        let board = two_pair_board();
        let mut revealed = RevealState::new(2, 2, false);
        let mut turn = TurnState::new();

        turn.select(&board, &mut revealed, CellPos::new(0, 0));
        let out = turn.select(&board, &mut revealed, CellPos::new(1, 1));
        assert_eq!(
            out,
            TurnOutcome::Matched {
                first: CellPos::new(0, 0),
                second: CellPos::new(1, 1),
                won: false
            }
        );

        turn.select(&board, &mut revealed, CellPos::new(0, 1));
        let out = turn.select(&board, &mut revealed, CellPos::new(1, 0));
        assert!(matches!(out, TurnOutcome::Matched { won: true, .. }));
        assert!(revealed.all_revealed());
    }

    #[test]
    fn off_board_click_is_ignored() {
        let board = two_pair_board();
        let mut revealed = RevealState::new(2, 2, false);
        let mut turn = TurnState::new();

        let out = turn.select(&board, &mut revealed, CellPos::new(5, 5));
        assert_eq!(out, TurnOutcome::Ignored);
        assert_eq!(turn.phase(), TurnPhase::Idle);
    }
}
