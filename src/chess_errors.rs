//! Errors used throughout the rules engine.
//!
//! `ChessErrors` is the single error type returned by the engine, the board
//! set-up parsers and the notation helpers. Every rejected request leaves the
//! game untouched: validation always finishes before the live board changes.
//!
//! Usage guidelines:
//! - Move-request variants (`EmptySource`, `WrongTeam`, `IllegalMovement`,
//!   `LeavesKingInCheck`, `InvalidPromotion`, `OutOfBounds`) describe a
//!   request the caller may simply retry with different input.
//! - `GameOver` means the game reached a terminal status; only undo and
//!   restart are accepted until then.
//! - Parsing variants carry the offending text so it can be shown to users.

use thiserror::Error;

use crate::game_state::chess_types::{BoardLocation, GameStatusCode, PieceType, Team};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessErrors {
    /// A coordinate outside the board was supplied.
    #[error("coordinates {} are outside the board", fmt_location(.0))]
    OutOfBounds(BoardLocation),

    /// There is no piece on the source cell.
    #[error("no piece at {}", fmt_location(.0))]
    EmptySource(BoardLocation),

    /// The piece on the source cell belongs to the side not on move.
    #[error("it is {expected}'s turn, but the piece belongs to {found}")]
    WrongTeam { expected: Team, found: Team },

    /// The piece cannot reach the target cell.
    #[error("{piece_type} cannot move from {} to {}", fmt_location(.from), fmt_location(.to))]
    IllegalMovement {
        piece_type: PieceType,
        from: BoardLocation,
        to: BoardLocation,
    },

    /// The move would leave the mover's own king attacked.
    #[error("moving {} to {} leaves the king in check", fmt_location(.from), fmt_location(.to))]
    LeavesKingInCheck { from: BoardLocation, to: BoardLocation },

    /// Promotion was requested to a piece this variant forbids, or on a
    /// move that does not promote.
    #[error("invalid promotion to {0}")]
    InvalidPromotion(PieceType),

    /// The game has ended; only undo and restart are accepted.
    #[error("game is already over: {0}")]
    GameOver(GameStatusCode),

    #[error("invalid cell label: {0}")]
    InvalidCellLabel(String),

    #[error("invalid layout token: {0}")]
    InvalidLayoutToken(char),

    #[error("invalid layout: {0}")]
    InvalidLayout(String),

    #[error("invalid move text: {0}")]
    InvalidMoveText(String),

    #[error("no moves to undo")]
    NothingToUndo,

    /// A perft worker thread died mid-run.
    #[error("worker thread panicked")]
    WorkerPanicked,
}

fn fmt_location(location: &BoardLocation) -> String {
    format!("({}, {})", location.0, location.1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_input() {
        let err = ChessErrors::IllegalMovement {
            piece_type: PieceType::Knight,
            from: (1, 0),
            to: (1, 2),
        };
        assert_eq!(err.to_string(), "knight cannot move from (1, 0) to (1, 2)");
        assert_eq!(
            ChessErrors::InvalidCellLabel("z9".to_owned()).to_string(),
            "invalid cell label: z9"
        );
        assert_eq!(
            ChessErrors::GameOver(GameStatusCode::Stalemate).to_string(),
            "game is already over: stalemate"
        );
    }
}
