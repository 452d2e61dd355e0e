use crate::game_state::chess_types::BoardLocation;
use crate::moves::move_descriptions::{Move, MoveSpecialness};
use crate::moves::piece::Piece;

/// History record for one committed move. Holds every piece the move
/// touched in its pre-move state, so undo restores the board exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UndoState {
    pub mv: Move,
    pub moved_piece: Piece,
    /// Carries its own cell, which differs from the destination en passant.
    pub captured_piece: Option<Piece>,
    pub specialness: MoveSpecialness,
    /// The rook as it stood before castling.
    pub castled_rook: Option<Piece>,
    pub prev_en_passant_target: Option<BoardLocation>,
}
