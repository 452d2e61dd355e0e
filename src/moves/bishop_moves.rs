use crate::game_state::chess_types::{Board, BoardLocation};
use crate::move_generation::legal_move_shared::sliding_targets;
use crate::moves::piece::Piece;

pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

#[inline]
pub fn is_bishop_shape(d_col: i8, d_row: i8) -> bool {
    d_col != 0 && d_col.abs() == d_row.abs()
}

pub fn bishop_targets(piece: &Piece, board: &Board) -> Vec<BoardLocation> {
    sliding_targets(piece.location(), &BISHOP_DIRECTIONS, board)
}
