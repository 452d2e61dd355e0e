use crate::game_state::chess_types::{Board, BoardLocation};
use crate::move_generation::legal_move_shared::sliding_targets;
use crate::moves::bishop_moves::{is_bishop_shape, BISHOP_DIRECTIONS};
use crate::moves::piece::Piece;
use crate::moves::rook_moves::{is_rook_shape, ROOK_DIRECTIONS};

pub const QUEEN_DIRECTIONS: [(i8, i8); 8] = [
    ROOK_DIRECTIONS[0],
    ROOK_DIRECTIONS[1],
    ROOK_DIRECTIONS[2],
    ROOK_DIRECTIONS[3],
    BISHOP_DIRECTIONS[0],
    BISHOP_DIRECTIONS[1],
    BISHOP_DIRECTIONS[2],
    BISHOP_DIRECTIONS[3],
];

#[inline]
pub fn is_queen_shape(d_col: i8, d_row: i8) -> bool {
    is_rook_shape(d_col, d_row) || is_bishop_shape(d_col, d_row)
}

pub fn queen_targets(piece: &Piece, board: &Board) -> Vec<BoardLocation> {
    sliding_targets(piece.location(), &QUEEN_DIRECTIONS, board)
}
