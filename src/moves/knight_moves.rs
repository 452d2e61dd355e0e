use crate::game_state::chess_types::{Board, BoardLocation};
use crate::moves::piece::Piece;

/// Jump offsets `(d_col, d_row)` in generation order.
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-1, -2),
    (1, -2),
    (-1, 2),
    (1, 2),
    (-2, -1),
    (2, -1),
    (-2, 1),
    (2, 1),
];

#[inline]
pub fn is_knight_shape(d_col: i8, d_row: i8) -> bool {
    let (a, b) = (d_col.abs(), d_row.abs());
    a != 0 && b != 0 && a + b == 3
}

/// Jump cells that land on the board, occupied or not.
pub fn knight_targets(piece: &Piece, board: &Board) -> Vec<BoardLocation> {
    KNIGHT_OFFSETS
        .iter()
        .map(|&(d_col, d_row)| (piece.col() + d_col, piece.row() + d_row))
        .filter(|&(col, row)| board.valid_coordinates(col, row))
        .collect()
}
