//! King geometry: single steps in any direction plus castling.
//!
//! Castling needs both pieces unmoved, an empty corridor between them, and a
//! king that is not in check and does not cross or land on an attacked cell.
//! The rook must stand on the board edge on the side the king moves towards.

use crate::game_state::chess_types::{Board, BoardLocation, PieceType};
use crate::move_generation::legal_move_checks::is_cell_attacked;
use crate::move_generation::legal_move_shared::line_is_clear;
use crate::moves::piece::Piece;

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
];

#[inline]
pub fn is_king_step(d_col: i8, d_row: i8) -> bool {
    d_col.abs().max(d_row.abs()) == 1
}

/// Rook cells `(start, stop)` for a castling king heading to `target_col`.
/// Only checks geometry and piece identity, not safety.
pub fn castling_rook_cells(king: &Piece, target_col: i8, board: &Board) -> Option<(BoardLocation, BoardLocation)> {
    let d_col = target_col - king.col();
    if d_col.abs() != 2 {
        return None;
    }
    let direction = d_col.signum();
    let rook_col = if direction > 0 { board.width() - 1 } else { 0 };
    let rook = board.piece_at(rook_col, king.row())?;
    if rook.piece_type() != PieceType::Rook || rook.team() != king.team() || rook.has_moved() {
        return None;
    }
    Some((rook.location(), (king.col() + direction, king.row())))
}

pub fn valid_castling(king: &Piece, target_col: i8, target_row: i8, board: &Board) -> bool {
    if !board.rules().castling || king.has_moved() || target_row != king.row() {
        return false;
    }
    let Some((rook_from, _)) = castling_rook_cells(king, target_col, board) else {
        return false;
    };
    if !line_is_clear(king.location(), rook_from, board) {
        return false;
    }

    let enemy = king.team().opposite();
    let direction = (target_col - king.col()).signum();
    let mut col = king.col();
    loop {
        if is_cell_attacked(board, (col, king.row()), enemy) {
            return false;
        }
        if col == target_col {
            return true;
        }
        col += direction;
    }
}

/// Adjacent cells, then the two castling cells; on-board cells only.
pub fn king_targets(king: &Piece, board: &Board) -> Vec<BoardLocation> {
    let mut out = king_capture_targets(king, board);
    for d_col in [2, -2] {
        let cell = (king.col() + d_col, king.row());
        if board.valid_coordinates(cell.0, cell.1) {
            out.push(cell);
        }
    }
    out
}

pub fn king_capture_targets(king: &Piece, board: &Board) -> Vec<BoardLocation> {
    KING_OFFSETS
        .iter()
        .map(|&(d_col, d_row)| (king.col() + d_col, king.row() + d_row))
        .filter(|&(col, row)| board.valid_coordinates(col, row))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::Team;
    use crate::game_state::game_mode::VariantRules;

    fn castling_board(extra: &[Piece]) -> (Board, Piece) {
        let mut board = Board::new(8, 8, VariantRules::standard());
        let king = Piece::new(Team::Light, PieceType::King, 4, 0);
        board.place_piece(king);
        board.place_piece(Piece::new(Team::Light, PieceType::Rook, 0, 0));
        board.place_piece(Piece::new(Team::Light, PieceType::Rook, 7, 0));
        for piece in extra {
            board.place_piece(*piece);
        }
        (board, king)
    }

    #[test]
    fn castles_both_ways_on_an_open_back_row() {
        let (board, king) = castling_board(&[]);
        assert!(king.valid_move(6, 0, &board));
        assert!(king.valid_move(2, 0, &board));
        assert_eq!(castling_rook_cells(&king, 6, &board), Some(((7, 0), (5, 0))));
        assert_eq!(castling_rook_cells(&king, 2, &board), Some(((0, 0), (3, 0))));
    }

    #[test]
    fn castling_blocked_by_pieces_or_attacks() {
        let (board, king) =
            castling_board(&[Piece::new(Team::Light, PieceType::Knight, 1, 0)]);
        assert!(!king.valid_move(2, 0, &board));
        assert!(king.valid_move(6, 0, &board));

        let (board, king) = castling_board(&[Piece::new(Team::Dark, PieceType::Rook, 5, 7)]);
        assert!(!king.valid_move(6, 0, &board));
        assert!(king.valid_move(2, 0, &board));

        let (board, king) = castling_board(&[Piece::new(Team::Dark, PieceType::Rook, 4, 7)]);
        assert!(!king.valid_move(6, 0, &board));
        assert!(!king.valid_move(2, 0, &board));
    }

    #[test]
    fn moved_rook_cannot_castle() {
        let (mut board, king) = castling_board(&[]);
        board.move_piece_raw((7, 0), (7, 1));
        board.move_piece_raw((7, 1), (7, 0));
        assert!(!king.valid_move(6, 0, &board));
    }

    #[test]
    fn king_targets_stay_on_board() {
        let board = Board::new(8, 8, VariantRules::standard());
        let king = Piece::new(Team::Dark, PieceType::King, 0, 7);
        assert_eq!(king_capture_targets(&king, &board).len(), 3);
        assert_eq!(king_targets(&king, &board).len(), 4);
    }
}
