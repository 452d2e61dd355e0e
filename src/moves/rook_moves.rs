use crate::game_state::chess_types::{Board, BoardLocation};
use crate::move_generation::legal_move_shared::sliding_targets;
use crate::moves::piece::Piece;

pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

#[inline]
pub fn is_rook_shape(d_col: i8, d_row: i8) -> bool {
    (d_col == 0) != (d_row == 0)
}

pub fn rook_targets(piece: &Piece, board: &Board) -> Vec<BoardLocation> {
    sliding_targets(piece.location(), &ROOK_DIRECTIONS, board)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::{PieceType, Team};
    use crate::game_state::game_mode::VariantRules;

    #[test]
    fn rook_rays_from_d4_have_fourteen_cells() {
        let board = Board::new(8, 8, VariantRules::standard());
        let rook = Piece::new(Team::Light, PieceType::Rook, 3, 3);
        assert_eq!(rook_targets(&rook, &board).len(), 14);
    }

    #[test]
    fn rook_blocker_stops_ray() {
        let mut board = Board::new(8, 8, VariantRules::standard());
        let rook = Piece::new(Team::Light, PieceType::Rook, 0, 0);
        board.place_piece(rook);
        board.place_piece(Piece::new(Team::Dark, PieceType::Pawn, 0, 3));

        let targets = rook_targets(&rook, &board);
        assert!(targets.contains(&(0, 3)));
        assert!(!targets.contains(&(0, 4)));
        assert_eq!(targets.len(), 3 + 7);
    }
}
