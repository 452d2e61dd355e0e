//! Raw move execution and its inverse.
//!
//! `apply_move` performs a move and all of its side effects (capture, en
//! passant removal, castling rook hop, promotion, en-passant target update)
//! without judging legality, and returns the record `undo_move` needs to
//! restore the board exactly. The engine validates before calling it on the
//! live board; check detection calls it on scratch copies.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_rules::DEFAULT_PROMOTION;
use crate::game_state::chess_types::*;
use crate::moves::king_moves::castling_rook_cells;
use crate::moves::move_descriptions::{Move, MoveSpecialness};
use crate::moves::pawn_moves::{en_passant_victim, is_promotion_row};

/// Works out which special rule, if any, `mv` triggers on `board`.
pub fn classify_move(board: &Board, mv: &Move) -> Result<MoveSpecialness, ChessErrors> {
    let mover = board
        .piece_at(mv.from_col, mv.from_row)
        .ok_or(ChessErrors::EmptySource(mv.from()))?;

    let specialness = match mover.piece_type() {
        PieceType::King => match castling_rook_cells(mover, mv.to_col, board) {
            Some((rook_from, rook_to)) if mv.to_row == mover.row() => {
                MoveSpecialness::Castling(rook_from, rook_to)
            }
            _ => MoveSpecialness::Regular,
        },
        PieceType::Pawn => {
            if let Some(victim) = en_passant_victim(mover, mv.to_col, mv.to_row, board) {
                MoveSpecialness::EnPassant(victim)
            } else if is_promotion_row(mover.team(), mv.to_row, board) {
                MoveSpecialness::Promote(mv.promotion.unwrap_or(DEFAULT_PROMOTION))
            } else {
                MoveSpecialness::Regular
            }
        }
        _ => MoveSpecialness::Regular,
    };
    Ok(specialness)
}

pub fn apply_move(board: &mut Board, mv: &Move) -> Result<UndoState, ChessErrors> {
    if !board.valid_coordinates(mv.to_col, mv.to_row) {
        return Err(ChessErrors::OutOfBounds(mv.to()));
    }
    let specialness = classify_move(board, mv)?;
    let moved_piece = board
        .piece_at(mv.from_col, mv.from_row)
        .copied()
        .ok_or(ChessErrors::EmptySource(mv.from()))?;
    let prev_en_passant_target = board.en_passant_target();

    let mut castled_rook = None;
    let captured_piece = match specialness {
        MoveSpecialness::EnPassant(victim) => {
            let taken = board.remove_piece(victim.0, victim.1);
            board.move_piece_raw(mv.from(), mv.to());
            taken
        }
        MoveSpecialness::Castling(rook_from, rook_to) => {
            let taken = board.move_piece_raw(mv.from(), mv.to());
            castled_rook = board.piece_at(rook_from.0, rook_from.1).copied();
            board.move_piece_raw(rook_from, rook_to);
            taken
        }
        MoveSpecialness::Promote(piece_type) => {
            let taken = board.move_piece_raw(mv.from(), mv.to());
            if let Some(mut pawn) = board.remove_piece(mv.to_col, mv.to_row) {
                pawn.promote(piece_type);
                board.place_piece(pawn);
            }
            taken
        }
        MoveSpecialness::Regular => board.move_piece_raw(mv.from(), mv.to()),
    };

    let double_step = moved_piece.piece_type() == PieceType::Pawn
        && (mv.to_row - mv.from_row).abs() == 2
        && mv.to_col == mv.from_col;
    board.set_en_passant_target(if double_step && board.rules().en_passant {
        Some((mv.from_col, mv.from_row + moved_piece.team().forward()))
    } else {
        None
    });

    Ok(UndoState {
        mv: *mv,
        moved_piece,
        captured_piece,
        specialness,
        castled_rook,
        prev_en_passant_target,
    })
}

/// Exact inverse of the `apply_move` call that produced `undo`.
pub fn undo_move(board: &mut Board, undo: &UndoState) {
    board.remove_piece(undo.mv.to_col, undo.mv.to_row);
    board.place_piece(undo.moved_piece);

    if let MoveSpecialness::Castling(_, rook_to) = undo.specialness {
        board.remove_piece(rook_to.0, rook_to.1);
        if let Some(rook) = undo.castled_rook {
            board.place_piece(rook);
        }
    }

    if let Some(captured) = undo.captured_piece {
        board.place_piece(captured);
    }

    board.set_en_passant_target(undo.prev_en_passant_target);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::game_mode::VariantRules;
    use crate::moves::piece::Piece;

    fn board_with(pieces: &[Piece]) -> Board {
        let mut board = Board::new(8, 8, VariantRules::standard());
        for piece in pieces {
            board.place_piece(*piece);
        }
        board
    }

    #[test]
    fn capture_then_undo_restores_the_victim() {
        let mut board = board_with(&[
            Piece::new(Team::Light, PieceType::Rook, 0, 0),
            Piece::new(Team::Dark, PieceType::Knight, 0, 6),
        ]);
        let before = board.clone();
        let undo = apply_move(&mut board, &Move::new(Team::Light, 0, 0, 0, 6))
            .expect("rook move should apply");

        assert_eq!(
            undo.captured_piece.map(|p| p.piece_type()),
            Some(PieceType::Knight)
        );
        assert_eq!(board.pieces().count(), 1);

        undo_move(&mut board, &undo);
        assert_eq!(board, before);
    }

    #[test]
    fn double_step_marks_en_passant_and_capture_removes_pawn() {
        let mut board = board_with(&[
            Piece::new(Team::Light, PieceType::Pawn, 4, 4),
            Piece::new(Team::Dark, PieceType::Pawn, 3, 6),
        ]);
        let start = board.clone();
        let push = apply_move(&mut board, &Move::new(Team::Dark, 3, 6, 3, 4))
            .expect("double step should apply");
        assert_eq!(board.en_passant_target(), Some((3, 5)));

        let after_push = board.clone();
        let take = apply_move(&mut board, &Move::new(Team::Light, 4, 4, 3, 5))
            .expect("en passant should apply");
        assert_eq!(take.specialness, MoveSpecialness::EnPassant((3, 4)));
        assert!(board.is_empty(3, 4));
        assert_eq!(board.en_passant_target(), None);

        undo_move(&mut board, &take);
        assert_eq!(board, after_push);
        undo_move(&mut board, &push);
        assert_eq!(board, start);
    }

    #[test]
    fn castling_moves_the_rook_and_undoes_cleanly() {
        let mut board = board_with(&[
            Piece::new(Team::Dark, PieceType::King, 4, 7),
            Piece::new(Team::Dark, PieceType::Rook, 7, 7),
        ]);
        let before = board.clone();
        let undo = apply_move(&mut board, &Move::new(Team::Dark, 4, 7, 6, 7))
            .expect("castling should apply");

        assert_eq!(undo.specialness, MoveSpecialness::Castling((7, 7), (5, 7)));
        assert_eq!(
            board.piece_at(5, 7).map(|p| p.piece_type()),
            Some(PieceType::Rook)
        );
        undo_move(&mut board, &undo);
        assert_eq!(board, before);
    }

    #[test]
    fn promotion_swaps_piece_type() {
        let mut board = board_with(&[Piece::new(Team::Light, PieceType::Pawn, 2, 6)]);
        let before = board.clone();
        let undo = apply_move(
            &mut board,
            &Move::new(Team::Light, 2, 6, 2, 7).with_promotion(PieceType::Knight),
        )
        .expect("promotion should apply");

        assert_eq!(
            board.piece_at(2, 7).map(|p| p.piece_type()),
            Some(PieceType::Knight)
        );
        undo_move(&mut board, &undo);
        assert_eq!(board, before);
    }

    #[test]
    fn empty_source_is_an_error() {
        let mut board = board_with(&[]);
        let err = apply_move(&mut board, &Move::new(Team::Light, 1, 1, 1, 2)).unwrap_err();
        assert_eq!(err, ChessErrors::EmptySource((1, 1)));
    }
}
