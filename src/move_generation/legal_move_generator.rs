//! Full legal move generation pipeline.
//!
//! Collects every piece's `generate_all_possible_moves` for one team, then
//! drops the moves that leave that team's king attacked. Game status is
//! derived from the result.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::{is_king_in_check, will_cause_check};
use crate::moves::move_descriptions::Move;

/// Geometrically valid moves, before check filtering, in board order.
pub fn pseudo_legal_moves(board: &Board, team: Team) -> Vec<Move> {
    board
        .pieces_of(team)
        .flat_map(|piece| piece.generate_all_possible_moves(board))
        .collect()
}

pub fn legal_moves(board: &Board, team: Team) -> Vec<Move> {
    pseudo_legal_moves(board, team)
        .into_iter()
        .filter(|mv| !will_cause_check(board, mv))
        .collect()
}

/// Stops at the first safe move.
pub fn has_any_legal_move(board: &Board, team: Team) -> bool {
    board.pieces_of(team).any(|piece| {
        piece
            .generate_all_possible_moves(board)
            .iter()
            .any(|mv| !will_cause_check(board, mv))
    })
}

/// Status with `to_move` on move: checkmate hands the win to the opponent,
/// no moves without check is stalemate.
pub fn evaluate_status(board: &Board, to_move: Team) -> GameStatusCode {
    if has_any_legal_move(board, to_move) {
        GameStatusCode::InProgress
    } else if is_king_in_check(board, to_move) {
        GameStatusCode::won_by(to_move.opposite())
    } else {
        GameStatusCode::Stalemate
    }
}
