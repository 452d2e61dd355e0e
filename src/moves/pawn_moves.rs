//! Pawn geometry: single and double pushes, diagonal captures, en passant
//! and the promotion row. Light pawns advance towards higher rows.

use crate::game_state::chess_types::{Board, BoardLocation, PieceType, Team};
use crate::moves::piece::Piece;

#[inline]
pub fn is_start_row(team: Team, row: i8, board: &Board) -> bool {
    match team {
        Team::Light => row == 1,
        Team::Dark => row == board.height() - 2,
    }
}

#[inline]
pub fn is_promotion_row(team: Team, row: i8, board: &Board) -> bool {
    match team {
        Team::Light => row == board.height() - 1,
        Team::Dark => row == 0,
    }
}

#[inline]
pub fn is_pawn_attack(team: Team, d_col: i8, d_row: i8) -> bool {
    d_col.abs() == 1 && d_row == team.forward()
}

/// Cell of the enemy pawn this move would take en passant, if it is one.
pub fn en_passant_victim(
    pawn: &Piece,
    target_col: i8,
    target_row: i8,
    board: &Board,
) -> Option<BoardLocation> {
    if !board.rules().en_passant || board.en_passant_target() != Some((target_col, target_row)) {
        return None;
    }
    if !is_pawn_attack(pawn.team(), target_col - pawn.col(), target_row - pawn.row()) {
        return None;
    }
    if !board.is_empty(target_col, target_row) {
        return None;
    }
    let victim = board.piece_at(target_col, pawn.row())?;
    if victim.piece_type() == PieceType::Pawn && victim.is_enemy_of(pawn) {
        Some(victim.location())
    } else {
        None
    }
}

/// Pawn-specific part of `valid_move`; base checks have already passed.
pub fn valid_pawn_move(pawn: &Piece, target_col: i8, target_row: i8, board: &Board) -> bool {
    let forward = pawn.team().forward();
    let d_col = target_col - pawn.col();
    let d_row = target_row - pawn.row();

    if d_col == 0 {
        if !board.is_empty(target_col, target_row) {
            return false;
        }
        if d_row == forward {
            return true;
        }
        return d_row == 2 * forward
            && board.rules().pawn_double_step
            && is_start_row(pawn.team(), pawn.row(), board)
            && pawn.path_free(target_col, target_row, board);
    }

    if !is_pawn_attack(pawn.team(), d_col, d_row) {
        return false;
    }
    match board.piece_at(target_col, target_row) {
        Some(target) => target.is_enemy_of(pawn),
        None => en_passant_victim(pawn, target_col, target_row, board).is_some(),
    }
}

/// Push, double push, then the two diagonals; on-board cells only.
pub fn pawn_targets(pawn: &Piece, board: &Board) -> Vec<BoardLocation> {
    let forward = pawn.team().forward();
    let (col, row) = pawn.location();
    [
        (col, row + forward),
        (col, row + 2 * forward),
        (col - 1, row + forward),
        (col + 1, row + forward),
    ]
    .into_iter()
    .filter(|&(c, r)| board.valid_coordinates(c, r))
    .collect()
}

pub fn pawn_capture_targets(pawn: &Piece, board: &Board) -> Vec<BoardLocation> {
    let forward = pawn.team().forward();
    let (col, row) = pawn.location();
    [(col - 1, row + forward), (col + 1, row + forward)]
        .into_iter()
        .filter(|&(c, r)| board.valid_coordinates(c, r))
        .collect()
}
