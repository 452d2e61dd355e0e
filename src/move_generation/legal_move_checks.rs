//! Check detection.
//!
//! `will_cause_check` is the heart of move validation: the candidate move is
//! played on a disposable clone of the board, the mover's king is located on
//! that clone (so a moving king is found at its new cell), and the move is
//! unsafe when any enemy piece's `can_take_these` contains the king. The live
//! board is never touched.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::apply_move;
use crate::moves::move_descriptions::Move;
use crate::moves::piece::Piece;

pub fn king_locations(board: &Board, team: Team) -> Vec<BoardLocation> {
    board.kings_of(team).map(Piece::location).collect()
}

/// Whether any of `team`'s kings is among the enemy's capturable pieces.
/// A board without a king for `team` is never in check.
pub fn is_king_in_check(board: &Board, team: Team) -> bool {
    let kings = king_locations(board, team);
    if kings.is_empty() {
        return false;
    }
    board.pieces_of(team.opposite()).any(|attacker| {
        attacker
            .can_take_these(board)
            .iter()
            .any(|target| kings.contains(&target.location()))
    })
}

/// Whether any piece of `attacker_team` threatens `cell`, occupied or not.
pub fn is_cell_attacked(board: &Board, cell: BoardLocation, attacker_team: Team) -> bool {
    board
        .pieces_of(attacker_team)
        .any(|attacker| attacker.attacks_cell(cell.0, cell.1, board))
}

pub fn attackers_of_cell(board: &Board, cell: BoardLocation, attacker_team: Team) -> Vec<Piece> {
    board
        .pieces_of(attacker_team)
        .filter(|attacker| attacker.attacks_cell(cell.0, cell.1, board))
        .copied()
        .collect()
}

/// Plays `mv` on a scratch copy and reports whether the mover's own king is
/// left attacked. A move with an empty source cannot be simulated and
/// reports `false`.
pub fn will_cause_check(board: &Board, mv: &Move) -> bool {
    let Some(mover) = board.piece_at(mv.from_col, mv.from_row) else {
        return false;
    };
    let team = mover.team();

    let mut scratch = board.clone();
    if apply_move(&mut scratch, mv).is_err() {
        return false;
    }
    is_king_in_check(&scratch, team)
}
