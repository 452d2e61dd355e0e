//! Move-path enumeration for validating the rules engine.
//!
//! Every node is reached through `ChessGame::play_move` and left through
//! `undo_last_move`, so the counts exercise the same validation, history
//! and status code paths a real game does.

use std::thread;

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_game::ChessGame;
use crate::moves::move_descriptions::{Move, MoveSpecialness};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: u64,
    pub captures: u64,
    pub en_passant: u64,
    pub castles: u64,
    pub promotions: u64,
    pub checks: u64,
    pub checkmates: u64,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

/// Leaf count only.
pub fn perft(game: &mut ChessGame, depth: u8) -> Result<u64, ChessErrors> {
    Ok(perft_counts(game, depth)?.nodes)
}

pub fn perft_counts(game: &mut ChessGame, depth: u8) -> Result<PerftCounts, ChessErrors> {
    let mut total = PerftCounts::default();
    if depth == 0 {
        total.nodes = 1;
        return Ok(total);
    }
    perft_recurse(game, depth, &mut total)?;
    Ok(total)
}

/// Leaf count under each root move, in generation order.
pub fn perft_divide(game: &mut ChessGame, depth: u8) -> Result<Vec<(Move, u64)>, ChessErrors> {
    if depth == 0 {
        return Ok(Vec::new());
    }
    let mut out = Vec::new();
    for mv in game.legal_moves() {
        game.play_move(&mv)?;
        let nodes = perft(game, depth - 1);
        game.undo_last_move()?;
        out.push((mv, nodes?));
    }
    Ok(out)
}

/// Splits the root moves across threads, each walking its own copy of the
/// game.
pub fn perft_multi_threaded(game: &ChessGame, depth: u8) -> Result<PerftCounts, ChessErrors> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let mut handles = Vec::new();
    for mv in game.legal_moves() {
        let mut local_game = game.clone();
        handles.push(thread::spawn(move || {
            let mut local = PerftCounts::default();
            local_game.play_move(&mv)?;
            count_leaf_or_descend(&mut local_game, depth, &mut local)?;
            Ok::<_, ChessErrors>(local)
        }));
    }

    let mut total = PerftCounts::default();
    for handle in handles {
        let local = handle
            .join()
            .map_err(|_| ChessErrors::WorkerPanicked)??;
        total.merge(local);
    }
    Ok(total)
}

fn perft_recurse(
    game: &mut ChessGame,
    depth: u8,
    counts: &mut PerftCounts,
) -> Result<(), ChessErrors> {
    for mv in game.legal_moves() {
        game.play_move(&mv)?;
        let walked = count_leaf_or_descend(game, depth, counts);
        game.undo_last_move()?;
        walked?;
    }
    Ok(())
}

/// Called right after a move was played with `depth` plies left including
/// that move.
fn count_leaf_or_descend(
    game: &mut ChessGame,
    depth: u8,
    counts: &mut PerftCounts,
) -> Result<(), ChessErrors> {
    if depth > 1 {
        return perft_recurse(game, depth - 1, counts);
    }

    counts.nodes += 1;
    if let Some(record) = game.last_move_record() {
        if record.captured_piece.is_some() {
            counts.captures += 1;
        }
        match record.specialness {
            MoveSpecialness::EnPassant(_) => counts.en_passant += 1,
            MoveSpecialness::Castling(..) => counts.castles += 1,
            MoveSpecialness::Promote(_) => counts.promotions += 1,
            MoveSpecialness::Regular => {}
        }
    }
    if game.is_in_check() {
        counts.checks += 1;
        if game.get_game_status().is_terminal() {
            counts.checkmates += 1;
        }
    }
    Ok(())
}
