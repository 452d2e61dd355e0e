//! Seeded random self-play for exercising the engine end to end.
//!
//! Each game picks uniformly among the legal moves for the side to move
//! until the game ends or the ply cap is hit. Games are reproducible from
//! their seed.

use std::sync::Arc;

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_game::ChessGame;
use crate::game_state::chess_types::GameStatusCode;
use crate::game_state::game_mode::GameMode;
use crate::utils::long_algebraic::move_to_long_algebraic;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelfPlayOutcome {
    LightWon,
    DarkWon,
    Stalemate,
    MaxPlies,
}

impl From<GameStatusCode> for SelfPlayOutcome {
    fn from(status: GameStatusCode) -> Self {
        match status {
            GameStatusCode::LightWon => SelfPlayOutcome::LightWon,
            GameStatusCode::DarkWon => SelfPlayOutcome::DarkWon,
            GameStatusCode::Stalemate => SelfPlayOutcome::Stalemate,
            GameStatusCode::InProgress => SelfPlayOutcome::MaxPlies,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SelfPlayConfig {
    pub games: u16,
    pub max_plies: u16,
    pub base_seed: u64,
    pub verbose: bool,
}

impl Default for SelfPlayConfig {
    fn default() -> Self {
        Self {
            games: 9,
            max_plies: 300,
            base_seed: 0,
            verbose: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SelfPlayResult {
    pub seed: u64,
    pub outcome: SelfPlayOutcome,
    pub plies: usize,
    pub moves_lan: Vec<String>,
    pub final_game: ChessGame,
}

#[derive(Debug, Clone, Default)]
pub struct SelfPlayStats {
    pub games: u16,
    pub light_wins: u16,
    pub dark_wins: u16,
    pub stalemates: u16,
    pub unfinished: u16,
    pub total_plies: usize,
    pub outcomes: Vec<SelfPlayOutcome>,
}

impl SelfPlayStats {
    pub fn report(&self) -> String {
        let avg_plies = if self.games == 0 {
            0.0
        } else {
            self.total_plies as f64 / f64::from(self.games)
        };
        format!(
            "games={} light_wins={} dark_wins={} stalemates={} unfinished={} avg_plies={:.1}",
            self.games,
            self.light_wins,
            self.dark_wins,
            self.stalemates,
            self.unfinished,
            avg_plies
        )
    }
}

/// Play one seeded random game under `mode`.
pub fn play_random_game(
    mode: Arc<dyn GameMode>,
    seed: u64,
    max_plies: u16,
) -> Result<SelfPlayResult, ChessErrors> {
    let mut game = ChessGame::new(mode)?;
    let mut rng = StdRng::seed_from_u64(seed);
    let mut moves_lan = Vec::<String>::new();

    for _ in 0..max_plies {
        let legal = game.legal_moves();
        if legal.is_empty() {
            break;
        }
        let chosen = legal[rng.random_range(0..legal.len())];
        moves_lan.push(move_to_long_algebraic(&chosen)?);
        game.play_move(&chosen)?;
    }

    Ok(SelfPlayResult {
        seed,
        outcome: game.get_game_status().into(),
        plies: moves_lan.len(),
        moves_lan,
        final_game: game,
    })
}

/// Play `config.games` games with consecutive seeds starting at
/// `config.base_seed` and tally the outcomes.
pub fn play_self_play_series(
    mode: Arc<dyn GameMode>,
    config: &SelfPlayConfig,
) -> Result<SelfPlayStats, ChessErrors> {
    let mut stats = SelfPlayStats {
        games: config.games,
        ..SelfPlayStats::default()
    };

    for i in 0..config.games {
        let seed = config.base_seed.wrapping_add(u64::from(i));
        let result = play_random_game(Arc::clone(&mode), seed, config.max_plies)?;

        match result.outcome {
            SelfPlayOutcome::LightWon => stats.light_wins += 1,
            SelfPlayOutcome::DarkWon => stats.dark_wins += 1,
            SelfPlayOutcome::Stalemate => stats.stalemates += 1,
            SelfPlayOutcome::MaxPlies => stats.unfinished += 1,
        }
        stats.total_plies += result.plies;
        stats.outcomes.push(result.outcome);

        if config.verbose {
            println!(
                "[self-play] game {}/{} seed={} result={:?} plies={}",
                i + 1,
                config.games,
                seed,
                result.outcome,
                result.plies
            );
        }
    }

    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::game_mode::{LosAlamosChess, StandardChess};

    #[test]
    fn same_seed_plays_the_same_game() {
        let first = play_random_game(Arc::new(LosAlamosChess), 7, 80).expect("game should run");
        let second = play_random_game(Arc::new(LosAlamosChess), 7, 80).expect("game should run");

        assert_eq!(first.moves_lan, second.moves_lan);
        assert_eq!(first.outcome, second.outcome);
        assert!(first.final_game.same_position(&second.final_game));
    }

    #[test]
    fn ply_cap_is_respected_and_outcome_matches_status() {
        let result = play_random_game(Arc::new(StandardChess), 3, 40).expect("game should run");
        assert!(result.plies <= 40);
        assert_eq!(result.plies, result.final_game.move_history().len());
        assert_eq!(
            result.outcome,
            SelfPlayOutcome::from(result.final_game.get_game_status())
        );
        if result.outcome == SelfPlayOutcome::MaxPlies {
            assert_eq!(result.plies, 40);
        }
    }

    #[test]
    fn series_tallies_every_game() {
        let config = SelfPlayConfig {
            games: 4,
            max_plies: 60,
            base_seed: 11,
            verbose: false,
        };
        let stats =
            play_self_play_series(Arc::new(LosAlamosChess), &config).expect("series should run");

        assert_eq!(stats.outcomes.len(), 4);
        assert_eq!(
            stats.light_wins + stats.dark_wins + stats.stalemates + stats.unfinished,
            4
        );
        assert!(stats.report().starts_with("games=4 "));
    }
}
