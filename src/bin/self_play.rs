//! Random self-play series runner.
//!
//! Run with:
//! `cargo run --release --bin self_play`
//! `cargo run --release --bin self_play -- --los-alamos --verbose`

use std::sync::Arc;

use plum_rules::game_state::game_mode::{GameMode, LosAlamosChess, StandardChess};
use plum_rules::utils::self_play::{play_self_play_series, SelfPlayConfig};
use plum_rules::ChessErrors;

fn main() -> Result<(), ChessErrors> {
    let verbose = std::env::args().any(|a| a == "--verbose" || a == "-v");
    let mode: Arc<dyn GameMode> = if std::env::args().any(|a| a == "--los-alamos") {
        Arc::new(LosAlamosChess)
    } else {
        Arc::new(StandardChess)
    };

    let stats = play_self_play_series(
        Arc::clone(&mode),
        &SelfPlayConfig {
            games: 20,
            base_seed: 1234,
            verbose,
            ..SelfPlayConfig::default()
        },
    )?;

    println!("mode: {}", mode.name());
    println!("{}", stats.report());
    println!("outcomes: {:?}", stats.outcomes);
    Ok(())
}
