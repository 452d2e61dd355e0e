//! Property tests over seeded random games: history replay and undo.

use std::sync::Arc;

use plum_rules::game_state::game_mode::{GameMode, LosAlamosChess, StandardChess};
use plum_rules::ChessGame;
use proptest::prelude::*;

fn any_mode() -> impl Strategy<Value = Arc<dyn GameMode>> {
    prop_oneof![
        Just(Arc::new(StandardChess) as Arc<dyn GameMode>),
        Just(Arc::new(LosAlamosChess) as Arc<dyn GameMode>),
    ]
}

/// Plays moves picked by `choices` (taken modulo the legal move count)
/// until they run out or the game ends.
fn play_choices(mode: Arc<dyn GameMode>, choices: &[usize]) -> ChessGame {
    let mut game = ChessGame::new(mode).expect("built-in mode should start");
    for &choice in choices {
        let legal = game.legal_moves();
        if legal.is_empty() {
            break;
        }
        game.play_move(&legal[choice % legal.len()])
            .expect("generated move should be accepted");
    }
    game
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn replaying_history_reproduces_the_live_board(
        mode in any_mode(),
        choices in prop::collection::vec(any::<usize>(), 0..60),
    ) {
        let game = play_choices(Arc::clone(&mode), &choices);
        let replayed = ChessGame::replay(mode, &game.move_history())
            .expect("recorded history should replay");

        prop_assert!(replayed.same_position(&game));
        prop_assert_eq!(replayed.get_board(), game.get_board());
        prop_assert_eq!(replayed.get_game_status(), game.get_game_status());
    }

    #[test]
    fn every_legal_move_is_undone_exactly(
        mode in any_mode(),
        choices in prop::collection::vec(any::<usize>(), 0..40),
    ) {
        let mut game = play_choices(mode, &choices);
        let before = game.clone();

        for mv in before.legal_moves() {
            game.play_move(&mv).expect("generated move should be accepted");
            prop_assert_eq!(game.whos_turn(), before.whos_turn().opposite());
            let undone = game.undo_last_move().expect("a move was just played");

            prop_assert_eq!(undone, mv);
            prop_assert!(game.same_position(&before));
            prop_assert_eq!(game.get_game_status(), before.get_game_status());
            prop_assert_eq!(game.move_history(), before.move_history());
        }
    }

    #[test]
    fn generated_moves_never_leave_the_mover_in_check(
        mode in any_mode(),
        choices in prop::collection::vec(any::<usize>(), 0..40),
    ) {
        let mut game = play_choices(mode, &choices);
        let mover = game.whos_turn();

        for mv in game.legal_moves() {
            prop_assert!(!game.will_cause_invalid_state_from_check(
                mv.from_col, mv.from_row, mv.to_col, mv.to_row
            ));
            game.play_move(&mv).expect("generated move should be accepted");
            prop_assert!(!game.is_king_in_check(mover));
            game.undo_last_move().expect("a move was just played");
        }
    }
}
