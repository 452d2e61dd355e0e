//! Crate root module declarations for the Plum Rules chess engine.
//!
//! A turn-based rules engine: pieces that know their own geometry, a grid
//! board, and a `ChessGame` that validates, commits and undoes moves and
//! reports check, checkmate and stalemate. Notation helpers, perft and a
//! random self-play harness sit on top for tooling and tests.

pub mod chess_errors;

pub mod game_state {
    pub mod board;
    pub mod chess_game;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_mode;
    pub mod undo_state;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod move_descriptions;
    pub mod pawn_moves;
    pub mod piece;
    pub mod queen_moves;
    pub mod rook_moves;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_move_shared;
    pub mod perft;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod long_algebraic;
    pub mod pgn;
    pub mod render_game_state;
    pub mod self_play;
}

pub use chess_errors::ChessErrors;
pub use game_state::chess_game::ChessGame;
pub use game_state::chess_types::{GameStatusCode, PieceInfo, PieceType, Team};
pub use moves::move_descriptions::Move;
