//! The game engine.
//!
//! `ChessGame` owns the live board, whose turn it is, the undo history and
//! the current status. A move request is checked in full before the board
//! is touched: source occupied, right team, piece geometry, promotion
//! choice, then a simulated play on a scratch board to make sure the
//! mover's king is not left attacked. Only then is it committed, recorded,
//! and the turn and status updated.
//!
//! Nothing outside the engine gets a live reference to its pieces; callers
//! see `PieceInfo` snapshots, `Move` values and status codes.

use std::sync::Arc;

use tracing::{debug, info, instrument, trace};

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::*;
use crate::game_state::game_mode::{CustomLayout, GameMode, LosAlamosChess, StandardChess};
use crate::move_generation::legal_move_apply::{apply_move, undo_move};
use crate::move_generation::legal_move_checks::{
    attackers_of_cell, is_king_in_check, will_cause_check,
};
use crate::move_generation::legal_move_generator::{evaluate_status, legal_moves};
use crate::moves::move_descriptions::Move;
use crate::moves::pawn_moves::is_promotion_row;
use crate::utils::algebraic::cell_label_to_location;
use crate::utils::fen_generator::generate_layout;
use crate::utils::render_game_state::render_snapshot;

#[derive(Debug, Clone)]
pub struct ChessGame {
    mode: Arc<dyn GameMode>,
    initial_board: Board,
    board: Board,
    turn: Team,
    history: Vec<UndoState>,
    status: GameStatusCode,
}

impl ChessGame {
    pub fn new(mode: Arc<dyn GameMode>) -> Result<Self, ChessErrors> {
        let initial_board = mode.initial_board()?;
        let turn = mode.first_turn();
        let status = evaluate_status(&initial_board, turn);
        Ok(Self {
            mode,
            board: initial_board.clone(),
            initial_board,
            turn,
            history: Vec::new(),
            status,
        })
    }

    pub fn new_standard() -> Self {
        Self::new(Arc::new(StandardChess)).expect("standard layout should always parse")
    }

    pub fn new_los_alamos() -> Self {
        Self::new(Arc::new(LosAlamosChess)).expect("los alamos layout should always parse")
    }

    /// 8x8 set-up position under standard rules.
    pub fn from_layout(layout: &str, first_turn: Team) -> Result<Self, ChessErrors> {
        Self::new(Arc::new(CustomLayout::standard_board(layout, first_turn)?))
    }

    /// Plays `moves` from the mode's starting position.
    pub fn replay(mode: Arc<dyn GameMode>, moves: &[Move]) -> Result<Self, ChessErrors> {
        let mut game = Self::new(mode)?;
        for mv in moves {
            game.play_move(mv)?;
        }
        Ok(game)
    }

    /// Moves the piece on `(from_col, from_row)` and returns what it
    /// captured. Pawns reaching the last row become queens.
    #[instrument(level = "debug", skip(self))]
    pub fn move_piece(
        &mut self,
        from_col: i8,
        from_row: i8,
        target_col: i8,
        target_row: i8,
    ) -> Result<Option<PieceInfo>, ChessErrors> {
        self.commit((from_col, from_row), (target_col, target_row), None)
    }

    #[instrument(level = "debug", skip(self))]
    pub fn move_piece_with_promotion(
        &mut self,
        from_col: i8,
        from_row: i8,
        target_col: i8,
        target_row: i8,
        promotion: PieceType,
    ) -> Result<Option<PieceInfo>, ChessErrors> {
        self.commit(
            (from_col, from_row),
            (target_col, target_row),
            Some(promotion),
        )
    }

    pub fn play_move(&mut self, mv: &Move) -> Result<Option<PieceInfo>, ChessErrors> {
        self.commit(mv.from(), mv.to(), mv.promotion)
    }

    fn commit(
        &mut self,
        from: BoardLocation,
        to: BoardLocation,
        promotion: Option<PieceType>,
    ) -> Result<Option<PieceInfo>, ChessErrors> {
        let mv = self.validate(from, to, promotion).inspect_err(|err| {
            trace!(%err, "move rejected");
        })?;

        let undo = apply_move(&mut self.board, &mv)?;
        let captured = undo.captured_piece.map(|p| p.info());
        self.history.push(undo);
        self.turn = self.turn.opposite();
        self.status = evaluate_status(&self.board, self.turn);

        debug!(
            ?mv,
            ?captured,
            ply = self.history.len(),
            "move committed"
        );
        if self.status.is_terminal() {
            info!(status = %self.status, plies = self.history.len(), "game over");
        }
        Ok(captured)
    }

    /// Every check a move request must pass; builds the move to commit.
    fn validate(
        &self,
        from: BoardLocation,
        to: BoardLocation,
        promotion: Option<PieceType>,
    ) -> Result<Move, ChessErrors> {
        if self.status.is_terminal() {
            return Err(ChessErrors::GameOver(self.status));
        }
        for cell in [from, to] {
            if !self.board.valid_coordinates(cell.0, cell.1) {
                return Err(ChessErrors::OutOfBounds(cell));
            }
        }

        let piece = self
            .board
            .piece_at(from.0, from.1)
            .ok_or(ChessErrors::EmptySource(from))?;
        if piece.team() != self.turn {
            return Err(ChessErrors::WrongTeam {
                expected: self.turn,
                found: piece.team(),
            });
        }
        if !piece.valid_move(to.0, to.1, &self.board) {
            return Err(ChessErrors::IllegalMovement {
                piece_type: piece.piece_type(),
                from,
                to,
            });
        }

        let promotes =
            piece.piece_type() == PieceType::Pawn && is_promotion_row(piece.team(), to.1, &self.board);
        let mut mv = Move::new(piece.team(), from.0, from.1, to.0, to.1);
        match promotion {
            Some(choice) if !promotes || !self.board.rules().allows_promotion_to(choice) => {
                return Err(ChessErrors::InvalidPromotion(choice));
            }
            Some(choice) => mv = mv.with_promotion(choice),
            None if promotes => {
                mv = mv.with_promotion(crate::game_state::chess_rules::DEFAULT_PROMOTION)
            }
            None => {}
        }

        if will_cause_check(&self.board, &mv) {
            return Err(ChessErrors::LeavesKingInCheck { from, to });
        }
        Ok(mv)
    }

    /// Simulates the move on a copy of the board and reports whether it
    /// leaves the mover's king attacked. Off-board or empty sources report
    /// `false`; `move_piece` rejects those for other reasons.
    pub fn will_cause_invalid_state_from_check(
        &self,
        from_col: i8,
        from_row: i8,
        target_col: i8,
        target_row: i8,
    ) -> bool {
        if !self.board.valid_coordinates(target_col, target_row) {
            return false;
        }
        let Some(piece) = self.board.piece_at(from_col, from_row) else {
            return false;
        };
        let mv = Move::new(piece.team(), from_col, from_row, target_col, target_row);
        will_cause_check(&self.board, &mv)
    }

    #[inline]
    pub fn get_game_status(&self) -> GameStatusCode {
        self.status
    }

    #[inline]
    pub fn whos_turn(&self) -> Team {
        self.turn
    }

    /// `[col][row]` snapshot of the board.
    pub fn get_board(&self) -> BoardSnapshot {
        self.board.snapshot()
    }

    pub fn piece_at(&self, col: i8, row: i8) -> Option<PieceInfo> {
        self.board.piece_at(col, row).map(|p| p.info())
    }

    pub fn has_piece_on_cell(&self, cell: &str) -> Result<bool, ChessErrors> {
        let (col, row) = cell_label_to_location(cell, self.board.width(), self.board.height())?;
        Ok(self.board.piece_at(col, row).is_some())
    }

    pub fn get_game_mode_name(&self) -> &str {
        self.mode.name()
    }

    pub fn width(&self) -> i8 {
        self.board.width()
    }

    pub fn height(&self) -> i8 {
        self.board.height()
    }

    /// Takes back the last move, restoring any captured piece.
    #[instrument(level = "debug", skip(self))]
    pub fn undo_last_move(&mut self) -> Result<Move, ChessErrors> {
        let undo = self.history.pop().ok_or(ChessErrors::NothingToUndo)?;
        undo_move(&mut self.board, &undo);
        self.turn = undo.moved_piece.team();
        self.status = evaluate_status(&self.board, self.turn);
        debug!(mv = ?undo.mv, ply = self.history.len(), "move undone");
        Ok(undo.mv)
    }

    #[instrument(level = "debug", skip(self))]
    pub fn restart_game(&mut self) {
        self.board = self.initial_board.clone();
        self.history.clear();
        self.turn = self.mode.first_turn();
        self.status = evaluate_status(&self.board, self.turn);
        debug!(mode = self.mode.name(), "game restarted");
    }

    /// Legal moves for the side to move, in board order.
    pub fn legal_moves(&self) -> Vec<Move> {
        if self.status.is_terminal() {
            return Vec::new();
        }
        legal_moves(&self.board, self.turn)
    }

    /// Whether the side to move is in check.
    pub fn is_in_check(&self) -> bool {
        is_king_in_check(&self.board, self.turn)
    }

    pub fn is_king_in_check(&self, team: Team) -> bool {
        is_king_in_check(&self.board, team)
    }

    /// Pieces of `attacker` threatening `(col, row)`.
    pub fn attackers_of_cell(
        &self,
        col: i8,
        row: i8,
        attacker: Team,
    ) -> Result<Vec<PieceInfo>, ChessErrors> {
        if !self.board.valid_coordinates(col, row) {
            return Err(ChessErrors::OutOfBounds((col, row)));
        }
        Ok(attackers_of_cell(&self.board, (col, row), attacker)
            .iter()
            .map(|p| p.info())
            .collect())
    }

    pub fn move_history(&self) -> Vec<Move> {
        self.history.iter().map(|undo| undo.mv).collect()
    }

    pub fn last_move_record(&self) -> Option<&UndoState> {
        self.history.last()
    }

    /// Same board (including castling and en-passant state) and same side
    /// to move.
    pub fn same_position(&self, other: &ChessGame) -> bool {
        self.board == other.board && self.turn == other.turn
    }

    pub fn mode(&self) -> Arc<dyn GameMode> {
        Arc::clone(&self.mode)
    }

    /// Placement string of the live board, top row first.
    pub fn layout(&self) -> String {
        generate_layout(&self.board)
    }

    pub fn render(&self) -> String {
        render_snapshot(&self.get_board())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_game_starts_in_progress_with_light_to_move() {
        let game = ChessGame::new_standard();
        assert_eq!(game.get_game_status(), GameStatusCode::InProgress);
        assert_eq!(game.whos_turn(), Team::Light);
        assert_eq!(game.get_game_mode_name(), "Standard Chess");
        assert_eq!(game.legal_moves().len(), 20);
    }

    #[test]
    fn rejected_requests_leave_the_game_untouched() {
        let mut game = ChessGame::new_standard();
        let before = game.clone();

        assert_eq!(
            game.move_piece(3, 3, 3, 4),
            Err(ChessErrors::EmptySource((3, 3)))
        );
        assert_eq!(
            game.move_piece(4, 6, 4, 4),
            Err(ChessErrors::WrongTeam {
                expected: Team::Light,
                found: Team::Dark
            })
        );
        assert!(matches!(
            game.move_piece(0, 0, 0, 3),
            Err(ChessErrors::IllegalMovement { .. })
        ));
        assert_eq!(
            game.move_piece(0, 0, 0, 8),
            Err(ChessErrors::OutOfBounds((0, 8)))
        );
        assert!(game.same_position(&before));
        assert!(game.move_history().is_empty());
    }

    #[test]
    fn capture_is_returned_and_turn_flips() {
        let mut game = ChessGame::new_standard();
        game.move_piece(4, 1, 4, 3).expect("e2e4");
        game.move_piece(3, 6, 3, 4).expect("d7d5");
        let captured = game.move_piece(4, 3, 3, 4).expect("exd5");

        assert_eq!(
            captured,
            Some(PieceInfo {
                team: Team::Dark,
                piece_type: PieceType::Pawn
            })
        );
        assert_eq!(game.whos_turn(), Team::Dark);
        assert_eq!(game.move_history().len(), 3);
    }

    #[test]
    fn undo_on_empty_history_reports_nothing_to_undo() {
        let mut game = ChessGame::new_standard();
        assert_eq!(game.undo_last_move(), Err(ChessErrors::NothingToUndo));
    }

    #[test]
    fn promotion_choice_is_validated() {
        let mut game = ChessGame::from_layout("7k/P7/8/8/8/8/8/K7", Team::Light)
            .expect("layout should parse");
        assert_eq!(
            game.move_piece_with_promotion(0, 0, 1, 0, PieceType::Queen),
            Err(ChessErrors::InvalidPromotion(PieceType::Queen))
        );
        assert_eq!(
            game.move_piece_with_promotion(0, 6, 0, 7, PieceType::King),
            Err(ChessErrors::InvalidPromotion(PieceType::King))
        );
        game.move_piece_with_promotion(0, 6, 0, 7, PieceType::Rook)
            .expect("promotion to rook should be accepted");
        assert_eq!(
            game.piece_at(0, 7).map(|p| p.piece_type),
            Some(PieceType::Rook)
        );
    }

    #[test]
    fn cell_labels_are_parsed_against_the_board_size() {
        let game = ChessGame::new_los_alamos();
        assert_eq!(game.has_piece_on_cell("a1"), Ok(true));
        assert_eq!(game.has_piece_on_cell("c3"), Ok(false));
        assert!(game.has_piece_on_cell("g1").is_err());
        assert!(game.has_piece_on_cell("a7").is_err());
        assert!(game.has_piece_on_cell("").is_err());
    }
}
