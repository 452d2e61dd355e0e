//! Board occupants and their movement contract.
//!
//! One `Piece` value type covers every variant; behaviour is selected by
//! `PieceType` and delegated to the per-variant `*_moves` modules. The
//! contract every variant honours:
//!
//! - `valid_move`: target on the board, not the piece's own cell, not held by
//!   a friendly piece, matching the variant's shape, and (for everything but
//!   the knight) with a clear path.
//! - `can_take_these`: enemy pieces capturable next move.
//! - `generate_all_possible_moves`: every destination passing `valid_move`,
//!   in a fixed per-variant order.
//!
//! Whether a move exposes the mover's king is decided one layer up, in
//! `legal_move_checks`.

use crate::game_state::chess_rules::DEFAULT_PROMOTION;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::line_is_clear;
use crate::moves::bishop_moves::{bishop_targets, is_bishop_shape};
use crate::moves::king_moves::{is_king_step, king_capture_targets, king_targets, valid_castling};
use crate::moves::knight_moves::{is_knight_shape, knight_targets};
use crate::moves::move_descriptions::Move;
use crate::moves::pawn_moves::{
    is_pawn_attack, is_promotion_row, pawn_capture_targets, pawn_targets, valid_pawn_move,
};
use crate::moves::queen_moves::{is_queen_shape, queen_targets};
use crate::moves::rook_moves::{is_rook_shape, rook_targets};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    team: Team,
    piece_type: PieceType,
    col: i8,
    row: i8,
    has_moved: bool,
}

impl Piece {
    pub const fn new(team: Team, piece_type: PieceType, col: i8, row: i8) -> Self {
        Self {
            team,
            piece_type,
            col,
            row,
            has_moved: false,
        }
    }

    #[inline]
    pub fn team(&self) -> Team {
        self.team
    }

    #[inline]
    pub fn piece_type(&self) -> PieceType {
        self.piece_type
    }

    #[inline]
    pub fn col(&self) -> i8 {
        self.col
    }

    #[inline]
    pub fn row(&self) -> i8 {
        self.row
    }

    #[inline]
    pub fn location(&self) -> BoardLocation {
        (self.col, self.row)
    }

    #[inline]
    pub fn has_moved(&self) -> bool {
        self.has_moved
    }

    #[inline]
    pub fn info(&self) -> PieceInfo {
        PieceInfo {
            team: self.team,
            piece_type: self.piece_type,
        }
    }

    /// Independent duplicate with identical team, type and position.
    #[inline]
    pub fn copy(&self) -> Piece {
        *self
    }

    #[inline]
    pub fn is_enemy_of(&self, other: &Piece) -> bool {
        self.team != other.team
    }

    pub(crate) fn relocate(&mut self, col: i8, row: i8) {
        self.col = col;
        self.row = row;
        self.has_moved = true;
    }

    pub(crate) fn promote(&mut self, piece_type: PieceType) {
        self.piece_type = piece_type;
    }

    /// Checks shared by every variant: on the board, actually moving, and
    /// not landing on a friendly piece.
    fn base_valid_move(&self, target_col: i8, target_row: i8, board: &Board) -> bool {
        if !board.valid_coordinates(target_col, target_row) {
            return false;
        }
        if target_col == self.col && target_row == self.row {
            return false;
        }
        !matches!(board.team_at(target_col, target_row), Some(team) if team == self.team)
    }

    pub fn valid_move(&self, target_col: i8, target_row: i8, board: &Board) -> bool {
        if !self.base_valid_move(target_col, target_row, board) {
            return false;
        }
        let d_col = target_col - self.col;
        let d_row = target_row - self.row;
        match self.piece_type {
            PieceType::Pawn => valid_pawn_move(self, target_col, target_row, board),
            PieceType::Knight => is_knight_shape(d_col, d_row),
            PieceType::Bishop => {
                is_bishop_shape(d_col, d_row) && self.path_free(target_col, target_row, board)
            }
            PieceType::Rook => {
                is_rook_shape(d_col, d_row) && self.path_free(target_col, target_row, board)
            }
            PieceType::Queen => {
                is_queen_shape(d_col, d_row) && self.path_free(target_col, target_row, board)
            }
            PieceType::King => {
                is_king_step(d_col, d_row) || valid_castling(self, target_col, target_row, board)
            }
        }
    }

    /// True when every cell strictly between the piece and the target is
    /// empty. Knights jump, so their path is always free.
    pub fn path_free(&self, target_col: i8, target_row: i8, board: &Board) -> bool {
        match self.piece_type {
            PieceType::Knight => true,
            _ => line_is_clear(self.location(), (target_col, target_row), board),
        }
    }

    /// Whether this piece threatens the cell, whatever occupies it. Pawns
    /// threaten diagonally only and kings never threaten by castling.
    pub fn attacks_cell(&self, target_col: i8, target_row: i8, board: &Board) -> bool {
        if !board.valid_coordinates(target_col, target_row) {
            return false;
        }
        let d_col = target_col - self.col;
        let d_row = target_row - self.row;
        if d_col == 0 && d_row == 0 {
            return false;
        }
        match self.piece_type {
            PieceType::Pawn => is_pawn_attack(self.team, d_col, d_row),
            PieceType::Knight => is_knight_shape(d_col, d_row),
            PieceType::King => is_king_step(d_col, d_row),
            PieceType::Bishop => {
                is_bishop_shape(d_col, d_row) && self.path_free(target_col, target_row, board)
            }
            PieceType::Rook => {
                is_rook_shape(d_col, d_row) && self.path_free(target_col, target_row, board)
            }
            PieceType::Queen => {
                is_queen_shape(d_col, d_row) && self.path_free(target_col, target_row, board)
            }
        }
    }

    /// Enemy pieces this piece could capture on its next move.
    pub fn can_take_these(&self, board: &Board) -> Vec<Piece> {
        let candidates = match self.piece_type {
            PieceType::Pawn => pawn_capture_targets(self, board),
            PieceType::Knight => knight_targets(self, board),
            PieceType::King => king_capture_targets(self, board),
            PieceType::Bishop => bishop_targets(self, board),
            PieceType::Rook => rook_targets(self, board),
            PieceType::Queen => queen_targets(self, board),
        };

        candidates
            .into_iter()
            .filter(|&(col, row)| self.valid_move(col, row, board))
            .filter_map(|(col, row)| board.piece_at(col, row).copied())
            .filter(|target| self.is_enemy_of(target))
            .collect()
    }

    /// Every destination passing `valid_move`. A promoting pawn move is
    /// listed once per promotion choice, default choice first.
    pub fn generate_all_possible_moves(&self, board: &Board) -> Vec<Move> {
        let candidates = match self.piece_type {
            PieceType::Pawn => pawn_targets(self, board),
            PieceType::Knight => knight_targets(self, board),
            PieceType::King => king_targets(self, board),
            PieceType::Bishop => bishop_targets(self, board),
            PieceType::Rook => rook_targets(self, board),
            PieceType::Queen => queen_targets(self, board),
        };

        let mut out = Vec::with_capacity(candidates.len());
        for (col, row) in candidates {
            if !self.valid_move(col, row, board) {
                continue;
            }
            let mv = Move::new(self.team, self.col, self.row, col, row);
            if self.piece_type == PieceType::Pawn && is_promotion_row(self.team, row, board) {
                let choices = board.rules().promotion_choices;
                if choices.contains(&DEFAULT_PROMOTION) {
                    out.push(mv.with_promotion(DEFAULT_PROMOTION));
                }
                for &choice in choices.iter().filter(|&&c| c != DEFAULT_PROMOTION) {
                    out.push(mv.with_promotion(choice));
                }
            } else {
                out.push(mv);
            }
        }
        out
    }
}
