//! Move values.
//!
//! A `Move` is both the request handed to the engine and the entry kept in
//! its history. It never changes after construction.

use crate::game_state::chess_types::{BoardLocation, PieceType, Team};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub team: Team,
    pub from_col: i8,
    pub from_row: i8,
    pub to_col: i8,
    pub to_row: i8,
    /// Only set on pawn moves that land on the last row.
    pub promotion: Option<PieceType>,
}

impl Move {
    pub const fn new(team: Team, from_col: i8, from_row: i8, to_col: i8, to_row: i8) -> Self {
        Self {
            team,
            from_col,
            from_row,
            to_col,
            to_row,
            promotion: None,
        }
    }

    pub const fn with_promotion(mut self, promotion: PieceType) -> Self {
        self.promotion = Some(promotion);
        self
    }

    #[inline]
    pub const fn from(&self) -> BoardLocation {
        (self.from_col, self.from_row)
    }

    #[inline]
    pub const fn to(&self) -> BoardLocation {
        (self.to_col, self.to_row)
    }
}

/// Side effects a committed move had beyond relocating the mover.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveSpecialness {
    Regular,
    /// Rook cells (start, stop).
    Castling(BoardLocation, BoardLocation),
    /// Cell of the pawn taken en passant.
    EnPassant(BoardLocation),
    Promote(PieceType),
}
