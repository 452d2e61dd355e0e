//! Mutable grid of optional pieces.
//!
//! The board only guarantees structure: one piece per cell, and every piece
//! reports the cell it sits in. Legality lives in the piece geometry and the
//! engine. Cells are plain `Copy` values, so `clone()` is a full deep copy
//! that shares nothing with the original; the engine relies on this to
//! simulate moves on scratch boards.

use crate::game_state::chess_rules::MAX_BOARD_DIMENSION;
use crate::game_state::chess_types::*;
use crate::game_state::game_mode::VariantRules;
use crate::moves::piece::Piece;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: i8,
    height: i8,
    // Column-major: index = col * height + row.
    cells: Vec<Option<Piece>>,
    rules: VariantRules,
    en_passant_target: Option<BoardLocation>,
}

impl Board {
    /// Dimensions are clamped to `1..=MAX_BOARD_DIMENSION`.
    pub fn new(width: i8, height: i8, rules: VariantRules) -> Self {
        let width = width.clamp(1, MAX_BOARD_DIMENSION);
        let height = height.clamp(1, MAX_BOARD_DIMENSION);
        Self {
            width,
            height,
            cells: vec![None; width as usize * height as usize],
            rules,
            en_passant_target: None,
        }
    }

    #[inline]
    pub fn width(&self) -> i8 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i8 {
        self.height
    }

    #[inline]
    pub fn rules(&self) -> &VariantRules {
        &self.rules
    }

    #[inline]
    pub fn valid_coordinates(&self, col: i8, row: i8) -> bool {
        (0..self.width).contains(&col) && (0..self.height).contains(&row)
    }

    #[inline]
    fn index(&self, col: i8, row: i8) -> Option<usize> {
        if self.valid_coordinates(col, row) {
            Some(col as usize * self.height as usize + row as usize)
        } else {
            None
        }
    }

    /// `None` for empty cells and for coordinates off the board.
    #[inline]
    pub fn piece_at(&self, col: i8, row: i8) -> Option<&Piece> {
        self.index(col, row).and_then(|i| self.cells[i].as_ref())
    }

    #[inline]
    pub fn is_empty(&self, col: i8, row: i8) -> bool {
        self.piece_at(col, row).is_none()
    }

    /// Team of the occupant, if any.
    #[inline]
    pub fn team_at(&self, col: i8, row: i8) -> Option<Team> {
        self.piece_at(col, row).map(Piece::team)
    }

    /// Puts `piece` on the cell it reports, returning whatever was there.
    /// Pieces reporting an off-board cell are dropped and `None` is returned.
    pub fn place_piece(&mut self, piece: Piece) -> Option<Piece> {
        let i = self.index(piece.col(), piece.row())?;
        self.cells[i].replace(piece)
    }

    pub fn remove_piece(&mut self, col: i8, row: i8) -> Option<Piece> {
        let i = self.index(col, row)?;
        self.cells[i].take()
    }

    /// Moves whatever sits on `from` onto `to` with no rule checks, keeping
    /// the piece's position in sync and marking it as moved. Returns the
    /// previous occupant of `to`. An empty `from` leaves the board as it was.
    pub fn move_piece_raw(&mut self, from: BoardLocation, to: BoardLocation) -> Option<Piece> {
        if !self.valid_coordinates(to.0, to.1) {
            return None;
        }
        let mut piece = self.remove_piece(from.0, from.1)?;
        piece.relocate(to.0, to.1);
        self.place_piece(piece)
    }

    #[inline]
    pub fn en_passant_target(&self) -> Option<BoardLocation> {
        self.en_passant_target
    }

    #[inline]
    pub fn set_en_passant_target(&mut self, target: Option<BoardLocation>) {
        self.en_passant_target = target;
    }

    /// Every piece, ordered by column then row.
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> + '_ {
        self.cells.iter().filter_map(Option::as_ref)
    }

    pub fn pieces_of(&self, team: Team) -> impl Iterator<Item = &Piece> + '_ {
        self.pieces().filter(move |p| p.team() == team)
    }

    /// Every king of `team`; set-up positions may have none or several.
    pub fn kings_of(&self, team: Team) -> impl Iterator<Item = &Piece> + '_ {
        self.pieces_of(team)
            .filter(|p| p.piece_type() == PieceType::King)
    }

    /// Render-facing `[col][row]` projection.
    pub fn snapshot(&self) -> BoardSnapshot {
        (0..self.width)
            .map(|col| {
                (0..self.height)
                    .map(|row| self.piece_at(col, row).map(Piece::info))
                    .collect()
            })
            .collect()
    }
}
