//! Game modes: the rule variants a `ChessGame` can be played under.
//!
//! A mode fixes the board size, the starting layout, which optional rules
//! (double step, en passant, castling) apply, and which pieces a pawn may
//! promote to. `restart_game` always returns to the mode's layout.

use std::fmt::Debug;

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_rules::*;
use crate::game_state::chess_types::{Board, PieceType, Team};
use crate::utils::fen_parser::parse_layout;

/// Optional rules layered on top of the basic piece geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariantRules {
    pub pawn_double_step: bool,
    pub en_passant: bool,
    pub castling: bool,
    pub promotion_choices: &'static [PieceType],
}

impl VariantRules {
    pub const fn standard() -> Self {
        Self {
            pawn_double_step: true,
            en_passant: true,
            castling: true,
            promotion_choices: STANDARD_PROMOTIONS,
        }
    }

    pub const fn los_alamos() -> Self {
        Self {
            pawn_double_step: false,
            en_passant: false,
            castling: false,
            promotion_choices: LOS_ALAMOS_PROMOTIONS,
        }
    }

    #[inline]
    pub fn allows_promotion_to(&self, piece_type: PieceType) -> bool {
        self.promotion_choices.contains(&piece_type)
    }
}

impl Default for VariantRules {
    fn default() -> Self {
        Self::standard()
    }
}

pub trait GameMode: Send + Sync + Debug {
    fn name(&self) -> &str;
    fn width(&self) -> i8;
    fn height(&self) -> i8;
    fn rules(&self) -> VariantRules;
    /// Placement string, top row first.
    fn initial_layout(&self) -> &str;

    fn first_turn(&self) -> Team {
        Team::Light
    }

    fn initial_board(&self) -> Result<Board, ChessErrors> {
        parse_layout(
            self.initial_layout(),
            self.width(),
            self.height(),
            self.rules(),
        )
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct StandardChess;

impl GameMode for StandardChess {
    fn name(&self) -> &str {
        STANDARD_MODE_NAME
    }

    fn width(&self) -> i8 {
        STANDARD_WIDTH
    }

    fn height(&self) -> i8 {
        STANDARD_HEIGHT
    }

    fn rules(&self) -> VariantRules {
        VariantRules::standard()
    }

    fn initial_layout(&self) -> &str {
        STANDARD_LAYOUT
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LosAlamosChess;

impl GameMode for LosAlamosChess {
    fn name(&self) -> &str {
        LOS_ALAMOS_MODE_NAME
    }

    fn width(&self) -> i8 {
        LOS_ALAMOS_WIDTH
    }

    fn height(&self) -> i8 {
        LOS_ALAMOS_HEIGHT
    }

    fn rules(&self) -> VariantRules {
        VariantRules::los_alamos()
    }

    fn initial_layout(&self) -> &str {
        LOS_ALAMOS_LAYOUT
    }
}

/// A set-up position. The layout is validated on construction so
/// `initial_board` cannot fail later.
#[derive(Debug, Clone)]
pub struct CustomLayout {
    name: String,
    width: i8,
    height: i8,
    layout: String,
    rules: VariantRules,
    first_turn: Team,
}

impl CustomLayout {
    pub fn new(
        name: &str,
        width: i8,
        height: i8,
        layout: &str,
        rules: VariantRules,
        first_turn: Team,
    ) -> Result<Self, ChessErrors> {
        parse_layout(layout, width, height, rules)?;
        Ok(Self {
            name: name.to_owned(),
            width,
            height,
            layout: layout.to_owned(),
            rules,
            first_turn,
        })
    }

    /// An 8x8 position under standard rules.
    pub fn standard_board(layout: &str, first_turn: Team) -> Result<Self, ChessErrors> {
        Self::new(
            "Custom Position",
            STANDARD_WIDTH,
            STANDARD_HEIGHT,
            layout,
            VariantRules::standard(),
            first_turn,
        )
    }
}

impl GameMode for CustomLayout {
    fn name(&self) -> &str {
        &self.name
    }

    fn width(&self) -> i8 {
        self.width
    }

    fn height(&self) -> i8 {
        self.height
    }

    fn rules(&self) -> VariantRules {
        self.rules
    }

    fn initial_layout(&self) -> &str {
        &self.layout
    }

    fn first_turn(&self) -> Team {
        self.first_turn
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn built_in_layouts_parse() {
        let standard = StandardChess.initial_board().expect("standard layout should parse");
        assert_eq!(standard.pieces().count(), 32);

        let los_alamos = LosAlamosChess
            .initial_board()
            .expect("los alamos layout should parse");
        assert_eq!(los_alamos.pieces().count(), 24);
        assert!(los_alamos
            .pieces()
            .all(|p| p.piece_type() != PieceType::Bishop));
    }

    #[test]
    fn custom_layout_rejects_bad_rows() {
        let err = CustomLayout::standard_board("8/8/8", Team::Light).unwrap_err();
        assert!(matches!(err, ChessErrors::InvalidLayout(_)));
    }

    #[test]
    fn los_alamos_cannot_promote_to_bishop() {
        assert!(!VariantRules::los_alamos().allows_promotion_to(PieceType::Bishop));
        assert!(VariantRules::standard().allows_promotion_to(PieceType::Bishop));
    }
}
