//! Canonical rule constants.
//!
//! Starting layouts and board sizes for the built-in game modes, plus the
//! promotion sets each variant allows.

use crate::game_state::chess_types::PieceType;

/// Standard chess starting placement, top row (Dark's back rank) first.
pub const STANDARD_LAYOUT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";
pub const STANDARD_WIDTH: i8 = 8;
pub const STANDARD_HEIGHT: i8 = 8;
pub const STANDARD_MODE_NAME: &str = "Standard Chess";

/// Los Alamos chess: 6x6, no bishops.
pub const LOS_ALAMOS_LAYOUT: &str = "rnqknr/pppppp/6/6/PPPPPP/RNQKNR";
pub const LOS_ALAMOS_WIDTH: i8 = 6;
pub const LOS_ALAMOS_HEIGHT: i8 = 6;
pub const LOS_ALAMOS_MODE_NAME: &str = "Los Alamos Chess";

/// Boards wider than this cannot be labelled with single column letters.
pub const MAX_BOARD_DIMENSION: i8 = 26;

pub const STANDARD_PROMOTIONS: &[PieceType] = &[
    PieceType::Queen,
    PieceType::Rook,
    PieceType::Bishop,
    PieceType::Knight,
];

pub const LOS_ALAMOS_PROMOTIONS: &[PieceType] =
    &[PieceType::Queen, PieceType::Rook, PieceType::Knight];

/// Every promotion set in canonical queen, rook, bishop, knight order,
/// indexed by a mask with bit 0 queen, bit 1 rook, bit 2 bishop, bit 3 knight.
const PROMOTION_SETS: [&[PieceType]; 16] = {
    use crate::game_state::chess_types::PieceType::{Bishop as B, Knight as N, Queen as Q, Rook as R};
    [
        &[],
        &[Q],
        &[R],
        &[Q, R],
        &[B],
        &[Q, B],
        &[R, B],
        &[Q, R, B],
        &[N],
        &[Q, N],
        &[R, N],
        &[Q, R, N],
        &[B, N],
        &[Q, B, N],
        &[R, B, N],
        &[Q, R, B, N],
    ]
};

/// Canonical static set holding exactly `choices`. `None` if a pawn or king
/// is listed.
pub fn promotion_set(choices: &[PieceType]) -> Option<&'static [PieceType]> {
    let mut mask = 0usize;
    for choice in choices {
        mask |= match choice {
            PieceType::Queen => 1,
            PieceType::Rook => 2,
            PieceType::Bishop => 4,
            PieceType::Knight => 8,
            PieceType::Pawn | PieceType::King => return None,
        };
    }
    Some(PROMOTION_SETS[mask])
}

/// Promotion applied when the caller does not name one.
pub const DEFAULT_PROMOTION: PieceType = PieceType::Queen;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn promotion_sets_are_canonical() {
        assert_eq!(
            promotion_set(&[PieceType::Knight, PieceType::Queen, PieceType::Rook]),
            Some(LOS_ALAMOS_PROMOTIONS)
        );
        assert_eq!(promotion_set(STANDARD_PROMOTIONS), Some(STANDARD_PROMOTIONS));
        assert_eq!(promotion_set(&[]).map(|set| set.len()), Some(0));
        assert_eq!(promotion_set(&[PieceType::King]), None);
    }
}
