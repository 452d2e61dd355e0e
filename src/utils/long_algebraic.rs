//! Long algebraic move text: source label, target label and an optional
//! promotion letter, e.g. `e2e4`, `e7e8q` or `a9a10n` on a tall board.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::{PieceType, Team};
use crate::moves::move_descriptions::Move;
use crate::utils::algebraic::{cell_label_to_location, location_to_cell_label};

pub fn move_to_long_algebraic(mv: &Move) -> Result<String, ChessErrors> {
    let label = |location| {
        location_to_cell_label(location)
            .ok_or_else(|| ChessErrors::OutOfBounds(location))
    };
    let mut out = label(mv.from())?;
    out.push_str(&label(mv.to())?);
    if let Some(promotion) = mv.promotion {
        out.push(promotion.to_char());
    }
    Ok(out)
}

/// Parse move text for `team` on a `width` x `height` board. Only the
/// syntax is checked here; legality is the engine's business.
pub fn long_algebraic_to_move(
    text: &str,
    team: Team,
    width: i8,
    height: i8,
) -> Result<Move, ChessErrors> {
    let invalid = || ChessErrors::InvalidMoveText(text.to_owned());
    if !text.is_ascii() {
        return Err(invalid());
    }

    // The target label starts at the second letter.
    let second_file = text
        .char_indices()
        .skip(1)
        .find(|(_, c)| c.is_ascii_lowercase())
        .map(|(i, _)| i)
        .ok_or_else(invalid)?;
    let (source, rest) = text.split_at(second_file);

    let (target, promotion) = match rest.chars().last() {
        Some(c) if rest.len() > 2 && c.is_ascii_lowercase() => {
            let piece_type = PieceType::from_char(c).ok_or_else(invalid)?;
            (&rest[..rest.len() - 1], Some(piece_type))
        }
        _ => (rest, None),
    };

    let from = cell_label_to_location(source, width, height).map_err(|_| invalid())?;
    let to = cell_label_to_location(target, width, height).map_err(|_| invalid())?;

    let mv = Move::new(team, from.0, from.1, to.0, to.1);
    Ok(match promotion {
        Some(piece_type) => mv.with_promotion(piece_type),
        None => mv,
    })
}
