//! Cell label conversions.
//!
//! A label is a column letter (`a` is column 0) followed by a one-based row
//! number, so `e4` is `(4, 3)` and `a10` is `(0, 9)` on a tall board.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::BoardLocation;

/// Parse a label such as `e4` against a `width` x `height` board.
pub fn cell_label_to_location(
    label: &str,
    width: i8,
    height: i8,
) -> Result<BoardLocation, ChessErrors> {
    let invalid = || ChessErrors::InvalidCellLabel(label.to_owned());

    let mut chars = label.chars();
    let file = chars.next().ok_or_else(invalid)?;
    if !file.is_ascii_lowercase() {
        return Err(invalid());
    }
    let col = (file as u8 - b'a') as i8;

    let rank = chars.as_str();
    if rank.is_empty() || !rank.chars().all(|c| c.is_ascii_digit()) || rank.starts_with('0') {
        return Err(invalid());
    }
    let row_number: i8 = rank.parse().map_err(|_| invalid())?;
    let row = row_number - 1;

    if col >= width || row >= height {
        return Err(invalid());
    }
    Ok((col, row))
}

/// Label for an on-board location. Returns `None` past column `z`.
pub fn location_to_cell_label(location: BoardLocation) -> Option<String> {
    let (col, row) = location;
    if !(0..26).contains(&col) || row < 0 {
        return None;
    }
    let file = char::from(b'a' + col as u8);
    Some(format!("{file}{}", row as i16 + 1))
}
