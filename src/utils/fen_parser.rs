//! Placement-string parser.
//!
//! Rows are separated by `/` and listed top row first. Within a row a
//! letter is a piece (upper case Light, lower case Dark) and a run of
//! digits is that many empty cells, so `10` skips ten columns on a wide
//! board.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_rules::MAX_BOARD_DIMENSION;
use crate::game_state::chess_types::*;
use crate::game_state::game_mode::VariantRules;
use crate::moves::piece::Piece;

pub fn parse_layout(
    layout: &str,
    width: i8,
    height: i8,
    rules: VariantRules,
) -> Result<Board, ChessErrors> {
    for (name, value) in [("width", width), ("height", height)] {
        if !(1..=MAX_BOARD_DIMENSION).contains(&value) {
            return Err(ChessErrors::InvalidLayout(format!(
                "{name} {value} is outside 1..={MAX_BOARD_DIMENSION}"
            )));
        }
    }

    let rows: Vec<&str> = layout.trim().split('/').collect();
    if rows.len() != height as usize {
        return Err(ChessErrors::InvalidLayout(format!(
            "expected {height} rows, found {}",
            rows.len()
        )));
    }

    let mut board = Board::new(width, height, rules);
    for (i, row_text) in rows.iter().enumerate() {
        let row = height - 1 - i as i8;
        parse_row(row_text, row, &mut board)?;
    }
    Ok(board)
}

fn parse_row(row_text: &str, row: i8, board: &mut Board) -> Result<(), ChessErrors> {
    let width = board.width() as usize;
    let mut col = 0usize;
    let mut chars = row_text.chars().peekable();

    while let Some(c) = chars.next() {
        if c.is_ascii_digit() {
            if c == '0' {
                return Err(ChessErrors::InvalidLayoutToken(c));
            }
            let mut run = c.to_digit(10).unwrap_or_default() as usize;
            while let Some(d) = chars.peek().and_then(|d| d.to_digit(10)) {
                run = run.saturating_mul(10).saturating_add(d as usize);
                chars.next();
            }
            col = col.saturating_add(run);
            if col > width {
                break;
            }
            continue;
        }

        let piece_type = PieceType::from_char(c).ok_or(ChessErrors::InvalidLayoutToken(c))?;
        if col >= width {
            col += 1;
            break;
        }
        let team = if c.is_ascii_uppercase() {
            Team::Light
        } else {
            Team::Dark
        };
        board.place_piece(Piece::new(team, piece_type, col as i8, row));
        col += 1;
    }

    if col != width {
        return Err(ChessErrors::InvalidLayout(format!(
            "row {} covers {col} cells instead of {width}",
            row + 1
        )));
    }
    Ok(())
}
