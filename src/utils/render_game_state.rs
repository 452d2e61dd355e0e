//! Terminal-oriented Unicode board renderer.
//!
//! Draws a `[col][row]` snapshot top row first, with column letters above
//! and below and row numbers on both sides.

use crate::game_state::chess_types::*;

pub fn render_snapshot(snapshot: &BoardSnapshot) -> String {
    let width = snapshot.len();
    let height = snapshot.first().map_or(0, Vec::len);
    // Row numbers are right-aligned to the widest one.
    let margin = height.to_string().len();

    let files: String = (0..width)
        .map(|col| char::from(b'a' + col as u8).to_string())
        .collect::<Vec<_>>()
        .join(" ");
    let header = format!("{:margin$} {files}", "");

    let mut out = String::new();
    out.push_str(&header);
    out.push('\n');

    for row in (0..height).rev() {
        let number = row + 1;
        out.push_str(&format!("{number:>margin$} "));
        let cells: Vec<String> = snapshot
            .iter()
            .map(|column| match column[row] {
                Some(info) => piece_to_unicode(info).to_string(),
                None => '·'.to_string(),
            })
            .collect();
        out.push_str(&cells.join(" "));
        out.push_str(&format!(" {number}\n"));
    }

    out.push_str(&header);
    out
}

pub fn piece_to_unicode(info: PieceInfo) -> char {
    match (info.team, info.piece_type) {
        (Team::Light, PieceType::Pawn) => '♙',
        (Team::Light, PieceType::Knight) => '♘',
        (Team::Light, PieceType::Bishop) => '♗',
        (Team::Light, PieceType::Rook) => '♖',
        (Team::Light, PieceType::Queen) => '♕',
        (Team::Light, PieceType::King) => '♔',
        (Team::Dark, PieceType::Pawn) => '♟',
        (Team::Dark, PieceType::Knight) => '♞',
        (Team::Dark, PieceType::Bishop) => '♝',
        (Team::Dark, PieceType::Rook) => '♜',
        (Team::Dark, PieceType::Queen) => '♛',
        (Team::Dark, PieceType::King) => '♚',
    }
}
