//! Board-to-placement-string generator, the inverse of `parse_layout`.

use crate::game_state::chess_types::Board;

pub fn generate_layout(board: &Board) -> String {
    let mut rows = Vec::with_capacity(board.height() as usize);

    for row in (0..board.height()).rev() {
        let mut text = String::new();
        let mut empty = 0u32;

        for col in 0..board.width() {
            match board.piece_at(col, row) {
                Some(piece) => {
                    if empty > 0 {
                        text.push_str(&empty.to_string());
                        empty = 0;
                    }
                    text.push(piece.info().to_char());
                }
                None => empty += 1,
            }
        }
        if empty > 0 {
            text.push_str(&empty.to_string());
        }
        rows.push(text);
    }

    rows.join("/")
}
