use crate::game_state::chess_types::{Board, BoardLocation};

/// True when `from` and `to` share a row, column or diagonal and every cell
/// strictly between them is empty. Both endpoints are ignored.
pub fn line_is_clear(from: BoardLocation, to: BoardLocation, board: &Board) -> bool {
    let d_col = to.0 - from.0;
    let d_row = to.1 - from.1;
    let aligned = d_col == 0 || d_row == 0 || d_col.abs() == d_row.abs();
    if !aligned || (d_col == 0 && d_row == 0) {
        return false;
    }

    let step_col = d_col.signum();
    let step_row = d_row.signum();
    let mut col = from.0 + step_col;
    let mut row = from.1 + step_row;
    while (col, row) != to {
        if !board.is_empty(col, row) {
            return false;
        }
        col += step_col;
        row += step_row;
    }
    true
}

/// Cells reachable along each direction, in direction order, up to and
/// including the first occupied cell.
pub fn sliding_targets(
    from: BoardLocation,
    directions: &[(i8, i8)],
    board: &Board,
) -> Vec<BoardLocation> {
    let mut out = Vec::new();
    for &(step_col, step_row) in directions {
        let mut col = from.0 + step_col;
        let mut row = from.1 + step_row;
        while board.valid_coordinates(col, row) {
            out.push((col, row));
            if !board.is_empty(col, row) {
                break;
            }
            col += step_col;
            row += step_row;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::{PieceType, Team};
    use crate::game_state::game_mode::VariantRules;
    use crate::moves::piece::Piece;

    #[test]
    fn adjacent_cells_are_always_clear() {
        let mut board = Board::new(8, 8, VariantRules::standard());
        board.place_piece(Piece::new(Team::Light, PieceType::Pawn, 1, 1));
        assert!(line_is_clear((0, 0), (1, 1), &board));
        assert!(!line_is_clear((0, 0), (2, 2), &board));
        assert!(!line_is_clear((0, 0), (1, 2), &board));
        assert!(!line_is_clear((3, 3), (3, 3), &board));
    }
}
