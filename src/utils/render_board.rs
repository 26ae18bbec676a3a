//! Terminal-oriented Unicode board renderer.
//!
//! Draws rank 7 at the top. Light pieces use outline glyphs and Dark pieces
//! filled glyphs. Hinted squares show `x` when occupied (a capture) and `o`
//! when empty. A king whose side has its check flag raised is wrapped in
//! brackets.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::king_square;

pub fn render_board(board: &Board, hints: &[Position]) -> String {
    let checked_kings: Vec<Position> = [Side::Light, Side::Dark]
        .into_iter()
        .filter(|&side| board.is_in_check(side))
        .filter_map(|side| king_square(board, side))
        .collect();

    let mut out = String::new();
    out.push_str("   a  b  c  d  e  f  g  h\n");

    for rank in (0..BOARD_SIZE as u8).rev() {
        out.push(char::from(b'1' + rank));
        out.push(' ');

        for file in 0..BOARD_SIZE as u8 {
            let position = Position::new(rank, file);
            let symbol = square_symbol(board.cell(position), hints.contains(&position));
            if checked_kings.contains(&position) {
                out.push('[');
                out.push(symbol);
                out.push(']');
            } else {
                out.push(' ');
                out.push(symbol);
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(char::from(b'1' + rank));
        out.push('\n');
    }

    out.push_str("   a  b  c  d  e  f  g  h\n");
    out.push_str(&format!("{} to move", board.side_to_move()));
    out
}

fn square_symbol(cell: &Cell, hinted: bool) -> char {
    match (cell.piece, hinted) {
        (Some(_), true) => 'x',
        (None, true) => 'o',
        (Some(piece), false) => piece.glyph_for(cell.side),
        (None, false) => '·',
    }
}
