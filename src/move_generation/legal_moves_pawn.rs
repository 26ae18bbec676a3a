//! Pawn targets: single and double pushes plus diagonal captures.
//!
//! No en passant. Promotion is decided by the executor, not here.

use crate::game_state::chess_types::*;

pub fn generate_pawn_moves(board: &Board, from: Position, side: Side, out: &mut Vec<Position>) {
    let forward = side.forward();
    let first_move = board.cell(from).is_first_move();

    if let Some(one_step) = from.offset(forward, 0) {
        if board.cell(one_step).is_empty() {
            out.push(one_step);

            if first_move {
                if let Some(two_step) = from.offset(2 * forward, 0) {
                    if board.cell(two_step).is_empty() {
                        out.push(two_step);
                    }
                }
            }
        }
    }

    for file_delta in [forward, -forward] {
        let Some(to) = from.offset(forward, file_delta) else {
            continue;
        };
        if board.cell(to).is_enemy_of(side) {
            out.push(to);
        }
    }
}
