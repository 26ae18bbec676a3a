use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::{push_sliding_targets, DIAGONAL_DIRECTIONS};

pub fn generate_bishop_moves(board: &Board, from: Position, side: Side, out: &mut Vec<Position>) {
    push_sliding_targets(board, from, side, &DIAGONAL_DIRECTIONS, out);
}
