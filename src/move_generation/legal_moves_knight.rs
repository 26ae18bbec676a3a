use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::{push_step_targets, KNIGHT_OFFSETS};

pub fn generate_knight_moves(board: &Board, from: Position, side: Side, out: &mut Vec<Position>) {
    push_step_targets(board, from, side, &KNIGHT_OFFSETS, out);
}
