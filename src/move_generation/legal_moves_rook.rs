//! Rook targets: the four axis rays.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::{push_sliding_targets, AXIS_DIRECTIONS};

pub fn generate_rook_moves(board: &Board, from: Position, side: Side, out: &mut Vec<Position>) {
    push_sliding_targets(board, from, side, &AXIS_DIRECTIONS, out);
}
