use crate::game_state::chess_types::*;
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;

/// Queen targets are the rook rays followed by the bishop rays.
pub fn generate_queen_moves(board: &Board, from: Position, side: Side, out: &mut Vec<Position>) {
    generate_rook_moves(board, from, side, out);
    generate_bishop_moves(board, from, side, out);
}
