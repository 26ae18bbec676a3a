//! King targets: the eight neighbours plus castling squares.
//!
//! Castling toward an edge is offered when the king still has its first
//! move, the corner cell on that edge holds a piece that also still has its
//! first move, and every square between them is empty. The corner piece's
//! kind and side are not inspected.

use crate::game_state::chess_rules::{CASTLING_KING_STEP, CASTLING_MIN_ROOK_DISTANCE};
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::{
    push_step_targets, rank_path_is_clear, KING_OFFSETS,
};

pub fn generate_king_moves(board: &Board, from: Position, side: Side, out: &mut Vec<Position>) {
    push_step_targets(board, from, side, &KING_OFFSETS, out);
    generate_castling_moves(board, from, out);
}

fn generate_castling_moves(board: &Board, from: Position, out: &mut Vec<Position>) {
    if !board.cell(from).is_first_move() {
        return;
    }

    for direction in [-1i8, 1] {
        if let Some(target) = castling_target(board, from, direction) {
            out.push(target);
        }
    }
}

fn castling_target(board: &Board, from: Position, direction: i8) -> Option<Position> {
    let rook_square = castling_rook_square(from, direction);
    let distance = (rook_square.file() as i8 - from.file() as i8).abs();
    if distance < CASTLING_MIN_ROOK_DISTANCE {
        return None;
    }

    let rook = board.cell(rook_square);
    if rook.is_empty() || !rook.is_first_move() {
        return None;
    }
    if !rank_path_is_clear(board, from, rook_square) {
        return None;
    }

    from.offset(0, direction * CASTLING_KING_STEP)
}

/// Corner square on the king's rank toward `direction` (negative is file 0).
pub fn castling_rook_square(king: Position, direction: i8) -> Position {
    let file = if direction < 0 { 0 } else { BOARD_SIZE as u8 - 1 };
    Position::new(king.rank(), file)
}

#[cfg(test)]
mod tests {
    use super::generate_king_moves;
    use crate::game_state::chess_types::*;

    fn castling_board() -> Board {
        let mut board = Board::empty();
        board.place(Position::new(0, 4), Cell::unmoved(PieceKind::King, Side::Light));
        board.place(Position::new(0, 0), Cell::unmoved(PieceKind::Rook, Side::Light));
        board.place(Position::new(0, 7), Cell::unmoved(PieceKind::Rook, Side::Light));
        board
    }

    fn king_targets(board: &Board) -> Vec<Position> {
        let mut out = Vec::new();
        generate_king_moves(board, Position::new(0, 4), Side::Light, &mut out);
        out
    }

    #[test]
    fn unmoved_king_and_rooks_offer_both_castles() {
        let targets = king_targets(&castling_board());
        assert!(targets.contains(&Position::new(0, 6)));
        assert!(targets.contains(&Position::new(0, 2)));
        assert_eq!(targets.len(), 5 + 2);
    }

    #[test]
    fn moved_rook_removes_its_castle() {
        let mut board = castling_board();
        board.cell_mut(Position::new(0, 7)).flags &= !FLAG_FIRST_MOVE;
        let targets = king_targets(&board);
        assert!(!targets.contains(&Position::new(0, 6)));
        assert!(targets.contains(&Position::new(0, 2)));
    }

    #[test]
    fn moved_king_offers_no_castles() {
        let mut board = castling_board();
        board.cell_mut(Position::new(0, 4)).flags &= !FLAG_FIRST_MOVE;
        let targets = king_targets(&board);
        assert!(!targets.contains(&Position::new(0, 6)));
        assert!(!targets.contains(&Position::new(0, 2)));
    }

    #[test]
    fn any_piece_between_blocks_the_castle() {
        let mut board = castling_board();
        board.place(Position::new(0, 1), Cell::unmoved(PieceKind::Knight, Side::Light));
        board.place(Position::new(0, 5), Cell::unmoved(PieceKind::Knight, Side::Dark));
        let targets = king_targets(&board);
        assert!(!targets.contains(&Position::new(0, 2)));
        assert!(!targets.contains(&Position::new(0, 6)));
        // f1 is still a plain capture.
        assert!(targets.contains(&Position::new(0, 5)));
    }

    #[test]
    fn king_never_lands_on_friendly_neighbours() {
        let board = Board::new_game();
        assert!(king_targets(&board).is_empty());
    }
}
