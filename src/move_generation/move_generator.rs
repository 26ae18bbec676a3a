//! Per-square move generation entry point.
//!
//! Produces every square the occupant of a given square could move to,
//! ignoring whose turn it is and whether the move would leave its own king
//! attacked. The result is an owned list; an empty list means no moves.

use log::trace;

use crate::chess_errors::{KernelError, KernelResult};
use crate::game_state::chess_types::*;
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;

/// Generates the target squares for the piece on `from`.
///
/// Asking for an empty square is a caller bug and returns
/// [`KernelError::EmptySquare`].
pub fn generate_moves(board: &Board, from: Position) -> KernelResult<Vec<Position>> {
    let cell = board.cell(from);
    let Some(piece) = cell.piece else {
        return Err(KernelError::EmptySquare(from));
    };

    let mut out = Vec::with_capacity(max_targets(piece));
    generate_moves_into(board, from, piece, cell.side, &mut out);
    trace!("{} {:?} on {from}: {} targets", cell.side, piece, out.len());
    Ok(out)
}

pub(crate) fn generate_moves_into(
    board: &Board,
    from: Position,
    piece: PieceKind,
    side: Side,
    out: &mut Vec<Position>,
) {
    match piece {
        PieceKind::Rook => generate_rook_moves(board, from, side, out),
        PieceKind::Knight => generate_knight_moves(board, from, side, out),
        PieceKind::Bishop => generate_bishop_moves(board, from, side, out),
        PieceKind::Queen => generate_queen_moves(board, from, side, out),
        PieceKind::King => generate_king_moves(board, from, side, out),
        PieceKind::Pawn => generate_pawn_moves(board, from, side, out),
    }
}

const fn max_targets(piece: PieceKind) -> usize {
    match piece {
        PieceKind::Rook => 14,
        PieceKind::Knight | PieceKind::King => 10,
        PieceKind::Bishop => 13,
        PieceKind::Queen => 27,
        PieceKind::Pawn => 4,
    }
}

/// Every `(origin, target)` pair for pieces of `side`, in board order.
pub fn generate_all_moves(board: &Board, side: Side) -> Vec<(Position, Position)> {
    let mut all = Vec::new();
    let mut targets = Vec::new();
    for (from, cell) in board.occupied() {
        if cell.side != side {
            continue;
        }
        let Some(piece) = cell.piece else {
            continue;
        };
        targets.clear();
        generate_moves_into(board, from, piece, side, &mut targets);
        all.extend(targets.iter().map(|&to| (from, to)));
    }
    all
}

#[cfg(test)]
mod tests {
    use super::{generate_all_moves, generate_moves};
    use crate::chess_errors::KernelError;
    use crate::game_state::chess_types::*;

    #[test]
    fn empty_square_is_a_caller_error() {
        let board = Board::new_game();
        let square = Position::new(4, 4);
        assert_eq!(
            generate_moves(&board, square),
            Err(KernelError::EmptySquare(square))
        );
    }

    #[test]
    fn starting_position_has_twenty_candidate_moves_per_side() {
        let board = Board::new_game();
        assert_eq!(generate_all_moves(&board, Side::Light).len(), 20);
        assert_eq!(generate_all_moves(&board, Side::Dark).len(), 20);
    }

    #[test]
    fn generation_does_not_touch_the_board() {
        let mut board = Board::empty();
        board.place(Position::new(0, 0), Cell::unmoved(PieceKind::Rook, Side::Light));
        board.place(Position::new(7, 0), Cell::unmoved(PieceKind::King, Side::Dark));
        let before = board.clone();
        let targets = generate_moves(&board, Position::new(0, 0)).expect("rook has moves");
        assert!(targets.contains(&Position::new(7, 0)));
        assert_eq!(board, before);
    }

    #[test]
    fn knight_from_start_square() {
        let board = Board::new_game();
        let mut targets = generate_moves(&board, Position::new(0, 1)).expect("knight has moves");
        targets.sort();
        assert_eq!(targets, vec![Position::new(2, 0), Position::new(2, 2)]);
    }
}
