//! Check-state tracking.
//!
//! Check flags are discovered from the attacker's side: generating moves for
//! a piece that can land on the opposing king raises that king's flag. They
//! are only refreshed when this is run for the attacking piece, so callers
//! run it for the piece that just moved after every applied move. Flags are
//! never lowered here. Kings do not raise check.

use log::debug;

use crate::chess_errors::KernelResult;
use crate::game_state::chess_types::*;
use crate::move_generation::move_generator::generate_moves;

/// Regenerates moves for the piece on `attacker` and raises the check flag of
/// any opposing king it reaches. Returns the side put in check, if any.
pub fn refresh_check_state(board: &mut Board, attacker: Position) -> KernelResult<Option<Side>> {
    let targets = generate_moves(board, attacker)?;
    let cell = *board.cell(attacker);
    if cell.holds(PieceKind::King) {
        return Ok(None);
    }

    let checked = targets.iter().find_map(|&to| {
        let target = board.cell(to);
        (target.holds(PieceKind::King) && target.is_enemy_of(cell.side)).then_some(target.side)
    });

    if let Some(side) = checked {
        debug!("{:?} on {attacker} gives check to {side}", cell.piece);
        board.raise_check(side);
    }
    Ok(checked)
}

/// Square of `side`'s king, scanning in board order.
pub fn king_square(board: &Board, side: Side) -> Option<Position> {
    board
        .occupied()
        .find(|(_, cell)| cell.side == side && cell.holds(PieceKind::King))
        .map(|(position, _)| position)
}

#[cfg(test)]
mod tests {
    use super::{king_square, refresh_check_state};
    use crate::game_state::chess_types::*;

    #[test]
    fn rook_on_open_file_flags_enemy_king() {
        let mut board = Board::empty();
        board.place(Position::new(0, 4), Cell::moved(PieceKind::Rook, Side::Light));
        board.place(Position::new(7, 4), Cell::moved(PieceKind::King, Side::Dark));

        let checked = refresh_check_state(&mut board, Position::new(0, 4)).expect("occupied");
        assert_eq!(checked, Some(Side::Dark));
        assert!(board.is_in_check(Side::Dark));
        assert!(!board.is_in_check(Side::Light));
    }

    #[test]
    fn blocked_rook_does_not_flag() {
        let mut board = Board::empty();
        board.place(Position::new(0, 4), Cell::moved(PieceKind::Rook, Side::Light));
        board.place(Position::new(3, 4), Cell::moved(PieceKind::Pawn, Side::Dark));
        board.place(Position::new(7, 4), Cell::moved(PieceKind::King, Side::Dark));

        assert_eq!(refresh_check_state(&mut board, Position::new(0, 4)), Ok(None));
        assert!(!board.is_in_check(Side::Dark));
    }

    #[test]
    fn knight_flags_from_any_of_its_targets() {
        let mut board = Board::empty();
        board.place(Position::new(2, 2), Cell::moved(PieceKind::Knight, Side::Dark));
        board.place(Position::new(0, 3), Cell::moved(PieceKind::King, Side::Light));

        assert_eq!(
            refresh_check_state(&mut board, Position::new(2, 2)),
            Ok(Some(Side::Light))
        );
        assert!(board.is_in_check(Side::Light));
    }

    #[test]
    fn pawn_flags_only_diagonally() {
        let mut board = Board::empty();
        board.place(Position::new(5, 4), Cell::moved(PieceKind::Pawn, Side::Light));
        board.place(Position::new(6, 4), Cell::moved(PieceKind::King, Side::Dark));
        assert_eq!(refresh_check_state(&mut board, Position::new(5, 4)), Ok(None));

        board.clear(Position::new(6, 4));
        board.place(Position::new(6, 5), Cell::moved(PieceKind::King, Side::Dark));
        assert_eq!(
            refresh_check_state(&mut board, Position::new(5, 4)),
            Ok(Some(Side::Dark))
        );
    }

    #[test]
    fn kings_never_raise_check() {
        let mut board = Board::empty();
        board.place(Position::new(3, 3), Cell::moved(PieceKind::King, Side::Light));
        board.place(Position::new(4, 4), Cell::moved(PieceKind::King, Side::Dark));

        assert_eq!(refresh_check_state(&mut board, Position::new(3, 3)), Ok(None));
        assert!(!board.is_in_check(Side::Dark));
    }

    #[test]
    fn flags_stay_raised_once_set() {
        let mut board = Board::empty();
        board.place(Position::new(0, 4), Cell::moved(PieceKind::Rook, Side::Light));
        board.place(Position::new(7, 4), Cell::moved(PieceKind::King, Side::Dark));
        refresh_check_state(&mut board, Position::new(0, 4)).expect("occupied");

        board.place(Position::new(3, 4), Cell::moved(PieceKind::Pawn, Side::Dark));
        assert_eq!(refresh_check_state(&mut board, Position::new(0, 4)), Ok(None));
        assert!(board.is_in_check(Side::Dark));
    }

    #[test]
    fn finds_kings_on_start_position() {
        let board = Board::new_game();
        assert_eq!(king_square(&board, Side::Light), Some(Position::new(0, 4)));
        assert_eq!(king_square(&board, Side::Dark), Some(Position::new(7, 4)));
        assert_eq!(king_square(&Board::empty(), Side::Light), None);
    }
}
