//! Move validation.
//!
//! Rules are checked in a fixed order and the first failure wins:
//! turn ownership, occupied origin, pin flag, null move, ongoing check,
//! and finally reachability. While the side to move has its check flag
//! raised every move is refused; whether a move would resolve the check is
//! not examined. Validation never mutates the board.

use log::debug;

use crate::chess_errors::MoveRejection;
use crate::game_state::chess_types::*;
use crate::move_generation::move_generator::generate_moves_into;

/// Returns whether `origin -> target` is acceptable for the side to move.
///
/// `precomputed` lets a caller reuse the list it already generated for
/// `origin` (for example to draw move hints).
pub fn validate_move(
    board: &Board,
    origin: Position,
    target: Position,
    precomputed: Option<&[Position]>,
) -> bool {
    match check_move(board, origin, target, precomputed) {
        Ok(()) => true,
        Err(reason) => {
            debug!("rejected {origin} -> {target}: {reason}");
            false
        }
    }
}

/// Like [`validate_move`] but reports which rule refused the move.
pub fn check_move(
    board: &Board,
    origin: Position,
    target: Position,
    precomputed: Option<&[Position]>,
) -> Result<(), MoveRejection> {
    let to_move = board.side_to_move();
    let cell = board.cell(origin);

    if cell.side != to_move {
        return Err(MoveRejection::NotYourTurn {
            to_move,
            owner: cell.side,
        });
    }
    let Some(piece) = cell.piece else {
        return Err(MoveRejection::EmptyOrigin);
    };
    if cell.is_pinned() {
        return Err(MoveRejection::Pinned);
    }
    if origin == target {
        return Err(MoveRejection::NullMove);
    }
    if board.is_in_check(to_move) {
        return Err(MoveRejection::InCheck(to_move));
    }

    let reachable = match precomputed {
        Some(moves) => moves.contains(&target),
        None => {
            let mut moves = Vec::new();
            generate_moves_into(board, origin, piece, cell.side, &mut moves);
            moves.contains(&target)
        }
    };

    if reachable {
        Ok(())
    } else {
        Err(MoveRejection::Unreachable)
    }
}

#[cfg(test)]
mod tests {
    use super::{check_move, validate_move};
    use crate::chess_errors::MoveRejection;
    use crate::game_state::chess_types::*;

    const E2: Position = Position::new(1, 4);
    const E4: Position = Position::new(3, 4);
    const E7: Position = Position::new(6, 4);
    const E5: Position = Position::new(4, 4);

    #[test]
    fn side_to_move_may_play_reachable_targets() {
        let board = Board::new_game();
        assert!(validate_move(&board, E2, E4, None));
        assert!(validate_move(&board, E2, Position::new(2, 4), None));
        assert_eq!(
            check_move(&board, E2, Position::new(4, 4), None),
            Err(MoveRejection::Unreachable)
        );
    }

    #[test]
    fn wrong_side_is_refused_even_if_reachable() {
        let board = Board::new_game();
        assert_eq!(
            check_move(&board, E7, E5, None),
            Err(MoveRejection::NotYourTurn {
                to_move: Side::Light,
                owner: Side::Dark,
            })
        );
    }

    #[test]
    fn empty_origin_fails_the_turn_check_first() {
        let board = Board::new_game();
        assert!(matches!(
            check_move(&board, Position::new(3, 3), Position::new(4, 3), None),
            Err(MoveRejection::NotYourTurn { owner: Side::None, .. })
        ));
    }

    #[test]
    fn pinned_pieces_cannot_move() {
        let mut board = Board::new_game();
        board.cell_mut(E2).flags |= FLAG_PINNED;
        assert_eq!(check_move(&board, E2, E4, None), Err(MoveRejection::Pinned));
    }

    #[test]
    fn null_moves_are_refused() {
        let board = Board::new_game();
        assert_eq!(check_move(&board, E2, E2, None), Err(MoveRejection::NullMove));
    }

    #[test]
    fn raised_check_flag_freezes_the_side_to_move() {
        let mut board = Board::new_game();
        board.raise_check(Side::Light);
        assert_eq!(
            check_move(&board, E2, E4, None),
            Err(MoveRejection::InCheck(Side::Light))
        );

        let mut board = Board::new_game();
        board.raise_check(Side::Dark);
        assert!(validate_move(&board, E2, E4, None));
    }

    #[test]
    fn caller_supplied_list_is_trusted() {
        let board = Board::new_game();
        assert!(!validate_move(&board, E2, E4, Some(&[Position::new(2, 4)])));
        assert!(validate_move(&board, E2, E4, Some(&[E4])));
    }

    #[test]
    fn validation_leaves_board_untouched() {
        let board = Board::new_game();
        let before = board.clone();
        let _ = validate_move(&board, E2, E4, None);
        assert_eq!(board, before);
    }
}
