//! Move execution.
//!
//! Applies a validated move in place and reports which squares need a
//! redraw. Promotion always yields a Queen. Castling relocates the king and
//! the rook in one call and hands the turn over exactly once.

use log::{debug, info};

use crate::chess_errors::{KernelError, KernelResult};
use crate::game_state::chess_rules::CASTLING_KING_STEP;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_validator::check_move;
use crate::move_generation::legal_moves_king::castling_rook_square;
use crate::move_generation::move_generator::generate_moves;

/// Applies `origin -> target` for the side to move.
///
/// Returns the changed squares: origin and target, followed by the rook's
/// origin and target when the move was a castle. On any error the board is
/// left exactly as it was.
///
/// The caller should afterwards run
/// [`refresh_check_state`](crate::move_generation::legal_move_checks::refresh_check_state)
/// for `target` to keep check flags current.
pub fn apply_move(
    board: &mut Board,
    origin: Position,
    target: Position,
    precomputed: Option<&[Position]>,
) -> KernelResult<Vec<Position>> {
    check_move(board, origin, target, precomputed).map_err(|reason| {
        debug!("refused {origin} -> {target}: {reason}");
        KernelError::IllegalMove {
            origin,
            target,
            reason,
        }
    })?;

    if precomputed.is_some() && !generate_moves(board, origin)?.contains(&target) {
        return Err(KernelError::StaleMoveList { origin, target });
    }

    let mut moving = *board.cell(origin);
    let mut changed = Vec::with_capacity(4);
    changed.push(origin);
    changed.push(target);

    if is_promotion(&moving, target) {
        info!("{} pawn promotes on {target}", moving.side);
        moving.piece = Some(PieceKind::Queen);
    }

    let castle = castling_rook_move(&moving, origin, target);

    relocate(board, origin, target, moving);

    if let Some((rook_from, rook_to)) = castle {
        let rook = *board.cell(rook_from);
        relocate(board, rook_from, rook_to, rook);
        debug!("castled: rook {rook_from} -> {rook_to}");
        changed.push(rook_from);
        changed.push(rook_to);
    }

    board.switch_turn();
    Ok(changed)
}

fn is_promotion(moving: &Cell, target: Position) -> bool {
    moving.holds(PieceKind::Pawn) && moving.side.promotion_rank() == Some(target.rank())
}

/// Rook relocation implied by a king's two-file first move, if any.
fn castling_rook_move(
    moving: &Cell,
    origin: Position,
    target: Position,
) -> Option<(Position, Position)> {
    if !moving.holds(PieceKind::King) || !moving.is_first_move() || origin.rank() != target.rank()
    {
        return None;
    }
    let delta = target.file() as i8 - origin.file() as i8;
    if delta.abs() != CASTLING_KING_STEP {
        return None;
    }
    let direction = delta.signum();
    let rook_from = castling_rook_square(origin, direction);
    let rook_to = origin.offset(0, direction)?;
    Some((rook_from, rook_to))
}

/// Moves `moving` onto `to`, clearing its first-move flag, and empties `from`.
fn relocate(board: &mut Board, from: Position, to: Position, moving: Cell) {
    *board.cell_mut(to) = Cell {
        piece: moving.piece,
        side: moving.side,
        flags: moving.flags & !FLAG_FIRST_MOVE,
    };
    *board.cell_mut(from) = Cell::EMPTY;
}
