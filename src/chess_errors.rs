//! Errors returned by the rules kernel.
//!
//! Two families live here. `MoveRejection` names the game rule a move broke;
//! it is an ordinary, recoverable outcome and the caller simply keeps the
//! piece where it was. The remaining `KernelError` variants report caller
//! bugs (asking for moves of an empty square, replaying a stale move list) or
//! malformed setup input, and should not be silently ignored.

use crate::game_state::chess_types::{Position, Side};

/// The validator rule that refused a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveRejection {
    /// The piece at the origin does not belong to the side to move.
    #[error("it is {to_move}'s turn but the piece belongs to {owner}")]
    NotYourTurn { to_move: Side, owner: Side },

    /// The origin square is empty.
    #[error("no piece on the origin square")]
    EmptyOrigin,

    /// The piece carries the pinned flag.
    #[error("the piece is pinned")]
    Pinned,

    /// Origin and target are the same square.
    #[error("origin and target are the same square")]
    NullMove,

    /// The side to move has its check flag raised.
    #[error("{0} is in check")]
    InCheck(Side),

    /// The target is not among the piece's generated moves.
    #[error("target is not reachable by this piece")]
    Unreachable,
}

/// Unified error type for the kernel.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KernelError {
    /// A move was refused by the validator. The board is unchanged.
    #[error("illegal move {origin} -> {target}: {reason}")]
    IllegalMove {
        origin: Position,
        target: Position,
        reason: MoveRejection,
    },

    /// Move generation was requested for an empty square.
    #[error("cannot generate moves for empty square {0}")]
    EmptySquare(Position),

    /// A caller-supplied move list allowed a target the board no longer does.
    #[error("stale move list: {origin} -> {target} is no longer reachable")]
    StaleMoveList { origin: Position, target: Position },

    /// A commit was attempted with no square selected.
    #[error("no square is selected")]
    NoSelection,

    /// A cell has a piece without a side, or a side without a piece.
    #[error("inconsistent cell at {0}")]
    InconsistentCell(Position),

    /// Boards must start with Light or Dark to move.
    #[error("side to move must be light or dark")]
    InvalidTurn,

    /// The board-layout string could not be parsed.
    #[error("malformed board layout: {0}")]
    MalformedLayout(String),

    /// An algebraic square such as `e2` could not be parsed.
    #[error("invalid square '{0}'")]
    InvalidSquare(String),
}

pub type KernelResult<T> = Result<T, KernelError>;
