use crate::game_state::chess_types::*;

/// Contents of one square: an optional piece, its side, and per-cell flags.
///
/// An empty cell always has `piece == None` and `side == Side::None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cell {
    pub piece: Option<PieceKind>,
    pub side: Side,
    pub flags: CellFlags,
}

impl Cell {
    pub const EMPTY: Cell = Cell {
        piece: None,
        side: Side::None,
        flags: 0,
    };

    /// An occupied cell whose piece has not moved yet.
    #[inline]
    pub const fn unmoved(piece: PieceKind, side: Side) -> Self {
        Self {
            piece: Some(piece),
            side,
            flags: FLAG_FIRST_MOVE,
        }
    }

    /// An occupied cell whose piece has already moved.
    #[inline]
    pub const fn moved(piece: PieceKind, side: Side) -> Self {
        Self {
            piece: Some(piece),
            side,
            flags: 0,
        }
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.piece.is_none()
    }

    #[inline]
    pub const fn has_flag(&self, flag: CellFlags) -> bool {
        self.flags & flag != 0
    }

    #[inline]
    pub const fn is_first_move(&self) -> bool {
        self.has_flag(FLAG_FIRST_MOVE)
    }

    #[inline]
    pub const fn is_pinned(&self) -> bool {
        self.has_flag(FLAG_PINNED)
    }

    /// True when the cell holds a piece belonging to the opponent of `side`.
    #[inline]
    pub fn is_enemy_of(&self, side: Side) -> bool {
        self.piece.is_some() && side != Side::None && self.side == side.opposite()
    }

    #[inline]
    pub fn holds(&self, piece: PieceKind) -> bool {
        self.piece == Some(piece)
    }
}
