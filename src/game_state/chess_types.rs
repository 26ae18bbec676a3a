//! Value types shared by every layer of the kernel.
//!
//! Sides, piece kinds, board coordinates and the flag bits stored on cells
//! and on the board. None of these carry behavior beyond small lookups.

use std::fmt;

pub use crate::game_state::board::Board;
pub use crate::game_state::cell::Cell;

/// Number of ranks and files on the board.
pub const BOARD_SIZE: usize = 8;

/// Per-cell flag: the occupant has not moved yet (pawn double step, castling).
pub const FLAG_FIRST_MOVE: CellFlags = 1 << 0;
/// Per-cell flag: the occupant may not move. Honored, never populated.
pub const FLAG_PINNED: CellFlags = 1 << 1;

/// Board flag: Light's king has been reached by a generated Dark move.
pub const FLAG_CHECK_LIGHT: BoardFlags = 1 << 0;
/// Board flag: Dark's king has been reached by a generated Light move.
pub const FLAG_CHECK_DARK: BoardFlags = 1 << 1;
/// Board flag: Light to move.
pub const FLAG_TURN_LIGHT: BoardFlags = 1 << 2;
/// Board flag: Dark to move.
pub const FLAG_TURN_DARK: BoardFlags = 1 << 3;

pub type CellFlags = u8;
pub type BoardFlags = u8;

/// Owner of a cell. `None` only ever appears on empty cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Side {
    Light,
    Dark,
    #[default]
    None,
}

impl Side {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Side::Light => Side::Dark,
            Side::Dark => Side::Light,
            Side::None => Side::None,
        }
    }

    /// Rank direction a pawn of this side advances in.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Side::Light => 1,
            Side::Dark => -1,
            Side::None => 0,
        }
    }

    /// Rank a pawn of this side promotes on.
    #[inline]
    pub const fn promotion_rank(self) -> Option<u8> {
        match self {
            Side::Light => Some(BOARD_SIZE as u8 - 1),
            Side::Dark => Some(0),
            Side::None => None,
        }
    }

    #[inline]
    pub const fn check_flag(self) -> BoardFlags {
        match self {
            Side::Light => FLAG_CHECK_LIGHT,
            Side::Dark => FLAG_CHECK_DARK,
            Side::None => 0,
        }
    }

    #[inline]
    pub const fn turn_flag(self) -> BoardFlags {
        match self {
            Side::Light => FLAG_TURN_LIGHT,
            Side::Dark => FLAG_TURN_DARK,
            Side::None => 0,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Light => write!(f, "light"),
            Side::Dark => write!(f, "dark"),
            Side::None => write!(f, "none"),
        }
    }
}

/// Piece kind. Side is stored separately on the cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
    Pawn,
}

struct PieceDescriptor {
    ident: char,
    glyph: char,
    filled_glyph: char,
}

const DESCRIPTORS: [PieceDescriptor; 6] = [
    PieceDescriptor { ident: 'r', glyph: '♖', filled_glyph: '♜' },
    PieceDescriptor { ident: 'n', glyph: '♘', filled_glyph: '♞' },
    PieceDescriptor { ident: 'b', glyph: '♗', filled_glyph: '♝' },
    PieceDescriptor { ident: 'q', glyph: '♕', filled_glyph: '♛' },
    PieceDescriptor { ident: 'k', glyph: '♔', filled_glyph: '♚' },
    PieceDescriptor { ident: 'p', glyph: '♙', filled_glyph: '♟' },
];

pub const ALL_PIECE_KINDS: [PieceKind; 6] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Pawn,
];

impl PieceKind {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::Rook => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Queen => 3,
            PieceKind::King => 4,
            PieceKind::Pawn => 5,
        }
    }

    /// Lowercase identity code used by board layouts.
    #[inline]
    pub const fn ident(self) -> char {
        DESCRIPTORS[self.index()].ident
    }

    /// Outline glyph, shared by both sides.
    #[inline]
    pub const fn glyph(self) -> char {
        DESCRIPTORS[self.index()].glyph
    }

    #[inline]
    pub const fn glyph_for(self, side: Side) -> char {
        match side {
            Side::Dark => DESCRIPTORS[self.index()].filled_glyph,
            _ => DESCRIPTORS[self.index()].glyph,
        }
    }

    /// Case-insensitive lookup of an identity code.
    pub fn from_ident(ident: char) -> Option<Self> {
        let lower = ident.to_ascii_lowercase();
        ALL_PIECE_KINDS.into_iter().find(|kind| kind.ident() == lower)
    }
}

/// Zero-based board coordinate. Always in bounds once constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    rank: u8,
    file: u8,
}

impl Position {
    /// Builds a position, panicking if either coordinate is off the board.
    #[inline]
    pub const fn new(rank: u8, file: u8) -> Self {
        assert!(
            (rank as usize) < BOARD_SIZE && (file as usize) < BOARD_SIZE,
            "position out of bounds"
        );
        Self { rank, file }
    }

    /// Checked construction from signed coordinates.
    #[inline]
    pub fn try_new(rank: i8, file: i8) -> Option<Self> {
        let size = BOARD_SIZE as i8;
        if (0..size).contains(&rank) && (0..size).contains(&file) {
            Some(Self {
                rank: rank as u8,
                file: file as u8,
            })
        } else {
            None
        }
    }

    #[inline]
    pub const fn rank(self) -> u8 {
        self.rank
    }

    #[inline]
    pub const fn file(self) -> u8 {
        self.file
    }

    /// Position shifted by `(d_rank, d_file)`, or `None` if it leaves the board.
    #[inline]
    pub fn offset(self, d_rank: i8, d_file: i8) -> Option<Self> {
        Self::try_new(self.rank as i8 + d_rank, self.file as i8 + d_file)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", char::from(b'a' + self.file), self.rank + 1)
    }
}
