//! Canonical rule constants.
//!
//! Board layouts list rank 0 first; lowercase letters are Light pieces and
//! uppercase letters are Dark pieces.

/// Standard starting setup in the kernel's board-layout notation.
pub const STARTING_LAYOUT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR/";

/// Files a castling king travels.
pub const CASTLING_KING_STEP: i8 = 2;

/// Minimum distance between king and corner piece for castling to fit on the board.
pub const CASTLING_MIN_ROOK_DISTANCE: i8 = 3;
