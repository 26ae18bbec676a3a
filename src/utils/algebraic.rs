//! Algebraic square names (`a1`..`h8`) for positions.

use crate::chess_errors::{KernelError, KernelResult};
use crate::game_state::chess_types::Position;

pub fn algebraic_to_position(square: &str) -> KernelResult<Position> {
    let invalid = || KernelError::InvalidSquare(square.to_owned());
    let mut chars = square.chars();
    let (Some(file_ch), Some(rank_ch), None) = (chars.next(), chars.next(), chars.next()) else {
        return Err(invalid());
    };
    if !('a'..='h').contains(&file_ch) || !('1'..='8').contains(&rank_ch) {
        return Err(invalid());
    }
    Ok(Position::new(
        rank_ch as u8 - b'1',
        file_ch as u8 - b'a',
    ))
}

pub fn position_to_algebraic(position: Position) -> String {
    position.to_string()
}

/// Parses `"e2e4"` into an origin and target.
pub fn long_algebraic_to_positions(text: &str) -> KernelResult<(Position, Position)> {
    if text.len() != 4 || !text.is_ascii() {
        return Err(KernelError::InvalidSquare(text.to_owned()));
    }
    Ok((
        algebraic_to_position(&text[..2])?,
        algebraic_to_position(&text[2..])?,
    ))
}
