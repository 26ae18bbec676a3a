//! Board-layout parser.
//!
//! A layout lists the eight ranks separated by `/`, rank 0 first, with an
//! optional trailing `/`. Within a rank, `r n b q k p` are Light pieces,
//! `R N B Q K P` are Dark pieces and the digits `1`..`8` skip that many empty
//! files. Every rank must cover exactly eight files. Every placed piece
//! starts with its first-move flag and Light moves first.

use crate::chess_errors::{KernelError, KernelResult};
use crate::game_state::chess_types::*;

pub fn parse_layout(layout: &str) -> KernelResult<Board> {
    let layout = layout.trim();
    let layout = layout.strip_suffix('/').unwrap_or(layout);

    let ranks: Vec<&str> = layout.split('/').collect();
    if ranks.len() != BOARD_SIZE {
        return Err(malformed(format!(
            "expected {BOARD_SIZE} ranks, found {}",
            ranks.len()
        )));
    }

    let mut board = Board::empty();
    for (rank, rank_str) in ranks.iter().enumerate() {
        parse_rank(rank as u8, rank_str, &mut board)?;
    }
    Ok(board)
}

fn parse_rank(rank: u8, rank_str: &str, board: &mut Board) -> KernelResult<()> {
    let mut file = 0usize;

    for ch in rank_str.chars() {
        if let Some(run) = ch.to_digit(10) {
            if !(1..=BOARD_SIZE as u32).contains(&run) {
                return Err(malformed(format!("invalid empty-square count '{ch}'")));
            }
            file += run as usize;
            if file > BOARD_SIZE {
                return Err(malformed(format!("rank {rank} has too many files")));
            }
            continue;
        }

        let (piece, side) = piece_from_layout_char(ch)
            .ok_or_else(|| malformed(format!("invalid piece character '{ch}'")))?;
        if file >= BOARD_SIZE {
            return Err(malformed(format!("rank {rank} has too many files")));
        }
        board.place(Position::new(rank, file as u8), Cell::unmoved(piece, side));
        file += 1;
    }

    if file != BOARD_SIZE {
        return Err(malformed(format!(
            "rank {rank} covers {file} files instead of {BOARD_SIZE}"
        )));
    }
    Ok(())
}

fn piece_from_layout_char(ch: char) -> Option<(PieceKind, Side)> {
    let side = if ch.is_ascii_lowercase() {
        Side::Light
    } else if ch.is_ascii_uppercase() {
        Side::Dark
    } else {
        return None;
    };
    PieceKind::from_ident(ch).map(|piece| (piece, side))
}

fn malformed(message: String) -> KernelError {
    KernelError::MalformedLayout(message)
}
