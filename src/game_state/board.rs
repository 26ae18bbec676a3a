//! Mutable game board: the cell grid plus turn and check flags.
//!
//! A `Board` is built once per game and then mutated in place by the move
//! executor. Flags follow two rules: exactly one turn flag is set, and the
//! check flags are independent booleans raised by the check-state tracker.

use std::ops::{Index, IndexMut};

use crate::chess_errors::{KernelError, KernelResult};
use crate::game_state::chess_rules::STARTING_LAYOUT;
use crate::game_state::chess_types::*;
use crate::utils::layout_parser::parse_layout;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
    flags: BoardFlags,
}

impl Board {
    /// Board with no pieces and Light to move.
    pub fn empty() -> Self {
        Self {
            cells: [[Cell::EMPTY; BOARD_SIZE]; BOARD_SIZE],
            flags: FLAG_TURN_LIGHT,
        }
    }

    /// Standard starting setup.
    pub fn new_game() -> Self {
        parse_layout(STARTING_LAYOUT).expect("starting layout should always parse")
    }

    pub fn from_layout(layout: &str) -> KernelResult<Self> {
        parse_layout(layout)
    }

    /// Builds a board from an already-parsed grid.
    ///
    /// Rejects grids where a cell has a piece without a side or the reverse.
    pub fn from_cells(
        cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
        to_move: Side,
    ) -> KernelResult<Self> {
        if to_move == Side::None {
            return Err(KernelError::InvalidTurn);
        }
        for (rank, row) in cells.iter().enumerate() {
            for (file, cell) in row.iter().enumerate() {
                if cell.piece.is_some() != (cell.side != Side::None) {
                    return Err(KernelError::InconsistentCell(Position::new(
                        rank as u8,
                        file as u8,
                    )));
                }
            }
        }
        Ok(Self {
            cells,
            flags: to_move.turn_flag(),
        })
    }

    #[inline]
    pub fn cell(&self, position: Position) -> &Cell {
        &self.cells[position.rank() as usize][position.file() as usize]
    }

    #[inline]
    pub fn cell_mut(&mut self, position: Position) -> &mut Cell {
        &mut self.cells[position.rank() as usize][position.file() as usize]
    }

    /// Places a piece, replacing whatever was there. Used for setup.
    pub fn place(&mut self, position: Position, cell: Cell) {
        *self.cell_mut(position) = cell;
    }

    pub fn clear(&mut self, position: Position) {
        *self.cell_mut(position) = Cell::EMPTY;
    }

    pub fn cells(&self) -> &[[Cell; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    /// Occupied squares in rank-major order.
    pub fn occupied(&self) -> impl Iterator<Item = (Position, &Cell)> + '_ {
        self.cells.iter().enumerate().flat_map(|(rank, row)| {
            row.iter().enumerate().filter_map(move |(file, cell)| {
                (!cell.is_empty()).then(|| (Position::new(rank as u8, file as u8), cell))
            })
        })
    }

    #[inline]
    pub fn flags(&self) -> BoardFlags {
        self.flags
    }

    #[inline]
    pub fn side_to_move(&self) -> Side {
        if self.flags & FLAG_TURN_LIGHT != 0 {
            Side::Light
        } else {
            Side::Dark
        }
    }

    /// Hands the move to the other side. Exactly one turn flag stays set.
    #[inline]
    pub fn switch_turn(&mut self) {
        self.flags ^= FLAG_TURN_LIGHT | FLAG_TURN_DARK;
    }

    #[inline]
    pub fn is_in_check(&self, side: Side) -> bool {
        self.flags & side.check_flag() != 0
    }

    /// Raises the check flag for `side`. Nothing in the kernel lowers it.
    #[inline]
    pub fn raise_check(&mut self, side: Side) {
        self.flags |= side.check_flag();
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new_game()
    }
}

impl Index<Position> for Board {
    type Output = Cell;

    fn index(&self, position: Position) -> &Cell {
        self.cell(position)
    }
}

impl IndexMut<Position> for Board {
    fn index_mut(&mut self, position: Position) -> &mut Cell {
        self.cell_mut(position)
    }
}
