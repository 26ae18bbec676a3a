//! Select-then-commit interaction over a single board.
//!
//! Mirrors how a presentation layer drives the kernel: selecting a square
//! generates its move hints, committing a target validates against those
//! hints, applies the move, and refreshes check state for the piece that
//! moved. A `GameSession` is a plain owned value; share it between threads
//! only behind one lock per game, since an apply is several non-atomic edits.

use log::{debug, info};

use crate::chess_errors::{KernelError, KernelResult};
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_checks::refresh_check_state;
use crate::move_generation::legal_move_validator::validate_move;
use crate::move_generation::move_generator::generate_moves;

#[derive(Debug, Clone)]
struct Selection {
    origin: Position,
    hints: Vec<Position>,
}

/// A move the session applied, with the squares it changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayedMove {
    pub origin: Position,
    pub target: Position,
    pub side: Side,
    pub changed: Vec<Position>,
    pub gave_check: Option<Side>,
}

#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    selection: Option<Selection>,
    history: Vec<PlayedMove>,
}

impl GameSession {
    pub fn new(board: Board) -> Self {
        Self {
            board,
            selection: None,
            history: Vec::new(),
        }
    }

    pub fn new_game() -> Self {
        Self::new(Board::new_game())
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn history(&self) -> &[PlayedMove] {
        &self.history
    }

    pub fn selected(&self) -> Option<Position> {
        self.selection.as_ref().map(|selection| selection.origin)
    }

    pub fn hints(&self) -> &[Position] {
        self.selection
            .as_ref()
            .map(|selection| selection.hints.as_slice())
            .unwrap_or(&[])
    }

    /// Selects `origin` and returns its move hints.
    ///
    /// Empty squares are ignored: the previous selection is dropped and
    /// `None` is returned.
    pub fn select(&mut self, origin: Position) -> Option<&[Position]> {
        self.selection = None;
        if self.board.cell(origin).is_empty() {
            return None;
        }
        let hints = generate_moves(&self.board, origin).ok()?;
        let selection = self.selection.insert(Selection { origin, hints });
        Some(selection.hints.as_slice())
    }

    /// Commits the current selection to `target`.
    ///
    /// The selection is consumed whether or not the move is accepted.
    /// Rejected moves leave the board and turn untouched.
    pub fn commit(&mut self, target: Position) -> KernelResult<&PlayedMove> {
        let Some(Selection { origin, hints }) = self.selection.take() else {
            return Err(KernelError::NoSelection);
        };
        self.play_with_hints(origin, target, Some(hints.as_slice()))
    }

    /// Selects and commits in one step.
    pub fn play(&mut self, origin: Position, target: Position) -> KernelResult<&PlayedMove> {
        self.selection = None;
        self.play_with_hints(origin, target, None)
    }

    /// Whether the side to move may play `origin -> target` right now.
    pub fn is_legal(&self, origin: Position, target: Position) -> bool {
        validate_move(&self.board, origin, target, None)
    }

    fn play_with_hints(
        &mut self,
        origin: Position,
        target: Position,
        hints: Option<&[Position]>,
    ) -> KernelResult<&PlayedMove> {
        let side = self.board.side_to_move();
        let changed = apply_move(&mut self.board, origin, target, hints)?;
        let gave_check = refresh_check_state(&mut self.board, target)?;
        if let Some(checked) = gave_check {
            info!("{side} puts {checked} in check with {origin} -> {target}");
        } else {
            debug!("{side} played {origin} -> {target}");
        }

        let index = self.history.len();
        self.history.push(PlayedMove {
            origin,
            target,
            side,
            changed,
            gave_check,
        });
        Ok(&self.history[index])
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new_game()
    }
}
