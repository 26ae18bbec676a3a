//! Crate root module declarations for the grid_chess rules kernel.
//!
//! The kernel works on an 8×8 grid of cells: `game_state` holds the value
//! types and the board, `move_generation` the per-piece generators plus the
//! validator, executor and check tracker, `session` the select/commit loop a
//! presentation layer drives, and `utils` layout parsing, rendering and
//! seeded self-play.

pub mod chess_errors;

pub mod game_state {
    pub mod board;
    pub mod cell;
    pub mod chess_rules;
    pub mod chess_types;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_shared;
    pub mod legal_move_validator;
    pub mod legal_moves_bishop;
    pub mod legal_moves_king;
    pub mod legal_moves_knight;
    pub mod legal_moves_pawn;
    pub mod legal_moves_queen;
    pub mod legal_moves_rook;
    pub mod move_generator;
}

pub mod session {
    pub mod game_session;
}

pub mod utils {
    pub mod algebraic;
    pub mod layout_parser;
    pub mod random_playout;
    pub mod render_board;
}

pub use chess_errors::{KernelError, KernelResult, MoveRejection};
pub use game_state::chess_types::{Board, Cell, PieceKind, Position, Side};
pub use move_generation::legal_move_apply::apply_move;
pub use move_generation::legal_move_checks::refresh_check_state;
pub use move_generation::legal_move_validator::validate_move;
pub use move_generation::move_generator::generate_moves;
pub use session::game_session::GameSession;
