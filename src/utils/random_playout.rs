//! Seeded random self-play for smoke testing and benchmarks.
//!
//! Each ply collects every move the validator accepts for the side to move,
//! picks one with a seeded RNG, and plays it through a [`GameSession`]. The
//! kernel has no game-over detection, so a playout stops when the side to
//! move has nothing accepted (which includes being frozen by a raised check
//! flag) or when the ply limit is reached.

use log::info;
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::chess_errors::KernelResult;
use crate::game_state::chess_rules::STARTING_LAYOUT;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_validator::validate_move;
use crate::move_generation::move_generator::generate_all_moves;
use crate::session::game_session::GameSession;

#[derive(Debug, Clone)]
pub struct PlayoutConfig {
    pub max_plies: u16,
    pub seed: u64,
    pub layout: String,
}

impl Default for PlayoutConfig {
    fn default() -> Self {
        Self {
            max_plies: 200,
            seed: 0,
            layout: STARTING_LAYOUT.to_owned(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayoutOutcome {
    /// The ply limit was reached.
    PlyLimit,
    /// The side to move had no accepted move.
    Stalled { side: Side, in_check: bool },
}

#[derive(Debug, Clone)]
pub struct PlayoutReport {
    pub outcome: PlayoutOutcome,
    pub session: GameSession,
    pub plies: u16,
    pub castles: u16,
    pub promotions: u16,
}

impl PlayoutReport {
    pub fn report(&self) -> String {
        let outcome = match self.outcome {
            PlayoutOutcome::PlyLimit => "ply_limit".to_owned(),
            PlayoutOutcome::Stalled { side, in_check } => {
                format!("stalled side={side} in_check={in_check}")
            }
        };
        format!(
            "outcome={outcome} plies={} castles={} promotions={} check_light={} check_dark={}",
            self.plies,
            self.castles,
            self.promotions,
            self.session.board().is_in_check(Side::Light),
            self.session.board().is_in_check(Side::Dark),
        )
    }
}

/// Every `(origin, target)` the side to move may play right now.
pub fn accepted_moves(board: &Board) -> Vec<(Position, Position)> {
    generate_all_moves(board, board.side_to_move())
        .into_iter()
        .filter(|&(origin, target)| validate_move(board, origin, target, None))
        .collect()
}

pub fn play_random_game(config: &PlayoutConfig) -> KernelResult<PlayoutReport> {
    let board = Board::from_layout(&config.layout)?;
    play_random_game_from(board, config.seed, config.max_plies)
}

pub fn play_random_game_from(
    board: Board,
    seed: u64,
    max_plies: u16,
) -> KernelResult<PlayoutReport> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut session = GameSession::new(board);
    let mut castles = 0u16;
    let mut promotions = 0u16;

    for ply in 0..max_plies {
        let candidates = accepted_moves(session.board());
        if candidates.is_empty() {
            let side = session.board().side_to_move();
            let in_check = session.board().is_in_check(side);
            info!("playout stalled after {ply} plies: {side} has no accepted move");
            return Ok(PlayoutReport {
                outcome: PlayoutOutcome::Stalled { side, in_check },
                session,
                plies: ply,
                castles,
                promotions,
            });
        }

        let (origin, target) = candidates[rng.random_range(0..candidates.len())];
        let was_pawn = session.board().cell(origin).holds(PieceKind::Pawn);
        let played = session.play(origin, target)?;
        if played.changed.len() == 4 {
            castles += 1;
        }
        if was_pawn && session.board().cell(target).holds(PieceKind::Queen) {
            promotions += 1;
        }
    }

    info!("playout reached the {max_plies} ply limit");
    Ok(PlayoutReport {
        outcome: PlayoutOutcome::PlyLimit,
        session,
        plies: max_plies,
        castles,
        promotions,
    })
}
