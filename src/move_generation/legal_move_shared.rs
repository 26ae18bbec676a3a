//! Ray and step walkers shared by the per-piece generators.

use crate::game_state::chess_types::*;

pub const AXIS_DIRECTIONS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, -1), (0, 1)];
pub const DIAGONAL_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, -1), (-1, 1)];
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-1, -2),
    (-2, 1),
    (1, -2),
    (2, -1),
    (-1, 2),
    (2, 1),
    (1, 2),
];
pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Walks each direction until the board edge or the first occupied square.
///
/// The blocking square is included when it holds an opposing piece.
pub fn push_sliding_targets(
    board: &Board,
    from: Position,
    side: Side,
    directions: &[(i8, i8)],
    out: &mut Vec<Position>,
) {
    for &(d_rank, d_file) in directions {
        let mut current = from.offset(d_rank, d_file);
        while let Some(to) = current {
            let cell = board.cell(to);
            if !cell.is_empty() {
                if cell.is_enemy_of(side) {
                    out.push(to);
                }
                break;
            }
            out.push(to);
            current = to.offset(d_rank, d_file);
        }
    }
}

/// Pushes every in-bounds offset square not held by a friendly piece.
pub fn push_step_targets(
    board: &Board,
    from: Position,
    side: Side,
    offsets: &[(i8, i8)],
    out: &mut Vec<Position>,
) {
    out.extend(
        offsets
            .iter()
            .filter_map(|&(d_rank, d_file)| from.offset(d_rank, d_file))
            .filter(|&to| board.cell(to).side != side),
    );
}

/// True when every square strictly between `from` and `to` on one rank is empty.
pub fn rank_path_is_clear(board: &Board, from: Position, to: Position) -> bool {
    debug_assert_eq!(from.rank(), to.rank());
    let (low, high) = if from.file() < to.file() {
        (from.file(), to.file())
    } else {
        (to.file(), from.file())
    };
    (low + 1..high).all(|file| board.cell(Position::new(from.rank(), file)).is_empty())
}
