//! Move generation for Isolation
//!
//! A player that has not been placed yet may enter any blank cell. After
//! that, players move like a chess knight, and only onto blank cells.

use crate::board::{Board, Player, Pos};

/// Knight steps, in the enumeration order used for move generation
pub const KNIGHT_DIRECTIONS: [(i32, i32); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// Legal moves for `player` on the current board.
///
/// Opening placements come in row-major order; knight moves follow
/// [`KNIGHT_DIRECTIONS`]. The order is deterministic, which the search
/// relies on for tie-breaking.
pub fn legal_moves_for(board: &Board, player: Player) -> Vec<Pos> {
    match board.player_location(player) {
        None => board.blank_cells().collect(),
        Some(from) => KNIGHT_DIRECTIONS
            .iter()
            .filter_map(|&(dr, dc)| from.offset(dr, dc, board.width(), board.height()))
            .filter(|&to| board.is_blank(to))
            .collect(),
    }
}

/// Number of legal moves for `player`, without allocating
pub fn mobility(board: &Board, player: Player) -> usize {
    match board.player_location(player) {
        None => board.blank_cells().count(),
        Some(from) => KNIGHT_DIRECTIONS
            .iter()
            .filter_map(|&(dr, dc)| from.offset(dr, dc, board.width(), board.height()))
            .filter(|&to| board.is_blank(to))
            .count(),
    }
}

/// Check whether `player` may move to `pos`
pub fn is_valid_move(board: &Board, pos: Pos, player: Player) -> bool {
    if !board.is_blank(pos) {
        return false;
    }
    match board.player_location(player) {
        None => true,
        Some(from) => {
            let dr = i32::from(pos.row) - i32::from(from.row);
            let dc = i32::from(pos.col) - i32::from(from.col);
            KNIGHT_DIRECTIONS.contains(&(dr, dc))
        }
    }
}
