//! Win condition checking for Isolation
//!
//! The only way a game ends: the side to move has no legal moves and loses.

use crate::board::{Board, Player};

use super::moves::mobility;

/// True if `player` is to move and cannot
pub fn is_loser(board: &Board, player: Player) -> bool {
    board.active_player() == player && mobility(board, player) == 0
}

/// True if `player` is waiting and the opponent cannot move
pub fn is_winner(board: &Board, player: Player) -> bool {
    board.inactive_player() == player && mobility(board, board.active_player()) == 0
}

/// Winner of a finished game
pub fn winner(board: &Board) -> Option<Player> {
    if mobility(board, board.active_player()) == 0 {
        Some(board.inactive_player())
    } else {
        None
    }
}
