//! Game rules for knight-move Isolation
//!
//! This module implements the rule set:
//! - Opening placement (any blank cell)
//! - Knight-move movement onto blank cells
//! - Win/loss: the side to move with no legal moves loses

pub mod moves;
pub mod win;

// Re-exports for convenient access
pub use moves::{is_valid_move, legal_moves_for, mobility, KNIGHT_DIRECTIONS};
pub use win::{is_loser, is_winner, winner};
