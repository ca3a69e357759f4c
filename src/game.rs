//! Game abstraction consumed by the search
//!
//! The search never mutates a position: every ply produces a fresh state with
//! [`GameState::apply`], owned by the recursive frame that created it.

use std::fmt::Debug;

use crate::board::{Board, Player, Pos};

/// A two-player, zero-sum, perfect-information game position.
pub trait GameState: Sized {
    /// Small copyable move identifier
    type Move: Copy + Eq + Debug;
    /// Side identifier, used as the evaluation perspective
    type Player: Copy + Eq + Debug;

    /// Legal moves for the side to move, in a deterministic order.
    fn legal_moves(&self) -> Vec<Self::Move>;

    /// Position after the side to move plays `mv`.
    ///
    /// `mv` must come from [`GameState::legal_moves`]; anything else is a
    /// caller bug and implementations may panic.
    fn apply(&self, mv: Self::Move) -> Self;

    /// Side to move
    fn active_player(&self) -> Self::Player;

    /// No legal moves for the side to move
    fn is_terminal(&self) -> bool {
        self.legal_moves().is_empty()
    }

    /// Upper bound on the number of plies left in the game, if known.
    /// Iterative deepening never searches past it.
    fn horizon(&self) -> Option<u32> {
        None
    }
}

impl GameState for Board {
    type Move = Pos;
    type Player = Player;

    fn legal_moves(&self) -> Vec<Pos> {
        Board::legal_moves(self)
    }

    /// # Panics
    ///
    /// Panics if `mv` is not a legal move; use [`Board::forecast_move`] for
    /// the checked form.
    fn apply(&self, mv: Pos) -> Board {
        match self.forecast_move(mv) {
            Ok(next) => next,
            Err(err) => panic!("{err}"),
        }
    }

    fn active_player(&self) -> Player {
        Board::active_player(self)
    }

    fn is_terminal(&self) -> bool {
        crate::rules::mobility(self, Board::active_player(self)) == 0
    }

    fn horizon(&self) -> Option<u32> {
        Some(self.cells() as u32)
    }
}
