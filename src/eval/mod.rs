//! Position evaluation
//!
//! Scores are `f64` from the point of view of a perspective player:
//! - [`WIN`] (`+inf`): the perspective player has already won
//! - [`LOSS`] (`-inf`): the perspective player has already lost
//! - anything in between is a heuristic estimate
//!
//! Evaluators take `&mut self` so they can keep private memo state between
//! calls. That state belongs to the evaluator instance, never to the process.

pub mod heuristic;

use crate::game::GameState;

pub use heuristic::{
    AggressiveMobility, ClosingDistance, EarlyPressure, Heuristic, HeuristicEvaluator,
    WeightedMobility,
};

/// Score of a position the perspective player has won
pub const WIN: f64 = f64::INFINITY;
/// Score of a position the perspective player has lost
pub const LOSS: f64 = f64::NEG_INFINITY;

/// Scores a position for one player.
pub trait Evaluator<S: GameState> {
    /// Never returns NaN; the search relies on a total order.
    fn evaluate(&mut self, state: &S, perspective: S::Player) -> f64;
}

impl<S, F> Evaluator<S> for F
where
    S: GameState,
    F: FnMut(&S, S::Player) -> f64,
{
    #[inline]
    fn evaluate(&mut self, state: &S, perspective: S::Player) -> f64 {
        self(state, perspective)
    }
}
