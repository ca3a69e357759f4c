//! Iterative deepening driver
//!
//! Runs alpha-beta at depth 1, 2, 3, ... and keeps the move of the deepest
//! pass that finished. A pass interrupted by the deadline is thrown away
//! whole; the caller only ever sees completed depths.

use std::fmt;

use tracing::debug;

use crate::eval::Evaluator;
use crate::game::GameState;

use super::{AlphaBeta, Deadline, SearchResult, SearchStats, TimeLeft};

/// Progress of an iterative search.
///
/// `Idle -> Running(1) -> CompletedDepth(1) -> Running(2) -> ...`, ending in
/// `Cancelled` or `Exhausted`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchPhase {
    Idle,
    Running(u32),
    CompletedDepth(u32),
    /// Deadline crossed while a depth was running
    Cancelled,
    /// Nothing left to deepen: depth bound reached, whole tree searched, or
    /// no legal moves at the root
    Exhausted,
}

impl SearchPhase {
    /// Start the next depth
    fn deepen(self) -> Self {
        match self {
            SearchPhase::Idle => SearchPhase::Running(1),
            SearchPhase::CompletedDepth(depth) => SearchPhase::Running(depth + 1),
            other => other,
        }
    }

    /// The running depth finished without interruption
    fn complete(self) -> Self {
        match self {
            SearchPhase::Running(depth) => SearchPhase::CompletedDepth(depth),
            other => other,
        }
    }

    pub fn is_finished(self) -> bool {
        matches!(self, SearchPhase::Cancelled | SearchPhase::Exhausted)
    }
}

/// Why a search stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// Fixed-depth search ran to its depth
    Completed,
    /// Iterative search ran out of depths worth searching
    Exhausted,
    /// Root has no legal moves
    NoLegalMoves,
    /// Deadline crossed; the result is from the last completed depth, if any
    Cancelled,
}

impl fmt::Display for Termination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Termination::Completed => "completed",
            Termination::Exhausted => "exhausted",
            Termination::NoLegalMoves => "no legal moves",
            Termination::Cancelled => "cancelled",
        };
        f.write_str(s)
    }
}

/// Outcome of an iterative deepening run.
#[derive(Debug, Clone)]
pub struct DeepeningResult<M> {
    /// Deepest completed pass, `None` if depth 1 never finished
    pub completed: Option<SearchResult<M>>,
    pub phase: SearchPhase,
    pub termination: Termination,
    /// Work done by every pass, including an interrupted one
    pub stats: SearchStats,
}

impl<M: Copy> DeepeningResult<M> {
    pub fn best_move(&self) -> Option<M> {
        self.completed.as_ref().and_then(|r| r.best_move)
    }

    /// Deepest depth that completed, 0 if none did
    pub fn depth(&self) -> u32 {
        self.completed.as_ref().map_or(0, |r| r.depth)
    }
}

/// Run alpha-beta at increasing depth until the deadline or the depth bound.
///
/// The bound is the smaller of `max_depth` and [`GameState::horizon`]. The
/// run also stops early when a pass returns no move, or when a pass never
/// reached its depth limit (every line ended in a terminal position).
pub fn iterative_deepening<S, E, C>(
    state: &S,
    max_depth: Option<u32>,
    evaluator: &mut E,
    deadline: &mut Deadline<C>,
) -> DeepeningResult<S::Move>
where
    S: GameState,
    E: Evaluator<S>,
    C: TimeLeft,
{
    let bound = match (max_depth, state.horizon()) {
        (Some(cap), Some(horizon)) => cap.min(horizon),
        (Some(cap), None) => cap,
        (None, Some(horizon)) => horizon,
        (None, None) => u32::MAX,
    }
    .max(1);

    let mut searcher = AlphaBeta::new(evaluator, deadline);
    let mut phase = SearchPhase::Idle;
    let mut completed: Option<SearchResult<S::Move>> = None;
    let mut termination = Termination::Exhausted;

    while !phase.is_finished() {
        phase = phase.deepen();
        let SearchPhase::Running(depth) = phase else {
            break;
        };

        match searcher.search(state, depth) {
            Err(_timeout) => {
                debug!(
                    depth,
                    kept_depth = completed.as_ref().map_or(0, |r| r.depth),
                    "deadline reached, discarding partial depth"
                );
                phase = SearchPhase::Cancelled;
                termination = Termination::Cancelled;
            }
            Ok(result) if result.best_move.is_none() => {
                phase = SearchPhase::Exhausted;
                termination = Termination::NoLegalMoves;
            }
            Ok(result) => {
                debug!(
                    depth,
                    score = result.score,
                    nodes = searcher.stats().nodes,
                    "depth complete"
                );
                let exhausted = !result.hit_depth_limit || depth >= bound;
                completed = Some(result);
                phase = phase.complete();
                if exhausted {
                    phase = SearchPhase::Exhausted;
                }
            }
        }
    }

    DeepeningResult {
        completed,
        phase,
        termination,
        stats: searcher.stats().clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_transitions() {
        let phase = SearchPhase::Idle.deepen();
        assert_eq!(phase, SearchPhase::Running(1));
        let phase = phase.complete();
        assert_eq!(phase, SearchPhase::CompletedDepth(1));
        assert_eq!(phase.deepen(), SearchPhase::Running(2));
        assert!(!phase.is_finished());
    }

    #[test]
    fn test_finished_phases_are_sticky() {
        assert_eq!(SearchPhase::Cancelled.deepen(), SearchPhase::Cancelled);
        assert_eq!(SearchPhase::Exhausted.complete(), SearchPhase::Exhausted);
        assert!(SearchPhase::Cancelled.is_finished());
        assert!(SearchPhase::Exhausted.is_finished());
    }
}
