//! Main search engine: one agent type for every strategy
//!
//! The engine owns its [`SearchConfig`] and its evaluator (including any
//! heuristic memo state), so independent games need independent engines and
//! nothing is shared between them. Each call to [`SearchEngine::get_move`]
//! is self-contained:
//!
//! 1. **Fixed-depth minimax**: full minimax to the configured depth
//! 2. **Fixed-depth alpha-beta**: same decision, pruned
//! 3. **Iterative alpha-beta**: deepen until the turn clock runs low
//!
//! # Example
//!
//! ```
//! use isolation::{Board, Heuristic, SearchConfig, SearchEngine};
//! use std::time::Duration;
//!
//! let config = SearchConfig::iterative(Duration::from_millis(10)).unwrap();
//! let mut engine = SearchEngine::new(config, Heuristic::Aggressive.evaluator());
//!
//! let board = Board::new(5, 5).unwrap();
//! let outcome = engine.get_move_within(&board, Duration::from_millis(100));
//! println!("Best move: {:?} (depth {})", outcome.best_move, outcome.depth);
//! ```

use std::time::{Duration, Instant};

use tracing::{debug, warn};

use crate::config::{SearchConfig, Strategy};
use crate::eval::Evaluator;
use crate::game::GameState;
use crate::search::{
    iterative_deepening, AlphaBeta, Countdown, Deadline, Minimax, SearchResult, SearchStats,
    SearchTimeout, Termination, TimeLeft,
};

/// Result of a move search with statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome<M> {
    /// Move to play. `None` either because the position has no legal moves
    /// or because the deadline hit before any depth completed; check
    /// `termination` to tell them apart.
    pub best_move: Option<M>,
    /// Deepest depth that completed without cancellation (0 if none)
    pub depth: u32,
    /// Root value of `best_move` at `depth`
    pub score: f64,
    pub termination: Termination,
    /// Nodes visited, including work discarded by cancellation
    pub nodes: u64,
    pub elapsed: Duration,
}

impl<M> SearchOutcome<M> {
    fn from_result(
        result: SearchResult<M>,
        termination: Termination,
        stats: &SearchStats,
        elapsed: Duration,
    ) -> Self {
        Self {
            best_move: result.best_move,
            depth: result.depth,
            score: result.score,
            termination,
            nodes: stats.nodes,
            elapsed,
        }
    }

    fn empty(termination: Termination, stats: &SearchStats, elapsed: Duration) -> Self {
        Self {
            best_move: None,
            depth: 0,
            score: 0.0,
            termination,
            nodes: stats.nodes,
            elapsed,
        }
    }

    /// Search stopped before the deadline
    pub fn is_complete(&self) -> bool {
        self.termination != Termination::Cancelled
    }
}

/// Time-bounded adversarial search agent.
///
/// Generic over the evaluator; the game type is chosen per call, so one
/// engine works with any [`GameState`] its evaluator can score.
#[derive(Debug, Clone)]
pub struct SearchEngine<E> {
    config: SearchConfig,
    evaluator: E,
}

impl<E> SearchEngine<E> {
    /// Bind a configuration and an evaluator.
    #[must_use]
    pub fn new(config: SearchConfig, evaluator: E) -> Self {
        Self { config, evaluator }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn evaluator(&self) -> &E {
        &self.evaluator
    }

    pub fn evaluator_mut(&mut self) -> &mut E {
        &mut self.evaluator
    }

    /// Search with a wall-clock budget starting now.
    pub fn get_move_within<S>(&mut self, state: &S, budget: Duration) -> SearchOutcome<S::Move>
    where
        S: GameState,
        E: Evaluator<S>,
    {
        self.get_move(state, Countdown::new(budget))
    }

    /// Pick a move for the side to move in `state`.
    ///
    /// `time_left` reports the time remaining in the turn; the search aborts
    /// once it drops below the configured threshold. A timeout never escapes
    /// this call: fixed-depth searches report `None`, iterative searches fall
    /// back to the deepest completed depth.
    pub fn get_move<S, C>(&mut self, state: &S, time_left: C) -> SearchOutcome<S::Move>
    where
        S: GameState,
        E: Evaluator<S>,
        C: TimeLeft,
    {
        let start = Instant::now();
        let mut deadline = Deadline::new(time_left, self.config.threshold());

        let outcome = match (self.config.strategy(), self.config.depth()) {
            (Strategy::Minimax, Some(depth)) => {
                let mut searcher = Minimax::new(&mut self.evaluator, &mut deadline);
                let result = searcher.search(state, depth);
                Self::fixed_outcome(result, searcher.stats(), start)
            }
            (Strategy::AlphaBeta, Some(depth)) => {
                let mut searcher = AlphaBeta::new(&mut self.evaluator, &mut deadline);
                let result = searcher.search(state, depth);
                Self::fixed_outcome(result, searcher.stats(), start)
            }
            // SearchConfig rejects minimax without a depth
            (_, None) => {
                let run = iterative_deepening(
                    state,
                    self.config.max_depth(),
                    &mut self.evaluator,
                    &mut deadline,
                );
                match run.completed {
                    Some(result) => SearchOutcome::from_result(
                        result,
                        run.termination,
                        &run.stats,
                        start.elapsed(),
                    ),
                    None => SearchOutcome::empty(run.termination, &run.stats, start.elapsed()),
                }
            }
        };

        if outcome.best_move.is_none() && outcome.termination != Termination::NoLegalMoves {
            warn!(
                elapsed_ms = outcome.elapsed.as_millis() as u64,
                "deadline reached before any depth completed"
            );
        }
        debug!(
            depth = outcome.depth,
            nodes = outcome.nodes,
            termination = %outcome.termination,
            elapsed_ms = outcome.elapsed.as_millis() as u64,
            "search finished"
        );
        outcome
    }

    fn fixed_outcome<M>(
        result: Result<SearchResult<M>, SearchTimeout>,
        stats: &SearchStats,
        start: Instant,
    ) -> SearchOutcome<M> {
        match result {
            Ok(result) => {
                if result.best_move.is_none() {
                    return SearchOutcome::empty(Termination::NoLegalMoves, stats, start.elapsed());
                }
                SearchOutcome::from_result(result, Termination::Completed, stats, start.elapsed())
            }
            Err(SearchTimeout) => SearchOutcome::empty(Termination::Cancelled, stats, start.elapsed()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Board, Pos};
    use crate::eval::{Heuristic, WeightedMobility};
    use crate::search::Unbounded;

    const THRESHOLD: Duration = Duration::from_millis(10);

    #[test]
    fn test_engine_fixed_minimax_and_alphabeta_agree() {
        let board = Board::new(4, 4).unwrap();
        let mut minimax = SearchEngine::new(
            SearchConfig::fixed_minimax(3, THRESHOLD).unwrap(),
            WeightedMobility,
        );
        let mut alphabeta = SearchEngine::new(
            SearchConfig::fixed_alphabeta(3, THRESHOLD).unwrap(),
            WeightedMobility,
        );

        let a = minimax.get_move(&board, Unbounded);
        let b = alphabeta.get_move(&board, Unbounded);
        assert_eq!(a.best_move, b.best_move);
        assert_eq!(a.score, b.score);
        assert_eq!(a.termination, Termination::Completed);
        assert!(b.nodes <= a.nodes);
    }

    #[test]
    fn test_engine_iterative_unbounded_exhausts_small_board() {
        let board = Board::new(3, 3).unwrap();
        let mut engine = SearchEngine::new(
            SearchConfig::iterative(THRESHOLD).unwrap(),
            Heuristic::Weighted.evaluator(),
        );
        let outcome = engine.get_move(&board, Unbounded);
        assert!(outcome.best_move.is_some());
        assert_eq!(outcome.termination, Termination::Exhausted);
        assert!(outcome.depth >= 1);
        assert!(outcome.is_complete());
    }

    #[test]
    fn test_engine_immediate_timeout_yields_no_move() {
        let board = Board::default();
        let mut engine = SearchEngine::new(SearchConfig::default(), WeightedMobility);
        let outcome = engine.get_move(&board, || Duration::ZERO);
        assert_eq!(outcome.best_move, None);
        assert_eq!(outcome.depth, 0);
        assert_eq!(outcome.termination, Termination::Cancelled);
        // The position itself is playable: the caller must not read this as game over
        assert!(!GameState::is_terminal(&board));
    }

    #[test]
    fn test_engine_fixed_depth_timeout() {
        let board = Board::default();
        let mut engine = SearchEngine::new(
            SearchConfig::fixed_minimax(3, THRESHOLD).unwrap(),
            WeightedMobility,
        );
        let mut polls = 0u32;
        let outcome = engine.get_move(&board, move || {
            polls += 1;
            if polls > 50 {
                Duration::ZERO
            } else {
                Duration::MAX
            }
        });
        assert_eq!(outcome.best_move, None);
        assert_eq!(outcome.termination, Termination::Cancelled);
        assert_eq!(outcome.nodes, 50);
    }

    #[test]
    fn test_engine_max_depth_cap() {
        let board = Board::new(5, 5).unwrap();
        let mut engine = SearchEngine::new(
            SearchConfig::iterative(THRESHOLD).unwrap().with_max_depth(2),
            WeightedMobility,
        );
        let outcome = engine.get_move(&board, Unbounded);
        assert_eq!(outcome.depth, 2);
        assert_eq!(outcome.termination, Termination::Exhausted);
    }

    #[test]
    fn test_engine_multiple_searches_are_deterministic() {
        let mut board = Board::new(5, 5).unwrap();
        board.apply_move(Pos::new(2, 2)).unwrap();
        board.apply_move(Pos::new(0, 0)).unwrap();
        let mut engine = SearchEngine::new(
            SearchConfig::iterative(THRESHOLD).unwrap().with_max_depth(4),
            Heuristic::Aggressive.evaluator(),
        );

        let first = engine.get_move(&board, Unbounded);
        let second = engine.get_move(&board, Unbounded);
        assert_eq!(first.best_move, second.best_move);
        assert_eq!(first.depth, second.depth);
    }

    /// Clock that allows `polls` checks, then reports no time left
    fn poll_budget(mut polls: u32) -> impl FnMut() -> Duration {
        move || {
            if polls == 0 {
                return Duration::ZERO;
            }
            polls -= 1;
            Duration::MAX
        }
    }

    #[test]
    fn test_engine_falls_back_to_completed_depth() {
        let board = Board::default();
        let mut engine = SearchEngine::new(SearchConfig::default(), WeightedMobility);
        // Depth 1 takes 1 + 49 polls; depth 2 needs far more than the rest
        let outcome = engine.get_move(&board, poll_budget(120));
        assert_eq!(outcome.depth, 1);
        assert_eq!(outcome.termination, Termination::Cancelled);
        assert_eq!(outcome.nodes, 120);

        let mut fixed = SearchEngine::new(
            SearchConfig::fixed_alphabeta(1, THRESHOLD).unwrap(),
            WeightedMobility,
        );
        assert_eq!(outcome.best_move, fixed.get_move(&board, Unbounded).best_move);
    }

    #[test]
    fn test_engine_within_generous_budget() {
        let board = Board::new(3, 3).unwrap();
        let mut engine = SearchEngine::new(SearchConfig::default(), WeightedMobility);
        let outcome = engine.get_move_within(&board, Duration::from_secs(30));
        assert!(outcome.best_move.is_some());
        assert_eq!(outcome.termination, Termination::Exhausted);
    }

    #[test]
    fn test_engine_no_legal_moves_reports_depth_zero() {
        // Second is trapped in the center of a 3x3 board and on move
        let mut board = Board::new(3, 3).unwrap();
        for pos in [Pos::new(0, 0), Pos::new(1, 1), Pos::new(1, 2)] {
            board.apply_move(pos).unwrap();
        }

        for config in [
            SearchConfig::fixed_alphabeta(4, THRESHOLD).unwrap(),
            SearchConfig::fixed_minimax(4, THRESHOLD).unwrap(),
            SearchConfig::iterative(THRESHOLD).unwrap(),
        ] {
            let outcome = SearchEngine::new(config, WeightedMobility).get_move(&board, Unbounded);
            assert_eq!(outcome.best_move, None);
            assert_eq!(outcome.depth, 0);
            assert_eq!(outcome.termination, Termination::NoLegalMoves);
        }
    }
}
