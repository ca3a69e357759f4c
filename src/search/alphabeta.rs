//! Depth-limited minimax with alpha-beta pruning
//!
//! Produces the same root decision as [`super::minimax`] while skipping
//! subtrees that cannot change it. Moves are searched in the order the game
//! state enumerates them; there is no move ordering.
//!
//! # Example
//!
//! ```
//! use isolation::board::Board;
//! use isolation::eval::WeightedMobility;
//! use isolation::search::{AlphaBeta, Deadline, Unbounded};
//! use std::time::Duration;
//!
//! let board = Board::new(4, 4).unwrap();
//! let mut eval = WeightedMobility;
//! let mut deadline = Deadline::new(Unbounded, Duration::from_millis(10));
//!
//! let mut searcher = AlphaBeta::new(&mut eval, &mut deadline);
//! let result = searcher.search(&board, 2).unwrap();
//! assert!(result.best_move.is_some());
//! ```

use tracing::trace;

use crate::eval::{Evaluator, LOSS, WIN};
use crate::game::GameState;

use super::{Deadline, SearchTimeout, TimeLeft};

/// Search statistics for diagnostics and tuning.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Recursive entries (each one polls the clock once)
    pub nodes: u64,
    /// Leaf evaluations (depth limit or terminal)
    pub evaluations: u64,
    /// Max-ply cutoffs (value >= beta)
    pub beta_cutoffs: u64,
    /// Min-ply cutoffs (value <= alpha)
    pub alpha_cutoffs: u64,
}

impl SearchStats {
    /// Total cutoffs of either kind
    pub fn cutoffs(&self) -> u64 {
        self.beta_cutoffs + self.alpha_cutoffs
    }
}

/// Result of one completed root search.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult<M> {
    /// Best move found, `None` if the root has no legal moves
    pub best_move: Option<M>,
    /// Root value of the best move from the root player's perspective
    pub score: f64,
    /// Depth limit this pass was run with
    pub depth: u32,
    /// Whether some leaf was cut off by the depth limit rather than by the
    /// end of the game. If not, a deeper pass would visit the same tree.
    pub hit_depth_limit: bool,
}

impl<M> SearchResult<M> {
    pub(crate) fn no_move(state_score: f64, depth: u32) -> Self {
        Self {
            best_move: None,
            score: state_score,
            depth,
            hit_depth_limit: false,
        }
    }
}

/// Alpha-beta searcher bound to one evaluator and one deadline.
///
/// Statistics accumulate across calls to [`AlphaBeta::search`], so an
/// iterative driver can reuse one searcher for every depth.
pub struct AlphaBeta<'a, E, C> {
    evaluator: &'a mut E,
    deadline: &'a mut Deadline<C>,
    stats: SearchStats,
    hit_depth_limit: bool,
}

impl<'a, E, C: TimeLeft> AlphaBeta<'a, E, C> {
    pub fn new(evaluator: &'a mut E, deadline: &'a mut Deadline<C>) -> Self {
        Self {
            evaluator,
            deadline,
            stats: SearchStats::default(),
            hit_depth_limit: false,
        }
    }

    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Search `state` to `depth_limit` plies and pick the root move.
    ///
    /// The root alone opens the `(-inf, +inf)` window. Ties keep the first
    /// move in enumeration order: the root only switches on strict
    /// improvement over alpha.
    pub fn search<S>(
        &mut self,
        state: &S,
        depth_limit: u32,
    ) -> Result<SearchResult<S::Move>, SearchTimeout>
    where
        S: GameState,
        E: Evaluator<S>,
    {
        self.deadline.check()?;
        self.stats.nodes += 1;
        self.hit_depth_limit = false;

        let perspective = state.active_player();
        let moves = state.legal_moves();
        let Some(&first) = moves.first() else {
            let score = self.leaf(state, perspective);
            return Ok(SearchResult::no_move(score, depth_limit));
        };

        let mut alpha = LOSS;
        let beta = WIN;
        let mut best_move = first;

        for mv in moves {
            let child = state.apply(mv);
            let value = self.min_value(&child, perspective, alpha, beta, 1, depth_limit)?;
            if value > alpha {
                alpha = value;
                best_move = mv;
            }
        }

        trace!(
            depth = depth_limit,
            nodes = self.stats.nodes,
            cutoffs = self.stats.cutoffs(),
            "alpha-beta pass complete"
        );

        Ok(SearchResult {
            best_move: Some(best_move),
            score: alpha,
            depth: depth_limit,
            hit_depth_limit: self.hit_depth_limit,
        })
    }

    #[inline]
    fn leaf<S>(&mut self, state: &S, perspective: S::Player) -> f64
    where
        S: GameState,
        E: Evaluator<S>,
    {
        self.stats.evaluations += 1;
        self.evaluator.evaluate(state, perspective)
    }

    /// Legal moves of a non-leaf node, or `None` if `state` is a leaf at `ply`.
    #[inline]
    fn expand<S: GameState>(&mut self, state: &S, ply: u32, depth_limit: u32) -> Option<Vec<S::Move>> {
        let moves = state.legal_moves();
        if moves.is_empty() {
            return None;
        }
        if ply >= depth_limit {
            self.hit_depth_limit = true;
            return None;
        }
        Some(moves)
    }

    fn max_value<S>(
        &mut self,
        state: &S,
        perspective: S::Player,
        mut alpha: f64,
        beta: f64,
        ply: u32,
        depth_limit: u32,
    ) -> Result<f64, SearchTimeout>
    where
        S: GameState,
        E: Evaluator<S>,
    {
        self.deadline.check()?;
        self.stats.nodes += 1;

        let Some(moves) = self.expand(state, ply, depth_limit) else {
            return Ok(self.leaf(state, perspective));
        };

        let mut value = LOSS;
        for mv in moves {
            let child = state.apply(mv);
            value = value.max(self.min_value(&child, perspective, alpha, beta, ply + 1, depth_limit)?);
            if value >= beta {
                self.stats.beta_cutoffs += 1;
                return Ok(value);
            }
            alpha = alpha.max(value);
        }
        Ok(value)
    }

    fn min_value<S>(
        &mut self,
        state: &S,
        perspective: S::Player,
        alpha: f64,
        mut beta: f64,
        ply: u32,
        depth_limit: u32,
    ) -> Result<f64, SearchTimeout>
    where
        S: GameState,
        E: Evaluator<S>,
    {
        self.deadline.check()?;
        self.stats.nodes += 1;

        let Some(moves) = self.expand(state, ply, depth_limit) else {
            return Ok(self.leaf(state, perspective));
        };

        let mut value = WIN;
        for mv in moves {
            let child = state.apply(mv);
            value = value.min(self.max_value(&child, perspective, alpha, beta, ply + 1, depth_limit)?);
            if value <= alpha {
                self.stats.alpha_cutoffs += 1;
                return Ok(value);
            }
            beta = beta.min(value);
        }
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Board, Player, Pos};
    use crate::eval::{AggressiveMobility, WeightedMobility};
    use crate::search::Unbounded;
    use std::time::Duration;

    fn deadline() -> Deadline<Unbounded> {
        Deadline::new(Unbounded, Duration::from_millis(10))
    }

    #[test]
    fn test_search_empty_board() {
        let board = Board::new(4, 4).unwrap();
        let mut eval = WeightedMobility;
        let mut deadline = deadline();
        let mut searcher = AlphaBeta::new(&mut eval, &mut deadline);

        let result = searcher.search(&board, 1).unwrap();
        assert!(result.best_move.is_some());
        assert_eq!(result.depth, 1);
        assert!(result.hit_depth_limit);
    }

    #[test]
    fn test_search_finds_trapping_move() {
        // 3x3: First at (0,0), Second in the center with no knight moves.
        // First can move to (1,2) or (2,1); either leaves Second stuck.
        let mut board = Board::new(3, 3).unwrap();
        board.apply_move(Pos::new(0, 0)).unwrap();
        board.apply_move(Pos::new(1, 1)).unwrap();

        let mut eval = AggressiveMobility;
        let mut deadline = deadline();
        let mut searcher = AlphaBeta::new(&mut eval, &mut deadline);
        let result = searcher.search(&board, 3).unwrap();

        assert_eq!(result.best_move, Some(Pos::new(1, 2)));
        assert_eq!(result.score, WIN);
        assert!(!result.hit_depth_limit);
    }

    #[test]
    fn test_no_legal_moves_returns_none() {
        let mut board = Board::new(3, 3).unwrap();
        board.apply_move(Pos::new(0, 0)).unwrap();
        board.apply_move(Pos::new(1, 1)).unwrap();
        board.apply_move(Pos::new(1, 2)).unwrap();
        assert_eq!(board.active_player(), Player::Second);

        let mut eval = AggressiveMobility;
        let mut deadline = deadline();
        let mut searcher = AlphaBeta::new(&mut eval, &mut deadline);
        for depth in 0..4 {
            let result = searcher.search(&board, depth).unwrap();
            assert_eq!(result.best_move, None);
            assert_eq!(result.score, LOSS);
        }
    }

    #[test]
    fn test_timeout_propagates_from_depth() {
        let board = Board::new(4, 4).unwrap();
        let mut eval = WeightedMobility;
        let mut polls = 0u32;
        let mut deadline = Deadline::new(
            move || {
                polls += 1;
                if polls > 20 {
                    Duration::ZERO
                } else {
                    Duration::MAX
                }
            },
            Duration::from_millis(10),
        );
        let mut searcher = AlphaBeta::new(&mut eval, &mut deadline);

        assert_eq!(searcher.search(&board, 3), Err(SearchTimeout));
        assert_eq!(searcher.stats().nodes, 20);
    }

    #[test]
    fn test_stats_count_cutoffs() {
        let board = Board::new(4, 4).unwrap();
        let mut eval = WeightedMobility;
        let mut deadline = deadline();
        let mut searcher = AlphaBeta::new(&mut eval, &mut deadline);

        let _ = searcher.search(&board, 3).unwrap();
        let stats = searcher.stats().clone();
        assert!(stats.nodes > 0);
        assert!(stats.evaluations > 0);
        assert!(stats.cutoffs() > 0);
    }
}
