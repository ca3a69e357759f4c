//! Plain depth-limited minimax
//!
//! Reference variant of [`super::AlphaBeta`]: explores every node to the
//! requested depth. Kept for fixed-depth play and as the oracle the pruning
//! search is checked against.

use crate::eval::{Evaluator, LOSS, WIN};
use crate::game::GameState;

use super::{Deadline, SearchResult, SearchStats, SearchTimeout, TimeLeft};

/// Minimax searcher bound to one evaluator and one deadline.
pub struct Minimax<'a, E, C> {
    evaluator: &'a mut E,
    deadline: &'a mut Deadline<C>,
    stats: SearchStats,
    hit_depth_limit: bool,
}

impl<'a, E, C: TimeLeft> Minimax<'a, E, C> {
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

    /// Pick the root move searching `depth` plies.
    ///
    /// A depth of 0 still looks one ply ahead, since a root move has to be
    /// scored by the position it leads to. Ties keep the first move in
    /// enumeration order.
    pub fn search<S>(&mut self, state: &S, depth: u32) -> Result<SearchResult<S::Move>, SearchTimeout>
    where
        S: GameState,
        E: Evaluator<S>,
    {
        self.deadline.check()?;
        self.stats.nodes += 1;
        self.hit_depth_limit = false;

        let perspective = state.active_player();
        let moves = state.legal_moves();
        if moves.is_empty() {
            self.stats.evaluations += 1;
            let score = self.evaluator.evaluate(state, perspective);
            return Ok(SearchResult::no_move(score, depth));
        }

        let mut best: Option<(S::Move, f64)> = None;
        for mv in moves {
            let child = state.apply(mv);
            let value = self.min_value(&child, perspective, depth.saturating_sub(1))?;
            match best {
                Some((_, best_value)) if value <= best_value => {}
                _ => best = Some((mv, value)),
            }
        }

        Ok(SearchResult {
            best_move: best.map(|(mv, _)| mv),
            score: best.map_or(LOSS, |(_, value)| value),
            depth,
            hit_depth_limit: self.hit_depth_limit,
        })
    }

    /// Legal moves of a non-leaf node, or `None` if `state` is a leaf.
    #[inline]
    fn expand<S: GameState>(&mut self, state: &S, depth: u32) -> Option<Vec<S::Move>> {
        let moves = state.legal_moves();
        if moves.is_empty() {
            return None;
        }
        if depth == 0 {
            self.hit_depth_limit = true;
            return None;
        }
        Some(moves)
    }

    fn max_value<S>(&mut self, state: &S, perspective: S::Player, depth: u32) -> Result<f64, SearchTimeout>
    where
        S: GameState,
        E: Evaluator<S>,
    {
        self.deadline.check()?;
        self.stats.nodes += 1;

        let Some(moves) = self.expand(state, depth) else {
            self.stats.evaluations += 1;
            return Ok(self.evaluator.evaluate(state, perspective));
        };

        let mut value = LOSS;
        for mv in moves {
            let child = state.apply(mv);
            value = value.max(self.min_value(&child, perspective, depth - 1)?);
        }
        Ok(value)
    }

    fn min_value<S>(&mut self, state: &S, perspective: S::Player, depth: u32) -> Result<f64, SearchTimeout>
    where
        S: GameState,
        E: Evaluator<S>,
    {
        self.deadline.check()?;
        self.stats.nodes += 1;

        let Some(moves) = self.expand(state, depth) else {
            self.stats.evaluations += 1;
            return Ok(self.evaluator.evaluate(state, perspective));
        };

        let mut value = WIN;
        for mv in moves {
            let child = state.apply(mv);
            value = value.min(self.max_value(&child, perspective, depth - 1)?);
        }
        Ok(value)
    }
}
