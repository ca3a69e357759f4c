//! Heuristic evaluation functions for Isolation positions
//!
//! All heuristics are built from mobility (number of legal moves) and
//! player placement. Each one reports [`WIN`]/[`LOSS`] once the game is decided
//! for the perspective player, except [`EarlyPressure`] which is a plain
//! weighted difference.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::board::{Board, Player};
use crate::error::ConfigError;
use crate::rules::mobility;

use super::{Evaluator, LOSS, WIN};

/// Move count at or below which [`ClosingDistance`] forgets its memo.
/// Covers the opening placements, so every new game starts clean.
pub const DISTANCE_RESET_MOVES: u32 = 5;

/// Weight on own mobility in [`AggressiveMobility`]
const OWN_MOBILITY_WEIGHT: f64 = 4.0;

/// Mobility of both sides as floats
#[inline]
fn mobilities(board: &Board, player: Player) -> (f64, f64) {
    (
        mobility(board, player) as f64,
        mobility(board, player.opponent()) as f64,
    )
}

/// Preserve own mobility early, shift toward blocking the opponent as the
/// board fills: `(1 - r) * own * 4 - r * opp` with `r = moves / cells`.
#[derive(Debug, Clone, Copy, Default)]
pub struct AggressiveMobility;

impl Evaluator<Board> for AggressiveMobility {
    fn evaluate(&mut self, board: &Board, player: Player) -> f64 {
        let (own, opp) = mobilities(board, player);
        if opp == 0.0 {
            return WIN;
        }
        if own == 0.0 {
            return LOSS;
        }
        let ratio = f64::from(board.move_count()) / board.cells() as f64;
        (1.0 - ratio) * own * OWN_MOBILITY_WEIGHT - ratio * opp
    }
}

/// `2 * own - opp`: favour keeping our own options open.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeightedMobility;

impl Evaluator<Board> for WeightedMobility {
    fn evaluate(&mut self, board: &Board, player: Player) -> f64 {
        if board.is_loser(player) {
            return LOSS;
        }
        if board.is_winner(player) {
            return WIN;
        }
        let (own, opp) = mobilities(board, player);
        2.0 * own - opp
    }
}

/// Rewards closing in on the opponent.
///
/// Remembers the smallest Manhattan distance between the players seen so far
/// and scores `(memo - distance) * move_count`. The first call after a reset
/// scores `distance * move_count` and seeds the memo. The memo is cleared
/// whenever the evaluated position has at most [`DISTANCE_RESET_MOVES`]
/// moves played.
#[derive(Debug, Clone, Default)]
pub struct ClosingDistance {
    closest: Option<u32>,
}

impl ClosingDistance {
    pub fn new() -> Self {
        Self::default()
    }

    /// Smallest distance remembered so far
    pub fn closest(&self) -> Option<u32> {
        self.closest
    }

    pub fn reset(&mut self) {
        self.closest = None;
    }
}

impl Evaluator<Board> for ClosingDistance {
    fn evaluate(&mut self, board: &Board, player: Player) -> f64 {
        if board.move_count() <= DISTANCE_RESET_MOVES {
            self.closest = None;
        }

        let (own, opp) = mobilities(board, player);
        if opp == 0.0 {
            return WIN;
        }
        if own == 0.0 {
            return LOSS;
        }

        let (Some(mine), Some(theirs)) = (
            board.player_location(player),
            board.player_location(player.opponent()),
        ) else {
            return 0.0;
        };

        let distance = mine.manhattan(theirs);
        let moves = f64::from(board.move_count());
        match self.closest {
            None => {
                self.closest = Some(distance);
                f64::from(distance) * moves
            }
            Some(closest) => {
                let score = (f64::from(closest) - f64::from(distance)) * moves;
                if distance < closest {
                    self.closest = Some(distance);
                }
                score
            }
        }
    }
}

/// Press the opponent early, weight fades with the move count:
/// `own - (10 / (moves + 1)) * opp`.
#[derive(Debug, Clone, Copy, Default)]
pub struct EarlyPressure;

impl Evaluator<Board> for EarlyPressure {
    fn evaluate(&mut self, board: &Board, player: Player) -> f64 {
        let (own, opp) = mobilities(board, player);
        let weight = 10.0 / (f64::from(board.move_count()) + 1.0);
        own - weight * opp
    }
}

/// Named heuristic, selectable from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Heuristic {
    #[default]
    Aggressive,
    Weighted,
    ClosingDistance,
    EarlyPressure,
}

impl Heuristic {
    pub const ALL: [Heuristic; 4] = [
        Heuristic::Aggressive,
        Heuristic::Weighted,
        Heuristic::ClosingDistance,
        Heuristic::EarlyPressure,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Heuristic::Aggressive => "aggressive",
            Heuristic::Weighted => "weighted",
            Heuristic::ClosingDistance => "closing_distance",
            Heuristic::EarlyPressure => "early_pressure",
        }
    }

    /// Fresh evaluator with empty memo state
    pub fn evaluator(self) -> HeuristicEvaluator {
        match self {
            Heuristic::Aggressive => HeuristicEvaluator::Aggressive(AggressiveMobility),
            Heuristic::Weighted => HeuristicEvaluator::Weighted(WeightedMobility),
            Heuristic::ClosingDistance => {
                HeuristicEvaluator::ClosingDistance(ClosingDistance::new())
            }
            Heuristic::EarlyPressure => HeuristicEvaluator::EarlyPressure(EarlyPressure),
        }
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Heuristic {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Heuristic::ALL
            .into_iter()
            .find(|h| h.name() == s)
            .ok_or_else(|| ConfigError::UnknownHeuristic {
                name: s.to_string(),
            })
    }
}

/// Runtime-selected heuristic, owning its memo state.
#[derive(Debug, Clone)]
pub enum HeuristicEvaluator {
    Aggressive(AggressiveMobility),
    Weighted(WeightedMobility),
    ClosingDistance(ClosingDistance),
    EarlyPressure(EarlyPressure),
}

impl HeuristicEvaluator {
    pub fn kind(&self) -> Heuristic {
        match self {
            HeuristicEvaluator::Aggressive(_) => Heuristic::Aggressive,
            HeuristicEvaluator::Weighted(_) => Heuristic::Weighted,
            HeuristicEvaluator::ClosingDistance(_) => Heuristic::ClosingDistance,
            HeuristicEvaluator::EarlyPressure(_) => Heuristic::EarlyPressure,
        }
    }

    /// Forget memo state, e.g. after positions were taken back
    pub fn reset(&mut self) {
        if let HeuristicEvaluator::ClosingDistance(e) = self {
            e.reset();
        }
    }
}

impl Evaluator<Board> for HeuristicEvaluator {
    fn evaluate(&mut self, board: &Board, player: Player) -> f64 {
        match self {
            HeuristicEvaluator::Aggressive(e) => e.evaluate(board, player),
            HeuristicEvaluator::Weighted(e) => e.evaluate(board, player),
            HeuristicEvaluator::ClosingDistance(e) => e.evaluate(board, player),
            HeuristicEvaluator::EarlyPressure(e) => e.evaluate(board, player),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Pos;

    /// First at center, Second in the corner, First to move
    fn center_vs_corner() -> Board {
        let mut board = Board::default();
        board.apply_move(Pos::new(3, 3)).unwrap();
        board.apply_move(Pos::new(0, 0)).unwrap();
        board
    }

    /// 3x3 board where Second is stuck in the center, Second to move
    fn second_stuck() -> Board {
        let mut board = Board::new(3, 3).unwrap();
        board.apply_move(Pos::new(0, 0)).unwrap();
        board.apply_move(Pos::new(1, 1)).unwrap();
        board.apply_move(Pos::new(1, 2)).unwrap();
        board
    }

    #[test]
    fn test_aggressive_scores() {
        let board = center_vs_corner();
        // own = 8, opp = 2, ratio = 2 / 49
        let ratio = 2.0 / 49.0;
        let expected = (1.0 - ratio) * 8.0 * 4.0 - ratio * 2.0;
        let score = AggressiveMobility.evaluate(&board, Player::First);
        assert!((score - expected).abs() < 1e-9);
    }

    #[test]
    fn test_decided_positions_use_sentinels() {
        let board = second_stuck();
        for heuristic in [Heuristic::Aggressive, Heuristic::Weighted, Heuristic::ClosingDistance] {
            let mut eval = heuristic.evaluator();
            assert_eq!(eval.evaluate(&board, Player::First), WIN, "{heuristic}");
            assert_eq!(eval.evaluate(&board, Player::Second), LOSS, "{heuristic}");
        }
    }

    #[test]
    fn test_weighted_mobility() {
        let board = center_vs_corner();
        assert_eq!(WeightedMobility.evaluate(&board, Player::First), 2.0 * 8.0 - 2.0);
        assert_eq!(WeightedMobility.evaluate(&board, Player::Second), 2.0 * 2.0 - 8.0);
    }

    #[test]
    fn test_early_pressure() {
        let board = center_vs_corner();
        let expected = 8.0 - (10.0 / 3.0) * 2.0;
        assert!((EarlyPressure.evaluate(&board, Player::First) - expected).abs() < 1e-9);
    }

    /// Walk a short game past the reset window on a 7x7 board
    fn midgame() -> Board {
        let mut board = center_vs_corner();
        for mv in [Pos::new(1, 2), Pos::new(2, 1), Pos::new(3, 1), Pos::new(4, 2)] {
            board.apply_move(mv).unwrap();
        }
        board
    }

    #[test]
    fn test_closing_distance_memo() {
        let board = midgame();
        assert_eq!(board.move_count(), 6);
        let mut eval = ClosingDistance::new();

        // First at (3,1), Second at (4,2): distance 2
        let first = eval.evaluate(&board, Player::First);
        assert_eq!(first, 2.0 * 6.0);
        assert_eq!(eval.closest(), Some(2));

        // Same position again: no change in distance
        assert_eq!(eval.evaluate(&board, Player::First), 0.0);
        assert_eq!(eval.closest(), Some(2));
    }

    #[test]
    fn test_closing_distance_resets_in_opening() {
        let mut eval = ClosingDistance::new();
        let board = midgame();
        eval.evaluate(&board, Player::First);
        assert!(eval.closest().is_some());

        eval.evaluate(&center_vs_corner(), Player::First);
        // Opening position re-seeds the memo from scratch
        assert_eq!(eval.closest(), Some(6));
    }

    #[test]
    fn test_closing_distance_state_is_per_instance() {
        let board = midgame();
        let mut a = ClosingDistance::new();
        let b = ClosingDistance::new();
        a.evaluate(&board, Player::First);
        assert!(a.closest().is_some());
        assert!(b.closest().is_none());
    }

    #[test]
    fn test_heuristic_evaluator_reset_clears_memo() {
        let mut eval = Heuristic::ClosingDistance.evaluator();
        eval.evaluate(&midgame(), Player::First);
        eval.reset();
        // Fresh memo: first call scores distance * move_count again
        assert_eq!(eval.evaluate(&midgame(), Player::First), 2.0 * 6.0);

        let mut plain = Heuristic::Weighted.evaluator();
        plain.reset();
        assert_eq!(plain.kind(), Heuristic::Weighted);
    }

    #[test]
    fn test_heuristic_names_round_trip() {
        for h in Heuristic::ALL {
            assert_eq!(h.name().parse::<Heuristic>().unwrap(), h);
            assert_eq!(h.evaluator().kind(), h);
        }
        assert!("nope".parse::<Heuristic>().is_err());
    }

    #[test]
    fn test_closures_are_evaluators() {
        let mut calls = 0;
        let mut eval = |board: &Board, player: Player| {
            calls += 1;
            mobility(board, player) as f64
        };
        let board = center_vs_corner();
        assert_eq!(eval.evaluate(&board, Player::First), 8.0);
        assert_eq!(calls, 1);
    }
}
