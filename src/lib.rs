//! Time-bounded adversarial search for two-player games
//!
//! An agent that picks moves for any two-player, zero-sum, perfect-information
//! game within a wall-clock budget, plus the game of Isolation to play it on:
//! - Each player owns one piece that moves like a chess knight
//! - Every visited cell is blocked for the rest of the game
//! - A player with no legal move on their turn loses
//!
//! # Architecture
//!
//! - [`game`]: the [`GameState`] abstraction the search is written against
//! - [`search`]: deadline polling, minimax, alpha-beta and iterative deepening
//! - [`eval`]: the [`Evaluator`] trait and the Isolation heuristics
//! - [`engine`]: [`SearchEngine`], one agent for every configured strategy
//! - [`board`] / [`rules`]: Isolation positions and move generation
//! - [`config`]: validated search settings and YAML agent files
//! - [`ui`]: desktop front end
//!
//! # Quick Start
//!
//! ```
//! use isolation::{Board, Heuristic, SearchConfig, SearchEngine};
//! use std::time::Duration;
//!
//! let mut board = Board::new(5, 5).unwrap();
//! let config = SearchConfig::fixed_alphabeta(3, Duration::from_millis(10)).unwrap();
//! let mut engine = SearchEngine::new(config, Heuristic::Weighted.evaluator());
//!
//! let outcome = engine.get_move_within(&board, Duration::from_secs(5));
//! if let Some(pos) = outcome.best_move {
//!     board.apply_move(pos).unwrap();
//!     println!("Agent plays {pos}");
//! }
//! ```
//!
//! # Cancellation
//!
//! The search polls its clock once per node and unwinds with
//! [`SearchTimeout`] as soon as less than the configured threshold remains.
//! Iterative deepening then answers with the deepest depth that finished; a
//! depth interrupted halfway is never used.

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod game;
pub mod rules;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Player, Pos};
pub use config::{AgentConfig, SearchConfig, Strategy};
pub use engine::{SearchEngine, SearchOutcome};
pub use error::{BoardError, ConfigError};
pub use eval::{Evaluator, Heuristic, HeuristicEvaluator, LOSS, WIN};
pub use game::GameState;
pub use search::{Countdown, SearchTimeout, Termination, TimeLeft, Unbounded};
