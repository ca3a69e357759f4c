//! Error types for the Isolation agent
//!
//! Search cancellation is not an error and lives in [`crate::search::SearchTimeout`].

use std::path::PathBuf;

use thiserror::Error;

use crate::board::{Player, Pos};

/// Errors raised by board construction and move application
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Board does not fit in a single bitboard word
    #[error("Invalid board dimensions {width}x{height} (need 1..=64 cells)")]
    InvalidDimensions { width: u8, height: u8 },

    /// Move is not in the side to move's legal move list
    #[error("Illegal move {pos} for {player}")]
    IllegalMove { pos: Pos, player: Player },
}

/// Errors raised while building a search configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Deadline threshold must leave a positive safety margin
    #[error("Deadline threshold must be greater than zero")]
    ZeroThreshold,

    /// Plain minimax has no iterative mode
    #[error("Minimax strategy requires a fixed search depth")]
    MissingDepth,

    /// The search would abort at its first clock check
    #[error("Deadline threshold {threshold_ms}ms must be below the turn budget {budget_ms}ms")]
    ThresholdExceedsBudget { threshold_ms: u64, budget_ms: u64 },

    #[error("Unknown heuristic: {name}")]
    UnknownHeuristic { name: String },

    #[error(transparent)]
    Board(#[from] BoardError),

    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
