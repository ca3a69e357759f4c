//! Agent and search configuration
//!
//! [`SearchConfig`] is what the engine consumes; it is validated on
//! construction and immutable afterwards. [`AgentConfig`] is the YAML-facing
//! form used by the desktop app, including the board and turn budget.
//!
//! ```yaml
//! width: 7
//! height: 7
//! heuristic: closing_distance
//! strategy: alpha_beta
//! threshold_ms: 10
//! budget_ms: 150
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::board::{Board, DEFAULT_HEIGHT, DEFAULT_WIDTH};
use crate::error::ConfigError;
use crate::eval::Heuristic;

/// Default minimum time left before search aborts
pub const DEFAULT_THRESHOLD: Duration = Duration::from_millis(10);
/// Default wall-clock budget per turn
pub const DEFAULT_TURN_BUDGET: Duration = Duration::from_millis(150);

/// Search algorithm used by the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Plain minimax to a fixed depth
    Minimax,
    /// Alpha-beta, to a fixed depth or iteratively deepened
    #[default]
    AlphaBeta,
}

/// Validated engine configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    strategy: Strategy,
    /// Fixed depth, or `None` for iterative deepening
    depth: Option<u32>,
    threshold: Duration,
    /// Cap on iterative deepening depth
    max_depth: Option<u32>,
}

impl SearchConfig {
    /// Build a configuration.
    ///
    /// Fails if `threshold` is zero, or if minimax is asked to run without a
    /// fixed depth.
    pub fn new(
        strategy: Strategy,
        depth: Option<u32>,
        threshold: Duration,
    ) -> Result<Self, ConfigError> {
        if threshold.is_zero() {
            return Err(ConfigError::ZeroThreshold);
        }
        if strategy == Strategy::Minimax && depth.is_none() {
            return Err(ConfigError::MissingDepth);
        }
        Ok(Self {
            strategy,
            depth,
            threshold,
            max_depth: None,
        })
    }

    pub fn fixed_minimax(depth: u32, threshold: Duration) -> Result<Self, ConfigError> {
        Self::new(Strategy::Minimax, Some(depth), threshold)
    }

    pub fn fixed_alphabeta(depth: u32, threshold: Duration) -> Result<Self, ConfigError> {
        Self::new(Strategy::AlphaBeta, Some(depth), threshold)
    }

    pub fn iterative(threshold: Duration) -> Result<Self, ConfigError> {
        Self::new(Strategy::AlphaBeta, None, threshold)
    }

    /// Cap iterative deepening at `max_depth` plies
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    #[inline]
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    #[inline]
    pub fn depth(&self) -> Option<u32> {
        self.depth
    }

    #[inline]
    pub fn threshold(&self) -> Duration {
        self.threshold
    }

    #[inline]
    pub fn max_depth(&self) -> Option<u32> {
        self.max_depth
    }

    pub fn is_iterative(&self) -> bool {
        self.depth.is_none()
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::AlphaBeta,
            depth: None,
            threshold: DEFAULT_THRESHOLD,
            max_depth: None,
        }
    }
}

/// File-level agent settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct AgentConfig {
    pub width: u8,
    pub height: u8,
    pub heuristic: Heuristic,
    pub strategy: Strategy,
    /// Fixed search depth; omit for iterative deepening
    pub depth: Option<u32>,
    pub max_depth: Option<u32>,
    pub threshold_ms: u64,
    /// Wall-clock budget the agent gets per turn
    pub budget_ms: u64,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            heuristic: Heuristic::default(),
            strategy: Strategy::default(),
            depth: None,
            max_depth: None,
            threshold_ms: DEFAULT_THRESHOLD.as_millis() as u64,
            budget_ms: DEFAULT_TURN_BUDGET.as_millis() as u64,
        }
    }
}

impl AgentConfig {
    /// Load from a YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&contents)
    }

    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: AgentConfig = serde_yaml::from_str(s)?;
        // Surface bad values at load time rather than on the first move
        config.search_config()?;
        config.board()?;
        Ok(config)
    }

    pub fn search_config(&self) -> Result<SearchConfig, ConfigError> {
        if self.threshold_ms >= self.budget_ms {
            return Err(ConfigError::ThresholdExceedsBudget {
                threshold_ms: self.threshold_ms,
                budget_ms: self.budget_ms,
            });
        }
        let config = SearchConfig::new(
            self.strategy,
            self.depth,
            Duration::from_millis(self.threshold_ms),
        )?;
        Ok(match self.max_depth {
            Some(max_depth) => config.with_max_depth(max_depth),
            None => config,
        })
    }

    /// Empty board with the configured dimensions
    pub fn board(&self) -> Result<Board, ConfigError> {
        Ok(Board::new(self.width, self.height)?)
    }

    pub fn turn_budget(&self) -> Duration {
        Duration::from_millis(self.budget_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_threshold_rejected() {
        assert!(matches!(
            SearchConfig::iterative(Duration::ZERO),
            Err(ConfigError::ZeroThreshold)
        ));
    }

    #[test]
    fn test_minimax_needs_depth() {
        assert!(matches!(
            SearchConfig::new(Strategy::Minimax, None, DEFAULT_THRESHOLD),
            Err(ConfigError::MissingDepth)
        ));
        let config = SearchConfig::fixed_minimax(3, DEFAULT_THRESHOLD).unwrap();
        assert_eq!(config.depth(), Some(3));
        assert!(!config.is_iterative());
    }

    #[test]
    fn test_default_is_iterative_alphabeta() {
        let config = SearchConfig::default();
        assert_eq!(config.strategy(), Strategy::AlphaBeta);
        assert!(config.is_iterative());
        assert_eq!(config.threshold(), DEFAULT_THRESHOLD);
        assert_eq!(config.with_max_depth(6).max_depth(), Some(6));
    }

    #[test]
    fn test_agent_config_from_yaml() {
        let yaml = "
width: 5
height: 6
heuristic: closing_distance
strategy: minimax
depth: 3
threshold_ms: 20
";
        let config = AgentConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.heuristic, Heuristic::ClosingDistance);
        assert_eq!(config.budget_ms, 150);

        let search = config.search_config().unwrap();
        assert_eq!(search.strategy(), Strategy::Minimax);
        assert_eq!(search.depth(), Some(3));
        assert_eq!(search.threshold(), Duration::from_millis(20));
        assert_eq!(config.board().unwrap().cells(), 30);
    }

    #[test]
    fn test_agent_config_defaults_from_empty_yaml() {
        let config = AgentConfig::from_yaml_str("{}").unwrap();
        assert_eq!(config, AgentConfig::default());
    }

    #[test]
    fn test_agent_config_rejects_bad_values() {
        assert!(matches!(
            AgentConfig::from_yaml_str("threshold_ms: 0"),
            Err(ConfigError::ZeroThreshold)
        ));
        assert!(matches!(
            AgentConfig::from_yaml_str("width: 10\nheight: 10"),
            Err(ConfigError::Board(_))
        ));
        assert!(matches!(
            AgentConfig::from_yaml_str("threshold_ms: 200\nbudget_ms: 100"),
            Err(ConfigError::ThresholdExceedsBudget {
                threshold_ms: 200,
                budget_ms: 100
            })
        ));
        assert!(matches!(
            AgentConfig::from_yaml_str("threshold_ms: 100\nbudget_ms: 100"),
            Err(ConfigError::ThresholdExceedsBudget { .. })
        ));
        assert!(matches!(
            AgentConfig::from_yaml_str("heuristic: telepathy"),
            Err(ConfigError::Yaml(_))
        ));
    }

    #[test]
    fn test_agent_config_missing_file() {
        let err = AgentConfig::load("/nonexistent/isolation.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
