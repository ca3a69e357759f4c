//! Search module for the Isolation agent
//!
//! Contains:
//! - Turn clock and deadline polling (cooperative cancellation)
//! - Depth-limited minimax (reference search)
//! - Alpha-Beta search
//! - Iterative deepening driver

pub mod alphabeta;
pub mod clock;
pub mod iterative;
pub mod minimax;


pub use alphabeta::{AlphaBeta, SearchResult, SearchStats};
pub use clock::{Countdown, Deadline, SearchTimeout, TimeLeft, Unbounded};
pub use iterative::{iterative_deepening, DeepeningResult, SearchPhase, Termination};
pub use minimax::Minimax;
