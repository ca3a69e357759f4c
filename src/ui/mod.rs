//! Desktop front end
//!
//! Human vs agent or agent vs agent games rendered with egui/eframe. Agent
//! turns run on a worker thread so the window stays responsive.

mod app;
mod board_view;
mod session;
mod theme;

pub use app::IsolationApp;
pub use session::{GameMode, GameResult, GameSession};
