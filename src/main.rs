//! Isolation desktop app
//!
//! Usage: `isolation [config.yaml]`. Log verbosity follows `RUST_LOG`.

use isolation::ui::IsolationApp;
use isolation::AgentConfig;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => AgentConfig::load(&path).inspect_err(|err| error!(%path, %err, "bad config"))?,
        None => AgentConfig::default(),
    };
    info!(?config, "starting");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 650.0])
            .with_min_inner_size([700.0, 500.0])
            .with_title("Isolation"),
        ..Default::default()
    };

    eframe::run_native(
        "Isolation",
        options,
        Box::new(move |cc| Ok(Box::new(IsolationApp::new(cc, config)?))),
    )?;
    Ok(())
}
