//! Scatterscope: interactive 2D scatter plot viewer.

use scatterscope::{run_scatter, ScatterConfig};
use tracing_subscriber::EnvFilter;

fn main() -> eframe::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
    tracing::info!("Starting Scatterscope");

    run_scatter(ScatterConfig::default())
}
