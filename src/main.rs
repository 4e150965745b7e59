use std::path::Path;

use anyhow::Context;
use log::{info, warn};

use gradstat::{DashboardConfig, DashboardSession};

/// Fixed input path of the production survey export
const SOURCE_FILE: &str = "졸업자취업현황_20_21_22_23_통합.csv";

fn main() -> anyhow::Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let path = Path::new(SOURCE_FILE);
    if !path.exists() {
        warn!("Source file not found: {}", path.display());
        return Ok(());
    }

    info!("Loading employment records from: {}", path.display());
    let session = DashboardSession::load(path, DashboardConfig::default())
        .with_context(|| format!("failed to load {}", path.display()))?;

    for warning in session.warnings() {
        warn!("{warning}");
    }

    print!("{}", session.summary());
    Ok(())
}
