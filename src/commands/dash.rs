use crate::io::load_dataset;
use crate::tui;
use anyhow::Result;
use std::path::PathBuf;

pub struct DashConfig {
    pub path: PathBuf,
    pub disorders: Option<Vec<String>>,
    pub config: Option<PathBuf>,
}

pub fn handle_dash(config: DashConfig) -> Result<()> {
    let dashboard_config = super::load_config(config.config.as_ref())?;
    let filter = super::build_filter(config.disorders.as_ref())?;
    let dataset = load_dataset(&config.path)?;

    tui::run_dashboard(config.path, dataset, filter, dashboard_config)?;
    Ok(())
}
