use crate::config::{DashboardConfig, DEFAULT_CONFIG_FILE};
use anyhow::{bail, Result};
use std::fs;
use std::path::Path;

pub fn init_config(force: bool) -> Result<()> {
    let path = Path::new(DEFAULT_CONFIG_FILE);
    if path.exists() && !force {
        bail!("{DEFAULT_CONFIG_FILE} already exists (use --force to overwrite)");
    }
    fs::write(path, DashboardConfig::default_toml())?;
    println!("wrote {DEFAULT_CONFIG_FILE}");
    Ok(())
}
