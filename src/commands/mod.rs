pub mod dash;
pub mod init;
pub mod report;

use crate::config::{DashboardConfig, DEFAULT_CONFIG_FILE};
use crate::errors::Result;
use crate::filter::DisorderFilter;
use std::path::{Path, PathBuf};

/// Resolve the config: an explicit path must exist and parse; otherwise the
/// default file is picked up when present, defaults apply when not.
pub(crate) fn load_config(explicit: Option<&PathBuf>) -> Result<DashboardConfig> {
    let path = explicit
        .cloned()
        .unwrap_or_else(|| Path::new(DEFAULT_CONFIG_FILE).to_path_buf());
    DashboardConfig::load(&path)
}

pub(crate) fn build_filter(disorders: Option<&Vec<String>>) -> Result<DisorderFilter> {
    match disorders {
        Some(labels) if !labels.is_empty() => DisorderFilter::from_labels(labels),
        _ => Ok(DisorderFilter::all()),
    }
}
