//! Dashboard configuration.
//!
//! The concrete metric titles, the funnel column and its stage ordering,
//! and the grouped-average comparison panels are product choices, not
//! engineering ones, so they live in `sleepdash.toml` rather than code.
//! A missing file means defaults; column names in the file are validated
//! against the survey schema at load time.

use crate::core::{BloodPressureCategory, CategoricalColumn, NumericColumn};
use crate::errors::{Result, SleepdashError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_CONFIG_FILE: &str = "sleepdash.toml";

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default)]
    pub metrics: MetricsConfig,
    #[serde(default)]
    pub funnel: FunnelConfig,
    #[serde(default = "default_average_panels")]
    pub averages: Vec<AveragePanelConfig>,
}

/// Titles for the metric cards, in display order.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MetricsConfig {
    #[serde(default = "default_total_title")]
    pub total_title: String,
    #[serde(default = "default_sleep_duration_title")]
    pub sleep_duration_title: String,
    #[serde(default = "default_disorder_title")]
    pub disorder_title: String,
    #[serde(default = "default_occupation_title")]
    pub occupation_title: String,
    #[serde(default = "default_stress_title")]
    pub stress_title: String,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            total_title: default_total_title(),
            sleep_duration_title: default_sleep_duration_title(),
            disorder_title: default_disorder_title(),
            occupation_title: default_occupation_title(),
            stress_title: default_stress_title(),
        }
    }
}

/// Funnel chart source column and stage ordering, severity order by
/// default. Stages absent from the data are still emitted with zero.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FunnelConfig {
    #[serde(default = "default_funnel_column")]
    pub column: String,
    #[serde(default = "default_funnel_order")]
    pub order: Vec<String>,
}

impl Default for FunnelConfig {
    fn default() -> Self {
        Self {
            column: default_funnel_column(),
            order: default_funnel_order(),
        }
    }
}

/// One grouped-average comparison panel.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AveragePanelConfig {
    pub title: String,
    pub group: String,
    pub value: String,
}

/// An `AveragePanelConfig` with its column names resolved against the
/// schema.
#[derive(Clone, Copy, Debug)]
pub struct ResolvedPanel {
    pub group: CategoricalColumn,
    pub value: NumericColumn,
}

impl DashboardConfig {
    /// Load from `path`, or fall back to defaults when no file exists.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default_with_panels());
        }
        let raw = fs::read_to_string(path).map_err(|source| SleepdashError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: DashboardConfig = toml::from_str(&raw)
            .map_err(|e| SleepdashError::Config(format!("{}: {e}", path.display())))?;
        config.validate()?;
        Ok(config)
    }

    pub fn default_with_panels() -> Self {
        Self {
            averages: default_average_panels(),
            ..Self::default()
        }
    }

    /// Check every column name in the file against the schema. A typo in
    /// configuration fails here, loudly, instead of producing empty charts.
    pub fn validate(&self) -> Result<()> {
        CategoricalColumn::from_name(&self.funnel.column)?;
        for panel in &self.averages {
            CategoricalColumn::from_name(&panel.group)?;
            NumericColumn::from_name(&panel.value)?;
        }
        if self.funnel.order.is_empty() {
            return Err(SleepdashError::Config(
                "funnel.order must list at least one stage".to_string(),
            ));
        }
        Ok(())
    }

    pub fn resolved_panels(&self) -> Result<Vec<ResolvedPanel>> {
        self.averages
            .iter()
            .map(|panel| {
                Ok(ResolvedPanel {
                    group: CategoricalColumn::from_name(&panel.group)?,
                    value: NumericColumn::from_name(&panel.value)?,
                })
            })
            .collect()
    }

    pub fn funnel_column(&self) -> Result<CategoricalColumn> {
        CategoricalColumn::from_name(&self.funnel.column)
    }

    /// Serialized default config for `sleepdash init`.
    pub fn default_toml() -> String {
        toml::to_string_pretty(&Self::default_with_panels())
            .unwrap_or_else(|_| String::new())
    }
}

fn default_total_title() -> String {
    "Total Subjects".to_string()
}

fn default_sleep_duration_title() -> String {
    "Avg Sleep Duration".to_string()
}

fn default_disorder_title() -> String {
    "Sleep Disorders".to_string()
}

fn default_occupation_title() -> String {
    "Top Occupation".to_string()
}

fn default_stress_title() -> String {
    "Avg Stress Level".to_string()
}

fn default_funnel_column() -> String {
    CategoricalColumn::BloodPressureCategory.name().to_string()
}

fn default_funnel_order() -> Vec<String> {
    BloodPressureCategory::ALL
        .iter()
        .map(|c| c.label().to_string())
        .collect()
}

fn default_average_panels() -> Vec<AveragePanelConfig> {
    vec![
        AveragePanelConfig {
            title: "Avg Daily Steps by Age".to_string(),
            group: CategoricalColumn::AgeGroup.name().to_string(),
            value: NumericColumn::DailySteps.name().to_string(),
        },
        AveragePanelConfig {
            title: "Avg Sleep Duration by Age".to_string(),
            group: CategoricalColumn::AgeGroup.name().to_string(),
            value: NumericColumn::SleepDuration.name().to_string(),
        },
    ]
}
