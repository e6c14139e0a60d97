pub mod columns;
pub mod model;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub use columns::{CategoricalColumn, NumericColumn};
pub use model::{
    AgeGroup, BloodPressureCategory, BmiCategory, Dataset, Gender, Record, SleepDisorder,
};

/// One headline statistic card: a title, a displayable value, and a short
/// trend/context line. Produced fresh on every computation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Metric {
    pub title: String,
    pub content: MetricValue,
    pub trend: String,
}

/// Displayable metric value. `Unavailable` is the sentinel for statistics
/// that have no defined value over an empty dataset.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum MetricValue {
    Count(u64),
    Hours(f64),
    Percent(f64),
    Score(f64),
    Label(String),
    Unavailable,
}

impl std::fmt::Display for MetricValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MetricValue::Count(n) => write!(f, "{n}"),
            MetricValue::Hours(h) => write!(f, "{h:.1} h"),
            MetricValue::Percent(p) => write!(f, "{p:.1}%"),
            MetricValue::Score(s) => write!(f, "{s:.1} / 10"),
            MetricValue::Label(l) => write!(f, "{l}"),
            MetricValue::Unavailable => write!(f, "N/A"),
        }
    }
}

/// An ordered mapping from category label to aggregated numeric value
/// (count or mean). Order is meaningful: funnel and bar series rely on it.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub points: Vec<SeriesPoint>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub label: String,
    pub value: f64,
}

impl Series {
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    pub fn push(&mut self, label: impl Into<String>, value: f64) {
        self.points.push(SeriesPoint {
            label: label.into(),
            value,
        });
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn total(&self) -> f64 {
        self.points.iter().map(|p| p.value).sum()
    }

    /// Value for a label, if present.
    pub fn value_of(&self, label: &str) -> Option<f64> {
        self.points
            .iter()
            .find(|p| p.label == label)
            .map(|p| p.value)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SeriesPoint> {
        self.points.iter()
    }
}

impl FromIterator<(String, f64)> for Series {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        Series {
            points: iter
                .into_iter()
                .map(|(label, value)| SeriesPoint { label, value })
                .collect(),
        }
    }
}

/// One row of the styled table view: per-record presentation remap with the
/// multi-valued disorder column collapsed to a boolean and the redundant
/// bucket columns dropped. Record order is preserved.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TableRow {
    pub gender: Gender,
    pub occupation: String,
    pub has_disorder: bool,
    pub bmi_category: BmiCategory,
    pub quality_of_sleep: f64,
    pub stress_level: f64,
    pub daily_steps: f64,
    pub sleep_duration: f64,
}

/// Everything the renderers consume for one filter selection: headline
/// metrics plus every chart series and the table rows, computed over the
/// same filtered subset so the display stays internally consistent.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DashboardReport {
    pub source: PathBuf,
    pub timestamp: DateTime<Utc>,
    /// Labels of the disorders included by the current filter.
    pub filter: Vec<String>,
    /// Unfiltered survey population.
    pub population: usize,
    /// Size of the filtered subset all values below were computed from.
    pub selected: usize,
    pub metrics: Vec<Metric>,
    pub gender_breakdown: Series,
    pub bmi_breakdown: Series,
    pub blood_pressure_funnel: Series,
    pub occupation_treemap: Series,
    pub average_panels: Vec<AveragePanelSeries>,
    pub table: Vec<TableRow>,
}

/// A grouped-average comparison panel (e.g. daily steps by age group).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AveragePanelSeries {
    pub title: String,
    pub series: Series,
}
