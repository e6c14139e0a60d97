// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod errors;
pub mod filter;
pub mod io;
pub mod metrics;
pub mod report;
pub mod shape;
pub mod tui;

// Re-export commonly used types
pub use crate::core::{
    AgeGroup, BloodPressureCategory, BmiCategory, CategoricalColumn, DashboardReport, Dataset,
    Gender, Metric, MetricValue, NumericColumn, Record, Series, SleepDisorder, TableRow,
};

pub use crate::errors::{Result, SleepdashError};

pub use crate::filter::DisorderFilter;

pub use crate::metrics::calculate_metrics;

pub use crate::shape::{
    categorical_count, categorical_count_by_name, categorical_count_ordered, grouped_average,
    grouped_average_by_name, hierarchical_count, table_rows,
};

pub use crate::io::{create_writer, load_dataset, OutputWriter};

pub use crate::report::build_report;
