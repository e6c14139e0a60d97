//! Headline metric cards for the current filter selection.
//!
//! The calculator is a pure function: identical input yields identical
//! output, and the output always has one entry per tracked statistic no
//! matter how small the dataset is. Statistics with no defined value over
//! an empty dataset resolve to `MetricValue::Unavailable` instead of
//! dividing by zero.

use crate::config::MetricsConfig;
use crate::core::{Dataset, Metric, MetricValue, NumericColumn};
use std::collections::HashMap;

/// Number of metric cards produced per invocation, regardless of input.
pub const METRIC_COUNT: usize = 5;

pub fn calculate_metrics(dataset: &Dataset, config: &MetricsConfig) -> Vec<Metric> {
    vec![
        total_subjects(dataset, &config.total_title),
        average_of(
            dataset,
            NumericColumn::SleepDuration,
            &config.sleep_duration_title,
            "hours per night",
        ),
        disorder_share(dataset, &config.disorder_title),
        most_common_occupation(dataset, &config.occupation_title),
        average_of(
            dataset,
            NumericColumn::StressLevel,
            &config.stress_title,
            "self-reported, 0-10",
        ),
    ]
}

fn total_subjects(dataset: &Dataset, title: &str) -> Metric {
    Metric {
        title: title.to_string(),
        content: MetricValue::Count(dataset.len() as u64),
        trend: "subjects in current selection".to_string(),
    }
}

fn average_of(dataset: &Dataset, column: NumericColumn, title: &str, trend: &str) -> Metric {
    let content = match mean(dataset, column) {
        Some(avg) => match column {
            NumericColumn::SleepDuration => MetricValue::Hours(avg),
            NumericColumn::QualityOfSleep | NumericColumn::StressLevel => MetricValue::Score(avg),
            NumericColumn::DailySteps => MetricValue::Count(avg.round() as u64),
        },
        None => MetricValue::Unavailable,
    };
    Metric {
        title: title.to_string(),
        content,
        trend: trend.to_string(),
    }
}

fn disorder_share(dataset: &Dataset, title: &str) -> Metric {
    let affected = dataset
        .iter()
        .filter(|r| r.sleep_disorder.is_disorder())
        .count();
    let content = if dataset.is_empty() {
        MetricValue::Unavailable
    } else {
        MetricValue::Percent(affected as f64 / dataset.len() as f64 * 100.0)
    };
    Metric {
        title: title.to_string(),
        content,
        trend: format!("{affected} of {} report a disorder", dataset.len()),
    }
}

fn most_common_occupation(dataset: &Dataset, title: &str) -> Metric {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for record in dataset.iter() {
        *counts.entry(record.occupation.as_str()).or_default() += 1;
    }

    // Ties break alphabetically so repeated runs agree.
    let winner = counts
        .into_iter()
        .max_by(|a, b| a.1.cmp(&b.1).then_with(|| b.0.cmp(a.0)));

    let (content, trend) = match winner {
        Some((occupation, count)) => (
            MetricValue::Label(occupation.to_string()),
            format!("{count} subjects"),
        ),
        None => (MetricValue::Unavailable, "no subjects selected".to_string()),
    };
    Metric {
        title: title.to_string(),
        content,
        trend,
    }
}

fn mean(dataset: &Dataset, column: NumericColumn) -> Option<f64> {
    if dataset.is_empty() {
        return None;
    }
    let total: f64 = dataset.iter().map(|r| column.value_of(r)).sum();
    Some(total / dataset.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_of_empty_dataset_is_none() {
        assert_eq!(mean(&Dataset::default(), NumericColumn::DailySteps), None);
    }
}
