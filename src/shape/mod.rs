//! Chart data shaping: pure transforms from a filtered dataset to the
//! grouped numeric series each chart consumes. Nothing here knows how a
//! chart is drawn; renderers display these values verbatim.

use crate::core::{CategoricalColumn, Dataset, NumericColumn, Series, TableRow};
use crate::errors::Result;
use std::collections::HashMap;

/// Count records per distinct value of a categorical column.
///
/// Sparse: categories absent from the dataset are absent from the output.
/// Emission order is the column's natural order where it has one, label
/// order otherwise, so identical inputs yield identical series. The sum of
/// counts always equals the dataset length.
pub fn categorical_count(dataset: &Dataset, column: CategoricalColumn) -> Series {
    let counts = count_by(dataset, column);
    let mut labels: Vec<String> = counts.keys().cloned().collect();
    sort_labels(&mut labels, &column);

    labels
        .into_iter()
        .map(|label| {
            let count = counts[&label] as f64;
            (label, count)
        })
        .collect()
}

/// Count records per category, emitted in an explicit caller-supplied
/// ordering. Stages with no matching records are emitted with an explicit
/// zero: funnel charts need every stage present to keep the progression
/// continuous. Labels outside `order` are not emitted.
pub fn categorical_count_ordered(
    dataset: &Dataset,
    column: CategoricalColumn,
    order: &[String],
) -> Series {
    let counts = count_by(dataset, column);
    order
        .iter()
        .map(|label| {
            let count = counts.get(label).copied().unwrap_or(0) as f64;
            (label.clone(), count)
        })
        .collect()
}

/// Occupation counts for area-proportional (treemap) rendering, sorted
/// descending so the largest tile comes first. Ties break by label.
pub fn hierarchical_count(dataset: &Dataset) -> Series {
    let counts = count_by(dataset, CategoricalColumn::Occupation);
    let mut points: Vec<(String, u64)> = counts.into_iter().collect();
    points.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    points
        .into_iter()
        .map(|(label, count)| (label, count as f64))
        .collect()
}

/// Arithmetic mean of a value column within each distinct value of a
/// grouping column. Groups with zero members are omitted, so no division by
/// zero is possible; ordered columns emit in natural order.
pub fn grouped_average(
    dataset: &Dataset,
    group: CategoricalColumn,
    value: NumericColumn,
) -> Series {
    let mut sums: HashMap<String, (f64, usize)> = HashMap::new();
    for record in dataset.iter() {
        let entry = sums.entry(group.value_of(record)).or_insert((0.0, 0));
        entry.0 += value.value_of(record);
        entry.1 += 1;
    }

    let mut labels: Vec<String> = sums.keys().cloned().collect();
    sort_labels(&mut labels, &group);

    labels
        .into_iter()
        .map(|label| {
            let (sum, count) = sums[&label];
            (label, sum / count as f64)
        })
        .collect()
}

/// String-named variants for configuration-driven selectors; an unknown
/// column name is a schema violation.
pub fn categorical_count_by_name(dataset: &Dataset, column: &str) -> Result<Series> {
    Ok(categorical_count(dataset, CategoricalColumn::from_name(column)?))
}

pub fn grouped_average_by_name(dataset: &Dataset, group: &str, value: &str) -> Result<Series> {
    Ok(grouped_average(
        dataset,
        CategoricalColumn::from_name(group)?,
        NumericColumn::from_name(value)?,
    ))
}

/// Presentation remap feeding the styled table: order preserving, one row
/// per record, disorder collapsed to a boolean, bucket columns dropped.
pub fn table_rows(dataset: &Dataset) -> Vec<TableRow> {
    dataset
        .iter()
        .map(|record| TableRow {
            gender: record.gender,
            occupation: record.occupation.clone(),
            has_disorder: record.sleep_disorder.is_disorder(),
            bmi_category: record.bmi_category,
            quality_of_sleep: record.quality_of_sleep,
            stress_level: record.stress_level,
            daily_steps: record.daily_steps,
            sleep_duration: record.sleep_duration,
        })
        .collect()
}

fn count_by(dataset: &Dataset, column: CategoricalColumn) -> HashMap<String, u64> {
    dataset.iter().fold(HashMap::new(), |mut acc, record| {
        *acc.entry(column.value_of(record)).or_default() += 1;
        acc
    })
}

fn sort_labels(labels: &mut [String], column: &CategoricalColumn) {
    match column.natural_order() {
        Some(order) => labels.sort_by_key(|label| {
            order
                .iter()
                .position(|candidate| *candidate == label.as_str())
                .unwrap_or(order.len())
        }),
        None => labels.sort(),
    }
}
