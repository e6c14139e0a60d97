//! Assembles one `DashboardReport` for a filter selection: applies the
//! filter once and feeds the same subset to the metric calculator and every
//! chart shape, so the whole display describes the same records.

use crate::config::DashboardConfig;
use crate::core::{AveragePanelSeries, DashboardReport, Dataset};
use crate::errors::Result;
use crate::filter::DisorderFilter;
use crate::{metrics, shape};
use chrono::Utc;
use std::path::Path;

pub fn build_report(
    source: &Path,
    dataset: &Dataset,
    filter: &DisorderFilter,
    config: &DashboardConfig,
) -> Result<DashboardReport> {
    let subset = filter.apply(dataset);
    log::debug!(
        "building report over {} of {} records",
        subset.len(),
        dataset.len()
    );

    let funnel_column = config.funnel_column()?;
    let average_panels = config
        .resolved_panels()?
        .into_iter()
        .zip(&config.averages)
        .map(|(panel, cfg)| AveragePanelSeries {
            title: cfg.title.clone(),
            series: shape::grouped_average(&subset, panel.group, panel.value),
        })
        .collect();

    Ok(DashboardReport {
        source: source.to_path_buf(),
        timestamp: Utc::now(),
        filter: filter.labels(),
        population: dataset.len(),
        selected: subset.len(),
        metrics: metrics::calculate_metrics(&subset, &config.metrics),
        gender_breakdown: shape::categorical_count(&subset, crate::core::CategoricalColumn::Gender),
        bmi_breakdown: shape::categorical_count(
            &subset,
            crate::core::CategoricalColumn::BmiCategory,
        ),
        blood_pressure_funnel: shape::categorical_count_ordered(
            &subset,
            funnel_column,
            &config.funnel.order,
        ),
        occupation_treemap: shape::hierarchical_count(&subset),
        average_panels,
        table: shape::table_rows(&subset),
    })
}
