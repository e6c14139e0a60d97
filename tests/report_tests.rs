mod common;

use common::{dataset, with};
use pretty_assertions::assert_eq;
use sleepdash::config::DashboardConfig;
use sleepdash::core::{BloodPressureCategory, Dataset, SleepDisorder};
use sleepdash::filter::DisorderFilter;
use sleepdash::io::output::{JsonWriter, MarkdownWriter, OutputWriter};
use sleepdash::report::build_report;
use std::path::Path;

fn sample() -> Dataset {
    dataset(vec![
        with(|r| {
            r.sleep_disorder = SleepDisorder::Insomnia;
            r.blood_pressure_category = BloodPressureCategory::Elevated;
        }),
        with(|r| r.occupation = "Doctor".to_string()),
        common::subject(),
    ])
}

#[test]
fn report_is_computed_over_the_filtered_subset() {
    let data = sample();
    let filter = DisorderFilter::from_labels(&["No Issue"]).unwrap();
    let report = build_report(
        Path::new("survey.csv"),
        &data,
        &filter,
        &DashboardConfig::default_with_panels(),
    )
    .unwrap();

    assert_eq!(report.population, 3);
    assert_eq!(report.selected, 2);
    // Metrics, charts, and table all describe the same two records.
    assert_eq!(report.table.len(), 2);
    assert_eq!(report.gender_breakdown.total(), 2.0);
    assert_eq!(report.occupation_treemap.total(), 2.0);
}

#[test]
fn funnel_in_the_report_covers_every_configured_stage() {
    let report = build_report(
        Path::new("survey.csv"),
        &sample(),
        &DisorderFilter::all(),
        &DashboardConfig::default_with_panels(),
    )
    .unwrap();

    assert_eq!(report.blood_pressure_funnel.len(), 4);
    assert_eq!(report.blood_pressure_funnel.value_of("Normal"), Some(2.0));
    assert_eq!(report.blood_pressure_funnel.value_of("Elevated"), Some(1.0));
    assert_eq!(
        report.blood_pressure_funnel.value_of("Hypertension Stage 2"),
        Some(0.0)
    );
}

#[test]
fn empty_selection_still_produces_a_complete_report() {
    let labels: [&str; 0] = [];
    let report = build_report(
        Path::new("survey.csv"),
        &sample(),
        &DisorderFilter::from_labels(&labels).unwrap(),
        &DashboardConfig::default_with_panels(),
    )
    .unwrap();

    assert_eq!(report.selected, 0);
    assert_eq!(report.metrics.len(), sleepdash::metrics::METRIC_COUNT);
    assert!(report.gender_breakdown.is_empty());
    assert!(report.table.is_empty());
    // Funnel stages stay present with explicit zeros.
    assert_eq!(report.blood_pressure_funnel.len(), 4);
    assert_eq!(report.blood_pressure_funnel.total(), 0.0);
}

#[test]
fn json_writer_emits_parseable_output() {
    let report = build_report(
        Path::new("survey.csv"),
        &sample(),
        &DisorderFilter::all(),
        &DashboardConfig::default_with_panels(),
    )
    .unwrap();

    let mut buffer = Vec::new();
    JsonWriter::new(&mut buffer).write_report(&report).unwrap();

    let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
    assert_eq!(value["population"], 3);
    assert_eq!(value["metrics"].as_array().unwrap().len(), 5);
    assert_eq!(
        value["blood_pressure_funnel"]["points"]
            .as_array()
            .unwrap()
            .len(),
        4
    );
}

#[test]
fn markdown_writer_includes_metrics_and_series_sections() {
    let report = build_report(
        Path::new("survey.csv"),
        &sample(),
        &DisorderFilter::all(),
        &DashboardConfig::default_with_panels(),
    )
    .unwrap();

    let mut buffer = Vec::new();
    MarkdownWriter::new(&mut buffer)
        .write_report(&report)
        .unwrap();
    let rendered = String::from_utf8(buffer).unwrap();

    assert!(rendered.contains("# Sleep Health Dashboard"));
    assert!(rendered.contains("## Metrics"));
    assert!(rendered.contains("| Total Subjects | 3 |"));
    assert!(rendered.contains("## Blood Pressure"));
    assert!(rendered.contains("| Hypertension Stage 2 | 0.0 |"));
}
