mod common;

use common::{dataset, subject, with};
use pretty_assertions::assert_eq;
use sleepdash::core::{BloodPressureCategory, CategoricalColumn, Dataset, NumericColumn};
use sleepdash::errors::SleepdashError;
use sleepdash::shape::{
    categorical_count, categorical_count_by_name, categorical_count_ordered, grouped_average,
    grouped_average_by_name, hierarchical_count, table_rows,
};
use sleepdash::AgeGroup;

#[test]
fn categorical_count_totals_match_dataset_length() {
    let data = dataset(vec![
        with(|r| r.blood_pressure_category = BloodPressureCategory::Normal),
        with(|r| r.blood_pressure_category = BloodPressureCategory::Elevated),
        with(|r| r.blood_pressure_category = BloodPressureCategory::Elevated),
        with(|r| r.blood_pressure_category = BloodPressureCategory::HypertensionStage2),
    ]);
    let series = categorical_count(&data, CategoricalColumn::BloodPressureCategory);
    assert_eq!(series.total(), data.len() as f64);
}

#[test]
fn categorical_count_groups_blood_pressure() {
    let data = dataset(vec![
        with(|r| r.blood_pressure_category = BloodPressureCategory::Normal),
        with(|r| r.blood_pressure_category = BloodPressureCategory::Normal),
        with(|r| r.blood_pressure_category = BloodPressureCategory::HypertensionStage1),
    ]);
    let series = categorical_count(&data, CategoricalColumn::BloodPressureCategory);

    assert_eq!(series.value_of("Normal"), Some(2.0));
    assert_eq!(series.value_of("Hypertension Stage 1"), Some(1.0));
    // Sparse: stages with no records are absent.
    assert_eq!(series.value_of("Elevated"), None);
    assert_eq!(series.len(), 2);
}

#[test]
fn categorical_count_emits_natural_order() {
    let data = dataset(vec![
        with(|r| r.blood_pressure_category = BloodPressureCategory::HypertensionStage1),
        with(|r| r.blood_pressure_category = BloodPressureCategory::Normal),
    ]);
    let series = categorical_count(&data, CategoricalColumn::BloodPressureCategory);
    let labels: Vec<&str> = series.iter().map(|p| p.label.as_str()).collect();
    assert_eq!(labels, vec!["Normal", "Hypertension Stage 1"]);
}

#[test]
fn funnel_preserves_caller_order_and_emits_zeros() {
    let data = dataset(vec![
        with(|r| r.blood_pressure_category = BloodPressureCategory::Normal),
        with(|r| r.blood_pressure_category = BloodPressureCategory::HypertensionStage2),
    ]);
    let order: Vec<String> = BloodPressureCategory::ALL
        .iter()
        .map(|c| c.label().to_string())
        .collect();
    let series =
        categorical_count_ordered(&data, CategoricalColumn::BloodPressureCategory, &order);

    let labels: Vec<&str> = series.iter().map(|p| p.label.as_str()).collect();
    assert_eq!(
        labels,
        vec![
            "Normal",
            "Elevated",
            "Hypertension Stage 1",
            "Hypertension Stage 2"
        ]
    );
    // Missing stages are explicit zeros, keeping the funnel continuous.
    assert_eq!(series.value_of("Elevated"), Some(0.0));
    assert_eq!(series.value_of("Hypertension Stage 1"), Some(0.0));
    assert_eq!(series.value_of("Normal"), Some(1.0));
}

#[test]
fn funnel_ignores_labels_outside_the_ordering() {
    let data = dataset(vec![with(|r| {
        r.blood_pressure_category = BloodPressureCategory::Elevated
    })]);
    let order = vec!["Normal".to_string(), "Elevated".to_string()];
    let series =
        categorical_count_ordered(&data, CategoricalColumn::BloodPressureCategory, &order);
    assert_eq!(series.len(), 2);
    assert_eq!(series.value_of("Hypertension Stage 1"), None);
}

#[test]
fn grouped_average_computes_exact_means() {
    let data = dataset(vec![
        with(|r| {
            r.age_group = AgeGroup::Young;
            r.daily_steps = 4000.0;
        }),
        with(|r| {
            r.age_group = AgeGroup::Young;
            r.daily_steps = 6000.0;
        }),
    ]);
    let series = grouped_average(&data, CategoricalColumn::AgeGroup, NumericColumn::DailySteps);

    assert_eq!(series.len(), 1);
    assert_eq!(series.value_of("Young"), Some(5000.0));
}

#[test]
fn grouped_average_of_empty_dataset_is_empty() {
    let series = grouped_average(
        &Dataset::default(),
        CategoricalColumn::AgeGroup,
        NumericColumn::DailySteps,
    );
    assert!(series.is_empty());
}

#[test]
fn grouped_average_omits_groups_without_members() {
    let data = dataset(vec![with(|r| r.age_group = AgeGroup::Senior)]);
    let series = grouped_average(&data, CategoricalColumn::AgeGroup, NumericColumn::DailySteps);
    let labels: Vec<&str> = series.iter().map(|p| p.label.as_str()).collect();
    assert_eq!(labels, vec!["Senior"]);
}

#[test]
fn grouped_average_emits_age_buckets_in_natural_order() {
    let data = dataset(vec![
        with(|r| r.age_group = AgeGroup::Senior),
        with(|r| r.age_group = AgeGroup::Young),
        with(|r| r.age_group = AgeGroup::MiddleAged),
    ]);
    let series = grouped_average(&data, CategoricalColumn::AgeGroup, NumericColumn::SleepDuration);
    let labels: Vec<&str> = series.iter().map(|p| p.label.as_str()).collect();
    assert_eq!(labels, vec!["Young", "Middle-aged", "Senior"]);
}

#[test]
fn hierarchical_count_sorts_descending_for_area_layout() {
    let data = dataset(vec![
        with(|r| r.occupation = "Engineer".to_string()),
        with(|r| r.occupation = "Nurse".to_string()),
        with(|r| r.occupation = "Nurse".to_string()),
        with(|r| r.occupation = "Doctor".to_string()),
    ]);
    let series = hierarchical_count(&data);
    let labels: Vec<&str> = series.iter().map(|p| p.label.as_str()).collect();

    assert_eq!(labels[0], "Nurse");
    // Count ties break by label.
    assert_eq!(&labels[1..], ["Doctor", "Engineer"]);
    assert_eq!(series.total(), 4.0);
}

#[test]
fn unknown_column_name_is_a_schema_violation() {
    let data = dataset(vec![subject()]);
    let err = categorical_count_by_name(&data, "nonexistent_column").unwrap_err();
    assert!(matches!(
        err,
        SleepdashError::SchemaViolation { ref column } if column == "nonexistent_column"
    ));

    let err = grouped_average_by_name(&data, "age_group", "shoe_size").unwrap_err();
    assert!(matches!(err, SleepdashError::SchemaViolation { .. }));
}

#[test]
fn named_lookup_matches_typed_api() {
    let data = dataset(vec![subject(), subject()]);
    let by_name = categorical_count_by_name(&data, "gender").unwrap();
    let typed = categorical_count(&data, CategoricalColumn::Gender);
    assert_eq!(by_name, typed);
}

#[test]
fn table_rows_preserve_record_order_and_collapse_disorders() {
    use sleepdash::SleepDisorder;

    let data = dataset(vec![
        with(|r| {
            r.occupation = "Doctor".to_string();
            r.sleep_disorder = SleepDisorder::Insomnia;
        }),
        with(|r| r.occupation = "Nurse".to_string()),
        with(|r| {
            r.occupation = "Teacher".to_string();
            r.sleep_disorder = SleepDisorder::SleepApnea;
        }),
    ]);
    let rows = table_rows(&data);

    assert_eq!(rows.len(), 3);
    let occupations: Vec<&str> = rows.iter().map(|r| r.occupation.as_str()).collect();
    assert_eq!(occupations, vec!["Doctor", "Nurse", "Teacher"]);
    let disorders: Vec<bool> = rows.iter().map(|r| r.has_disorder).collect();
    assert_eq!(disorders, vec![true, false, true]);
}
