use indoc::indoc;
use pretty_assertions::assert_eq;
use sleepdash::core::{AgeGroup, BloodPressureCategory, Gender, SleepDisorder};
use sleepdash::errors::SleepdashError;
use sleepdash::io::loader::{load_dataset, read_dataset};
use std::io::Write;
use std::path::Path;

const HEADER: &str = "gender,age_group,occupation,sleep_disorder,blood_pressure_category,bmi_category,quality_of_sleep,stress_level,daily_steps,sleep_duration";

#[test]
fn reads_typed_records_from_csv() {
    let csv = indoc! {"
        gender,age_group,occupation,sleep_disorder,blood_pressure_category,bmi_category,quality_of_sleep,stress_level,daily_steps,sleep_duration
        Female,Young,Nurse,No Issue,Normal,Normal,8,4,8000,7.5
        Male,Middle-aged,Engineer,Sleep Apnea,Hypertension Stage 1,Overweight,5,7,4200,6.1
    "};
    let dataset = read_dataset(csv.as_bytes()).unwrap();

    assert_eq!(dataset.len(), 2);
    let first = &dataset.records()[0];
    assert_eq!(first.gender, Gender::Female);
    assert_eq!(first.age_group, AgeGroup::Young);
    assert_eq!(first.sleep_disorder, SleepDisorder::NoIssue);
    assert_eq!(first.sleep_duration, 7.5);

    let second = &dataset.records()[1];
    assert_eq!(second.age_group, AgeGroup::MiddleAged);
    assert_eq!(
        second.blood_pressure_category,
        BloodPressureCategory::HypertensionStage1
    );
    assert_eq!(second.sleep_disorder, SleepDisorder::SleepApnea);
}

#[test]
fn header_only_file_is_an_empty_dataset() {
    let dataset = read_dataset(format!("{HEADER}\n").as_bytes()).unwrap();
    assert!(dataset.is_empty());
}

#[test]
fn unknown_category_label_fails_the_load() {
    let csv = format!("{HEADER}\nFemale,Young,Nurse,Narcolepsy,Normal,Normal,8,4,8000,7.5\n");
    assert!(read_dataset(csv.as_bytes()).is_err());
}

#[test]
fn load_dataset_attaches_the_path_to_csv_errors() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "{HEADER}").unwrap();
    writeln!(file, "Female,Young,Nurse,No Issue,Normal,Normal,not-a-number,4,8000,7.5").unwrap();

    let err = load_dataset(file.path()).unwrap_err();
    match err {
        SleepdashError::Csv { path, .. } => assert_eq!(path, file.path()),
        other => panic!("expected Csv error, got {other:?}"),
    }
}

#[test]
fn missing_file_is_an_io_error_with_path() {
    let err = load_dataset(Path::new("does/not/exist.csv")).unwrap_err();
    assert!(matches!(err, SleepdashError::Io { .. }));
}

#[test]
fn load_dataset_round_trips_through_a_real_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "{HEADER}").unwrap();
    writeln!(file, "Male,Senior,Doctor,Insomnia,Elevated,Obese,6,6,3000,5.9").unwrap();

    let dataset = load_dataset(file.path()).unwrap();
    assert_eq!(dataset.len(), 1);
    assert_eq!(dataset.records()[0].occupation, "Doctor");
}
