use sleepdash::core::{
    AgeGroup, BloodPressureCategory, BmiCategory, Dataset, Gender, Record, SleepDisorder,
};

/// A baseline survey subject; tests tweak the fields they care about.
pub fn subject() -> Record {
    Record {
        gender: Gender::Female,
        age_group: AgeGroup::Adult,
        occupation: "Nurse".to_string(),
        sleep_disorder: SleepDisorder::NoIssue,
        blood_pressure_category: BloodPressureCategory::Normal,
        bmi_category: BmiCategory::Normal,
        quality_of_sleep: 7.0,
        stress_level: 5.0,
        daily_steps: 7000.0,
        sleep_duration: 7.2,
    }
}

pub fn with(tweak: impl FnOnce(&mut Record)) -> Record {
    let mut record = subject();
    tweak(&mut record);
    record
}

pub fn dataset(records: Vec<Record>) -> Dataset {
    Dataset::new(records)
}
