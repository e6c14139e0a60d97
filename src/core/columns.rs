//! Column selectors for the survey schema.
//!
//! The schema is closed, so selectors are enums rather than strings: the
//! typed API cannot name a column that does not exist. Configuration still
//! refers to columns by name, so `from_name` performs the validated lookup
//! and surfaces a schema violation for anything unknown.

use crate::core::model::Record;
use crate::errors::SleepdashError;
use serde::{Deserialize, Serialize};

/// A categorical column of the survey.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoricalColumn {
    Gender,
    AgeGroup,
    Occupation,
    SleepDisorder,
    BloodPressureCategory,
    BmiCategory,
}

impl CategoricalColumn {
    pub const ALL: [CategoricalColumn; 6] = [
        CategoricalColumn::Gender,
        CategoricalColumn::AgeGroup,
        CategoricalColumn::Occupation,
        CategoricalColumn::SleepDisorder,
        CategoricalColumn::BloodPressureCategory,
        CategoricalColumn::BmiCategory,
    ];

    pub const fn name(&self) -> &'static str {
        match self {
            CategoricalColumn::Gender => "gender",
            CategoricalColumn::AgeGroup => "age_group",
            CategoricalColumn::Occupation => "occupation",
            CategoricalColumn::SleepDisorder => "sleep_disorder",
            CategoricalColumn::BloodPressureCategory => "blood_pressure_category",
            CategoricalColumn::BmiCategory => "bmi_category",
        }
    }

    /// Validated lookup for configuration-driven selectors. An unknown name
    /// is a schema violation and must propagate, never degrade to an empty
    /// result.
    pub fn from_name(name: &str) -> Result<Self, SleepdashError> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.name() == name)
            .ok_or_else(|| SleepdashError::SchemaViolation {
                column: name.to_string(),
            })
    }

    /// The category label this column takes on a record.
    pub fn value_of(&self, record: &Record) -> String {
        match self {
            CategoricalColumn::Gender => record.gender.to_string(),
            CategoricalColumn::AgeGroup => record.age_group.to_string(),
            CategoricalColumn::Occupation => record.occupation.clone(),
            CategoricalColumn::SleepDisorder => record.sleep_disorder.to_string(),
            CategoricalColumn::BloodPressureCategory => {
                record.blood_pressure_category.to_string()
            }
            CategoricalColumn::BmiCategory => record.bmi_category.to_string(),
        }
    }

    /// Natural display order for columns that have one. Open-ended columns
    /// (occupation) return `None` and fall back to label order.
    pub fn natural_order(&self) -> Option<Vec<&'static str>> {
        use crate::core::model::{
            AgeGroup, BloodPressureCategory, BmiCategory, Gender, SleepDisorder,
        };
        match self {
            CategoricalColumn::Gender => {
                Some(Gender::ALL.iter().map(|v| v.label()).collect())
            }
            CategoricalColumn::AgeGroup => {
                Some(AgeGroup::ALL.iter().map(|v| v.label()).collect())
            }
            CategoricalColumn::SleepDisorder => {
                Some(SleepDisorder::ALL.iter().map(|v| v.label()).collect())
            }
            CategoricalColumn::BloodPressureCategory => {
                Some(BloodPressureCategory::ALL.iter().map(|v| v.label()).collect())
            }
            CategoricalColumn::BmiCategory => {
                Some(BmiCategory::ALL.iter().map(|v| v.label()).collect())
            }
            CategoricalColumn::Occupation => None,
        }
    }
}

impl std::fmt::Display for CategoricalColumn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A numeric column of the survey.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumericColumn {
    QualityOfSleep,
    StressLevel,
    DailySteps,
    SleepDuration,
}

impl NumericColumn {
    pub const ALL: [NumericColumn; 4] = [
        NumericColumn::QualityOfSleep,
        NumericColumn::StressLevel,
        NumericColumn::DailySteps,
        NumericColumn::SleepDuration,
    ];

    pub const fn name(&self) -> &'static str {
        match self {
            NumericColumn::QualityOfSleep => "quality_of_sleep",
            NumericColumn::StressLevel => "stress_level",
            NumericColumn::DailySteps => "daily_steps",
            NumericColumn::SleepDuration => "sleep_duration",
        }
    }

    pub fn from_name(name: &str) -> Result<Self, SleepdashError> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.name() == name)
            .ok_or_else(|| SleepdashError::SchemaViolation {
                column: name.to_string(),
            })
    }

    pub fn value_of(&self, record: &Record) -> f64 {
        match self {
            NumericColumn::QualityOfSleep => record.quality_of_sleep,
            NumericColumn::StressLevel => record.stress_level,
            NumericColumn::DailySteps => record.daily_steps,
            NumericColumn::SleepDuration => record.sleep_duration,
        }
    }
}

impl std::fmt::Display for NumericColumn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_name_resolves_every_categorical_column() {
        for column in CategoricalColumn::ALL {
            assert_eq!(CategoricalColumn::from_name(column.name()).unwrap(), column);
        }
    }

    #[test]
    fn from_name_rejects_unknown_column() {
        let err = CategoricalColumn::from_name("shoe_size").unwrap_err();
        assert!(matches!(
            err,
            SleepdashError::SchemaViolation { ref column } if column == "shoe_size"
        ));
    }

    #[test]
    fn numeric_from_name_rejects_categorical_name() {
        assert!(NumericColumn::from_name("gender").is_err());
    }
}
