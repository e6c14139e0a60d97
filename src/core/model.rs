use serde::{Deserialize, Serialize};

/// Survey subject gender.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Female,
    Male,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Female, Gender::Male];

    pub fn label(&self) -> &'static str {
        match self {
            Gender::Female => "Female",
            Gender::Male => "Male",
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Ordered age bucket. Variant order is the natural display order for
/// grouped charts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AgeGroup {
    Young,
    Adult,
    #[serde(rename = "Middle-aged")]
    MiddleAged,
    Senior,
}

impl AgeGroup {
    pub const ALL: [AgeGroup; 4] = [
        AgeGroup::Young,
        AgeGroup::Adult,
        AgeGroup::MiddleAged,
        AgeGroup::Senior,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            AgeGroup::Young => "Young",
            AgeGroup::Adult => "Adult",
            AgeGroup::MiddleAged => "Middle-aged",
            AgeGroup::Senior => "Senior",
        }
    }
}

impl std::fmt::Display for AgeGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Reported sleep disorder. `NoIssue` is the explicit "nothing reported"
/// category, not a missing value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SleepDisorder {
    #[serde(rename = "No Issue")]
    NoIssue,
    Insomnia,
    #[serde(rename = "Sleep Apnea")]
    SleepApnea,
}

impl SleepDisorder {
    pub const ALL: [SleepDisorder; 3] = [
        SleepDisorder::NoIssue,
        SleepDisorder::Insomnia,
        SleepDisorder::SleepApnea,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SleepDisorder::NoIssue => "No Issue",
            SleepDisorder::Insomnia => "Insomnia",
            SleepDisorder::SleepApnea => "Sleep Apnea",
        }
    }

    /// True for any named disorder.
    pub fn is_disorder(&self) -> bool {
        !matches!(self, SleepDisorder::NoIssue)
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|d| d.label() == label)
    }
}

impl std::fmt::Display for SleepDisorder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Blood pressure stage in severity order, used as the funnel progression.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum BloodPressureCategory {
    Normal,
    Elevated,
    #[serde(rename = "Hypertension Stage 1")]
    HypertensionStage1,
    #[serde(rename = "Hypertension Stage 2")]
    HypertensionStage2,
}

impl BloodPressureCategory {
    pub const ALL: [BloodPressureCategory; 4] = [
        BloodPressureCategory::Normal,
        BloodPressureCategory::Elevated,
        BloodPressureCategory::HypertensionStage1,
        BloodPressureCategory::HypertensionStage2,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            BloodPressureCategory::Normal => "Normal",
            BloodPressureCategory::Elevated => "Elevated",
            BloodPressureCategory::HypertensionStage1 => "Hypertension Stage 1",
            BloodPressureCategory::HypertensionStage2 => "Hypertension Stage 2",
        }
    }
}

impl std::fmt::Display for BloodPressureCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Body mass index bucket.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    pub const ALL: [BmiCategory; 4] = [
        BmiCategory::Underweight,
        BmiCategory::Normal,
        BmiCategory::Overweight,
        BmiCategory::Obese,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }
}

impl std::fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One observed survey subject. The schema is assumed complete and
/// pre-cleaned; there are no optional fields.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub gender: Gender,
    pub age_group: AgeGroup,
    pub occupation: String,
    pub sleep_disorder: SleepDisorder,
    pub blood_pressure_category: BloodPressureCategory,
    pub bmi_category: BmiCategory,
    /// Self-reported sleep quality, 0-10.
    pub quality_of_sleep: f64,
    /// Self-reported stress level, 0-10.
    pub stress_level: f64,
    pub daily_steps: f64,
    /// Hours per night.
    pub sleep_duration: f64,
}

/// An ordered, in-memory collection of survey records. Never mutated after
/// construction; filtering produces a fresh `Dataset`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }
}

impl FromIterator<Record> for Dataset {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Dataset {
            records: iter.into_iter().collect(),
        }
    }
}

