//! Disorder filter: narrows the full survey to the subset every metric and
//! chart series is computed from. Filtering never mutates the source
//! dataset; it produces a fresh one per selection.

use crate::core::{Dataset, SleepDisorder};
use crate::errors::{Result, SleepdashError};
use std::collections::BTreeSet;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisorderFilter {
    selected: BTreeSet<SleepDisorder>,
}

impl DisorderFilter {
    /// Select everything, the initial state of the dashboard.
    pub fn all() -> Self {
        Self {
            selected: SleepDisorder::ALL.into_iter().collect(),
        }
    }

    /// Build a filter from disorder labels, e.g. CLI `--disorders`.
    pub fn from_labels<S: AsRef<str>>(labels: &[S]) -> Result<Self> {
        let mut selected = BTreeSet::new();
        for label in labels {
            let label = label.as_ref();
            let disorder = SleepDisorder::from_label(label)
                .ok_or_else(|| SleepdashError::UnknownDisorder(label.to_string()))?;
            selected.insert(disorder);
        }
        Ok(Self { selected })
    }

    pub fn toggle(&mut self, disorder: SleepDisorder) {
        if !self.selected.remove(&disorder) {
            self.selected.insert(disorder);
        }
    }

    pub fn contains(&self, disorder: SleepDisorder) -> bool {
        self.selected.contains(&disorder)
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Labels of the selected disorders, in schema order.
    pub fn labels(&self) -> Vec<String> {
        self.selected.iter().map(|d| d.to_string()).collect()
    }

    /// The filtered subset. An empty selection yields an empty dataset,
    /// which every aggregation downstream handles without failing.
    pub fn apply(&self, dataset: &Dataset) -> Dataset {
        dataset
            .iter()
            .filter(|r| self.selected.contains(&r.sleep_disorder))
            .cloned()
            .collect()
    }
}

impl Default for DisorderFilter {
    fn default() -> Self {
        Self::all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_removes_then_restores() {
        let mut filter = DisorderFilter::all();
        filter.toggle(SleepDisorder::Insomnia);
        assert!(!filter.contains(SleepDisorder::Insomnia));
        filter.toggle(SleepDisorder::Insomnia);
        assert!(filter.contains(SleepDisorder::Insomnia));
    }

    #[test]
    fn unknown_label_is_rejected() {
        let err = DisorderFilter::from_labels(&["Narcolepsy"]).unwrap_err();
        assert!(matches!(err, SleepdashError::UnknownDisorder(_)));
    }
}
