//! Typed errors for the analytics core.
//!
//! A schema violation means the shaping layer was configured against a
//! column the survey does not have. That is a build-time mismatch and must
//! reach the caller; it is never downgraded to an empty result. An empty
//! dataset is not an error anywhere in this crate.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SleepdashError {
    /// A column selector named a column that does not exist on the survey
    /// schema. Fatal to the operation that requested it.
    #[error("unknown column `{column}` requested from the survey schema")]
    SchemaViolation { column: String },

    /// A filter selection named a sleep disorder the schema does not know.
    #[error("unknown sleep disorder `{0}` in filter selection")]
    UnknownDisorder(String),

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed survey data in {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, SleepdashError>;
