//! Load-error taxonomy.
//!
//! Every variant is fatal: a malformed record aborts the run before any
//! allocation begins.

use thiserror::Error;

/// Errors raised while loading input files.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to open {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error in {path}: {source}")]
    Csv {
        path: String,
        #[source]
        source: csv::Error,
    },

    #[error("record on line {line} has {got} fields, expected at least {expected}")]
    ShortRecord {
        line: usize,
        expected: usize,
        got: usize,
    },

    #[error("invalid grade token {token:?} on line {line} (expected \"K\" or an integer)")]
    InvalidGrade { token: String, line: usize },

    #[error("workshop name {value:?} on line {line} is missing the \"ID - Name\" separator")]
    MissingIdSeparator { value: String, line: usize },

    #[error("invalid grade range {value:?} on line {line} (expected \"min-max\")")]
    InvalidGradeRange { value: String, line: usize },

    #[error("invalid capacity {value:?} on line {line}")]
    InvalidCapacity { value: String, line: usize },
}
