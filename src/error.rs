//! Error types for the pipeline and its callers.

use std::path::PathBuf;
use thiserror::Error;

/// A vehicle record that cannot be turned into a [`crate::telemetry::VehicleReading`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("vehicle record must be a JSON object, got {found}")]
    NotAnObject { found: String },

    #[error("missing required field `{field}`")]
    MissingField { field: &'static str },

    #[error("field `{field}` must be numeric, got {found}")]
    NotNumeric { field: &'static str, found: String },

    #[error("field `{field}` must be an integer, got {found}")]
    NotInteger { field: &'static str, found: String },

    #[error("field `{field}` must be a string, got {found}")]
    NotString { field: &'static str, found: String },

    #[error("field `{field}` must be finite, got {value}")]
    NotFinite { field: &'static str, value: f64 },

    #[error("field `{field}` must not be empty")]
    Empty { field: &'static str },
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SchedulingError {
    #[error("randomness source exhausted")]
    RandomnessExhausted,

    #[error("randomness source unavailable: {0}")]
    SourceUnavailable(String),

    #[error("cannot choose from an empty {0} list")]
    EmptyChoiceSet(&'static str),

    #[error("randomness source returned index {index} for a set of {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("randomness source lock poisoned")]
    LockPoisoned,

    #[error("booking date overflow at offset {0} days")]
    DateOverflow(u32),
}

/// Any failure of a single orchestration call.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PipelineError {
    #[error("invalid vehicle reading: {0}")]
    Validation(#[from] ValidationError),

    #[error("slot recommendation failed: {0}")]
    Scheduling(#[from] SchedulingError),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Error)]
pub enum FleetError {
    #[error("cannot read fleet file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot parse fleet file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("unknown vehicle `{0}`")]
    UnknownVehicle(String),

    #[error("vehicle `{id}`: {source}")]
    InvalidRecord {
        id: String,
        #[source]
        source: ValidationError,
    },
}

/// Rejected manual booking request.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BookingError {
    #[error("unknown time window `{0}`")]
    UnknownWindow(String),

    #[error("unknown service center `{0}`")]
    UnknownCenter(String),

    #[error("booking date {date} must be after {today}")]
    DateNotInFuture {
        date: chrono::NaiveDate,
        today: chrono::NaiveDate,
    },
}
