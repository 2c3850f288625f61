//! Error types for every stage of an interaction.

use std::path::PathBuf;

/// Raw record could not be turned into a feature vector.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EncodingError {
    #[error("unrecognized geography {value:?} (expected France, Germany or Spain)")]
    UnknownGeography { value: String },

    #[error("unrecognized gender {value:?} (expected Male or Female)")]
    UnknownGender { value: String },
}

/// Rejected field edit.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RecordError {
    #[error("unknown field {field:?}")]
    UnknownField { field: String },

    #[error("malformed edit {input:?} (expected Field=value)")]
    MalformedEdit { input: String },

    #[error("invalid value {value:?} for {field}")]
    InvalidValue { field: &'static str, value: String },

    #[error("{field} must be within {min}..={max}, got {value}")]
    OutOfBounds {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("{field} must be at least {min}, got {value}")]
    BelowMinimum {
        field: &'static str,
        value: f64,
        min: f64,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("failed to read dataset {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("malformed row {row} in dataset: {source}")]
    Row {
        row: u64,
        #[source]
        source: csv::Error,
    },

    #[error("customer {id} not found")]
    CustomerNotFound { id: u64 },

    #[error("invalid customer selection {input:?}")]
    InvalidSelection { input: String },
}

/// One predictor failed to produce a probability.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PredictionError {
    #[error("predictor unavailable: {reason}")]
    Unavailable { reason: String },

    #[error("inference failed: {reason}")]
    Inference { reason: String },

    #[error("probability {value} outside [0, 1]")]
    OutOfRange { value: f64 },

    #[error("predictor panicked")]
    Panicked,
}

#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("required models failed to load: {}", names.join(", "))]
    RequiredUnavailable { names: Vec<String> },
}

/// Failure talking to the text-generation service. Always fatal for the interaction.
#[derive(Debug, thiserror::Error)]
pub enum NarrativeError {
    #[error("API key missing: set {env_var}")]
    MissingApiKey { env_var: String },

    #[error("failed to build HTTP client: {reason}")]
    Client { reason: String },

    #[error("request to {url} failed: {reason}")]
    Transport { url: String, reason: String },

    #[error("service returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("malformed completion response: {reason}")]
    MalformedResponse { reason: String },
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Anything that ends a single interaction.
#[derive(Debug, thiserror::Error)]
pub enum InteractionError {
    #[error(transparent)]
    Encoding(#[from] EncodingError),

    #[error(transparent)]
    Narrative(#[from] NarrativeError),
}
