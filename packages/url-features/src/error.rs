//! Typed errors for the url-features library.
//!
//! Domain extraction never produces an error (an unrecognized host simply
//! yields no domain), so every error here comes from loading artifacts or
//! running the classifier.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading or validating the trained feature order.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Artifact could not be read
    #[error("failed to read feature names from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Artifact is not a JSON array of strings
    #[error("feature names are not a JSON array of strings: {0}")]
    Decode(#[from] serde_json::Error),

    /// Name the extractor does not produce
    #[error("unknown feature name: {0:?}")]
    UnknownFeature(String),

    /// Same name listed twice
    #[error("duplicate feature name: {0:?}")]
    DuplicateFeature(String),

    /// Name the extractor produces but the artifact omits
    #[error("feature missing from trained order: {0:?}")]
    MissingFeature(String),
}

/// Errors raised while loading or evaluating the classifier.
#[derive(Debug, Error)]
pub enum ClassifierError {
    /// Artifact could not be read
    #[error("failed to read classifier from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Artifact is not valid JSON for the expected shape
    #[error("classifier JSON decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Structurally invalid model
    #[error("invalid classifier: {reason}")]
    Invalid { reason: String },

    /// Vector width does not match what the model was trained on
    #[error("feature vector has {actual} values, classifier expects {expected}")]
    DimensionMismatch { expected: usize, actual: usize },
}

/// Errors raised by the assembled model bundle.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error(transparent)]
    Classifier(#[from] ClassifierError),

    /// Feature order and classifier disagree on the vector width
    #[error("feature order lists {schema} features but classifier expects {classifier}")]
    WidthMismatch { schema: usize, classifier: usize },
}

/// Result type alias for schema operations.
pub type SchemaResult<T> = std::result::Result<T, SchemaError>;

/// Result type alias for classifier operations.
pub type ClassifierResult<T> = std::result::Result<T, ClassifierError>;

/// Result type alias for model operations.
pub type Result<T> = std::result::Result<T, ModelError>;
