//! Error types for the Idea Forge CLI.
//!
//! This module defines a unified error enum that covers all error categories
//! in the application: configuration, I/O, upstream LLM calls, schema
//! validation, prompt templates, and flow sequencing.

use thiserror::Error;

/// Unified error type for the Idea Forge CLI.
///
/// All functions in the application return `Result<T, AppError>`.
/// We never panic — errors must be represented and propagated.
///
/// The flow invoker distinguishes two failure classes: `Llm` covers
/// network and service failures (the caller may retry or surface a
/// generic message), while `Schema` covers replies that do not conform
/// to the declared output shape (not retryable without changing the
/// prompt or schema).
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O and filesystem errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Upstream LLM provider errors (network, HTTP, service)
    #[error("LLM error: {0}")]
    Llm(String),

    /// A model reply that failed output-schema validation
    #[error("Schema validation error: {0}")]
    Schema(String),

    /// Prompt template rendering errors
    #[error("Template error: {0}")]
    Template(String),

    /// Flow sequencing errors (missing prerequisite artifacts)
    #[error("Flow error: {0}")]
    Flow(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Generic errors
    #[error("{0}")]
    Other(String),
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}

impl From<serde_yaml::Error> for AppError {
    fn from(err: serde_yaml::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}

/// Convenience type alias for Results with AppError.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_llm_and_schema_errors_are_distinct() {
        let upstream = AppError::Llm("connection refused".to_string());
        let validation = AppError::Schema("missing field `features`".to_string());

        assert!(upstream.to_string().starts_with("LLM error"));
        assert!(validation.to_string().starts_with("Schema validation error"));
    }

    #[test]
    fn test_from_serde_json_error() {
        let err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let app_err: AppError = err.into();
        assert!(matches!(app_err, AppError::Serialization(_)));
    }
}
