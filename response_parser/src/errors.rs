//! Parser error types.
//!
//! Every variant is recoverable from the caller's point of view: the
//! analyze flow logs it and degrades to the fallback assessment.

use thiserror::Error;

pub type ParserResult<T> = Result<T, ParserError>;

#[derive(Debug, Error)]
pub enum ParserError {
    /// The model text contains no `{...}` region at all.
    #[error("no JSON object found in model output")]
    NoJsonObject,

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("schema violation: {0}")]
    Schema(#[from] SchemaError),
}

/// Field-level violations of the assessment schema.
#[derive(Debug, Error, PartialEq)]
pub enum SchemaError {
    #[error("missing required field `{0}`")]
    MissingField(&'static str),

    #[error("field `{field}` must be {expected}")]
    WrongType {
        field: &'static str,
        expected: &'static str,
    },

    #[error("field `{field}` out of range: {value}")]
    OutOfRange { field: &'static str, value: f64 },

    #[error("field `{field}` has unsupported value `{value}`")]
    UnknownValue { field: &'static str, value: String },
}
