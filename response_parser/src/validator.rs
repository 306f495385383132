//! Field-by-field validation of a candidate assessment document.
//!
//! Works on `serde_json::Value` rather than deserializing straight into
//! the typed struct so that a malformed document and a schema violation
//! surface as different errors, and so the offending field is named in
//! the error.

use assessment_protocol::AssessmentResult;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::{
    errors::{ParserResult, SchemaError},
    extractor::extract_json_object,
};

/// Extract and validate an assessment from raw model text.
pub fn parse_assessment(raw: &str) -> ParserResult<AssessmentResult> {
    let candidate = extract_json_object(raw)?;
    let obj: Map<String, Value> = serde_json::from_str(candidate)?;
    Ok(validate_assessment(&obj)?)
}

/// Check every schema field on a parsed JSON object and build the typed
/// result.
///
/// Out-of-range numbers are rejected, never clamped. Every field except
/// `inferred_infra_type` is required; `inferred_infra_type` may be absent
/// or `null`.
pub fn validate_assessment(obj: &Map<String, Value>) -> Result<AssessmentResult, SchemaError> {
    let severity_score = number_field(obj, "severity_score")?;
    if !(0.0..=1.0).contains(&severity_score) {
        return Err(SchemaError::OutOfRange {
            field: "severity_score",
            value: severity_score,
        });
    }

    let health_score = integer_field(obj, "health_score")?;
    if !(0..=100).contains(&health_score) {
        return Err(SchemaError::OutOfRange {
            field: "health_score",
            value: health_score as f64,
        });
    }

    Ok(AssessmentResult {
        damage_class: enum_field(obj, "damage_class")?,
        severity: enum_field(obj, "severity")?,
        severity_score,
        health_score: health_score as u8,
        risk_level: enum_field(obj, "risk_level")?,
        ai_suggestion: string_field(obj, "ai_suggestion")?,
        inferred_infra_type: optional_enum_field(obj, "inferred_infra_type")?,
        infra_type_mismatch: bool_field(obj, "infra_type_mismatch")?,
    })
}

fn require<'a>(obj: &'a Map<String, Value>, field: &'static str) -> Result<&'a Value, SchemaError> {
    obj.get(field).ok_or(SchemaError::MissingField(field))
}

fn number_field(obj: &Map<String, Value>, field: &'static str) -> Result<f64, SchemaError> {
    require(obj, field)?.as_f64().ok_or(SchemaError::WrongType {
        field,
        expected: "a number",
    })
}

fn integer_field(obj: &Map<String, Value>, field: &'static str) -> Result<i64, SchemaError> {
    require(obj, field)?.as_i64().ok_or(SchemaError::WrongType {
        field,
        expected: "an integer",
    })
}

fn string_field(obj: &Map<String, Value>, field: &'static str) -> Result<String, SchemaError> {
    Ok(require(obj, field)?
        .as_str()
        .ok_or(SchemaError::WrongType {
            field,
            expected: "a string",
        })?
        .to_string())
}

fn bool_field(obj: &Map<String, Value>, field: &'static str) -> Result<bool, SchemaError> {
    require(obj, field)?.as_bool().ok_or(SchemaError::WrongType {
        field,
        expected: "a boolean",
    })
}

/// Decode a string field into one of the protocol enums. Deserializing the
/// value keeps the enum definitions as the single source of truth for the
/// accepted variant names.
fn enum_field<T: DeserializeOwned>(
    obj: &Map<String, Value>,
    field: &'static str,
) -> Result<T, SchemaError> {
    let value = require(obj, field)?;
    let s = value.as_str().ok_or(SchemaError::WrongType {
        field,
        expected: "a string",
    })?;
    serde_json::from_value(value.clone()).map_err(|_| SchemaError::UnknownValue {
        field,
        value: s.to_string(),
    })
}

fn optional_enum_field<T: DeserializeOwned>(
    obj: &Map<String, Value>,
    field: &'static str,
) -> Result<Option<T>, SchemaError> {
    match obj.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => {
            let s = value.as_str().ok_or(SchemaError::WrongType {
                field,
                expected: "a string or null",
            })?;
            serde_json::from_value(value.clone())
                .map(Some)
                .map_err(|_| SchemaError::UnknownValue {
                    field,
                    value: s.to_string(),
                })
        }
    }
}
