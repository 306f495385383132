//! End-to-end parser tests: raw model text in, typed assessment (or a
//! specific error) out.

use assessment_protocol::{DamageClass, InfraType, RiskLevel, Severity};
use response_parser::{parse_assessment, ParserError, SchemaError};

const VALID_OUTPUT: &str = r#"{
  "damage_class": "water_leak",
  "severity": "medium",
  "severity_score": 0.55,
  "health_score": 45,
  "risk_level": "Warning",
  "ai_suggestion": "Shut off the supply line and schedule a repair crew.",
  "inferred_infra_type": "water",
  "infra_type_mismatch": true
}"#;

#[test]
fn test_clean_model_output() {
    let result = parse_assessment(VALID_OUTPUT).unwrap();
    assert_eq!(result.damage_class, DamageClass::WaterLeak);
    assert_eq!(result.severity, Severity::Medium);
    assert_eq!(result.risk_level, RiskLevel::Warning);
    assert_eq!(result.inferred_infra_type, Some(InfraType::Water));
    assert!(result.infra_type_mismatch);
}

#[test]
fn test_output_wrapped_in_markdown_fence() {
    let raw = format!("```json\n{VALID_OUTPUT}\n```");
    let result = parse_assessment(&raw).unwrap();
    assert_eq!(result.health_score, 45);
}

#[test]
fn test_output_wrapped_in_prose() {
    let raw = format!("Sure! Here is the structured assessment you asked for:\n\n{VALID_OUTPUT}\n\nLet me know if you need anything else.");
    let result = parse_assessment(&raw).unwrap();
    assert_eq!(result.severity_score, 0.55);
}

#[test]
fn test_refusal_text_has_no_object() {
    let err = parse_assessment("I cannot assess this image.").unwrap_err();
    assert!(matches!(err, ParserError::NoJsonObject));
}

#[test]
fn test_truncated_output_is_a_json_error() {
    // A cut-off response keeps the opening brace and whatever closing brace
    // a nested value contributed, so extraction succeeds but parsing fails.
    let raw = r#"{"damage_class": "pothole", "details": {"note": "x"}"#;
    let err = parse_assessment(raw).unwrap_err();
    assert!(matches!(err, ParserError::Json(_)));
}

#[test]
fn test_incomplete_schema_is_a_schema_error() {
    let raw = r#"Sure! Here is the result: {"damage_class": "pothole", "severity": "low"}"#;
    let err = parse_assessment(raw).unwrap_err();
    assert!(matches!(
        err,
        ParserError::Schema(SchemaError::MissingField(_))
    ));
}

#[test]
fn test_out_of_range_health_score_rejected() {
    let raw = VALID_OUTPUT.replace("\"health_score\": 45", "\"health_score\": 150");
    let err = parse_assessment(&raw).unwrap_err();
    assert!(matches!(
        err,
        ParserError::Schema(SchemaError::OutOfRange {
            field: "health_score",
            ..
        })
    ));
}
