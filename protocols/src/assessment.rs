//! Assessment result schema.
//!
//! One entity, no persistence: a result is constructed by the response
//! validator (or the fallback path), serialized to the caller, and dropped.

use serde::{Deserialize, Serialize};

/// Categorical label for the type of infrastructure damage observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DamageClass {
    Pothole,
    BrokenStreetLight,
    WaterLeak,
    BridgeCrack,
    Unknown,
}

/// Qualitative damage magnitude bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    Severe,
}

/// Threshold-derived triage bucket of `health_score`, computed by the
/// model: `< 30` Critical, `30..=60` Warning, `> 60` Safe.
///
/// Wire names are capitalized (`"Critical"`, `"Warning"`, `"Safe"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    Critical,
    Warning,
    Safe,
}

/// Infrastructure type the model infers from the image, independent of
/// what the reporter claimed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InfraType {
    Road,
    StreetLight,
    Water,
    Bridge,
}

/// One damage assessment, either validated model output or the static
/// fallback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentResult {
    pub damage_class: DamageClass,

    pub severity: Severity,

    /// Damage magnitude in `[0, 1]`.
    pub severity_score: f64,

    /// Infrastructure condition in `[0, 100]`, lower is worse.
    pub health_score: u8,

    pub risk_level: RiskLevel,

    /// Short safety-focused recommendation for the caller.
    pub ai_suggestion: String,

    /// Serialized as an explicit `null` when the model could not infer a
    /// type, so the field is always present in responses.
    pub inferred_infra_type: Option<InfraType>,

    /// Whether the inferred type disagrees with the reporter's claim.
    pub infra_type_mismatch: bool,
}

impl AssessmentResult {
    /// Conservative static result returned whenever the model's output
    /// cannot be trusted. Identical across calls.
    pub fn fallback() -> Self {
        Self {
            damage_class: DamageClass::Unknown,
            severity: Severity::Medium,
            severity_score: 0.5,
            health_score: 50,
            risk_level: RiskLevel::Warning,
            ai_suggestion:
                "Damage could not be clearly identified. Manual inspection recommended."
                    .to_string(),
            inferred_infra_type: None,
            infra_type_mismatch: false,
        }
    }
}
