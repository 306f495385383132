//! Protocol types for the damage assessment API.
//!
//! Holds the request/response contract shared by the HTTP layer, the
//! response parser, and the fallback path. Nothing in here talks to the
//! network.

pub mod analyze;
pub mod assessment;
pub mod validated;

pub use analyze::AnalyzeRequest;
pub use assessment::{AssessmentResult, DamageClass, InfraType, RiskLevel, Severity};
pub use validated::Normalizable;
#[cfg(feature = "axum")]
pub use validated::ValidatedJson;
