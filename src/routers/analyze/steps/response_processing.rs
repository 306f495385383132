//! ResponseProcessing step.
//!
//! Terminal step: returns `StepResult::Response` directly.

use assessment_protocol::AssessmentResult;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use response_parser::parse_assessment;
use tracing::warn;

use crate::routers::analyze::{context::RequestContext, state::StepResult};

/// Produce the terminal HTTP response.
///
/// When model text exists and survives extraction plus schema validation,
/// the validated assessment is returned. Any parser error, and the
/// no-model-text case, degrade to the static fallback. Always 200.
///
/// ## Reads
/// - `ctx.processing.model_text` (taken).
pub(crate) fn response_processing(ctx: &mut RequestContext) -> Result<StepResult, Response> {
    let assessment = match ctx.processing.model_text.take() {
        Some(raw) => match parse_assessment(&raw) {
            Ok(validated) => validated,
            Err(e) => {
                warn!(error = %e, "model output rejected, returning fallback");
                AssessmentResult::fallback()
            }
        },
        None => AssessmentResult::fallback(),
    };

    Ok(StepResult::Response(
        (StatusCode::OK, Json(assessment)).into_response(),
    ))
}
