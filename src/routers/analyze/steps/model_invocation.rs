//! ModelInvocation step.
//!
//! Transition: InvokeModel → ProcessResponse

use axum::response::Response;
use tracing::{error, warn};

use crate::routers::{
    analyze::{
        context::RequestContext,
        state::{RequestState, StepResult},
    },
    error,
};

/// Send image and prompt to the inference boundary.
///
/// Gateway failures are absorbed here: the error is logged and the absence
/// of model text recorded, so `response_processing` degrades to the
/// fallback. A gateway failure never fails the request.
///
/// ## Reads
/// - `ctx.processing.image`, `ctx.processing.mime_type`,
///   `ctx.processing.prompt`.
///
/// ## Writes
/// - `ctx.processing.model_text`.
/// - `ctx.state` → `ProcessResponse`.
pub(crate) async fn model_invocation(ctx: &mut RequestContext) -> Result<StepResult, Response> {
    let prompt = ctx.processing.prompt.as_deref().ok_or_else(|| {
        error!("model invocation step called without a prompt");
        error::internal_error("no_prompt", "Internal error: no prompt built")
    })?;

    let mime_type = ctx.processing.mime_type.ok_or_else(|| {
        error!("model invocation step called without a media type");
        error::internal_error("no_media_type", "Internal error: no media type sniffed")
    })?;

    let result = ctx
        .components
        .gateway
        .generate(&ctx.processing.image, mime_type, prompt)
        .await;

    ctx.processing.model_text = match result {
        Ok(text) => Some(text),
        Err(e) => {
            warn!(error = %e, "inference call failed, will fall back");
            None
        }
    };

    ctx.state = RequestState::ProcessResponse;
    Ok(StepResult::Continue)
}
