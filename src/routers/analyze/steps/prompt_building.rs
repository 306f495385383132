//! PromptBuilding step.
//!
//! Transition: BuildPrompt → InvokeModel

use axum::response::Response;
use tracing::debug;

use crate::{
    media, prompt,
    routers::{
        analyze::{
            context::RequestContext,
            state::{RequestState, StepResult},
        },
        error,
    },
};

/// Decode the request image and render the assessment prompt.
///
/// ## Reads
/// - `ctx.request`: image (base64), infra_type, zone_type, lat, lng.
///
/// ## Writes
/// - `ctx.processing.image`, `ctx.processing.mime_type`,
///   `ctx.processing.prompt`.
/// - `ctx.state` → `InvokeModel`.
///
/// The only client-fault exits on this route: undecodable base64 and byte
/// payloads no image decoder recognizes are 400s, not fallbacks.
pub(crate) fn prompt_building(ctx: &mut RequestContext) -> Result<StepResult, Response> {
    let request = &ctx.request;

    let image = media::decode_image(&request.image).map_err(|e| {
        debug!(error = %e, "request image is not valid base64");
        error::bad_request("invalid_image_encoding", "image must be base64-encoded")
    })?;

    let mime_type = media::sniff_mime(&image).ok_or_else(|| {
        debug!(
            image_bytes = image.len(),
            "request image bytes not recognized as an image"
        );
        error::bad_request(
            "unsupported_image_format",
            "image bytes are not a recognized image format",
        )
    })?;

    ctx.processing.prompt = Some(prompt::build(
        &request.infra_type,
        &request.zone_type,
        request.lat,
        request.lng,
    ));
    ctx.processing.image = image;
    ctx.processing.mime_type = Some(mime_type);
    ctx.state = RequestState::InvokeModel;
    Ok(StepResult::Continue)
}
