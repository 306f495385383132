//! State machine types for the analyze route.

use axum::response::Response;

/// Request processing state.
///
/// Two-phase contract: a request is pending until a terminal response is
/// produced, and the terminal response is always an assessment, never a
/// model-side error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RequestState {
    /// Entry state: decode the image and render the prompt.
    BuildPrompt,
    /// Prompt and image ready for the outbound inference call.
    InvokeModel,
    /// Model round-trip finished (text or its absence recorded); produce
    /// the terminal response.
    ProcessResponse,
}

/// The result of executing a single step.
pub(crate) enum StepResult {
    /// The step updated `ctx.state`; the driver continues the loop.
    Continue,
    /// Terminal: return this `Response` to the client.
    Response(Response),
}
