//! Single state machine driver for the analyze route.
//!
//! One function, one loop, one match. Dispatches the appropriate step
//! based on `ctx.state` and handles the result.

use axum::response::Response;

use super::{
    context::RequestContext,
    state::{RequestState, StepResult},
    steps,
};

/// Execute the state machine to completion and return the final `Response`.
///
/// The `ProcessResponse` step produces the HTTP response via
/// `StepResult::Response`; an `Err` from a step is a client-fault response
/// returned as-is.
pub(crate) async fn execute(ctx: &mut RequestContext) -> Response {
    loop {
        let result = match ctx.state {
            RequestState::BuildPrompt => steps::prompt_building(ctx),

            RequestState::InvokeModel => steps::model_invocation(ctx).await,

            RequestState::ProcessResponse => steps::response_processing(ctx),
        };

        match result {
            Ok(StepResult::Continue) => continue,
            Ok(StepResult::Response(resp)) => return resp,
            Err(resp) => return resp,
        }
    }
}
