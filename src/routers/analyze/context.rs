//! Context types for the analyze route.
//!
//! Two-level context design:
//! - `SharedComponents`: created once per router, `Arc`-cloned for each request.
//! - `RequestContext`: created fresh per request, owned and mutated by steps.

use std::sync::Arc;

use assessment_protocol::AnalyzeRequest;

use super::state::RequestState;
use crate::gateway::ModelGateway;

/// Immutable state shared across all requests.
///
/// Created once during `AnalyzeRouter::new()` and cheaply `Arc`-cloned
/// into every `RequestContext`.
pub(crate) struct SharedComponents {
    /// Outbound inference boundary.
    pub gateway: Arc<dyn ModelGateway>,
}

/// Per-request mutable state passed through the state machine.
///
/// Steps read and write fields on this struct. The `state` field
/// determines which step the driver executes next.
pub(crate) struct RequestContext {
    /// Original client request.
    pub request: Arc<AnalyzeRequest>,

    /// Reference to the per-router shared components.
    pub components: Arc<SharedComponents>,

    /// Current position in the state machine.
    pub state: RequestState,

    /// Mutable processing state populated incrementally by steps.
    pub processing: ProcessingState,
}

/// Mutable processing state populated incrementally by steps.
#[derive(Default)]
pub(crate) struct ProcessingState {
    /// Decoded image bytes (set by `prompt_building`).
    pub image: Vec<u8>,

    /// Sniffed image media type (set by `prompt_building`).
    pub mime_type: Option<&'static str>,

    /// Rendered prompt (set by `prompt_building`).
    pub prompt: Option<String>,

    /// Raw model text; `None` when the gateway failed
    /// (set by `model_invocation`).
    pub model_text: Option<String>,
}

impl RequestContext {
    /// Create a new `RequestContext` in the `BuildPrompt` state.
    pub fn new(request: Arc<AnalyzeRequest>, components: Arc<SharedComponents>) -> Self {
        Self {
            request,
            components,
            state: RequestState::BuildPrompt,
            processing: ProcessingState::default(),
        }
    }
}
