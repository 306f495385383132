//! AnalyzeRouter, the entry point for the damage assessment API.

use std::sync::Arc;

use assessment_protocol::AnalyzeRequest;
use axum::response::Response;

use super::{
    context::{RequestContext, SharedComponents},
    driver,
};
use crate::gateway::ModelGateway;

pub struct AnalyzeRouter {
    shared_components: Arc<SharedComponents>,
}

impl std::fmt::Debug for AnalyzeRouter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnalyzeRouter").finish()
    }
}

impl AnalyzeRouter {
    /// Create a new `AnalyzeRouter` around an inference boundary.
    pub fn new(gateway: Arc<dyn ModelGateway>) -> Self {
        Self {
            shared_components: Arc::new(SharedComponents { gateway }),
        }
    }

    /// Main handler for `POST /analyze`.
    ///
    /// Builds a `RequestContext` and runs the state machine to completion.
    /// Stateless across calls: every request gets a fresh context and the
    /// shared components are read-only.
    pub async fn route_analyze(&self, body: AnalyzeRequest) -> Response {
        let mut ctx = RequestContext::new(Arc::new(body), self.shared_components.clone());
        driver::execute(&mut ctx).await
    }
}
