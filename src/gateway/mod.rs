//! Boundary to the external multimodal inference service.

mod gemini;

pub use gemini::GeminiClient;

use async_trait::async_trait;
use thiserror::Error;

pub type GatewayResult<T> = Result<T, GatewayError>;

/// Failures at the inference boundary.
///
/// All variants are recovered locally: the analyze flow logs them and
/// degrades to the fallback assessment instead of surfacing them to the
/// caller.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("request to inference endpoint failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("inference endpoint returned {status}: {body}")]
    UpstreamStatus { status: u16, body: String },

    #[error("inference response contained no text content")]
    NoText,
}

/// Outbound seam to a multimodal model.
///
/// Contract: return the model's text or a `GatewayError`; no error may
/// escape this boundary unhandled.
#[async_trait]
pub trait ModelGateway: Send + Sync {
    async fn generate(
        &self,
        image: &[u8],
        mime_type: &str,
        prompt: &str,
    ) -> GatewayResult<String>;
}
