//! Analyze request body.
//!
//! Canonical request shape for `POST /analyze`: a JSON document carrying
//! the report image as base64 plus the reporter's context. Context values
//! are forwarded into the model prompt verbatim, so only presence and
//! non-emptiness are enforced here.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::validated::Normalizable;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AnalyzeRequest {
    /// Base64-encoded image of the reported damage.
    #[validate(length(min = 1, message = "image must not be empty"))]
    pub image: String,

    /// Infrastructure type claimed by the reporter (e.g. `road`, `bridge`).
    #[validate(length(min = 1, message = "infra_type must not be empty"))]
    pub infra_type: String,

    /// Zone the report was filed from (e.g. `school_zone`, `main_road`).
    #[validate(length(min = 1, message = "zone_type must not be empty"))]
    pub zone_type: String,

    /// Report latitude in decimal degrees.
    pub lat: f64,

    /// Report longitude in decimal degrees.
    pub lng: f64,
}

impl Normalizable for AnalyzeRequest {
    // Use default no-op implementation
}
