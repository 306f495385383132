// Validated JSON extractor for the analyze endpoint.
//
// Deserializes a request body and runs the validator crate's Validate
// checks before the handler ever sees it. Malformed client input is the
// one place this service answers with a non-200.

/// Trait for request types that need post-deserialization normalization
pub trait Normalizable {
    /// Normalize the request by applying defaults and transformations
    fn normalize(&mut self) {
        // Default: no-op
    }
}

#[cfg(feature = "axum")]
use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
#[cfg(feature = "axum")]
use serde::de::DeserializeOwned;
#[cfg(feature = "axum")]
use serde_json::json;
#[cfg(feature = "axum")]
use validator::Validate;

/// A JSON extractor that validates and normalizes the request body.
///
/// Deserialization failures and `Validate` failures both reject with a
/// 400 carrying a JSON error body; handlers receive only well-formed,
/// validated requests.
#[cfg(feature = "axum")]
pub struct ValidatedJson<T>(pub T);

#[cfg(feature = "axum")]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate + Normalizable + Send,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        // First, extract and deserialize the JSON
        let Json(mut data) =
            Json::<T>::from_request(req, state)
                .await
                .map_err(|err: JsonRejection| {
                    let message = match err {
                        JsonRejection::JsonDataError(e) => {
                            format!("Invalid JSON data: {e}")
                        }
                        JsonRejection::JsonSyntaxError(e) => {
                            format!("JSON syntax error: {e}")
                        }
                        JsonRejection::MissingJsonContentType(_) => {
                            "Missing Content-Type: application/json header".to_string()
                        }
                        _ => format!("Failed to parse JSON: {err}"),
                    };

                    (
                        StatusCode::BAD_REQUEST,
                        Json(json!({
                            "error": {
                                "type": "invalid_request_error",
                                "code": "json_parse_error",
                                "message": message
                            }
                        })),
                    )
                        .into_response()
                })?;

        // Normalize the request (apply defaults based on other fields)
        data.normalize();

        // Then run the declared field validations
        data.validate().map_err(|validation_errors| {
            (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "error": {
                        "type": "invalid_request_error",
                        "code": "request_validation_failed",
                        "message": validation_errors.to_string()
                    }
                })),
            )
                .into_response()
        })?;

        Ok(ValidatedJson(data))
    }
}

// Implement Deref to allow transparent access to the inner value
#[cfg(feature = "axum")]
impl<T> std::ops::Deref for ValidatedJson<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[cfg(all(test, feature = "axum"))]
mod tests {
    use validator::Validate;

    use crate::analyze::AnalyzeRequest;

    #[test]
    fn test_valid_analyze_request_passes() {
        let request = AnalyzeRequest {
            image: "aGVsbG8=".to_string(),
            infra_type: "road".to_string(),
            zone_type: "main_road".to_string(),
            lat: 12.97,
            lng: 77.59,
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_empty_zone_type_fails() {
        let request = AnalyzeRequest {
            image: "aGVsbG8=".to_string(),
            infra_type: "road".to_string(),
            zone_type: String::new(),
            lat: 12.97,
            lng: 77.59,
        };
        assert!(request.validate().is_err());
    }
}
