//! Gemini `generateContent` client.

use std::time::Duration;

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine};
use serde_json::{json, Value};
use tracing::debug;

use super::{GatewayError, GatewayResult, ModelGateway};

pub struct GeminiClient {
    client: reqwest::Client,
    base_url: String,
    model: String,
    api_key: String,
    timeout: Duration,
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl GeminiClient {
    pub fn new(
        client: reqwest::Client,
        base_url: String,
        model: String,
        api_key: String,
        timeout: Duration,
    ) -> Self {
        Self {
            client,
            base_url,
            model,
            api_key,
            timeout,
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }
}

/// Build the `generateContent` payload: prompt text plus the inline image
/// as one content, with sampling pinned fully deterministic.
pub(crate) fn build_generate_payload(prompt: &str, mime_type: &str, image: &[u8]) -> Value {
    json!({
        "contents": [{
            "parts": [
                { "text": prompt },
                {
                    "inline_data": {
                        "mime_type": mime_type,
                        "data": STANDARD.encode(image)
                    }
                }
            ]
        }],
        "generationConfig": {
            "temperature": 0,
            "topP": 1,
            "topK": 1
        }
    })
}

/// Pull the generated text out of a `generateContent` response: the
/// concatenation of all text parts of the first candidate.
pub(crate) fn extract_candidate_text(response: &Value) -> Option<String> {
    let parts = response
        .get("candidates")?
        .get(0)?
        .get("content")?
        .get("parts")?
        .as_array()?;

    let text: String = parts
        .iter()
        .filter_map(|part| part.get("text").and_then(Value::as_str))
        .collect();

    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

#[async_trait]
impl ModelGateway for GeminiClient {
    async fn generate(
        &self,
        image: &[u8],
        mime_type: &str,
        prompt: &str,
    ) -> GatewayResult<String> {
        let url = self.endpoint();
        debug!(url = %url, image_bytes = image.len(), "sending generateContent request");

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&build_generate_payload(prompt, mime_type, image))
            .timeout(self.timeout)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GatewayError::UpstreamStatus {
                status: status.as_u16(),
                body,
            });
        }

        let body: Value = response.json().await?;
        extract_candidate_text(&body).ok_or(GatewayError::NoText)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_payload_shape() {
        let payload = build_generate_payload("describe the damage", "image/png", &[1, 2, 3]);

        let parts = payload["contents"][0]["parts"].as_array().unwrap();
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0]["text"], "describe the damage");
        assert_eq!(parts[1]["inline_data"]["mime_type"], "image/png");
        assert_eq!(parts[1]["inline_data"]["data"], STANDARD.encode([1, 2, 3]));

        assert_eq!(payload["generationConfig"]["temperature"], 0);
        assert_eq!(payload["generationConfig"]["topP"], 1);
        assert_eq!(payload["generationConfig"]["topK"], 1);
    }

    #[test]
    fn test_extract_single_text_part() {
        let response = json!({
            "candidates": [{
                "content": { "parts": [{ "text": "{\"severity\": \"low\"}" }] }
            }]
        });
        assert_eq!(
            extract_candidate_text(&response).unwrap(),
            "{\"severity\": \"low\"}"
        );
    }

    #[test]
    fn test_extract_concatenates_parts() {
        let response = json!({
            "candidates": [{
                "content": { "parts": [{ "text": "{\"a\":" }, { "text": " 1}" }] }
            }]
        });
        assert_eq!(extract_candidate_text(&response).unwrap(), "{\"a\": 1}");
    }

    #[test]
    fn test_extract_missing_candidates() {
        assert_eq!(extract_candidate_text(&json!({})), None);
        assert_eq!(extract_candidate_text(&json!({ "candidates": [] })), None);
    }

    #[test]
    fn test_extract_non_text_parts_only() {
        let response = json!({
            "candidates": [{
                "content": { "parts": [{ "functionCall": { "name": "noop" } }] }
            }]
        });
        assert_eq!(extract_candidate_text(&response), None);
    }

    #[test]
    fn test_endpoint_handles_trailing_slash() {
        let client = GeminiClient::new(
            reqwest::Client::new(),
            "https://example.test/".to_string(),
            "gemini-2.5-flash".to_string(),
            "key".to_string(),
            std::time::Duration::from_secs(5),
        );
        assert_eq!(
            client.endpoint(),
            "https://example.test/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }
}
