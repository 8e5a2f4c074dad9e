//! Google Gemini completion client.
//!
//! Gemini is the one provider in the set that does not speak the chat
//! completions wire format: requests are `generateContent` calls with
//! `contents`/`parts`, and the credential travels in the `x-goog-api-key`
//! header rather than an Authorization bearer token.

use crate::{Complete, ProviderError, extract};
use compact_str::CompactString;
use reqwest::{Client, header};
use serde::{Deserialize, Serialize};

/// Default Google Generative Language API base URL.
pub const BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// A Gemini completion client.
#[derive(Debug, Clone)]
pub struct Gemini {
    /// The HTTP client.
    client: Client,
    /// Full generateContent endpoint URL, computed at construction.
    endpoint: String,
    /// Model identifier embedded in the endpoint path.
    model: CompactString,
}

impl Gemini {
    /// Create a client targeting the Google API.
    pub fn api(client: Client, model: &str) -> Self {
        Self::custom(client, model, BASE_URL)
    }

    /// Create a client targeting a custom API base URL.
    pub fn custom(client: Client, model: &str, base_url: &str) -> Self {
        let endpoint = format!(
            "{}/models/{}:generateContent",
            base_url.trim_end_matches('/'),
            model
        );
        Self {
            client,
            endpoint,
            model: CompactString::from(model),
        }
    }

    /// The generateContent endpoint URL this client posts to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// The model identifier embedded in the endpoint path.
    pub fn model(&self) -> &str {
        &self.model
    }
}

impl Complete for Gemini {
    async fn complete(&self, credential: &str, prompt: &str) -> Result<String, ProviderError> {
        let body = GenerateRequest {
            contents: [Content {
                role: "user",
                parts: [Part { text: prompt }],
            }],
        };
        tracing::debug!(endpoint = %self.endpoint, "sending completion request");

        let key: header::HeaderValue = credential
            .parse()
            .map_err(|_| ProviderError::InvalidCredential("not a valid header value".to_string()))?;

        let response = self
            .client
            .post(&self.endpoint)
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::ACCEPT, "application/json")
            .header("x-goog-api-key", key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        tracing::debug!(%status, "provider responded");

        if !status.is_success() {
            return Err(ProviderError::Upstream {
                status: status.as_u16(),
                message: extract::error_message(&text),
            });
        }

        let parsed: GenerateResponse = serde_json::from_str(&text)?;
        let content: String = parsed
            .candidates
            .into_iter()
            .next()
            .map(|candidate| {
                candidate
                    .content
                    .parts
                    .into_iter()
                    .filter_map(|part| part.text)
                    .collect()
            })
            .unwrap_or_default();

        if content.trim().is_empty() {
            // A blocked prompt returns 200 with no candidates and the
            // block reason in promptFeedback.
            return Err(ProviderError::Upstream {
                status: status.as_u16(),
                message: extract::error_message(&text),
            });
        }
        Ok(content.trim().to_owned())
    }
}

/// generateContent request body.
#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    contents: [Content<'a>; 1],
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    role: &'static str,
    parts: [Part<'a>; 1],
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

/// generateContent response body, reduced to the fields we read.
#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize, Default)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn endpoint_embeds_model() {
        let client = Client::new();
        let gemini = Gemini::api(client, "gemini-1.5-pro-latest");
        assert_eq!(
            gemini.endpoint(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-1.5-pro-latest:generateContent"
        );
    }

    #[test]
    fn custom_base_url_is_trimmed() {
        let client = Client::new();
        let gemini = Gemini::custom(client, "gemini-1.5-flash", "http://localhost:9999/");
        assert_eq!(
            gemini.endpoint(),
            "http://localhost:9999/models/gemini-1.5-flash:generateContent"
        );
    }

    #[test]
    fn request_body_shape() {
        let body = GenerateRequest {
            contents: [Content {
                role: "user",
                parts: [Part { text: "hi" }],
            }],
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(
            value,
            json!({
                "contents": [{"role": "user", "parts": [{"text": "hi"}]}],
            })
        );
    }

    #[test]
    fn response_joins_candidate_parts() {
        let text = r#"{"candidates": [{"content": {"role": "model", "parts": [{"text": "a"}, {"text": "b"}]}}]}"#;
        let parsed: GenerateResponse = serde_json::from_str(text).unwrap();
        let joined: String = parsed.candidates[0]
            .content
            .parts
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect();
        assert_eq!(joined, "ab");
    }
}
