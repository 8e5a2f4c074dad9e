//! OpenAI-compatible completion client.
//!
//! Covers OpenAI, Mistral, OpenRouter, Qwen (DashScope), and Z.AI; every
//! provider in the set except Gemini speaks the chat completions wire
//! format, differing only in endpoint URL and model naming.

use crate::{Complete, ProviderError, extract};
use compact_str::CompactString;
use reqwest::{Client, header};
use serde::{Deserialize, Serialize};

/// Chat completions endpoint URLs.
pub mod endpoint {
    /// OpenAI chat completions.
    pub const OPENAI: &str = "https://api.openai.com/v1/chat/completions";
    /// Mistral chat completions.
    pub const MISTRAL: &str = "https://api.mistral.ai/v1/chat/completions";
    /// OpenRouter chat completions.
    pub const OPENROUTER: &str = "https://openrouter.ai/api/v1/chat/completions";
    /// Qwen (Alibaba DashScope) chat completions.
    pub const QWEN: &str = "https://dashscope.aliyuncs.com/compatible-mode/v1/chat/completions";
    /// Z.AI chat completions.
    pub const ZAI: &str = "https://api.z.ai/api/paas/v4/chat/completions";
}

/// An OpenAI-compatible completion client.
#[derive(Debug, Clone)]
pub struct OpenAiCompatible {
    /// The HTTP client.
    client: Client,
    /// Chat completions endpoint URL.
    endpoint: String,
    /// Model identifier sent in the request body.
    model: CompactString,
}

impl OpenAiCompatible {
    /// Create a client targeting the OpenAI API.
    pub fn openai(client: Client, model: &str) -> Self {
        Self::custom(client, model, endpoint::OPENAI)
    }

    /// Create a client targeting the Mistral API.
    pub fn mistral(client: Client, model: &str) -> Self {
        Self::custom(client, model, endpoint::MISTRAL)
    }

    /// Create a client targeting the OpenRouter API.
    pub fn openrouter(client: Client, model: &str) -> Self {
        Self::custom(client, model, endpoint::OPENROUTER)
    }

    /// Create a client targeting the Qwen (DashScope) API.
    pub fn qwen(client: Client, model: &str) -> Self {
        Self::custom(client, model, endpoint::QWEN)
    }

    /// Create a client targeting the Z.AI API.
    pub fn zai(client: Client, model: &str) -> Self {
        Self::custom(client, model, endpoint::ZAI)
    }

    /// Create a client targeting a custom OpenAI-compatible endpoint.
    pub fn custom(client: Client, model: &str, endpoint: &str) -> Self {
        Self {
            client,
            endpoint: endpoint.to_owned(),
            model: CompactString::from(model),
        }
    }

    /// The chat completions endpoint URL this client posts to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// The model identifier sent with every request.
    pub fn model(&self) -> &str {
        &self.model
    }
}

impl Complete for OpenAiCompatible {
    async fn complete(&self, credential: &str, prompt: &str) -> Result<String, ProviderError> {
        let body = ChatRequest {
            model: &self.model,
            messages: [ChatMessage {
                role: "user",
                content: prompt,
            }],
        };
        tracing::debug!(endpoint = %self.endpoint, model = %self.model, "sending completion request");

        let response = self
            .client
            .post(&self.endpoint)
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::ACCEPT, "application/json")
            .header(header::AUTHORIZATION, bearer(credential)?)
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

        let parsed: ChatResponse = serde_json::from_str(&text)?;
        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .map(|content| content.trim().to_owned())
            .ok_or(ProviderError::Empty)
    }
}

fn bearer(credential: &str) -> Result<header::HeaderValue, ProviderError> {
    format!("Bearer {credential}")
        .parse()
        .map_err(|_| ProviderError::InvalidCredential("not a valid header value".to_string()))
}

/// Chat completions request body.
#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 1],
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

/// Chat completions response body, reduced to the fields we read.
#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_body_shape() {
        let body = ChatRequest {
            model: "gpt-4o",
            messages: [ChatMessage {
                role: "user",
                content: "hi",
            }],
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(
            value,
            json!({
                "model": "gpt-4o",
                "messages": [{"role": "user", "content": "hi"}],
            })
        );
    }

    #[test]
    fn response_content_extraction() {
        let text = r#"{"id": "x", "choices": [{"index": 0, "message": {"role": "assistant", "content": "hello"}, "finish_reason": "stop"}]}"#;
        let parsed: ChatResponse = serde_json::from_str(text).unwrap();
        let content = parsed.choices.into_iter().next().unwrap().message.content;
        assert_eq!(content.as_deref(), Some("hello"));
    }

    #[test]
    fn bearer_header_value() {
        let value = bearer("sk-test").unwrap();
        assert_eq!(value.to_str().unwrap(), "Bearer sk-test");
    }

    #[test]
    fn bearer_rejects_control_characters() {
        assert!(bearer("bad\nkey").is_err());
    }
}
