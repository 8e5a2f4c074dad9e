//! Provider enum for runtime dispatch across completion clients.
//!
//! One variant per [`ProviderId`]; `impl Complete` delegates to the
//! wrapped client with an exhaustive match, so a new provider tag fails
//! to compile until every dispatch site handles it.

use crate::{ProviderId, config::ProviderOverrides};
use llm::{Complete, Gemini, OpenAiCompatible, ProviderError};

/// Unified provider client enum.
#[derive(Debug, Clone)]
pub enum Provider {
    /// Google Gemini generateContent API.
    Gemini(Gemini),
    /// OpenAI chat completions API.
    OpenAi(OpenAiCompatible),
    /// Mistral chat completions API.
    Mistral(OpenAiCompatible),
    /// OpenRouter chat completions API.
    OpenRouter(OpenAiCompatible),
    /// Qwen (DashScope) OpenAI-compatible API.
    Qwen(OpenAiCompatible),
    /// Z.AI OpenAI-compatible API.
    Zai(OpenAiCompatible),
}

impl Provider {
    /// The id this client was built for.
    pub fn id(&self) -> ProviderId {
        match self {
            Self::Gemini(_) => ProviderId::Gemini,
            Self::OpenAi(_) => ProviderId::OpenAi,
            Self::Mistral(_) => ProviderId::Mistral,
            Self::OpenRouter(_) => ProviderId::OpenRouter,
            Self::Qwen(_) => ProviderId::Qwen,
            Self::Zai(_) => ProviderId::Zai,
        }
    }

    /// The endpoint URL this client posts to.
    pub fn endpoint(&self) -> &str {
        match self {
            Self::Gemini(client) => client.endpoint(),
            Self::OpenAi(client)
            | Self::Mistral(client)
            | Self::OpenRouter(client)
            | Self::Qwen(client)
            | Self::Zai(client) => client.endpoint(),
        }
    }

    /// The model identifier this client sends.
    pub fn model(&self) -> &str {
        match self {
            Self::Gemini(client) => client.model(),
            Self::OpenAi(client)
            | Self::Mistral(client)
            | Self::OpenRouter(client)
            | Self::Qwen(client)
            | Self::Zai(client) => client.model(),
        }
    }
}

/// Construct the client for `id` from its overrides and a shared HTTP
/// client.
pub fn build_provider(
    id: ProviderId,
    overrides: &ProviderOverrides,
    client: llm::Client,
) -> Provider {
    let model = overrides
        .model
        .as_deref()
        .unwrap_or_else(|| id.default_model());
    let base_url = overrides.base_url.as_deref();

    match id {
        ProviderId::Gemini => Provider::Gemini(match base_url {
            Some(url) => Gemini::custom(client, model, url),
            None => Gemini::api(client, model),
        }),
        ProviderId::OpenAi => Provider::OpenAi(match base_url {
            Some(url) => OpenAiCompatible::custom(client, model, url),
            None => OpenAiCompatible::openai(client, model),
        }),
        ProviderId::Mistral => Provider::Mistral(match base_url {
            Some(url) => OpenAiCompatible::custom(client, model, url),
            None => OpenAiCompatible::mistral(client, model),
        }),
        ProviderId::OpenRouter => Provider::OpenRouter(match base_url {
            Some(url) => OpenAiCompatible::custom(client, model, url),
            None => OpenAiCompatible::openrouter(client, model),
        }),
        ProviderId::Qwen => Provider::Qwen(match base_url {
            Some(url) => OpenAiCompatible::custom(client, model, url),
            None => OpenAiCompatible::qwen(client, model),
        }),
        ProviderId::Zai => Provider::Zai(match base_url {
            Some(url) => OpenAiCompatible::custom(client, model, url),
            None => OpenAiCompatible::zai(client, model),
        }),
    }
}

impl Complete for Provider {
    async fn complete(&self, credential: &str, prompt: &str) -> Result<String, ProviderError> {
        match self {
            Self::Gemini(client) => client.complete(credential, prompt).await,
            Self::OpenAi(client) => client.complete(credential, prompt).await,
            Self::Mistral(client) => client.complete(credential, prompt).await,
            Self::OpenRouter(client) => client.complete(credential, prompt).await,
            Self::Qwen(client) => client.complete(credential, prompt).await,
            Self::Zai(client) => client.complete(credential, prompt).await,
        }
    }
}
