//! Provider identifiers.

use crate::DispatchError;
use compact_str::CompactString;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed set of supported providers.
///
/// Extending the set means adding a variant here; dispatch sites are
/// exhaustive matches, so the compiler points at every place that needs
/// to handle the new tag.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ProviderId {
    /// Google Gemini (default).
    #[default]
    Gemini,
    /// OpenAI.
    #[serde(rename = "openai")]
    OpenAi,
    /// Mistral AI.
    Mistral,
    /// OpenRouter.
    #[serde(rename = "openrouter")]
    OpenRouter,
    /// Alibaba Qwen (DashScope).
    Qwen,
    /// Z.AI.
    Zai,
}

impl ProviderId {
    /// Every provider id, in display order.
    pub const ALL: [ProviderId; 6] = [
        ProviderId::Gemini,
        ProviderId::OpenAi,
        ProviderId::Mistral,
        ProviderId::OpenRouter,
        ProviderId::Qwen,
        ProviderId::Zai,
    ];

    /// The lowercase identifier used in config and on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gemini => "gemini",
            Self::OpenAi => "openai",
            Self::Mistral => "mistral",
            Self::OpenRouter => "openrouter",
            Self::Qwen => "qwen",
            Self::Zai => "zai",
        }
    }

    /// Human-readable provider name for listings.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Gemini => "Google Gemini",
            Self::OpenAi => "OpenAI",
            Self::Mistral => "Mistral AI",
            Self::OpenRouter => "OpenRouter",
            Self::Qwen => "Alibaba Qwen",
            Self::Zai => "Z.AI",
        }
    }

    /// Model used when config carries no override.
    pub fn default_model(&self) -> &'static str {
        match self {
            Self::Gemini => "gemini-1.5-pro-latest",
            Self::OpenAi => "gpt-4o",
            Self::Mistral => "mistral-large-latest",
            Self::OpenRouter => "openrouter/auto",
            Self::Qwen => "qwen-max",
            Self::Zai => "zai-v1",
        }
    }
}

impl fmt::Display for ProviderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderId {
    type Err = DispatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gemini" | "google" | "google-gemini" => Ok(Self::Gemini),
            "openai" => Ok(Self::OpenAi),
            "mistral" => Ok(Self::Mistral),
            "openrouter" => Ok(Self::OpenRouter),
            "qwen" => Ok(Self::Qwen),
            "zai" | "z.ai" => Ok(Self::Zai),
            other => Err(DispatchError::UnknownProvider(CompactString::from(other))),
        }
    }
}
