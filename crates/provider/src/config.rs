//! Configuration loaded from TOML.
//!
//! Credential values support `${ENV_VAR}` expansion; a variable that is
//! unset expands to the empty string, which the credential map treats as
//! absent. No credential format validation happens beyond presence.

use crate::{CredentialMap, ProviderId};
use anyhow::{Context, Result};
use compact_str::CompactString;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// The provider completions are routed to.
    pub active: ProviderId,
    /// Per-provider credentials; values support `${ENV_VAR}` expansion.
    pub credentials: BTreeMap<ProviderId, String>,
    /// Per-provider model and endpoint overrides.
    pub providers: BTreeMap<ProviderId, ProviderOverrides>,
}

/// Per-provider overrides.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProviderOverrides {
    /// Model identifier override.
    pub model: Option<CompactString>,
    /// Base URL override for the provider endpoint.
    pub base_url: Option<String>,
}

impl Config {
    /// Parse a TOML string, expanding environment variables in supported
    /// fields.
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        let expanded = expand_env_vars(toml_str);
        let config: Self = toml::from_str(&expanded).context("failed to parse config")?;
        Ok(config)
    }

    /// Load configuration from a file path.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        Self::from_toml(&content)
    }

    /// The credential table with blank-after-expansion entries dropped.
    pub fn credential_map(&self) -> CredentialMap {
        self.credentials
            .iter()
            .filter(|(_, value)| !value.trim().is_empty())
            .map(|(id, value)| (*id, value.clone()))
            .collect()
    }

    /// Overrides for `id`, defaulting to none.
    pub fn overrides(&self, id: ProviderId) -> ProviderOverrides {
        self.providers.get(&id).cloned().unwrap_or_default()
    }
}

/// Expand `${VAR}` references from the process environment. Unset
/// variables expand to the empty string.
pub fn expand_env_vars(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '$' && chars.peek() == Some(&'{') {
            chars.next(); // consume '{'
            let mut var_name = String::new();
            for c in chars.by_ref() {
                if c == '}' {
                    break;
                }
                var_name.push(c);
            }
            if let Ok(val) = std::env::var(&var_name) {
                result.push_str(&val);
            }
        } else {
            result.push(ch);
        }
    }

    result
}
