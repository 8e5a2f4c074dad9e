//! Configuration resolution for the CLI.
//!
//! Resolves pyfixer.toml in priority order:
//! 1. `--config <path>` flag (explicit override)
//! 2. `{cwd}/.pyfixer/pyfixer.toml` (workspace config)
//! 3. `~/.config/pyfixer/pyfixer.toml` (global default)
//!
//! If the global default doesn't exist, it is generated automatically.

use anyhow::{Context, Result};
use provider::Config;
use std::path::{Path, PathBuf};

/// Default config template generated when no config exists. Credentials
/// reference environment variables so keys never land in the file.
const DEFAULT_CONFIG: &str = r#"active = "gemini"

[credentials]
gemini = "${GEMINI_API_KEY}"
openai = "${OPENAI_API_KEY}"
mistral = "${MISTRAL_API_KEY}"
openrouter = "${OPENROUTER_API_KEY}"
qwen = "${QWEN_API_KEY}"
zai = "${ZAI_API_KEY}"

[providers.gemini]
model = "gemini-1.5-pro-latest"

[providers.openai]
model = "gpt-4o"
"#;

/// Resolve and load config following the priority chain.
pub fn resolve_config(config_flag: Option<&str>) -> Result<Config> {
    let path = resolve_config_path(config_flag)?;
    Config::load(&path).with_context(|| format!("failed to load config from {}", path.display()))
}

/// Resolve the config file path following the priority chain, generating
/// the global default if no config exists anywhere.
pub fn resolve_config_path(config_flag: Option<&str>) -> Result<PathBuf> {
    // 1. Explicit --config flag.
    if let Some(path) = config_flag {
        return Ok(PathBuf::from(path));
    }

    // 2. Workspace config: {cwd}/.pyfixer/pyfixer.toml
    let workspace_path = PathBuf::from(".pyfixer/pyfixer.toml");
    if workspace_path.exists() {
        return Ok(workspace_path);
    }

    // 3. Global default: ~/.config/pyfixer/pyfixer.toml
    let global_path = global_config_path();
    if !global_path.exists() {
        generate_default_config(&global_path)?;
        tracing::info!("generated default config at {}", global_path.display());
    }
    Ok(global_path)
}

/// Path to the global default config.
fn global_config_path() -> PathBuf {
    dirs::config_dir()
        .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
        .unwrap_or_else(|| PathBuf::from(".config"))
        .join("pyfixer")
        .join("pyfixer.toml")
}

/// Generate a default pyfixer.toml at the given path.
fn generate_default_config(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create config directory {}", parent.display()))?;
    }
    std::fs::write(path, DEFAULT_CONFIG)
        .with_context(|| format!("failed to write default config to {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::DEFAULT_CONFIG;
    use provider::{Config, ProviderId};

    #[test]
    fn default_template_parses() {
        let config = Config::from_toml(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.active, ProviderId::Gemini);
        assert_eq!(
            config.overrides(ProviderId::OpenAi).model.as_deref(),
            Some("gpt-4o")
        );
    }

    #[test]
    fn default_template_names_every_provider() {
        for id in ProviderId::ALL {
            assert!(DEFAULT_CONFIG.contains(id.as_str()));
        }
    }
}
