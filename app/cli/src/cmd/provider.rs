//! Provider roster management.
//!
//! `switch`, `set-key`, and `clear-key` edit the resolved config file in
//! place with toml_edit so comments and `${VAR}` references elsewhere in
//! the file survive the edit.

use crate::cmd::ProviderCommand;
use crate::config::{resolve_config, resolve_config_path};
use anyhow::{Context, Result};
use provider::{ProviderId, Registry, Session};
use std::path::Path;
use toml_edit::{DocumentMut, value};

/// Dispatch provider management subcommands.
pub fn run(action: &ProviderCommand, config_flag: Option<&str>) -> Result<()> {
    match action {
        ProviderCommand::List => list(config_flag),
        ProviderCommand::Switch { id } => switch(config_flag, id),
        ProviderCommand::SetKey { id, key } => set_key(config_flag, id, key),
        ProviderCommand::ClearKey { id } => clear_key(config_flag, id),
    }
}

/// Print one line per provider: marker, id, display name, model, key status.
fn list(config_flag: Option<&str>) -> Result<()> {
    let config = resolve_config(config_flag)?;
    let registry = Registry::from_config(&config);
    let session = Session::from_config(&config);

    for entry in session.entries() {
        let provider = registry.resolve(entry.id);
        let marker = if entry.active { '*' } else { ' ' };
        let key = if entry.has_credential { "key set" } else { "no key" };
        println!(
            "{marker} {:<10} {:<15} {:<28} [{key}]",
            entry.id.to_string(),
            entry.id.display_name(),
            provider.model(),
        );
    }
    Ok(())
}

fn switch(config_flag: Option<&str>, id: &str) -> Result<()> {
    let id: ProviderId = id.parse()?;
    let path = resolve_config_path(config_flag)?;
    edit_config(&path, |contents| update_active(contents, id))?;
    println!("active provider set to {id}");
    Ok(())
}

fn set_key(config_flag: Option<&str>, id: &str, key: &str) -> Result<()> {
    let id: ProviderId = id.parse()?;
    let path = resolve_config_path(config_flag)?;
    edit_config(&path, |contents| update_key(contents, id, Some(key)))?;
    println!("credential stored for {id}");
    Ok(())
}

fn clear_key(config_flag: Option<&str>, id: &str) -> Result<()> {
    let id: ProviderId = id.parse()?;
    let path = resolve_config_path(config_flag)?;
    edit_config(&path, |contents| update_key(contents, id, None))?;
    println!("credential cleared for {id}");
    Ok(())
}

/// Read, rewrite, and write back the config file.
fn edit_config(path: &Path, rewrite: impl FnOnce(&str) -> Result<String>) -> Result<()> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let updated = rewrite(&contents)?;
    std::fs::write(path, updated).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

/// Set `active` at the document root.
pub(crate) fn update_active(contents: &str, id: ProviderId) -> Result<String> {
    let mut doc: DocumentMut = contents.parse().context("failed to parse config")?;
    doc["active"] = value(id.as_str());
    Ok(doc.to_string())
}

/// Replace or remove one entry in the `[credentials]` table.
pub(crate) fn update_key(contents: &str, id: ProviderId, key: Option<&str>) -> Result<String> {
    let mut doc: DocumentMut = contents.parse().context("failed to parse config")?;
    match key {
        Some(key) => doc["credentials"][id.as_str()] = value(key),
        None => {
            if let Some(table) = doc["credentials"].as_table_mut() {
                table.remove(id.as_str());
            }
        }
    }
    Ok(doc.to_string())
}

#[cfg(test)]
mod tests {
    use super::{update_active, update_key};
    use provider::ProviderId;

    const SAMPLE: &str = "# routing\nactive = \"gemini\"\n\n[credentials]\nopenai = \"${OPENAI_API_KEY}\"\n";

    #[test]
    fn update_active_preserves_the_rest_of_the_file() {
        let updated = update_active(SAMPLE, ProviderId::Mistral).unwrap();
        assert!(updated.contains("active = \"mistral\""));
        assert!(updated.contains("# routing"));
        assert!(updated.contains("openai = \"${OPENAI_API_KEY}\""));
    }

    #[test]
    fn update_key_replaces_one_entry() {
        let updated = update_key(SAMPLE, ProviderId::OpenAi, Some("sk-new")).unwrap();
        assert!(updated.contains("openai = \"sk-new\""));
        assert!(!updated.contains("${OPENAI_API_KEY}"));
    }

    #[test]
    fn update_key_creates_the_table_when_missing() {
        let updated = update_key("active = \"gemini\"\n", ProviderId::Zai, Some("z-key")).unwrap();
        assert!(updated.contains("zai = \"z-key\""));
    }

    #[test]
    fn update_key_removes_an_entry() {
        let updated = update_key(SAMPLE, ProviderId::OpenAi, None).unwrap();
        assert!(!updated.contains("openai"));
    }
}
