//! Tests for CLI argument parsing.

use clap::Parser;
use pyfixer_cli::cmd::ProviderCommand;
use pyfixer_cli::{Cli, Command};

#[test]
fn cli_parse_check() {
    let cli = Cli::parse_from(["pyfixer", "check"]);
    assert!(matches!(cli.command, Command::Check));
}

#[test]
fn cli_parse_send() {
    let cli = Cli::parse_from(["pyfixer", "send", "review this"]);
    match cli.command {
        Command::Send { prompt, provider } => {
            assert_eq!(prompt, "review this");
            assert!(provider.is_none());
        }
        _ => panic!("expected Send command"),
    }
}

#[test]
fn cli_parse_send_with_provider() {
    let cli = Cli::parse_from(["pyfixer", "send", "--provider", "mistral", "hi"]);
    match cli.command {
        Command::Send { provider, .. } => assert_eq!(provider.as_deref(), Some("mistral")),
        _ => panic!("expected Send command"),
    }
}

#[test]
fn cli_parse_config_flag() {
    let cli = Cli::parse_from(["pyfixer", "--config", "custom.toml", "check"]);
    assert_eq!(cli.config.as_deref(), Some("custom.toml"));
}

#[test]
fn cli_parse_provider_switch() {
    let cli = Cli::parse_from(["pyfixer", "provider", "switch", "zai"]);
    match cli.command {
        Command::Provider {
            action: ProviderCommand::Switch { id },
        } => assert_eq!(id, "zai"),
        _ => panic!("expected provider switch command"),
    }
}

#[test]
fn cli_parse_provider_set_key() {
    let cli = Cli::parse_from(["pyfixer", "provider", "set-key", "openai", "sk-123"]);
    match cli.command {
        Command::Provider {
            action: ProviderCommand::SetKey { id, key },
        } => {
            assert_eq!(id, "openai");
            assert_eq!(key, "sk-123");
        }
        _ => panic!("expected provider set-key command"),
    }
}

#[test]
fn cli_parse_analyze() {
    let cli = Cli::parse_from(["pyfixer", "analyze", "a.py", "b.py"]);
    match cli.command {
        Command::Analyze { files, json } => {
            assert_eq!(files.len(), 2);
            assert!(!json);
        }
        _ => panic!("expected Analyze command"),
    }
}

#[test]
fn cli_parse_analyze_requires_a_file() {
    assert!(Cli::try_parse_from(["pyfixer", "analyze"]).is_err());
}

#[test]
fn cli_parse_fix() {
    let cli = Cli::parse_from([
        "pyfixer", "fix", "a.py", "--line", "12", "--message", "unused import",
    ]);
    match cli.command {
        Command::Fix { line, message, direction, .. } => {
            assert_eq!(line, 12);
            assert_eq!(message, "unused import");
            assert!(direction.is_none());
        }
        _ => panic!("expected Fix command"),
    }
}

#[test]
fn cli_parse_format() {
    let cli = Cli::parse_from(["pyfixer", "format", "a.py"]);
    assert!(matches!(cli.command, Command::Format { .. }));
}
