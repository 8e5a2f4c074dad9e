//! Tests for the conformance check against real config files.

use std::io::Write;

fn temp_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn check_passes_with_a_credentialed_active_provider() {
    let file = temp_config(
        r#"
        active = "mistral"

        [credentials]
        mistral = "m-key"
        "#,
    );
    let result = pyfixer_cli::cmd::check::run(file.path().to_str());
    assert!(result.is_ok());
}

#[test]
fn check_fails_without_a_credential_for_the_active_provider() {
    let file = temp_config(r#"active = "qwen""#);
    let err = pyfixer_cli::cmd::check::run(file.path().to_str()).unwrap_err();
    assert!(err.to_string().contains("check(s) failed"));
}

#[test]
fn check_fails_on_an_unreadable_config() {
    let result = pyfixer_cli::cmd::check::run(Some("/nonexistent/pyfixer.toml"));
    assert!(result.is_err());
}
