//! Tests for session state: active provider and stored credentials
//! evolve independently.

use provider::{Config, CredentialMap, ProviderId, Session};

#[test]
fn switching_never_touches_credentials() {
    let credentials: CredentialMap = [
        (ProviderId::Gemini, "g-key".to_string()),
        (ProviderId::Mistral, "m-key".to_string()),
    ]
    .into_iter()
    .collect();
    let session = Session::new(ProviderId::Gemini, credentials.clone());

    session.switch(ProviderId::Zai);
    session.switch(ProviderId::OpenAi);
    session.switch(ProviderId::Gemini);

    assert_eq!(session.credentials(), credentials);
}

#[test]
fn storing_a_credential_never_changes_the_active_provider() {
    let session = Session::new(ProviderId::Qwen, CredentialMap::new());

    session.set_credential(ProviderId::OpenAi, "sk-1".to_string());
    session.set_credential(ProviderId::Qwen, "q-1".to_string());
    session.clear_credential(ProviderId::OpenAi);

    assert_eq!(session.active(), ProviderId::Qwen);
}

#[test]
fn credentials_survive_a_round_trip_away_from_a_provider() {
    let session = Session::new(ProviderId::OpenAi, CredentialMap::new());
    session.set_credential(ProviderId::OpenAi, "sk-1".to_string());

    session.switch(ProviderId::Mistral);
    session.switch(ProviderId::OpenAi);

    assert_eq!(
        session.credentials().get(ProviderId::OpenAi),
        Some("sk-1")
    );
}

#[test]
fn entries_cover_every_provider_with_status_flags() {
    let session = Session::new(ProviderId::Mistral, CredentialMap::new());
    session.set_credential(ProviderId::Gemini, "g-key".to_string());

    let entries = session.entries();
    assert_eq!(entries.len(), ProviderId::ALL.len());

    for entry in &entries {
        assert_eq!(entry.active, entry.id == ProviderId::Mistral);
        assert_eq!(entry.has_credential, entry.id == ProviderId::Gemini);
    }
}

#[test]
fn clones_share_state() {
    let session = Session::new(ProviderId::Gemini, CredentialMap::new());
    let other = session.clone();

    other.switch(ProviderId::Zai);
    other.set_credential(ProviderId::Zai, "z-key".to_string());

    assert_eq!(session.active(), ProviderId::Zai);
    assert!(session.credentials().contains(ProviderId::Zai));
}

#[test]
fn from_config_seeds_active_and_credentials() {
    let config = Config::from_toml(
        r#"
        active = "mistral"

        [credentials]
        mistral = "m-key"
        zai = ""
        "#,
    )
    .unwrap();

    let session = Session::from_config(&config);
    assert_eq!(session.active(), ProviderId::Mistral);
    assert!(session.credentials().contains(ProviderId::Mistral));
    // Blank keys are treated as absent.
    assert!(!session.credentials().contains(ProviderId::Zai));
}
