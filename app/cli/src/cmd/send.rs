//! One-shot prompt dispatch.

use crate::config::resolve_config;
use anyhow::Result;
use provider::{Dispatcher, ProviderId, Registry, Session};

/// Send a prompt to the active provider (or an explicit one) and print
/// the response.
pub async fn run(config_flag: Option<&str>, provider_flag: Option<&str>, prompt: &str) -> Result<()> {
    let config = resolve_config(config_flag)?;
    let session = Session::from_config(&config);
    if let Some(name) = provider_flag {
        session.switch(name.parse::<ProviderId>()?);
    }

    let dispatcher = Dispatcher::new(Registry::from_config(&config));
    let response = dispatcher
        .send(session.active(), prompt, &session.credentials())
        .await?;
    println!("{response}");
    Ok(())
}
