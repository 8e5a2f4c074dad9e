//! No-op completion client for testing.
//!
//! Implements [`Complete`] but panics when called. Intended for unit
//! tests that exercise registry, session, and dispatch wiring without
//! making real provider calls.

use crate::{Complete, ProviderError};

/// A completion client that panics on any actual provider call.
///
/// # Panics
///
/// `complete` panics if called. Only use this client in tests that never
/// reach the network boundary.
#[derive(Debug, Clone, Copy)]
pub struct NoopClient;

impl Complete for NoopClient {
    async fn complete(&self, _credential: &str, _prompt: &str) -> Result<String, ProviderError> {
        panic!("NoopClient::complete called; not intended for real provider calls");
    }
}

#[cfg(test)]
mod tests {
    use super::NoopClient;
    use crate::Complete;

    #[tokio::test]
    #[should_panic(expected = "NoopClient::complete called")]
    async fn panics_when_called() {
        let _ = NoopClient.complete("key", "prompt").await;
    }
}
