//! The dispatch facade routing completion requests to a provider.

use crate::{CredentialMap, DispatchError, Registry, ProviderId};
use llm::Complete;

/// Routes a prompt to a provider with the credential resolved from a
/// [`CredentialMap`].
///
/// The facade performs no recovery: a missing credential fails before
/// any network traffic, and provider failures surface to the caller
/// unchanged. Each call is independent; nothing is shared across
/// dispatches beyond the underlying HTTP connection pool.
#[derive(Debug)]
pub struct Dispatcher {
    registry: Registry,
}

impl Dispatcher {
    /// Create a dispatcher over a built registry.
    pub fn new(registry: Registry) -> Self {
        Self { registry }
    }

    /// The registry this dispatcher resolves against.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Route `prompt` to provider `id` using its credential from
    /// `credentials`.
    ///
    /// Fails with [`DispatchError::MissingCredential`] when the map holds
    /// no usable entry for `id`.
    pub async fn send(
        &self,
        id: ProviderId,
        prompt: &str,
        credentials: &CredentialMap,
    ) -> Result<String, DispatchError> {
        let credential = credentials
            .get(id)
            .ok_or(DispatchError::MissingCredential(id))?;
        let provider = self.registry.resolve(id);
        tracing::debug!(provider = %id, "dispatching completion request");
        provider
            .complete(credential, prompt)
            .await
            .map_err(Into::into)
    }

    /// String-identifier variant of [`Dispatcher::send`]; fails with
    /// [`DispatchError::UnknownProvider`] before looking anything up.
    pub async fn send_named(
        &self,
        name: &str,
        prompt: &str,
        credentials: &CredentialMap,
    ) -> Result<String, DispatchError> {
        let id = name.parse::<ProviderId>()?;
        self.send(id, prompt, credentials).await
    }
}
