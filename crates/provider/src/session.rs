//! Session state: the active provider and its credentials.

use crate::{Config, CredentialMap, ProviderId};
use std::sync::{Arc, RwLock};

/// Holds the externally observable application state: which provider is
/// active and the per-provider credential map.
///
/// All reads and writes acquire the `RwLock`; reads clone out, so
/// callers never hold the lock across a dispatch. `switch` replaces the
/// active id and `set_credential` replaces one map entry; the two fields
/// are independent and neither operation touches the other.
pub struct Session {
    inner: Arc<RwLock<Inner>>,
}

struct Inner {
    /// The provider completions are routed to.
    active: ProviderId,
    /// Per-provider credentials.
    credentials: CredentialMap,
}

/// Info about a single provider entry returned by `entries()`.
#[derive(Debug, Clone)]
pub struct ProviderEntry {
    /// Provider id.
    pub id: ProviderId,
    /// Whether this is the active provider.
    pub active: bool,
    /// Whether a usable credential is stored for it.
    pub has_credential: bool,
}

impl Session {
    /// Create a session with an explicit active id and credential map.
    pub fn new(active: ProviderId, credentials: CredentialMap) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Inner {
                active,
                credentials,
            })),
        }
    }

    /// Create a session from loaded config: the config's active id and
    /// its credential table with blank entries dropped.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.active, config.credential_map())
    }

    /// The currently active provider id.
    pub fn active(&self) -> ProviderId {
        self.inner.read().expect("session lock poisoned").active
    }

    /// Switch the active provider. Total: every id is a member of the
    /// closed set, so there is nothing to validate.
    pub fn switch(&self, id: ProviderId) {
        let mut inner = self.inner.write().expect("session lock poisoned");
        inner.active = id;
    }

    /// Replace the credential for one provider.
    pub fn set_credential(&self, id: ProviderId, value: impl Into<String>) {
        let mut inner = self.inner.write().expect("session lock poisoned");
        inner.credentials.set(id, value);
    }

    /// Remove the credential for one provider.
    pub fn clear_credential(&self, id: ProviderId) {
        let mut inner = self.inner.write().expect("session lock poisoned");
        inner.credentials.remove(id);
    }

    /// Snapshot of the credential map.
    pub fn credentials(&self) -> CredentialMap {
        self.inner
            .read()
            .expect("session lock poisoned")
            .credentials
            .clone()
    }

    /// List all providers with their active and credential status.
    pub fn entries(&self) -> Vec<ProviderEntry> {
        let inner = self.inner.read().expect("session lock poisoned");
        ProviderId::ALL
            .into_iter()
            .map(|id| ProviderEntry {
                id,
                active: id == inner.active,
                has_credential: inner.credentials.contains(id),
            })
            .collect()
    }
}

impl Clone for Session {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.read().expect("session lock poisoned");
        f.debug_struct("Session")
            .field("active", &inner.active)
            .field("credentials", &inner.credentials.len())
            .finish()
    }
}
