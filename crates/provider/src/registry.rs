//! Registry of constructed provider clients.

use crate::{Config, DispatchError, Provider, ProviderId, build_provider};
use std::collections::BTreeMap;

/// Holds one constructed client per provider id.
///
/// Every id in [`ProviderId::ALL`] is built at construction from one
/// shared HTTP client, so resolution by id is total: there is no way to
/// hold a `ProviderId` the registry does not know. Unknown identifiers
/// can only enter at the string boundary, where [`Registry::resolve_name`]
/// rejects them.
pub struct Registry {
    providers: BTreeMap<ProviderId, Provider>,
}

impl Registry {
    /// Build every provider with default models and endpoints.
    pub fn new() -> Self {
        Self::from_config(&Config::default())
    }

    /// Build every provider from `config`, applying per-provider model
    /// and base URL overrides.
    pub fn from_config(config: &Config) -> Self {
        let client = llm::Client::new();
        let providers = ProviderId::ALL
            .into_iter()
            .map(|id| (id, build_provider(id, &config.overrides(id), client.clone())))
            .collect();
        Self { providers }
    }

    /// Resolve a provider by id.
    pub fn resolve(&self, id: ProviderId) -> &Provider {
        // Total by construction: ALL is inserted in from_config.
        &self.providers[&id]
    }

    /// Resolve a provider by name, failing with
    /// [`DispatchError::UnknownProvider`] for identifiers outside the set.
    pub fn resolve_name(&self, name: &str) -> Result<&Provider, DispatchError> {
        let id = name.parse::<ProviderId>()?;
        Ok(self.resolve(id))
    }

    /// Iterate over all registered ids.
    pub fn ids(&self) -> impl Iterator<Item = ProviderId> + '_ {
        self.providers.keys().copied()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("count", &self.providers.len())
            .finish()
    }
}
