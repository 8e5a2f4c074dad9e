//! Per-provider credential store.

use crate::ProviderId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A map from provider id to API credential.
///
/// Blank values count as absent: a credential that is empty after
/// trimming never satisfies a lookup. Entries are only ever replaced
/// whole, never partially mutated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialMap(BTreeMap<ProviderId, String>);

impl CredentialMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the credential for `id`. Blank entries return `None`.
    pub fn get(&self, id: ProviderId) -> Option<&str> {
        self.0
            .get(&id)
            .map(String::as_str)
            .filter(|value| !value.trim().is_empty())
    }

    /// Whether a usable credential exists for `id`.
    pub fn contains(&self, id: ProviderId) -> bool {
        self.get(id).is_some()
    }

    /// Replace the credential for `id`.
    pub fn set(&mut self, id: ProviderId, value: impl Into<String>) {
        self.0.insert(id, value.into());
    }

    /// Remove the credential for `id`.
    pub fn remove(&mut self, id: ProviderId) {
        self.0.remove(&id);
    }

    /// Number of stored entries, blank or not.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the map holds no entries at all.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over stored entries in id order.
    pub fn iter(&self) -> impl Iterator<Item = (ProviderId, &str)> {
        self.0.iter().map(|(id, value)| (*id, value.as_str()))
    }
}

impl FromIterator<(ProviderId, String)> for CredentialMap {
    fn from_iter<T: IntoIterator<Item = (ProviderId, String)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::CredentialMap;
    use crate::ProviderId;

    #[test]
    fn blank_entries_never_satisfy_lookups() {
        let mut map = CredentialMap::new();
        map.set(ProviderId::OpenAi, "  ");
        assert_eq!(map.len(), 1);
        assert!(map.get(ProviderId::OpenAi).is_none());
        assert!(!map.contains(ProviderId::OpenAi));
    }

    #[test]
    fn set_replaces_a_single_entry() {
        let mut map: CredentialMap = [(ProviderId::OpenAi, "sk-old".to_string())]
            .into_iter()
            .collect();
        map.set(ProviderId::OpenAi, "sk-new");
        assert_eq!(map.get(ProviderId::OpenAi), Some("sk-new"));
        assert_eq!(map.len(), 1);
    }
}
