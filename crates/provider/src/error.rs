//! Dispatch error taxonomy.

use crate::ProviderId;
use compact_str::CompactString;
use llm::ProviderError;
use thiserror::Error;

/// Errors surfaced by the dispatch facade.
///
/// Everything propagates to the caller unchanged; presentation belongs to
/// the layer above, and no recovery happens here.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// The identifier does not name a registered provider.
    #[error("unknown provider '{0}'")]
    UnknownProvider(CompactString),

    /// No credential is configured for the provider.
    #[error("no credential configured for provider '{0}'")]
    MissingCredential(ProviderId),

    /// The provider call failed; surfaced as-is, never retried.
    #[error(transparent)]
    Provider(#[from] ProviderError),
}
