//! The completion contract every provider client satisfies.

use crate::ProviderError;
use std::future::Future;

/// A client capable of completing a prompt against one provider.
///
/// Uses RPITIT, no dyn dispatch. The credential is passed per call and
/// headers are built per request, so the same client instance serves any
/// credential the caller resolves.
pub trait Complete: Send + Sync {
    /// Send `prompt` authenticated with `credential` and return the
    /// completion text.
    ///
    /// Upstream failures surface as [`ProviderError`] and are never
    /// retried at this layer.
    fn complete(
        &self,
        credential: &str,
        prompt: &str,
    ) -> impl Future<Output = Result<String, ProviderError>> + Send;
}
