//! Provider crate: the closed provider set behind a single dispatch seam.
//!
//! `ProviderId` is the closed tagged set of supported providers; adding
//! one is adding a variant, and every dispatch site is an exhaustive
//! match. `Registry` constructs one client per id up front, `Dispatcher`
//! routes a prompt to a provider with the credential resolved from a
//! `CredentialMap`, and `Session` holds the externally observable state:
//! the active provider and the credential map, replaced atomically.
//! Config uses TOML with `${ENV_VAR}` expansion in credential values.

pub use config::{Config, ProviderOverrides};
pub use credentials::CredentialMap;
pub use dispatch::Dispatcher;
pub use error::DispatchError;
pub use id::ProviderId;
pub use provider::{Provider, build_provider};
pub use registry::Registry;
pub use session::{ProviderEntry, Session};

pub mod config;
mod credentials;
mod dispatch;
mod error;
mod id;
mod provider;
mod registry;
pub mod review;
mod session;
