//! Unified completion interface for the PyFixer provider set.
//!
//! This crate provides the `Complete` trait that every provider client
//! satisfies, the two HTTP client families actually used by the set
//! (`OpenAiCompatible` for the chat-completions wire format, `Gemini` for
//! Google's generateContent format), and the shared `ProviderError` type
//! carrying the upstream status and message.

pub use client::Complete;
pub use error::ProviderError;
pub use extract::error_message;
pub use gemini::Gemini;
pub use noop::NoopClient;
pub use openai::OpenAiCompatible;
pub use reqwest::{self, Client};

mod client;
mod error;
mod extract;
mod gemini;
mod noop;
mod openai;
