//! PyFixer CLI application — manages the provider roster and credentials
//! and routes one-shot and code-review completions from the terminal.

pub use cmd::{Cli, Command};

pub mod cmd;
pub mod config;
