//! A one-shot chat completion probe for the Venice.ai API.
//!
//! Sends a single fixed request, then reports the reply (model, content, token usage)
//! or the failure, mapping every outcome to a process exit status.

pub mod error;
pub mod types;
pub mod provider;
pub mod providers;
pub mod response;
pub mod probe;

// Re-export core types for easy usage
pub use error::Error;
pub use types::*;
pub use provider::{ChatProvider, Outcome};
pub use providers::*;
pub use response::*;
pub use probe::{ChatProbe, ExitStatus};
