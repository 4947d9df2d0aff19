//! Provider implementations for chat completion services.

pub mod venice;

// Re-export commonly used provider types
pub use venice::VeniceProvider;
