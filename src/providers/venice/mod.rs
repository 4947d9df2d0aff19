//! Venice.ai chat completions provider.

pub mod client;

pub use client::VeniceProvider;
