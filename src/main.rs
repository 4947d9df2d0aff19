//! Venice.ai chat completion probe.
//!
//! ```bash
//! export VENICE_API_KEY=your-api-key-here
//! venice-probe
//! ```

use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use venice_probe::{ChatProbe, ProbeConfig, VeniceProvider};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Load .env file if it exists
    dotenvy::dotenv().ok();

    init_logging();

    let mut probe = ChatProbe::stdio();
    probe
        .run(ProbeConfig::from_env(), VeniceProvider::new)
        .await
        .into()
}

/// Initialize logging on stderr so stdout carries only the report.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
