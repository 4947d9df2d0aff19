//! Top-level probe: one request, one report, one exit status.

use crate::provider::ChatProvider;
use crate::{ChatRequest, Completion, Error, ProbeConfig};
use std::io::{self, Stderr, Stdout, Write};
use std::process::ExitCode;
use tracing::{info, warn};

pub const DASHBOARD_URL: &str = "https://venice.ai/dashboard";

/// Shown in place of a null message content.
pub const NO_CONTENT: &str = "(none)";

/// Process exit status of a probe run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
}

impl ExitStatus {
    pub fn code(self) -> u8 {
        match self {
            ExitStatus::Success => 0,
            ExitStatus::Failure => 1,
        }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        ExitCode::from(status.code())
    }
}

/// Format the success report printed to stdout.
pub fn render_completion(completion: &Completion) -> String {
    format!(
        "✅ Success! Response received:\n\
         \n\
         Model: {}\n\
         Content: {}\n\
         \n\
         Usage:\n  \
         Prompt tokens: {}\n  \
         Completion tokens: {}\n  \
         Total tokens: {}\n\
         \n\
         🎉 Venice.ai API is working correctly!\n",
        completion.model,
        completion.content.as_deref().unwrap_or(NO_CONTENT),
        completion.usage.prompt_tokens,
        completion.usage.completion_tokens,
        completion.usage.total_tokens,
    )
}

/// Format a failure for stderr.
pub fn render_error(error: &Error) -> String {
    match error {
        Error::MissingCredential(var) => format!(
            "❌ Error: {var} environment variable is not set\n\
             \n\
             Please set your API key:\n  \
             export {var}=your-api-key-here\n\
             \n\
             Get your API key from: {DASHBOARD_URL}\n"
        ),
        Error::Api { message, .. } => format!("❌ API Error: {message}\n"),
        Error::Config(_) | Error::Http(_) | Error::Transport(_) | Error::MalformedResponse(_) => {
            format!("❌ Error: {error}\n")
        }
    }
}

/// Drives a single chat completion round trip and reports it on the given streams.
pub struct ChatProbe<O, E> {
    out: O,
    err: E,
}

impl ChatProbe<Stdout, Stderr> {
    pub fn stdio() -> Self {
        Self::new(io::stdout(), io::stderr())
    }
}

impl<O: Write, E: Write> ChatProbe<O, E> {
    pub fn new(out: O, err: E) -> Self {
        Self { out, err }
    }

    /// Run the whole probe. `connect` is only invoked once configuration is valid.
    pub async fn run<P, F>(
        &mut self,
        config: Result<ProbeConfig, Error>,
        connect: F,
    ) -> ExitStatus
    where
        P: ChatProvider,
        F: FnOnce(ProbeConfig) -> Result<P, Error>,
    {
        let config = match config {
            Ok(config) => config,
            Err(e) => return self.fail(&e),
        };

        match connect(config) {
            Ok(provider) => self.probe(&provider).await,
            Err(e) => self.fail(&e),
        }
    }

    /// Send the fixed probe request through `provider` and report the outcome.
    pub async fn probe<P: ChatProvider + ?Sized>(&mut self, provider: &P) -> ExitStatus {
        if let Err(e) = writeln!(self.err, "🚀 Testing Venice.ai Chat Completion API...\n") {
            warn!(error = %e, "failed to write progress line");
        }

        let request = ChatRequest::probe();
        match provider.send(&request).await.into_result() {
            Ok(completion) => self.succeed(&completion),
            Err(e) => self.fail(&e),
        }
    }

    fn succeed(&mut self, completion: &Completion) -> ExitStatus {
        info!(
            model = %completion.model,
            total_tokens = completion.usage.total_tokens,
            "chat completion succeeded"
        );

        match self
            .out
            .write_all(render_completion(completion).as_bytes())
            .and_then(|()| self.out.flush())
        {
            Ok(()) => ExitStatus::Success,
            Err(e) => {
                warn!(error = %e, "failed to write report");
                ExitStatus::Failure
            }
        }
    }

    /// Report `error` on stderr. Always yields a failure status.
    pub fn fail(&mut self, error: &Error) -> ExitStatus {
        info!(error = %error, "chat probe failed");

        if let Err(e) = self
            .err
            .write_all(render_error(error).as_bytes())
            .and_then(|()| self.err.flush())
        {
            warn!(error = %e, "failed to write error report");
        }
        ExitStatus::Failure
    }

    pub fn into_inner(self) -> (O, E) {
        (self.out, self.err)
    }
}
