use crate::{ApiErrorMessage, ChatRequest, Completion, Error};

/// Result of a single chat completion attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Success(Completion),
    /// Connection, DNS, timeout or body read failure.
    TransportFailure(String),
    /// Non-2xx status with the raw response body.
    HttpFailure { status: u16, body: String },
    /// 2xx response whose body did not have the expected shape.
    MalformedResponse(String),
}

impl Outcome {
    /// Collapse into a `Result`, decoding HTTP failure bodies.
    pub fn into_result(self) -> Result<Completion, Error> {
        match self {
            Outcome::Success(completion) => Ok(completion),
            Outcome::TransportFailure(description) => Err(Error::Transport(description)),
            Outcome::HttpFailure { status, body } => Err(Error::api(
                status,
                ApiErrorMessage::decode(status, &body).render(),
            )),
            Outcome::MalformedResponse(description) => Err(Error::malformed(description)),
        }
    }
}

/// A chat completion backend. Makes exactly one attempt per call.
#[async_trait::async_trait]
pub trait ChatProvider: Send + Sync + 'static {
    async fn send(&self, request: &ChatRequest) -> Outcome;
}
