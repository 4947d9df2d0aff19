//! Response handling for chat completions.

use crate::Error;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Token usage information.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Usage {
    pub prompt_tokens: u64,
    pub completion_tokens: u64,
    pub total_tokens: u64,
}

/// Message inside a returned choice.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChoiceMessage {
    #[serde(default)]
    pub content: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Choice {
    pub message: ChoiceMessage,
}

/// Successful chat completions response body.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChatResponse {
    pub model: String,
    pub choices: Vec<Choice>,
    pub usage: Usage,
}

impl ChatResponse {
    /// Decode a 2xx body.
    pub fn from_body(body: &str) -> Result<Self, Error> {
        serde_json::from_str(body).map_err(|e| Error::malformed(e.to_string()))
    }
}

/// The fields of a successful response the probe reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    pub model: String,
    /// `None` when the first choice carried a null or absent `content`.
    pub content: Option<String>,
    pub usage: Usage,
}

impl TryFrom<ChatResponse> for Completion {
    type Error = Error;

    fn try_from(response: ChatResponse) -> Result<Self, Self::Error> {
        let content = response
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| Error::malformed("response contained no choices"))?;

        Ok(Completion {
            model: response.model,
            content,
            usage: response.usage,
        })
    }
}

/// Best-effort message extracted from a non-2xx response body.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiErrorMessage {
    /// `{"error": {"message": "..."}}`
    Message(String),
    /// A JSON object without an error message; carries the whole body.
    Structured(Value),
    /// `{"error": <scalar or array>}`, or a non-string `error.message`.
    Scalar(Value),
    /// Body was not a JSON object.
    Raw { status: u16, body: String },
}

impl ApiErrorMessage {
    /// Classify an error body returned with `status`.
    pub fn decode(status: u16, body: &str) -> Self {
        let object = match serde_json::from_str::<Value>(body) {
            Ok(Value::Object(object)) => object,
            _ => {
                return ApiErrorMessage::Raw {
                    status,
                    body: body.to_string(),
                }
            }
        };

        match object.get("error") {
            Some(Value::Object(error)) => match error.get("message") {
                Some(Value::String(message)) => ApiErrorMessage::Message(message.clone()),
                Some(other) => ApiErrorMessage::Scalar(other.clone()),
                None => ApiErrorMessage::Structured(Value::Object(object)),
            },
            Some(scalar) => ApiErrorMessage::Scalar(scalar.clone()),
            None => ApiErrorMessage::Structured(Value::Object(object)),
        }
    }

    /// Render as the single line shown to the user.
    pub fn render(&self) -> String {
        match self {
            ApiErrorMessage::Message(message) => message.clone(),
            ApiErrorMessage::Structured(value) => value.to_string(),
            ApiErrorMessage::Scalar(Value::String(text)) => text.clone(),
            ApiErrorMessage::Scalar(value) => value.to_string(),
            ApiErrorMessage::Raw { status, body } => format!("HTTP {status}: {body}"),
        }
    }
}
