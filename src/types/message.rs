use serde::{Deserialize, Serialize};

pub const DEFAULT_MODEL: &str = "venice-uncensored";

pub const PROBE_PROMPT: &str = "Hello! Say \"Venice API is working!\" if you can hear me.";

pub const PROBE_TEMPERATURE: f64 = 0.7;

pub const PROBE_MAX_COMPLETION_TOKENS: u32 = 100;

/// Role of a message participant. The probe only ever speaks as the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
}

/// A message with role and content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    /// Create a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Message {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// Chat completions request body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<Message>,
    pub temperature: f64,
    pub max_completion_tokens: u32,
}

impl ChatRequest {
    /// The fixed request sent by the probe.
    pub fn probe() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            messages: vec![Message::user(PROBE_PROMPT)],
            temperature: PROBE_TEMPERATURE,
            max_completion_tokens: PROBE_MAX_COMPLETION_TOKENS,
        }
    }
}
