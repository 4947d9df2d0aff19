use thiserror::Error;

/// Errors that can occur while probing the chat completion API.
#[derive(Error, Debug)]
pub enum Error {
    #[error("{0} environment variable is not set")]
    MissingCredential(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{0}")]
    Transport(String),

    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

impl Error {
    pub fn config(message: impl Into<String>) -> Self {
        Error::Config(message.into())
    }

    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Error::Api {
            status,
            message: message.into(),
        }
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        Error::MalformedResponse(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_displays_bare_message() {
        let error = Error::api(401, "Invalid API key");
        assert_eq!(error.to_string(), "Invalid API key");
        assert!(matches!(error, Error::Api { status: 401, .. }));
    }

    #[test]
    fn test_config_and_malformed_prefixes() {
        assert!(Error::config("bad url")
            .to_string()
            .contains("Invalid configuration"));
        assert!(Error::malformed("no choices")
            .to_string()
            .starts_with("Malformed response"));
        assert_eq!(
            Error::MissingCredential("VENICE_API_KEY".to_string()).to_string(),
            "VENICE_API_KEY environment variable is not set"
        );
    }
}
