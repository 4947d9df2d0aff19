use crate::provider::{ChatProvider, Outcome};
use crate::{ChatRequest, ChatResponse, Completion, Error, ProbeConfig};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Url};
use std::error::Error as _;
use tracing::{debug, warn};

/// Venice.ai provider implementation.
pub struct VeniceProvider {
    client: Client,
    config: ProbeConfig,
    endpoint: Url,
}

impl VeniceProvider {
    /// Create a new Venice provider. The configured timeout bounds the whole round trip.
    pub fn new(config: ProbeConfig) -> Result<Self, Error> {
        let endpoint = Url::parse(&config.endpoint())
            .map_err(|e| Error::config(format!("invalid base URL {}: {e}", config.base_url)))?;
        let client = Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            client,
            config,
            endpoint,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Interpret a received status and body.
    fn interpret(status: u16, body: String) -> Outcome {
        if !(200..300).contains(&status) {
            return Outcome::HttpFailure { status, body };
        }

        match ChatResponse::from_body(&body).and_then(Completion::try_from) {
            Ok(completion) => Outcome::Success(completion),
            Err(Error::MalformedResponse(description)) => Outcome::MalformedResponse(description),
            Err(e) => Outcome::MalformedResponse(e.to_string()),
        }
    }
}

/// Render a reqwest error together with its underlying causes.
fn describe_transport_error(error: &reqwest::Error) -> String {
    let mut description = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !description.contains(&text) {
            description.push_str(": ");
            description.push_str(&text);
        }
        source = cause.source();
    }
    description
}

#[async_trait::async_trait]
impl ChatProvider for VeniceProvider {
    async fn send(&self, request: &ChatRequest) -> Outcome {
        debug!(
            endpoint = %self.endpoint,
            model = %request.model,
            "sending chat completion request"
        );

        let response = match self
            .client
            .post(self.endpoint.clone())
            .header(AUTHORIZATION, self.config.credential.bearer())
            .header(CONTENT_TYPE, "application/json")
            .json(request)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                warn!(error = %e, "chat completion request failed");
                return Outcome::TransportFailure(describe_transport_error(&e));
            }
        };

        let status = response.status().as_u16();
        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                warn!(status, error = %e, "failed to read response body");
                return Outcome::TransportFailure(describe_transport_error(&e));
            }
        };

        debug!(status, bytes = body.len(), "received chat completion response");
        Self::interpret(status, body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Credential;

    fn config() -> ProbeConfig {
        ProbeConfig::new(Credential::new("test-key").unwrap())
    }

    #[test]
    fn test_provider_creation() {
        let provider = VeniceProvider::new(config()).unwrap();
        assert_eq!(
            provider.endpoint().as_str(),
            "https://api.venice.ai/api/v1/chat/completions"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        let result = VeniceProvider::new(config().with_base_url("not a url"));
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_interpret_non_success_keeps_raw_body() {
        let outcome = VeniceProvider::interpret(503, "upstream down".to_string());
        assert_eq!(
            outcome,
            Outcome::HttpFailure {
                status: 503,
                body: "upstream down".to_string()
            }
        );
    }

    #[test]
    fn test_interpret_malformed_success() {
        let outcome = VeniceProvider::interpret(200, "{}".to_string());
        assert!(matches!(
            outcome,
            Outcome::MalformedResponse(ref m) if m.contains("missing field")
        ));
    }
}
