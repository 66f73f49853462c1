//! Chat completion clients for the macro lookup.

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use tracing::info_span;

use super::LookupError;

/// Sampling temperature for lookups; low keeps replies close to reference
/// values instead of improvising.
const LOOKUP_TEMPERATURE: f64 = 0.2;

/// Chat model abstraction (allows mocking).
pub trait ChatClient {
    fn complete(&self, system: &str, user: &str) -> Result<String, LookupError>;
}

/// Client for an OpenAI-compatible chat completions endpoint.
pub struct OpenAiChatClient {
    base_url: String,
    api_key: String,
    model: String,
    client: OnceLock<reqwest::blocking::Client>,
    timeout_secs: u64,
}

impl OpenAiChatClient {
    pub fn new(base_url: &str, api_key: &str, model: &str, timeout_secs: u64) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            model: model.to_string(),
            client: OnceLock::new(),
            timeout_secs,
        }
    }

    /// Building a blocking reqwest client spins up (and drops) an internal
    /// runtime, which panics inside an async context. The client is built on
    /// first use, on the blocking thread running the request; `new` must stay
    /// runtime-free so startup wiring can happen anywhere.
    fn http_client(&self) -> &reqwest::blocking::Client {
        self.client.get_or_init(|| {
            reqwest::blocking::Client::builder()
                .timeout(std::time::Duration::from_secs(self.timeout_secs))
                .build()
                .expect("Failed to create HTTP client")
        })
    }
}

/// Request body for /v1/chat/completions
#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatRequestMessage<'a>>,
    temperature: f64,
    response_format: ResponseFormat<'a>,
}

#[derive(Serialize)]
struct ChatRequestMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Serialize)]
struct ResponseFormat<'a> {
    #[serde(rename = "type")]
    format_type: &'a str,
}

/// Response body from /v1/chat/completions
#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Deserialize)]
struct ChatResponseMessage {
    content: Option<String>,
}

impl ChatClient for OpenAiChatClient {
    fn complete(&self, system: &str, user: &str) -> Result<String, LookupError> {
        let _span = info_span!("chat_lookup", model = %self.model).entered();
        let start = std::time::Instant::now();

        let url = format!("{}/v1/chat/completions", self.base_url);
        let body = ChatCompletionRequest {
            model: &self.model,
            messages: vec![
                ChatRequestMessage {
                    role: "system",
                    content: system,
                },
                ChatRequestMessage {
                    role: "user",
                    content: user,
                },
            ],
            temperature: LOOKUP_TEMPERATURE,
            response_format: ResponseFormat {
                format_type: "json_object",
            },
        };

        let response = self
            .http_client()
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .map_err(|e| {
                if e.is_connect() {
                    LookupError::Connection(self.base_url.clone())
                } else if e.is_timeout() {
                    LookupError::Timeout(self.timeout_secs)
                } else {
                    LookupError::Transport(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().unwrap_or_default();
            return Err(LookupError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: ChatCompletionResponse = response
            .json()
            .map_err(|e| LookupError::InvalidJson(e.to_string()))?;

        let content = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .unwrap_or_default();
        let content = content.trim();

        tracing::debug!(
            elapsed_ms = %start.elapsed().as_millis(),
            reply_bytes = content.len(),
            "chat completion received"
        );

        if content.is_empty() {
            return Err(LookupError::EmptyResponse);
        }
        Ok(content.to_string())
    }
}

/// Mock chat client for testing - returns a configurable completion.
pub struct MockChatClient {
    response: Result<String, fn() -> LookupError>,
}

impl MockChatClient {
    pub fn new(response: &str) -> Self {
        Self {
            response: Ok(response.to_string()),
        }
    }

    pub fn unreachable() -> Self {
        Self {
            response: Err(|| LookupError::Connection("http://localhost:9".to_string())),
        }
    }

    pub fn empty() -> Self {
        Self {
            response: Err(|| LookupError::EmptyResponse),
        }
    }
}

impl ChatClient for MockChatClient {
    fn complete(&self, _system: &str, _user: &str) -> Result<String, LookupError> {
        match &self.response {
            Ok(text) => Ok(text.clone()),
            Err(make_err) => Err(make_err()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_client_returns_configured_completion() {
        let client = MockChatClient::new("{\"protein\": 10}");
        let reply = client.complete("system", "user").unwrap();
        assert_eq!(reply, "{\"protein\": 10}");
    }

    #[test]
    fn mock_client_can_fail_as_unreachable() {
        let client = MockChatClient::unreachable();
        assert!(matches!(
            client.complete("system", "user"),
            Err(LookupError::Connection(_))
        ));
    }

    #[test]
    fn openai_client_trims_trailing_slash() {
        let client = OpenAiChatClient::new("https://api.openai.com/", "key", "gpt-4o-mini", 30);
        assert_eq!(client.base_url, "https://api.openai.com");
        assert_eq!(client.timeout_secs, 30);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn construction_is_safe_inside_async_context() {
        // Startup wires this client from async main; construction must not
        // touch the blocking HTTP machinery (which panics under a runtime).
        let client = OpenAiChatClient::new("http://127.0.0.1:9", "key", "gpt-4o-mini", 5);
        assert_eq!(client.model, "gpt-4o-mini");
        assert!(client.client.get().is_none());
    }

    #[test]
    fn completion_response_parses_first_choice() {
        let raw = r#"{"choices": [{"message": {"role": "assistant", "content": "hello"}}]}"#;
        let parsed: ChatCompletionResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.choices[0].message.content.as_deref(), Some("hello"));
    }

    #[test]
    fn completion_response_tolerates_missing_content() {
        let raw = r#"{"choices": [{"message": {"role": "assistant"}}]}"#;
        let parsed: ChatCompletionResponse = serde_json::from_str(raw).unwrap();
        assert!(parsed.choices[0].message.content.is_none());
    }
}
