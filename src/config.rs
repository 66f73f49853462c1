//! Runtime configuration read from the environment.

use serde::Serialize;

/// Application-level constants
pub const APP_NAME: &str = "NutriScan";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Per-request timeout for collaborator HTTP calls.
pub const COLLABORATOR_TIMEOUT_SECS: u64 = 30;

/// Runtime settings.
///
/// API keys are optional: a missing or blank key leaves that collaborator
/// unconfigured and its endpoints answer NOT_CONFIGURED, instead of the
/// server refusing to start. Keys are excluded from serialization so the
/// startup log can dump the settings safely.
#[derive(Debug, Clone, Serialize)]
pub struct Settings {
    /// Socket address the HTTP server binds to
    pub bind: String,
    /// Vision OCR endpoint
    pub vision_api_url: String,
    /// Vision OCR API key
    #[serde(skip_serializing)]
    pub vision_api_key: Option<String>,
    /// Chat completions endpoint
    pub llm_api_url: String,
    /// Chat completions API key
    #[serde(skip_serializing)]
    pub llm_api_key: Option<String>,
    /// Chat model used for food lookups
    pub llm_model: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:8787".to_string(),
            vision_api_url: "https://vision.googleapis.com".to_string(),
            vision_api_key: None,
            llm_api_url: "https://api.openai.com".to_string(),
            llm_api_key: None,
            llm_model: "gpt-4o-mini".to_string(),
        }
    }
}

impl Settings {
    /// Load settings from environment variables with sensible defaults.
    pub fn from_env() -> Self {
        Self {
            bind: std::env::var("NUTRISCAN_BIND")
                .unwrap_or_else(|_| "127.0.0.1:8787".to_string()),
            vision_api_url: std::env::var("VISION_API_URL")
                .unwrap_or_else(|_| "https://vision.googleapis.com".to_string()),
            vision_api_key: env_non_empty("VISION_API_KEY"),
            llm_api_url: std::env::var("LLM_API_URL")
                .unwrap_or_else(|_| "https://api.openai.com".to_string()),
            llm_api_key: env_non_empty("LLM_API_KEY"),
            llm_model: std::env::var("LLM_MODEL").unwrap_or_else(|_| "gpt-4o-mini".to_string()),
        }
    }
}

/// Read a variable, treating blank values the same as unset ones.
fn env_non_empty(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .filter(|value| !value.trim().is_empty())
}

/// Default tracing filter when `RUST_LOG` is unset: this crate at info,
/// everything else at warn.
pub fn default_log_filter() -> &'static str {
    "warn,nutriscan=info"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_bind_locally_without_keys() {
        let settings = Settings::default();
        assert_eq!(settings.bind, "127.0.0.1:8787");
        assert!(settings.vision_api_key.is_none());
        assert!(settings.llm_api_key.is_none());
        assert_eq!(settings.llm_model, "gpt-4o-mini");
    }

    #[test]
    fn serialized_settings_omit_api_keys() {
        let settings = Settings {
            vision_api_key: Some("secret-key".into()),
            llm_api_key: Some("another-secret".into()),
            ..Settings::default()
        };
        let dumped = serde_json::to_string(&settings).unwrap();
        assert!(!dumped.contains("secret-key"));
        assert!(!dumped.contains("another-secret"));
        assert!(dumped.contains("127.0.0.1:8787"));
    }

    #[test]
    fn blank_env_value_counts_as_unset() {
        std::env::set_var("NUTRISCAN_TEST_BLANK_KEY", "   ");
        assert_eq!(env_non_empty("NUTRISCAN_TEST_BLANK_KEY"), None);

        std::env::set_var("NUTRISCAN_TEST_REAL_KEY", "abc123");
        assert_eq!(
            env_non_empty("NUTRISCAN_TEST_REAL_KEY"),
            Some("abc123".to_string())
        );
    }

    #[test]
    fn app_version_matches_cargo() {
        assert_eq!(APP_VERSION, "0.3.0");
    }
}
