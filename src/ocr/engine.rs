//! OCR engine abstraction (allows mocking the external service in tests).

use super::OcrError;

/// Contract with the external OCR service: one image in, best-effort
/// full-page text out. An image with no recognizable text yields an empty
/// string, not an error.
pub trait OcrEngine {
    fn extract_text(&self, image: &[u8]) -> Result<String, OcrError>;
}

/// Mock OCR engine for testing - returns canned text or a canned failure.
pub struct MockOcrEngine {
    outcome: MockOutcome,
}

enum MockOutcome {
    Text(String),
    Unreachable,
    Upstream { status: u16, message: String },
}

impl MockOcrEngine {
    /// Mock that successfully extracts `text` from any image.
    pub fn new(text: &str) -> Self {
        Self {
            outcome: MockOutcome::Text(text.to_string()),
        }
    }

    /// Mock whose service cannot be reached.
    pub fn unreachable() -> Self {
        Self {
            outcome: MockOutcome::Unreachable,
        }
    }

    /// Mock whose service answers with an upstream error.
    pub fn upstream_failure(status: u16, message: &str) -> Self {
        Self {
            outcome: MockOutcome::Upstream {
                status,
                message: message.to_string(),
            },
        }
    }
}

impl OcrEngine for MockOcrEngine {
    fn extract_text(&self, _image: &[u8]) -> Result<String, OcrError> {
        match &self.outcome {
            MockOutcome::Text(text) => Ok(text.clone()),
            MockOutcome::Unreachable => Err(OcrError::Connection("mock://vision".to_string())),
            MockOutcome::Upstream { status, message } => Err(OcrError::Api {
                status: *status,
                message: message.clone(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_returns_configured_text() {
        let engine = MockOcrEngine::new("Total Fat 8g");
        assert_eq!(engine.extract_text(&[1, 2, 3]).unwrap(), "Total Fat 8g");
    }

    #[test]
    fn mock_unreachable_is_connection_error() {
        let engine = MockOcrEngine::unreachable();
        assert!(matches!(
            engine.extract_text(&[]),
            Err(OcrError::Connection(_))
        ));
    }

    #[test]
    fn mock_upstream_failure_carries_status() {
        let engine = MockOcrEngine::upstream_failure(500, "backend exploded");
        match engine.extract_text(&[]) {
            Err(OcrError::Api { status, message }) => {
                assert_eq!(status, 500);
                assert_eq!(message, "backend exploded");
            }
            other => panic!("unexpected: {other:?}"),
        }
    }
}
