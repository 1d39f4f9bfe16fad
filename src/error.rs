//! Failure taxonomy for every call made through the engine.
//!
//! Every failure surfaces as exactly one [`EngineError`] kind. Nothing in the
//! engine retries, falls back or exits the process; callers decide what a
//! failure means for them.

use thiserror::Error;

/// Classified failure of one authenticated request (or of the setup before it).
#[derive(Debug, Error)]
pub enum EngineError {
    /// Missing credential or unusable request setup, detected before any call.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Connection, DNS, TLS or body-transfer failure.
    #[error("network error: {cause}")]
    Network { cause: String },

    /// Non-2xx response. `body` is the raw response text, never parsed.
    #[error("API Error {code}: {body}")]
    HttpStatus { code: u16, body: String },

    /// 2xx response whose body is not the JSON that was expected.
    #[error("failed to decode response: {reason}")]
    Decode { raw: String, reason: String },
}

impl EngineError {
    #[must_use]
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    #[must_use]
    pub fn network(cause: impl Into<String>) -> Self {
        Self::Network {
            cause: cause.into(),
        }
    }

    #[must_use]
    pub fn decode(raw: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Decode {
            raw: raw.into(),
            reason: reason.into(),
        }
    }

    /// Classify a failure reported by the HTTP client.
    ///
    /// Builder failures (bad URL, header value the client rejects) happen
    /// before anything is sent and count as configuration errors.
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        if err.is_builder() {
            Self::Configuration(format!("invalid request: {}", err))
        } else {
            Self::Network {
                cause: err.to_string(),
            }
        }
    }

    /// HTTP status code, when the failure came from a non-2xx response.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::HttpStatus { code, .. } => Some(*code),
            _ => None,
        }
    }
}

/// Engine result alias.
pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_status_display_matches_cli_message() {
        let err = EngineError::HttpStatus {
            code: 404,
            body: r#"{"message":"not found"}"#.to_string(),
        };
        assert_eq!(err.to_string(), r#"API Error 404: {"message":"not found"}"#);
        assert_eq!(err.status_code(), Some(404));
    }

    #[test]
    fn test_constructors() {
        assert!(matches!(
            EngineError::configuration("token missing"),
            EngineError::Configuration(msg) if msg == "token missing"
        ));
        assert!(matches!(
            EngineError::decode("{\"id\":", "EOF"),
            EngineError::Decode { raw, .. } if raw == "{\"id\":"
        ));
        assert_eq!(EngineError::network("refused").status_code(), None);
    }
}
