use thiserror::Error;

pub type Result<T> = std::result::Result<T, GeminiError>;

#[derive(Debug, Error)]
pub enum GeminiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("API error (status {status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Canonical error status from the response body (e.g. "RESOURCE_EXHAUSTED"),
        /// when the body was parseable.
        code: Option<String>,
        message: String,
    },

    #[error("Parse error: {0}")]
    Parse(String),
}

impl GeminiError {
    /// Whether this failure signals exhausted quota or rate limiting.
    /// These are transient under load and worth retrying after a backoff.
    pub fn is_rate_limited(&self) -> bool {
        match self {
            GeminiError::Api {
                status,
                code,
                message,
            } => {
                if *status == 429 {
                    return true;
                }
                if code.as_deref() == Some("RESOURCE_EXHAUSTED") {
                    return true;
                }
                let message = message.to_ascii_lowercase();
                message.contains("quota")
                    || message.contains("rate limit")
                    || message.contains("resource exhausted")
                    || message.contains("resource_exhausted")
            }
            _ => false,
        }
    }

    /// Whether this failure signals missing or rejected credentials.
    /// Waiting does not help here.
    pub fn is_unauthorized(&self) -> bool {
        match self {
            GeminiError::Api {
                status,
                code,
                message,
            } => {
                if *status == 401 || *status == 403 {
                    return true;
                }
                if matches!(code.as_deref(), Some("UNAUTHENTICATED" | "PERMISSION_DENIED")) {
                    return true;
                }
                message.to_ascii_lowercase().contains("api key")
            }
            _ => false,
        }
    }

    pub fn is_network(&self) -> bool {
        matches!(self, GeminiError::Network(_))
    }
}

impl From<reqwest::Error> for GeminiError {
    fn from(err: reqwest::Error) -> Self {
        GeminiError::Network(err.to_string())
    }
}

impl From<serde_json::Error> for GeminiError {
    fn from(err: serde_json::Error) -> Self {
        GeminiError::Parse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api(status: u16, code: Option<&str>, message: &str) -> GeminiError {
        GeminiError::Api {
            status,
            code: code.map(String::from),
            message: message.to_string(),
        }
    }

    #[test]
    fn rate_limit_by_status_code() {
        assert!(api(429, None, "too many requests").is_rate_limited());
    }

    #[test]
    fn rate_limit_by_canonical_code() {
        assert!(api(400, Some("RESOURCE_EXHAUSTED"), "").is_rate_limited());
    }

    #[test]
    fn rate_limit_by_message_content() {
        assert!(api(500, None, "Quota exceeded for model").is_rate_limited());
        assert!(api(503, None, "Rate limit reached").is_rate_limited());
    }

    #[test]
    fn auth_failure_is_not_rate_limit() {
        let err = api(403, Some("PERMISSION_DENIED"), "caller lacks permission");
        assert!(!err.is_rate_limited());
        assert!(err.is_unauthorized());
    }

    #[test]
    fn network_error_is_neither() {
        let err = GeminiError::Network("connection refused".to_string());
        assert!(!err.is_rate_limited());
        assert!(!err.is_unauthorized());
        assert!(err.is_network());
    }
}
