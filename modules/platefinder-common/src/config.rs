use std::env;
use std::fmt;
use std::time::Duration;

/// Engine configuration. The API key is injected explicitly at construction
/// so components stay testable in isolation; nothing inside the engine reads
/// ambient environment state.
#[derive(Clone)]
pub struct EngineConfig {
    pub api_key: String,
    /// Total attempts for the model call, including the first.
    pub max_attempts: u32,
    /// Base delay for retry backoff; doubles each retry.
    pub retry_base: Duration,
}

impl EngineConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            max_attempts: 3,
            retry_base: Duration::from_secs(2),
        }
    }

    pub fn with_retry(mut self, max_attempts: u32, retry_base: Duration) -> Self {
        self.max_attempts = max_attempts;
        self.retry_base = retry_base;
        self
    }

    /// Convenience loader for binary edges. A missing key is not an error
    /// here: the engine rejects an empty key as InvalidCredentials before
    /// any network call, which gives callers one consistent failure path.
    pub fn from_env() -> Self {
        Self::new(env::var("GEMINI_API_KEY").unwrap_or_default())
    }
}

impl fmt::Debug for EngineConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EngineConfig")
            .field("api_key", &"<redacted>")
            .field("max_attempts", &self.max_attempts)
            .field("retry_base", &self.retry_base)
            .finish()
    }
}
