use thiserror::Error;

/// Closed failure taxonomy surfaced to callers. The `#[error]` strings are
/// the human-presentable messages; upstream detail never crosses this
/// boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiscoveryError {
    /// Upstream quota or rate-limit pressure, surfaced only after the
    /// internal retry budget is exhausted.
    #[error("The service is busy right now. Please try again in a moment.")]
    QuotaExceeded,

    /// Missing or rejected credentials. Not retried.
    #[error("The discovery service is not configured with valid credentials.")]
    InvalidCredentials,

    /// Network or offline failure. Not retried by this engine.
    #[error("Could not reach the discovery service. Check your connection.")]
    Connectivity,

    /// The model's output was structurally unusable, or no venue survived
    /// verification. Presented to end users as "no results", not as a
    /// technical failure.
    #[error("No restaurants could be found for this search.")]
    InvalidResponse,

    /// Caller-supplied input violated the inbound contract.
    #[error("Invalid search: {0}")]
    Validation(String),

    /// Anything else, with internal detail already stripped.
    #[error("Something went wrong. Please try again.")]
    Unclassified,
}

impl DiscoveryError {
    /// Message suitable for direct display.
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}
