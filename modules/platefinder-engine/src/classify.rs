use gemini_client::GeminiError;
use tracing::warn;

use platefinder_common::DiscoveryError;

/// Map an upstream client failure into the closed taxonomy, in precedence
/// order: quota, credentials, connectivity, then unclassified. Failures
/// already expressed as [`DiscoveryError`] by inner components propagate
/// through the pipeline unchanged and never reach this function.
///
/// Unclassified failures are logged here with full detail and surfaced with
/// a generic message; upstream error bodies never cross the engine boundary.
pub fn classify(err: &GeminiError) -> DiscoveryError {
    if err.is_rate_limited() {
        DiscoveryError::QuotaExceeded
    } else if err.is_unauthorized() {
        DiscoveryError::InvalidCredentials
    } else if err.is_network() {
        DiscoveryError::Connectivity
    } else {
        warn!(error = %err, "Unclassified upstream failure");
        DiscoveryError::Unclassified
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
    fn quota_signal_wins() {
        assert_eq!(
            classify(&api(429, None, "slow down")),
            DiscoveryError::QuotaExceeded
        );
        assert_eq!(
            classify(&api(400, Some("RESOURCE_EXHAUSTED"), "")),
            DiscoveryError::QuotaExceeded
        );
    }

    #[test]
    fn credential_signal() {
        assert_eq!(
            classify(&api(401, None, "invalid API key provided")),
            DiscoveryError::InvalidCredentials
        );
    }

    #[test]
    fn connectivity_signal() {
        assert_eq!(
            classify(&GeminiError::Network("dns failure".to_string())),
            DiscoveryError::Connectivity
        );
    }

    #[test]
    fn everything_else_is_unclassified_and_redacted() {
        let classified = classify(&api(500, Some("INTERNAL"), "stack: secret detail"));
        assert_eq!(classified, DiscoveryError::Unclassified);
        assert!(!classified.user_message().contains("secret"));
    }

    #[test]
    fn quota_takes_precedence_over_message_mentioning_api_key() {
        // A 429 whose body happens to mention the API key is still quota.
        assert_eq!(
            classify(&api(429, None, "api key over quota")),
            DiscoveryError::QuotaExceeded
        );
    }
}
