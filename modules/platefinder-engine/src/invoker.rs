use std::time::Duration;

use async_trait::async_trait;
use gemini_client::types::GenerateContentRequest;
use gemini_client::{retry_with_backoff, GeminiClient, GeminiError};
use tracing::debug;

use platefinder_common::{DiscoveryError, EngineConfig, ModelTier};

use crate::classify::classify;
use crate::traits::{GroundedModel, GroundingHint, ModelReply};

/// Production model seam: Gemini with Google Maps grounding, wrapped in the
/// bounded rate-limit retry policy.
pub struct GeminiInvoker {
    client: GeminiClient,
    max_attempts: u32,
    retry_base: Duration,
}

impl GeminiInvoker {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            client: GeminiClient::new(&config.api_key),
            max_attempts: config.max_attempts,
            retry_base: config.retry_base,
        }
    }

    pub fn with_base_url(mut self, url: &str) -> Self {
        self.client = self.client.with_base_url(url);
        self
    }
}

#[async_trait]
impl GroundedModel for GeminiInvoker {
    async fn generate(
        &self,
        prompt: &str,
        latitude: f64,
        longitude: f64,
        tier: ModelTier,
    ) -> Result<ModelReply, DiscoveryError> {
        let request = GenerateContentRequest::new()
            .user_text(prompt)
            .maps_grounding(latitude, longitude)
            .temperature(0.2);
        let model = tier.model_id();

        // Only quota/rate-limit pressure is worth waiting out; auth and
        // malformed-request failures propagate on the first attempt.
        let client = &self.client;
        let request = &request;
        let response = retry_with_backoff(
            self.max_attempts,
            self.retry_base,
            GeminiError::is_rate_limited,
            || client.generate_content(model, request),
        )
        .await
        .map_err(|e| classify(&e))?;

        let text = response.text().unwrap_or_default();
        let grounding: Vec<GroundingHint> = response
            .grounding_metadata()
            .map(|metadata| {
                metadata
                    .grounding_chunks
                    .iter()
                    .filter_map(|chunk| chunk.source())
                    .map(|source| GroundingHint {
                        title: source.title.clone().unwrap_or_default(),
                        uri: source.uri.clone().unwrap_or_default(),
                    })
                    .collect()
            })
            .unwrap_or_default();

        debug!(
            model,
            text_len = text.len(),
            hints = grounding.len(),
            "Grounded generation complete"
        );

        Ok(ModelReply { text, grounding })
    }
}
