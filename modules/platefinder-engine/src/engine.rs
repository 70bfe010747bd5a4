use tracing::{debug, info};

use platefinder_common::{DiscoveryError, EngineConfig, SearchRequest, VerifiedRestaurant};

use crate::dedupe::dedupe;
use crate::grounding::{self, GroundingIndex};
use crate::invoker::GeminiInvoker;
use crate::traits::GroundedModel;
use crate::{extract, prompt};

/// Orchestrates one discovery call end to end. Stateless between calls;
/// safe to share across concurrent invocations, each of which builds its own
/// grounding index from its own model response.
pub struct DiscoveryEngine<M> {
    model: M,
    config: EngineConfig,
}

impl DiscoveryEngine<GeminiInvoker> {
    /// Production engine backed by Gemini with Maps grounding.
    pub fn gemini(config: EngineConfig) -> Self {
        let invoker = GeminiInvoker::new(&config);
        Self::new(invoker, config)
    }
}

impl<M: GroundedModel> DiscoveryEngine<M> {
    pub fn new(model: M, config: EngineConfig) -> Self {
        Self { model, config }
    }

    /// Run the full reconciliation pipeline for one request.
    ///
    /// Validation failures (including missing credentials) are raised before
    /// any network call. Individual unverifiable candidates are filtered
    /// silently; only a result set that ends up empty is reported, as
    /// "no results" rather than a technical failure.
    pub async fn discover(
        &self,
        request: &SearchRequest,
    ) -> Result<Vec<VerifiedRestaurant>, DiscoveryError> {
        request.validate()?;
        if self.config.api_key.trim().is_empty() {
            return Err(DiscoveryError::InvalidCredentials);
        }

        let prompt = prompt::compose(request);
        debug!(query = %request.query, tier = ?request.tier, "Dispatching grounded discovery");

        let reply = self
            .model
            .generate(&prompt, request.latitude, request.longitude, request.tier)
            .await?;

        let span = extract::extract_json_span(&reply.text);
        let candidates = extract::parse_candidates(span)?;
        let candidate_count = candidates.len();

        let index = GroundingIndex::from_hints(&reply.grounding);
        let verified = grounding::verify(candidates, &index);
        let dropped = candidate_count - verified.len();

        let results = dedupe(verified);

        info!(
            query = %request.query,
            candidates = candidate_count,
            dropped,
            results = results.len(),
            "Discovery complete"
        );

        if results.is_empty() {
            return Err(DiscoveryError::InvalidResponse);
        }
        Ok(results)
    }
}
