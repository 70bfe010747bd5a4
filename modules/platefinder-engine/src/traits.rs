use async_trait::async_trait;

use platefinder_common::{DiscoveryError, ModelTier};

/// One hint from the model call's grounding side channel: a matched entity
/// title paired with an authoritative maps URI.
#[derive(Debug, Clone)]
pub struct GroundingHint {
    pub title: String,
    pub uri: String,
}

/// Raw model reply: the generated text plus whatever grounding hints the
/// call returned. An empty hint list is a valid reply meaning "zero records
/// verifiable", not an engine fault.
#[derive(Debug, Clone, Default)]
pub struct ModelReply {
    pub text: String,
    pub grounding: Vec<GroundingHint>,
}

/// Seam between the pipeline and the generative model service. The
/// production impl is [`crate::GeminiInvoker`]; tests script replies through
/// `testing::MockModel`.
#[async_trait]
pub trait GroundedModel: Send + Sync {
    /// Run a grounded generation with the caller's coordinates as a
    /// retrieval hint. Implementations own their retry policy; failures
    /// come back already classified into the taxonomy.
    async fn generate(
        &self,
        prompt: &str,
        latitude: f64,
        longitude: f64,
        tier: ModelTier,
    ) -> Result<ModelReply, DiscoveryError>;
}

#[async_trait]
impl<T: GroundedModel + ?Sized> GroundedModel for std::sync::Arc<T> {
    async fn generate(
        &self,
        prompt: &str,
        latitude: f64,
        longitude: f64,
        tier: ModelTier,
    ) -> Result<ModelReply, DiscoveryError> {
        (**self).generate(prompt, latitude, longitude, tier).await
    }
}
