//! Test doubles for the discovery pipeline.
//!
//! `MockModel` scripts replies/failures per call and counts invocations, in
//! place of the Gemini-backed invoker. Builder pattern: `.reply()`,
//! `.failure()`.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use platefinder_common::{CandidateRecord, DiscoveryError, ModelTier, VerifiedRestaurant};

use crate::traits::{GroundedModel, GroundingHint, ModelReply};

// ---------------------------------------------------------------------------
// MockModel
// ---------------------------------------------------------------------------

/// Scripted model: each call consumes the next outcome in order. Panics if
/// called with nothing scripted, which in a test means the engine made a
/// network-bound call it should not have.
pub struct MockModel {
    script: Mutex<VecDeque<Result<ModelReply, DiscoveryError>>>,
    calls: AtomicUsize,
}

impl MockModel {
    pub fn new() -> Self {
        Self {
            script: Mutex::new(VecDeque::new()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn reply(self, reply: ModelReply) -> Self {
        self.script.lock().unwrap().push_back(Ok(reply));
        self
    }

    pub fn failure(self, err: DiscoveryError) -> Self {
        self.script.lock().unwrap().push_back(Err(err));
        self
    }

    /// How many times the engine invoked the model.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Default for MockModel {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GroundedModel for MockModel {
    async fn generate(
        &self,
        _prompt: &str,
        _latitude: f64,
        _longitude: f64,
        _tier: ModelTier,
    ) -> Result<ModelReply, DiscoveryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.script
            .lock()
            .unwrap()
            .pop_front()
            .expect("MockModel called with no scripted reply")
    }
}

// ---------------------------------------------------------------------------
// Builders
// ---------------------------------------------------------------------------

pub fn hint(title: &str, uri: &str) -> GroundingHint {
    GroundingHint {
        title: title.to_string(),
        uri: uri.to_string(),
    }
}

pub fn reply_with(text: &str, grounding: Vec<GroundingHint>) -> ModelReply {
    ModelReply {
        text: text.to_string(),
        grounding,
    }
}

pub fn candidate(name: &str, review_count: u64) -> CandidateRecord {
    CandidateRecord {
        name: name.to_string(),
        quality_score: 4.2,
        rating: 4.5,
        review_count,
        pros: vec![
            "great flavors".to_string(),
            "friendly staff".to_string(),
            "good value".to_string(),
        ],
        cons: vec![
            "long waits".to_string(),
            "limited parking".to_string(),
            "noisy room".to_string(),
        ],
    }
}

pub fn verified(name: &str, maps_uri: &str, review_count: u64) -> VerifiedRestaurant {
    VerifiedRestaurant {
        name: name.to_string(),
        quality_score: 4.2,
        rating: 4.5,
        review_count,
        pros: vec![
            "great flavors".to_string(),
            "friendly staff".to_string(),
            "good value".to_string(),
        ],
        cons: vec![
            "long waits".to_string(),
            "limited parking".to_string(),
            "noisy room".to_string(),
        ],
        maps_uri: maps_uri.to_string(),
    }
}

/// JSON body for a list of candidates, as the model would emit it.
pub fn candidates_json(candidates: &[CandidateRecord]) -> String {
    serde_json::to_string(candidates).expect("candidate serialization is infallible")
}
