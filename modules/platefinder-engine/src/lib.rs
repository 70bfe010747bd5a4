//! Discovery reconciliation engine.
//!
//! Reconciles two untrustworthy, independently nondeterministic sources —
//! free-form model output and a grounding index keyed by loosely matching
//! display names — into one verified, deduplicated result list:
//!
//! compose prompt → invoke model (bounded retry) → extract JSON span →
//! parse candidates → build grounding index → verify → deduplicate.
//!
//! The engine is stateless between calls; each invocation builds its own
//! grounding index from its own model response.

pub mod classify;
pub mod dedupe;
pub mod engine;
pub mod extract;
pub mod grounding;
pub mod invoker;
pub mod prompt;
pub mod traits;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;

pub use engine::DiscoveryEngine;
pub use invoker::GeminiInvoker;
pub use traits::{GroundedModel, GroundingHint, ModelReply};
