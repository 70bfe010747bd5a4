pub mod client;
pub mod error;
pub mod retry;
pub mod types;

pub use client::GeminiClient;
pub use error::{GeminiError, Result};
pub use retry::retry_with_backoff;
