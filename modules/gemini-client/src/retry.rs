use std::future::Future;
use std::time::Duration;

use tracing::warn;

/// Run `op` up to `max_attempts` times, sleeping between attempts with an
/// exponentially doubling delay starting at `base`.
///
/// Only failures for which `is_retryable` returns true are retried; anything
/// else propagates immediately. There is no sleep after the final attempt.
pub async fn retry_with_backoff<T, E, F, Fut, P>(
    max_attempts: u32,
    base: Duration,
    mut is_retryable: P,
    mut op: F,
) -> std::result::Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = std::result::Result<T, E>>,
    P: FnMut(&E) -> bool,
    E: std::fmt::Display,
{
    let mut attempt: u32 = 0;
    loop {
        match op().await {
            Ok(value) => return Ok(value),
            Err(err) => {
                attempt += 1;
                if attempt >= max_attempts || !is_retryable(&err) {
                    return Err(err);
                }
                let backoff = base * 2u32.pow(attempt - 1);
                warn!(
                    attempt,
                    backoff_ms = backoff.as_millis() as u64,
                    error = %err,
                    "Retryable failure, backing off"
                );
                tokio::time::sleep(backoff).await;
            }
        }
    }
}
