use std::future::Future;
use std::time::Duration;
use tracing::{debug, warn};

/// Retry policy for startup connections
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Retries after the first attempt
    pub max_retries: u32,
    pub initial_delay_ms: u64,
    pub max_delay_ms: u64,
    /// Multiplier applied to the delay after every failure
    pub backoff_multiplier: f64,
}

impl RetryConfig {
    /// Delay before retry number `retry` (1-based)
    pub fn delay_for(&self, retry: u32) -> Duration {
        let factor = self.backoff_multiplier.powi(retry.saturating_sub(1) as i32);
        let delay = (self.initial_delay_ms as f64 * factor).min(self.max_delay_ms as f64);
        Duration::from_millis(delay as u64)
    }
}

/// 5 retries, 200ms initial delay, 5s cap, doubling
impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 5,
            initial_delay_ms: 200,
            max_delay_ms: 5000,
            backoff_multiplier: 2.0,
        }
    }
}

/// Run `operation` until it succeeds or the retries are used up.
///
/// Returns the last error when every attempt fails.
pub async fn retry_with_backoff<F, Fut, T, E>(mut operation: F, config: RetryConfig) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: std::fmt::Display,
{
    let mut retry = 0;

    loop {
        match operation().await {
            Ok(value) => {
                if retry > 0 {
                    debug!("Operation succeeded after {} retries", retry);
                }
                return Ok(value);
            }
            Err(e) if retry >= config.max_retries => {
                warn!("Operation failed after {} attempts: {}", retry + 1, e);
                return Err(e);
            }
            Err(e) => {
                retry += 1;
                let delay = config.delay_for(retry);
                debug!(
                    "Operation failed (retry {}/{}): {}. Retrying in {:?}",
                    retry, config.max_retries, e, delay
                );
                tokio::time::sleep(delay).await;
            }
        }
    }
}
