use crate::shared::errors::{AppError, AppResult};
use reqwest::StatusCode;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, warn};

/// Retry configuration for the video search transport
#[derive(Debug, Clone)]
pub struct RetryConfig {
    pub max_retries: u32,
    pub base_delay: Duration,
    pub max_delay: Duration,
    pub backoff_multiplier: f64,
    pub jitter: bool,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self::conservative()
    }
}

impl RetryConfig {
    /// Two retries, a second apart and growing; an interactive user is waiting
    pub fn conservative() -> Self {
        Self {
            max_retries: 2,
            base_delay: Duration::from_secs(1),
            max_delay: Duration::from_secs(10),
            backoff_multiplier: 1.5,
            jitter: true,
        }
    }

    /// Millisecond delays, no jitter; for tests against a local mock server
    pub fn immediate(max_retries: u32) -> Self {
        Self {
            max_retries,
            base_delay: Duration::from_millis(1),
            max_delay: Duration::from_millis(5),
            backoff_multiplier: 1.0,
            jitter: false,
        }
    }
}

/// Exponential backoff around a fallible async operation
pub struct RetryUtil;

impl RetryUtil {
    pub async fn with_retry<F, Fut, T>(
        operation: F,
        config: &RetryConfig,
        operation_name: &str,
    ) -> AppResult<T>
    where
        F: Fn() -> Fut,
        Fut: std::future::Future<Output = AppResult<T>>,
    {
        let mut attempt = 0;

        loop {
            match operation().await {
                Ok(result) => {
                    if attempt > 0 {
                        debug!(
                            "{} succeeded on attempt {} after {} retries",
                            operation_name,
                            attempt + 1,
                            attempt
                        );
                    }
                    return Ok(result);
                }
                Err(error) => {
                    if !Self::is_retryable_error(&error) {
                        debug!(
                            "{} failed with non-retryable error: {}",
                            operation_name, error
                        );
                        return Err(error);
                    }

                    if attempt >= config.max_retries {
                        warn!(
                            "{} failed on final attempt {} ({}), giving up",
                            operation_name,
                            attempt + 1,
                            error
                        );
                        return Err(error);
                    }

                    let delay = Self::calculate_delay(attempt, config);
                    warn!(
                        "{} failed on attempt {} ({}), retrying in {:?}",
                        operation_name,
                        attempt + 1,
                        error,
                        delay
                    );
                    sleep(delay).await;
                    attempt += 1;
                }
            }
        }
    }

    fn calculate_delay(attempt: u32, config: &RetryConfig) -> Duration {
        let exponential_delay =
            config.base_delay.as_millis() as f64 * config.backoff_multiplier.powi(attempt as i32);

        let mut delay = Duration::from_millis(exponential_delay as u64).min(config.max_delay);

        // Up to 10% extra
        if config.jitter {
            let jitter_ms = (delay.as_millis() as f64 * 0.1 * rand::random::<f64>()) as u64;
            delay += Duration::from_millis(jitter_ms);
        }

        delay
    }

    /// Only transient transport failures are retried
    fn is_retryable_error(error: &AppError) -> bool {
        matches!(
            error,
            AppError::SearchUnavailable(_) | AppError::RateLimitError(_)
        )
    }

    /// Send a request, retrying on timeouts, connection failures, 5xx and
    /// 429. Any other response is handed back as is for the caller to judge.
    pub async fn retry_http_request<F, Fut>(
        request_fn: F,
        config: &RetryConfig,
        operation_name: &str,
    ) -> AppResult<reqwest::Response>
    where
        F: Fn() -> Fut,
        Fut: std::future::Future<Output = Result<reqwest::Response, reqwest::Error>>,
    {
        Self::with_retry(
            || async {
                match request_fn().await {
                    Ok(response) => {
                        let status = response.status();
                        if Self::is_retryable_status(status) {
                            Err(Self::status_to_app_error(status))
                        } else {
                            Ok(response)
                        }
                    }
                    Err(e) if e.is_timeout() || e.is_connect() => Err(AppError::from(e)),
                    Err(e) => Err(AppError::InternalError(format!(
                        "HTTP request failed: {}",
                        e
                    ))),
                }
            },
            config,
            operation_name,
        )
        .await
    }

    fn is_retryable_status(status: StatusCode) -> bool {
        status.is_server_error()
            || status == StatusCode::TOO_MANY_REQUESTS
            || status == StatusCode::REQUEST_TIMEOUT
    }

    fn status_to_app_error(status: StatusCode) -> AppError {
        match status {
            StatusCode::TOO_MANY_REQUESTS => {
                AppError::RateLimitError("Rate limit exceeded".to_string())
            }
            _ => AppError::SearchUnavailable(format!("Server error: {}", status)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    #[tokio::test]
    async fn test_retries_transient_errors_until_success() {
        let calls = AtomicU32::new(0);
        let result = RetryUtil::with_retry(
            || async {
                if calls.fetch_add(1, Ordering::SeqCst) < 2 {
                    Err(AppError::SearchUnavailable("flaky".to_string()))
                } else {
                    Ok(7)
                }
            },
            &RetryConfig::immediate(3),
            "flaky op",
        )
        .await;

        assert_eq!(result.unwrap(), 7);
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_gives_up_after_max_retries() {
        let calls = AtomicU32::new(0);
        let result: AppResult<()> = RetryUtil::with_retry(
            || async {
                calls.fetch_add(1, Ordering::SeqCst);
                Err(AppError::RateLimitError("slow down".to_string()))
            },
            &RetryConfig::immediate(2),
            "limited op",
        )
        .await;

        assert!(matches!(result, Err(AppError::RateLimitError(_))));
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_permanent_errors_are_not_retried() {
        let calls = AtomicU32::new(0);
        let result: AppResult<()> = RetryUtil::with_retry(
            || async {
                calls.fetch_add(1, Ordering::SeqCst);
                Err(AppError::ConfigError("no key".to_string()))
            },
            &RetryConfig::immediate(3),
            "config op",
        )
        .await;

        assert!(result.is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_delay_is_capped() {
        let config = RetryConfig {
            max_retries: 10,
            base_delay: Duration::from_millis(100),
            max_delay: Duration::from_millis(250),
            backoff_multiplier: 2.0,
            jitter: false,
        };
        assert_eq!(RetryUtil::calculate_delay(0, &config), Duration::from_millis(100));
        assert_eq!(RetryUtil::calculate_delay(1, &config), Duration::from_millis(200));
        assert_eq!(RetryUtil::calculate_delay(5, &config), Duration::from_millis(250));
    }

    #[test]
    fn test_retryable_statuses() {
        assert!(RetryUtil::is_retryable_status(StatusCode::BAD_GATEWAY));
        assert!(RetryUtil::is_retryable_status(StatusCode::TOO_MANY_REQUESTS));
        assert!(!RetryUtil::is_retryable_status(StatusCode::FORBIDDEN));
        assert!(!RetryUtil::is_retryable_status(StatusCode::OK));
    }
}
