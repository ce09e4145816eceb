//! HTTP client with automatic rate limiting and retry logic
//!
//! Every directory request goes through one governor quota, so a page full
//! of instructor names cannot burst past what the service tolerates.

use super::retry_policy::{is_retryable_error, RateLimitInfo, RetryPolicy};
use crate::shared::errors::{AppError, AppResult};
use governor::{Quota, RateLimiter as GovernorRateLimiter};
use reqwest::{Client, Response, StatusCode};
use serde_json::Value;
use std::num::NonZeroU32;
use std::time::Duration;
use tokio::time::sleep;

pub type DirectLimiter = GovernorRateLimiter<
    governor::state::direct::NotKeyed,
    governor::state::InMemoryState,
    governor::clock::DefaultClock,
    governor::middleware::NoOpMiddleware,
>;

const USER_AGENT: &str = "profmatch/0.1 (instructor rating lookup)";

/// HTTP client that handles rate limiting and retries
pub struct RateLimitClient {
    client: Client,
    rate_limiter: DirectLimiter,
    retry_policy: RetryPolicy,
    auth_token: Option<String>,
    service_name: String,
}

impl RateLimitClient {
    /// Client for the rating directory
    pub fn for_directory(requests_per_second: f64, auth_token: Option<String>) -> Self {
        Self::new(
            "Directory",
            RetryPolicy::directory(),
            Self::create_rate_limiter(requests_per_second, 4),
            auth_token,
        )
    }

    /// Create a rate limiter with specified requests per second and burst capacity
    fn create_rate_limiter(requests_per_second: f64, burst_size: u32) -> DirectLimiter {
        let period = if requests_per_second > 0.0 {
            Duration::from_secs_f64(1.0 / requests_per_second)
        } else {
            Duration::from_secs(1)
        };

        let burst = NonZeroU32::new(burst_size.max(1)).unwrap_or(NonZeroU32::MIN);
        let quota = Quota::with_period(period)
            .unwrap_or_else(|| Quota::per_second(NonZeroU32::MIN))
            .allow_burst(burst);

        GovernorRateLimiter::direct(quota)
    }

    pub fn new(
        service_name: &str,
        retry_policy: RetryPolicy,
        rate_limiter: DirectLimiter,
        auth_token: Option<String>,
    ) -> Self {
        Self {
            client: Client::new(),
            rate_limiter,
            retry_policy,
            auth_token,
            service_name: service_name.to_string(),
        }
    }

    /// Make a POST request with JSON body
    pub async fn post_json<T>(&self, url: &str, body: &Value) -> AppResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let mut last_error = None;

        for attempt in 0..=self.retry_policy.max_retries {
            // Wait for rate limiter before attempting request
            self.rate_limiter.until_ready().await;

            match self.send(url, body).await {
                Ok(response) => {
                    let status = response.status();

                    if status == StatusCode::TOO_MANY_REQUESTS {
                        let info = RateLimitInfo::from_headers(response.headers());
                        if attempt < self.retry_policy.max_retries {
                            let delay = self.retry_policy.calculate_delay(attempt, info.retry_after);
                            log::warn!(
                                "{} rate limited (attempt {}/{}). Waiting {:?} before retry.",
                                self.service_name,
                                attempt + 1,
                                self.retry_policy.max_retries + 1,
                                delay
                            );
                            sleep(delay).await;
                            continue;
                        }
                        return Err(AppError::RateLimitError(format!(
                            "{} rate limit exceeded after {} attempts",
                            self.service_name,
                            self.retry_policy.max_retries + 1
                        )));
                    }

                    if !status.is_success() {
                        let error_msg =
                            format!("{} returned error: {}", self.service_name, status);

                        // Only retry server errors
                        if status.is_server_error() && attempt < self.retry_policy.max_retries {
                            let delay = self.retry_policy.calculate_delay(attempt, None);
                            log::warn!(
                                "{} (attempt {}/{}). Retrying in {:?}",
                                error_msg,
                                attempt + 1,
                                self.retry_policy.max_retries + 1,
                                delay
                            );
                            sleep(delay).await;
                            continue;
                        }
                        return Err(AppError::SearchUnavailable(error_msg));
                    }

                    return self.parse_response(response).await;
                }
                Err(e) => {
                    if is_retryable_error(&e) && attempt < self.retry_policy.max_retries {
                        let delay = self.retry_policy.calculate_delay(attempt, None);
                        log::warn!(
                            "{} request failed (attempt {}/{}): {}. Retrying in {:?}",
                            self.service_name,
                            attempt + 1,
                            self.retry_policy.max_retries + 1,
                            e,
                            delay
                        );
                        last_error = Some(AppError::from(e));
                        sleep(delay).await;
                        continue;
                    }
                    return Err(AppError::from(e));
                }
            }
        }

        // If we get here, all retries were exhausted
        Err(last_error.unwrap_or_else(|| {
            AppError::SearchUnavailable(format!(
                "{} request failed after {} attempts",
                self.service_name,
                self.retry_policy.max_retries + 1
            ))
        }))
    }

    async fn send(&self, url: &str, body: &Value) -> Result<Response, reqwest::Error> {
        let mut request_builder = self
            .client
            .post(url)
            .header("User-Agent", USER_AGENT)
            .header("Accept", "application/json")
            .json(body);

        if let Some(token) = &self.auth_token {
            request_builder = request_builder.header("Authorization", token);
        }

        request_builder.send().await
    }

    async fn parse_response<T>(&self, response: Response) -> AppResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let response_text = response.text().await.map_err(|e| {
            AppError::SearchUnavailable(format!(
                "Failed to read {} response: {}",
                self.service_name, e
            ))
        })?;

        serde_json::from_str(&response_text).map_err(|e| {
            AppError::SerializationError(format!(
                "Failed to parse {} response: {}. Response: {}",
                self.service_name,
                e,
                response_text.chars().take(200).collect::<String>()
            ))
        })
    }

    /// Check if a request can be made now (for testing/debugging)
    pub fn can_make_request_now(&self) -> bool {
        self.rate_limiter.check().is_ok()
    }

    pub fn service_name(&self) -> &str {
        &self.service_name
    }
}
