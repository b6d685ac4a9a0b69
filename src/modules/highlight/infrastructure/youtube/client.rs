use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::{debug, info};

use super::{
    dto::{YoutubeErrorResponse, YoutubeSearchParams, YoutubeSearchResponse},
    mapper::YoutubeMapper,
};
use crate::modules::highlight::domain::entities::SearchResult;
use crate::modules::highlight::infrastructure::retry_util::{RetryConfig, RetryUtil};
use crate::modules::highlight::traits::VideoSearchClient;
use crate::shared::config::AppConfig;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::logger::LogContext;

pub const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";

const SERVICE_NAME: &str = "YouTube";
const REQUEST_TIMEOUT_SECS: u64 = 15;
const USER_AGENT: &str = concat!("hoop-watcher/", env!("CARGO_PKG_VERSION"));
/// Upper bound the search endpoint accepts for `maxResults`
const MAX_RESULTS_LIMIT: u32 = 50;

/// YouTube Data API v3 `search` client
pub struct YoutubeClient {
    client: Client,
    base_url: String,
    api_key: String,
    retry_config: RetryConfig,
}

impl YoutubeClient {
    pub fn new(api_key: impl Into<String>) -> AppResult<Self> {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> AppResult<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(AppError::ConfigError(
                "YOUTUBE_API_KEY is not set".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| AppError::InternalError(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key,
            retry_config: RetryConfig::default(),
        })
    }

    pub fn from_config(config: &AppConfig) -> AppResult<Self> {
        let api_key = config.require_youtube_api_key()?;
        Self::with_base_url(api_key, config.youtube_api_base_url.as_str())
    }

    pub fn with_retry_config(mut self, retry_config: RetryConfig) -> Self {
        self.retry_config = retry_config;
        self
    }

    /// Map a non-success status that was not worth retrying
    async fn handle_error_response(response: reqwest::Response) -> AppError {
        let status = response.status();
        let message = response
            .json::<YoutubeErrorResponse>()
            .await
            .map(|body| body.error.message)
            .unwrap_or_default();

        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => AppError::SearchUnavailable(
                format!("Not authorized to search {} ({}): {}", SERVICE_NAME, status, message),
            ),
            StatusCode::TOO_MANY_REQUESTS => {
                AppError::RateLimitError(format!("{} rate limit exceeded", SERVICE_NAME))
            }
            _ => AppError::SearchUnavailable(format!(
                "{} returned {}: {}",
                SERVICE_NAME, status, message
            )),
        }
    }
}

#[async_trait]
impl VideoSearchClient for YoutubeClient {
    async fn search_videos(&self, query: &str, max_results: u32) -> AppResult<Vec<SearchResult>> {
        let max_results = max_results.clamp(1, MAX_RESULTS_LIMIT);
        let url = format!("{}/search", self.base_url);
        let params = YoutubeSearchParams {
            part: "snippet",
            kind: "video",
            q: query,
            max_results,
            key: &self.api_key,
        };

        debug!("Searching {} for {} (max {})", SERVICE_NAME, query, max_results);
        let start = std::time::Instant::now();

        let response = RetryUtil::retry_http_request(
            || self.client.get(&url).query(&params).send(),
            &self.retry_config,
            "YouTube search",
        )
        .await?;

        let status = response.status();
        let duration = start.elapsed().as_millis() as u64;
        LogContext::api_call(SERVICE_NAME, "search", status.as_str(), Some(duration));

        if !status.is_success() {
            return Err(Self::handle_error_response(response).await);
        }

        let body = response.json::<YoutubeSearchResponse>().await.map_err(|e| {
            AppError::SerializationError(format!("Failed to parse {} response: {}", SERVICE_NAME, e))
        })?;

        let results: Vec<SearchResult> = body
            .items
            .into_iter()
            .filter_map(YoutubeMapper::to_domain)
            .collect();

        info!("{} search returned {} videos", SERVICE_NAME, results.len());
        Ok(results)
    }

    fn service_name(&self) -> &'static str {
        SERVICE_NAME
    }
}
