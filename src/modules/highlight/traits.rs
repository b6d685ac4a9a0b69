use async_trait::async_trait;

use crate::modules::highlight::domain::entities::SearchResult;
use crate::shared::errors::AppResult;

/// Keyword video search, most relevant first
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VideoSearchClient: Send + Sync {
    /// Search videos by a literal query, returning at most `max_results` hits
    async fn search_videos(&self, query: &str, max_results: u32) -> AppResult<Vec<SearchResult>>;

    /// Name used in logs
    fn service_name(&self) -> &'static str;
}
