//! In-memory `VideoSearchClient` that records every query it receives

use async_trait::async_trait;
use hoop_watcher_lib::{AppError, AppResult, SearchResult, VideoSearchClient};
use std::sync::Mutex;

pub struct StubSearchClient {
    response: AppResult<Vec<SearchResult>>,
    calls: Mutex<Vec<(String, u32)>>,
}

impl StubSearchClient {
    pub fn returning(results: Vec<SearchResult>) -> Self {
        Self {
            response: Ok(results),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(error: AppError) -> Self {
        Self {
            response: Err(error),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<(String, u32)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl VideoSearchClient for StubSearchClient {
    async fn search_videos(&self, query: &str, max_results: u32) -> AppResult<Vec<SearchResult>> {
        self.calls
            .lock()
            .unwrap()
            .push((query.to_string(), max_results));
        self.response.clone()
    }

    fn service_name(&self) -> &'static str {
        "Stub"
    }
}
