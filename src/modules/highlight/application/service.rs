use chrono::NaiveDate;
use std::sync::Arc;

use crate::modules::highlight::domain::{
    entities::Highlight,
    services::{filter_highlights, HighlightQueryBuilder},
    value_objects::GameDate,
};
use crate::modules::highlight::traits::VideoSearchClient;
use crate::modules::team::domain::{entities::TeamRecord, value_objects::MAX_TEAMS_PER_QUERY};
use crate::shared::config::AppConfig;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::logger::{LogContext, TimedOperation};
use crate::{log_debug, log_warn};

/// Resolved teams in, filtered highlight list out.
///
/// Two teams are one game: they share a single search, and the first team's
/// mascot anchors the relevance filter.
pub struct HighlightService {
    search_client: Arc<dyn VideoSearchClient>,
    query_builder: HighlightQueryBuilder,
    max_results: u32,
    default_to_today: bool,
}

impl HighlightService {
    pub fn new(search_client: Arc<dyn VideoSearchClient>, max_results: u32) -> Self {
        Self {
            search_client,
            query_builder: HighlightQueryBuilder::default(),
            max_results,
            default_to_today: false,
        }
    }

    pub fn from_config(search_client: Arc<dyn VideoSearchClient>, config: &AppConfig) -> Self {
        Self {
            search_client,
            query_builder: HighlightQueryBuilder::new(config.date_format),
            max_results: config.max_results,
            default_to_today: config.default_to_today,
        }
    }

    pub fn with_query_builder(mut self, query_builder: HighlightQueryBuilder) -> Self {
        self.query_builder = query_builder;
        self
    }

    /// Without a date, either search today or leave the date out
    pub fn with_default_to_today(mut self, default_to_today: bool) -> Self {
        self.default_to_today = default_to_today;
        self
    }

    /// The literal phrase `get_highlights` would search for
    pub fn search_query(&self, teams: &[TeamRecord], date: Option<NaiveDate>) -> AppResult<String> {
        Self::validate_teams(teams)?;

        let date = date.or_else(|| {
            self.default_to_today
                .then(|| GameDate::today().date())
        });
        let names: Vec<&str> = teams.iter().map(|team| team.name.as_str()).collect();
        self.query_builder.build(&names, date)
    }

    pub async fn get_highlights(
        &self,
        teams: &[TeamRecord],
        date: Option<NaiveDate>,
    ) -> AppResult<Vec<Highlight>> {
        let query = self.search_query(teams, date)?;
        let service = self.search_client.service_name();
        let timer = TimedOperation::new("get_highlights");

        LogContext::search_operation(&query, Some(service), None);
        let results = self
            .search_client
            .search_videos(&query, self.max_results)
            .await
            .map_err(|e| {
                log_warn!("{} search failed: {}", service, e);
                e.into_search_unavailable()
            })?;
        LogContext::search_operation(&query, Some(service), Some(results.len()));

        // validate_teams guarantees at least one team
        let anchor = &teams[0];
        let highlights = filter_highlights(&results, anchor);
        log_debug!(
            "{} of {} results kept for {}",
            highlights.len(),
            results.len(),
            anchor
        );

        timer.finish_with_info(&format!("{} highlights", highlights.len()));
        Ok(highlights)
    }

    fn validate_teams(teams: &[TeamRecord]) -> AppResult<()> {
        if teams.is_empty() || teams.len() > MAX_TEAMS_PER_QUERY {
            return Err(AppError::InvalidInput(format!(
                "Highlights need 1 to {} teams, got {}",
                MAX_TEAMS_PER_QUERY,
                teams.len()
            )));
        }
        Ok(())
    }
}
