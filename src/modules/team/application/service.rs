use std::sync::Arc;

use crate::modules::team::domain::{
    entities::TeamRecord, repositories::TeamRepository, services::QueryResolver,
    value_objects::TeamQuery, TeamCatalog,
};
use crate::shared::errors::{AppError, AppResult};
use crate::{log_debug, log_info};

pub struct TeamService {
    team_repo: Arc<dyn TeamRepository>,
    resolver: QueryResolver,
}

impl TeamService {
    pub fn new(team_repo: Arc<dyn TeamRepository>) -> Self {
        Self {
            team_repo,
            resolver: QueryResolver::new(),
        }
    }

    pub fn with_resolver(team_repo: Arc<dyn TeamRepository>, resolver: QueryResolver) -> Self {
        Self {
            team_repo,
            resolver,
        }
    }

    /// Store the catalog; teams already present keep their favorite flag
    pub async fn seed(&self, catalog: &TeamCatalog) -> AppResult<usize> {
        let inserted = self.team_repo.seed_teams(catalog.teams()).await?;
        log_info!("Team catalog seeded ({} new)", inserted);
        Ok(inserted)
    }

    pub async fn list_teams(&self) -> AppResult<Vec<TeamRecord>> {
        self.team_repo.get_all_teams().await
    }

    pub async fn get_team(&self, abbrev: &str) -> AppResult<TeamRecord> {
        self.team_repo
            .get_team_by_abbrev(abbrev)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("No team with abbreviation '{}'", abbrev)))
    }

    pub async fn set_favorite(&self, abbrev: &str, is_favorited: bool) -> AppResult<TeamRecord> {
        let team = self.get_team(abbrev).await?;
        log_debug!("Setting favorite for {} to {}", team, is_favorited);
        self.team_repo.set_favorite(team.id, is_favorited).await
    }

    pub async fn favorite_teams(&self) -> AppResult<Vec<TeamRecord>> {
        let teams = self.team_repo.get_all_teams().await?;
        Ok(teams.into_iter().filter(|team| team.is_favorited).collect())
    }

    /// Resolve a single free-text query against the stored catalog
    pub async fn resolve(&self, query: &str, fuzzy: bool) -> AppResult<Option<TeamRecord>> {
        let catalog = self.catalog().await?;
        let team = if fuzzy {
            self.resolver.resolve_fuzzy(query, &catalog)
        } else {
            self.resolver.resolve_exact(query, &catalog)
        };
        Ok(team.cloned())
    }

    /// Resolve every fragment of a comma-separated query, in order
    pub async fn resolve_all(&self, query: &TeamQuery) -> AppResult<Vec<TeamRecord>> {
        if query.is_empty() {
            return Ok(Vec::new());
        }
        let catalog = self.catalog().await?;
        Ok(self.resolver.resolve_all(query, &catalog))
    }

    async fn catalog(&self) -> AppResult<Vec<TeamRecord>> {
        let teams = self.team_repo.get_all_teams().await?;
        if teams.is_empty() {
            return Err(AppError::CatalogUnavailable(
                "No teams are stored".to_string(),
            ));
        }
        Ok(teams)
    }
}
