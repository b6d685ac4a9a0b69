use async_trait::async_trait;

use crate::modules::team::domain::entities::TeamRecord;
use crate::shared::errors::AppResult;

/// Storage port for the team catalog and the favorite flag.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TeamRepository: Send + Sync {
    /// All teams in the order of the catalog they were seeded from
    async fn get_all_teams(&self) -> AppResult<Vec<TeamRecord>>;

    /// Case-insensitive lookup by abbreviation
    async fn get_team_by_abbrev(&self, abbrev: &str) -> AppResult<Option<TeamRecord>>;

    /// Persist the favorite flag and return the updated record.
    /// Fails with `NotFound` when no team has `team_id`.
    async fn set_favorite(&self, team_id: i32, is_favorited: bool) -> AppResult<TeamRecord>;

    /// Insert teams that are not stored yet; existing rows (and their favorite
    /// flags) are left alone. Returns how many rows were inserted.
    async fn seed_teams(&self, teams: &[TeamRecord]) -> AppResult<usize>;
}
