use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use tokio::task;

use super::mapper::{entity_to_new_model, model_to_entity};
use crate::modules::team::domain::{entities::TeamRecord, repositories::TeamRepository};
use crate::modules::team::infrastructure::models::TeamModel;
use crate::schema::teams;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::logger::{LogContext, TimedOperation};
use crate::shared::Database;
use crate::{log_debug, log_info};

diesel::define_sql_function!(fn lower(x: diesel::sql_types::Text) -> diesel::sql_types::Text);

pub struct SqliteTeamRepository {
    db: Arc<Database>,
}

impl SqliteTeamRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TeamRepository for SqliteTeamRepository {
    async fn get_all_teams(&self) -> AppResult<Vec<TeamRecord>> {
        let db = Arc::clone(&self.db);
        let timer = TimedOperation::new("get_all_teams");

        let models = task::spawn_blocking(move || -> AppResult<Vec<TeamModel>> {
            let mut conn = db.get_connection()?;
            let rows = teams::table
                .order((teams::position.asc(), teams::id.asc()))
                .select(TeamModel::as_select())
                .load(&mut conn)?;
            Ok(rows)
        })
        .await??;

        let duration = timer.finish();
        LogContext::db_operation("select", "teams", Some(duration));

        Ok(models.into_iter().map(model_to_entity).collect())
    }

    async fn get_team_by_abbrev(&self, abbrev: &str) -> AppResult<Option<TeamRecord>> {
        let db = Arc::clone(&self.db);
        let code = abbrev.trim().to_lowercase();

        let model = task::spawn_blocking(move || -> AppResult<Option<TeamModel>> {
            let mut conn = db.get_connection()?;
            let row = teams::table
                .filter(lower(teams::abbreviation).eq(&code))
                .select(TeamModel::as_select())
                .first(&mut conn)
                .optional()?;
            Ok(row)
        })
        .await??;

        Ok(model.map(model_to_entity))
    }

    async fn set_favorite(&self, team_id: i32, is_favorited: bool) -> AppResult<TeamRecord> {
        let db = Arc::clone(&self.db);

        let model = task::spawn_blocking(move || -> AppResult<TeamModel> {
            let mut conn = db.get_connection()?;
            conn.transaction::<TeamModel, AppError, _>(|conn| {
                let updated = diesel::update(teams::table.find(team_id))
                    .set(teams::is_favorited.eq(is_favorited))
                    .execute(conn)?;

                if updated == 0 {
                    return Err(AppError::NotFound(format!(
                        "Team with id {} not found",
                        team_id
                    )));
                }

                let row = teams::table
                    .find(team_id)
                    .select(TeamModel::as_select())
                    .first(conn)?;
                Ok(row)
            })
        })
        .await??;

        log_debug!("Team {} favorite set to {}", model.abbreviation, is_favorited);
        Ok(model_to_entity(model))
    }

    async fn seed_teams(&self, records: &[TeamRecord]) -> AppResult<usize> {
        if records.is_empty() {
            return Ok(0);
        }

        let db = Arc::clone(&self.db);
        let rows: Vec<_> = records
            .iter()
            .enumerate()
            .map(|(position, record)| entity_to_new_model(record, position as i32))
            .collect();

        let inserted = task::spawn_blocking(move || -> AppResult<usize> {
            let mut conn = db.get_connection()?;
            let count = diesel::insert_or_ignore_into(teams::table)
                .values(&rows)
                .execute(&mut conn)?;
            Ok(count)
        })
        .await??;

        LogContext::db_operation("insert_or_ignore", "teams", None);
        log_info!("Seeded {} of {} teams", inserted, records.len());
        Ok(inserted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::team::domain::entities::Conference;

    fn repository() -> SqliteTeamRepository {
        let db = Database::in_memory().unwrap();
        db.run_migrations().unwrap();
        SqliteTeamRepository::new(Arc::new(db))
    }

    fn sample_teams() -> Vec<TeamRecord> {
        vec![
            TeamRecord::new(15, "Memphis Grizzlies", "MEM")
                .with_city("Memphis")
                .with_conference(Conference::West),
            TeamRecord::new(20, "New York Knicks", "NYK")
                .with_city("New York")
                .with_conference(Conference::East)
                .with_division("Atlantic"),
        ]
    }

    #[tokio::test]
    async fn test_seed_and_list_in_catalog_order() {
        let repo = repository();
        let mut teams = sample_teams();
        teams.reverse();

        assert_eq!(repo.seed_teams(&teams).await.unwrap(), 2);

        let stored = repo.get_all_teams().await.unwrap();
        let ids: Vec<i32> = stored.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![20, 15]);
        assert_eq!(stored[0].division.as_deref(), Some("Atlantic"));
    }

    #[tokio::test]
    async fn test_reseeding_keeps_favorites() {
        let repo = repository();
        repo.seed_teams(&sample_teams()).await.unwrap();
        repo.set_favorite(20, true).await.unwrap();

        assert_eq!(repo.seed_teams(&sample_teams()).await.unwrap(), 0);

        let knicks = repo.get_team_by_abbrev("NYK").await.unwrap().unwrap();
        assert!(knicks.is_favorited);
    }

    #[tokio::test]
    async fn test_lookup_by_abbrev_ignores_case() {
        let repo = repository();
        repo.seed_teams(&sample_teams()).await.unwrap();

        let team = repo.get_team_by_abbrev("mem").await.unwrap();
        assert_eq!(team.map(|t| t.name), Some("Memphis Grizzlies".to_string()));
        assert!(repo.get_team_by_abbrev("xyz").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_set_favorite_unknown_team() {
        let repo = repository();
        repo.seed_teams(&sample_teams()).await.unwrap();

        let result = repo.set_favorite(99, true).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_seed_empty_slice_is_noop() {
        let repo = repository();
        assert_eq!(repo.seed_teams(&[]).await.unwrap(), 0);
        assert!(repo.get_all_teams().await.unwrap().is_empty());
    }
}
