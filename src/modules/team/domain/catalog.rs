use std::collections::HashSet;
use std::ops::Deref;

use crate::modules::team::domain::entities::TeamRecord;
use crate::shared::errors::{AppError, AppResult};

/// The fixed, ordered set of teams available for resolution.
///
/// Iteration order is the order the source listed the teams in and is part of
/// the contract: the exact resolver is first-match-wins over this order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamCatalog {
    teams: Vec<TeamRecord>,
}

impl TeamCatalog {
    pub fn new(teams: Vec<TeamRecord>) -> AppResult<Self> {
        if teams.is_empty() {
            return Err(AppError::CatalogUnavailable(
                "Team catalog is empty".to_string(),
            ));
        }

        let mut ids = HashSet::new();
        let mut keys = HashSet::new();
        for team in &teams {
            if team.name.trim().is_empty() || team.abbreviation.trim().is_empty() {
                return Err(AppError::CatalogUnavailable(format!(
                    "Team {} has an empty name or abbreviation",
                    team.id
                )));
            }
            if !ids.insert(team.id) {
                return Err(AppError::CatalogUnavailable(format!(
                    "Duplicate team id {}",
                    team.id
                )));
            }
            if !keys.insert((team.name.to_lowercase(), team.abbreviation.to_lowercase())) {
                return Err(AppError::CatalogUnavailable(format!(
                    "Duplicate team entry {}",
                    team
                )));
            }
        }

        Ok(Self { teams })
    }

    pub fn teams(&self) -> &[TeamRecord] {
        &self.teams
    }

    pub fn get_by_id(&self, id: i32) -> Option<&TeamRecord> {
        self.teams.iter().find(|team| team.id == id)
    }

    /// Case-insensitive lookup by three-letter code
    pub fn get_by_abbreviation(&self, code: &str) -> Option<&TeamRecord> {
        let code = code.trim();
        self.teams
            .iter()
            .find(|team| team.abbreviation.eq_ignore_ascii_case(code))
    }
}

impl Deref for TeamCatalog {
    type Target = [TeamRecord];

    fn deref(&self) -> &Self::Target {
        &self.teams
    }
}
