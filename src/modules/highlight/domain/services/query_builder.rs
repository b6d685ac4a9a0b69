use chrono::NaiveDate;
use std::fmt;
use std::str::FromStr;

use crate::modules::team::domain::value_objects::MAX_TEAMS_PER_QUERY;
use crate::shared::errors::{AppError, AppResult};

pub const QUERY_SUFFIX: &str = "NBA Full Game Highlights";

/// How the date segment of a search phrase is written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateFormat {
    /// `January 1, 2023`
    #[default]
    Human,
    /// `2023-01-01`
    Iso,
}

impl DateFormat {
    pub fn pattern(&self) -> &'static str {
        match self {
            DateFormat::Human => "%B %-d, %Y",
            DateFormat::Iso => "%Y-%m-%d",
        }
    }

    pub fn format(&self, date: NaiveDate) -> String {
        date.format(self.pattern()).to_string()
    }
}

impl fmt::Display for DateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateFormat::Human => write!(f, "human"),
            DateFormat::Iso => write!(f, "iso"),
        }
    }
}

impl FromStr for DateFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "human" | "long" => Ok(DateFormat::Human),
            "iso" => Ok(DateFormat::Iso),
            other => Err(AppError::ConfigError(format!(
                "Unknown date format '{}' (expected 'human' or 'iso')",
                other
            ))),
        }
    }
}

/// Builds the literal search phrase for one game.
///
/// `'New York Knicks vs Memphis Grizzlies NBA Full Game Highlights January 1, 2023'`
///
/// Pure: the same names, date and format always give the same string.
#[derive(Debug, Clone, Copy, Default)]
pub struct HighlightQueryBuilder {
    date_format: DateFormat,
}

impl HighlightQueryBuilder {
    pub fn new(date_format: DateFormat) -> Self {
        Self { date_format }
    }

    pub fn build<S: AsRef<str>>(&self, team_names: &[S], date: Option<NaiveDate>) -> AppResult<String> {
        if team_names.is_empty() || team_names.len() > MAX_TEAMS_PER_QUERY {
            return Err(AppError::InvalidInput(format!(
                "A highlight query needs 1 to {} teams, got {}",
                MAX_TEAMS_PER_QUERY,
                team_names.len()
            )));
        }

        let names: Vec<&str> = team_names.iter().map(|name| name.as_ref().trim()).collect();
        let mut phrase = format!("{} {}", names.join(" vs "), QUERY_SUFFIX);

        if let Some(date) = date {
            phrase.push(' ');
            phrase.push_str(&self.date_format.format(date));
        }

        Ok(format!("'{}'", phrase))
    }
}
