use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::modules::team::domain::value_objects::MatchTokens;
use crate::shared::errors::AppError;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Conference {
    #[serde(alias = "east", alias = "Eastern")]
    East,
    #[serde(alias = "west", alias = "Western")]
    West,
}

impl Conference {
    pub fn as_str(&self) -> &'static str {
        match self {
            Conference::East => "East",
            Conference::West => "West",
        }
    }
}

impl fmt::Display for Conference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Conference {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "east" | "eastern" => Ok(Conference::East),
            "west" | "western" => Ok(Conference::West),
            other => Err(AppError::InvalidInput(format!(
                "Unknown conference '{}'",
                other
            ))),
        }
    }
}

/// One entry of the team catalog.
///
/// Everything except `is_favorited` is fixed once the catalog is loaded; the
/// favorite flag is owned by the storage layer and only read by the resolver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamRecord {
    pub id: i32,
    /// Full display name, e.g. "New York Knicks"
    pub name: String,
    /// Three-letter code, e.g. "NYK"
    pub abbreviation: String,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub conference: Option<Conference>,
    #[serde(default)]
    pub division: Option<String>,
    #[serde(default)]
    pub is_favorited: bool,
}

impl TeamRecord {
    pub fn new(id: i32, name: impl Into<String>, abbreviation: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            abbreviation: abbreviation.into(),
            city: None,
            conference: None,
            division: None,
            is_favorited: false,
        }
    }

    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    pub fn with_conference(mut self, conference: Conference) -> Self {
        self.conference = Some(conference);
        self
    }

    pub fn with_division(mut self, division: impl Into<String>) -> Self {
        self.division = Some(division.into());
        self
    }

    pub fn with_favorite(mut self, is_favorited: bool) -> Self {
        self.is_favorited = is_favorited;
        self
    }

    /// Derived lowercase tokens used by both resolvers. Recomputed on every
    /// call.
    pub fn match_tokens(&self) -> MatchTokens {
        MatchTokens::new(&self.name, &self.abbreviation)
    }

    /// Lowercased last word of the name ("knicks")
    pub fn mascot(&self) -> String {
        self.match_tokens().mascot
    }
}

impl fmt::Display for TeamRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.abbreviation)
    }
}
