use crate::shared::errors::{AppError, AppResult};

/// Two teams playing each other is the most a highlight search can cover.
pub const MAX_TEAMS_PER_QUERY: usize = 2;

/// Raw, comma-separated team input split into fragments.
///
/// Validation happens here, before any resolution: blank input gives an empty
/// query, and more than [`MAX_TEAMS_PER_QUERY`] fragments is an input error.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TeamQuery {
    fragments: Vec<String>,
}

impl TeamQuery {
    pub fn parse(raw: &str) -> AppResult<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(Self::default());
        }

        // Empty fragments still count toward the limit: "knicks,," is three
        let raw: Vec<&str> = trimmed.split(',').map(str::trim).collect();
        if raw.len() > MAX_TEAMS_PER_QUERY {
            return Err(AppError::InvalidInput(format!(
                "Invalid number of teams given: {} (max {})",
                raw.len(),
                MAX_TEAMS_PER_QUERY
            )));
        }

        let fragments: Vec<String> = raw
            .into_iter()
            .filter(|fragment| !fragment.is_empty())
            .map(str::to_string)
            .collect();

        Ok(Self { fragments })
    }

    pub fn fragments(&self) -> &[String] {
        &self.fragments
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fragments.len()
    }
}
