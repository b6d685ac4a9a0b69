use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::shared::errors::{AppError, AppResult};

/// Calendar date of the game a highlight search is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GameDate(NaiveDate);

impl GameDate {
    /// Parse user input. Blank input means `today`; `YYYY-MM-DD` is a day and
    /// `YYYY-MM` is the first day of that month.
    pub fn parse(input: &str, today: NaiveDate) -> AppResult<Self> {
        let input = input.trim();
        if input.is_empty() {
            return Ok(Self(today));
        }

        if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
            return Ok(Self(date));
        }

        NaiveDate::parse_from_str(&format!("{}-01", input), "%Y-%m-%d")
            .map(Self)
            .map_err(|_| AppError::InvalidInput(format!("Invalid date '{}'", input)))
    }

    pub fn today() -> Self {
        Self(chrono::Local::now().date_naive())
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for GameDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl fmt::Display for GameDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    #[test]
    fn test_blank_is_today() {
        assert_eq!(GameDate::parse("", today()).unwrap().date(), today());
        assert_eq!(GameDate::parse("  ", today()).unwrap().date(), today());
    }

    #[test]
    fn test_full_date() {
        let date = GameDate::parse("2023-01-01", today()).unwrap();
        assert_eq!(date.date(), NaiveDate::from_ymd_opt(2023, 1, 1).unwrap());
        assert_eq!(date.to_string(), "2023-01-01");
    }

    #[test]
    fn test_year_month_is_first_of_month() {
        let date = GameDate::parse("2023-02", today()).unwrap();
        assert_eq!(date.date(), NaiveDate::from_ymd_opt(2023, 2, 1).unwrap());
    }

    #[test]
    fn test_rejects_garbage() {
        for input in ["yesterday", "2023-13-01", "2023-02-30", "01/02/2023"] {
            let result = GameDate::parse(input, today());
            assert!(matches!(result, Err(AppError::InvalidInput(_))), "{}", input);
        }
    }
}
