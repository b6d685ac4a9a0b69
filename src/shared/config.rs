use std::env;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use crate::modules::highlight::domain::services::DateFormat;
use crate::shared::errors::{AppError, AppResult};

pub const TEAM_FILE_NAME: &str = "nba_teams.json";

const DEFAULT_YOUTUBE_API_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";
const DEFAULT_DATABASE_URL: &str = "hoop-watcher.db";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_MAX_RESULTS: u32 = 5;

/// Runtime configuration, read once at startup and passed down explicitly.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub youtube_api_key: Option<String>,
    pub youtube_api_base_url: String,
    pub teams_file: PathBuf,
    /// `teams_file` came from `HOOP_WATCHER_TEAMS_FILE` rather than the
    /// default lookup. An explicit file must load; it never falls back.
    pub teams_file_configured: bool,
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub max_results: u32,
    pub date_format: DateFormat,
    /// When no date is supplied, search today's date instead of leaving the
    /// date segment out of the query.
    pub default_to_today: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            youtube_api_key: None,
            youtube_api_base_url: DEFAULT_YOUTUBE_API_BASE_URL.to_string(),
            teams_file: PathBuf::from("data").join(TEAM_FILE_NAME),
            teams_file_configured: false,
            database_url: DEFAULT_DATABASE_URL.to_string(),
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            max_results: DEFAULT_MAX_RESULTS,
            date_format: DateFormat::Human,
            default_to_today: true,
        }
    }
}

impl AppConfig {
    /// Load `.env` files (if any) and build the config from the environment.
    pub fn from_env() -> AppResult<Self> {
        Self::load_dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn load_dotenv() {
        // Both files are optional; the working directory one wins.
        dotenvy::dotenv().ok();
        if let Some(home) = env::var_os("HOME") {
            dotenvy::from_path(Path::new(&home).join(".env")).ok();
        }
    }

    /// Build a config from an arbitrary key lookup. Split out from `from_env`
    /// so tests never touch process environment.
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let (teams_file, teams_file_configured) = match get("HOOP_WATCHER_TEAMS_FILE") {
            Some(path) => (PathBuf::from(path), true),
            None => (Self::default_teams_file(get("HOME").as_deref()), false),
        };

        let bind_addr = get("HOOP_WATCHER_BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse::<SocketAddr>()
            .map_err(|e| AppError::ConfigError(format!("Invalid HOOP_WATCHER_BIND_ADDR: {}", e)))?;

        let max_results = match get("HOOP_WATCHER_MAX_RESULTS") {
            Some(raw) => Self::parse_max_results(&raw)?,
            None => DEFAULT_MAX_RESULTS,
        };

        let date_format = match get("HOOP_WATCHER_DATE_FORMAT") {
            Some(raw) => raw.parse::<DateFormat>()?,
            None => DateFormat::Human,
        };

        let default_to_today = match get("HOOP_WATCHER_DEFAULT_TO_TODAY") {
            Some(raw) => Self::parse_bool("HOOP_WATCHER_DEFAULT_TO_TODAY", &raw)?,
            None => true,
        };

        Ok(Self {
            youtube_api_key: get("YOUTUBE_API_KEY"),
            youtube_api_base_url: get("YOUTUBE_API_BASE_URL")
                .unwrap_or_else(|| DEFAULT_YOUTUBE_API_BASE_URL.to_string()),
            teams_file,
            teams_file_configured,
            database_url: get("HOOP_WATCHER_DATABASE_URL")
                .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            bind_addr,
            max_results,
            date_format,
            default_to_today,
        })
    }

    /// `$HOME/bin/nba_teams.json` when it exists, else the copy shipped in `data/`.
    fn default_teams_file(home: Option<&str>) -> PathBuf {
        if let Some(home) = home {
            let candidate = Path::new(home).join("bin").join(TEAM_FILE_NAME);
            if candidate.is_file() {
                return candidate;
            }
        }
        PathBuf::from("data").join(TEAM_FILE_NAME)
    }

    fn parse_max_results(raw: &str) -> AppResult<u32> {
        let value = raw.parse::<u32>().map_err(|e| {
            AppError::ConfigError(format!("Invalid HOOP_WATCHER_MAX_RESULTS '{}': {}", raw, e))
        })?;
        // YouTube accepts 0..=50; zero results would make every search pointless
        if !(1..=50).contains(&value) {
            return Err(AppError::ConfigError(format!(
                "HOOP_WATCHER_MAX_RESULTS must be between 1 and 50, got {}",
                value
            )));
        }
        Ok(value)
    }

    fn parse_bool(key: &str, raw: &str) -> AppResult<bool> {
        match raw.to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" => Ok(false),
            _ => Err(AppError::ConfigError(format!(
                "Invalid boolean for {}: '{}'",
                key, raw
            ))),
        }
    }

    /// The API key, or a `ConfigError` naming the variable to set.
    pub fn require_youtube_api_key(&self) -> AppResult<&str> {
        self.youtube_api_key.as_deref().ok_or_else(|| {
            AppError::ConfigError("YOUTUBE_API_KEY is not set".to_string())
        })
    }
}
