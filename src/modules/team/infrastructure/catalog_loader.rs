use std::fs;
use std::io;
use std::path::Path;

use crate::modules::team::domain::{entities::TeamRecord, TeamCatalog};
use crate::shared::config::AppConfig;
use crate::shared::errors::{AppError, AppResult};
use crate::{log_debug, log_info, log_warn};

/// Catalog shipped inside the binary, used when no team file is configured
const BUILTIN_CATALOG: &str = include_str!("../../../../data/nba_teams.json");

/// Reads the team catalog from its JSON source.
///
/// The file is a JSON array of team objects; see `data/nba_teams.json`. Any
/// problem with the source (missing file, bad JSON, failed validation) is
/// reported as `CatalogUnavailable`.
pub struct CatalogLoader;

impl CatalogLoader {
    pub fn load(path: &Path) -> AppResult<TeamCatalog> {
        log_debug!("Loading team catalog from {}", path.display());

        let raw = fs::read_to_string(path).map_err(|e| Self::read_error(path, &e))?;
        let catalog = Self::from_json_str(&raw)?;
        log_info!(
            "Loaded {} teams from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    pub fn from_json_str(raw: &str) -> AppResult<TeamCatalog> {
        let teams: Vec<TeamRecord> = serde_json::from_str(raw).map_err(|e| {
            AppError::CatalogUnavailable(format!("Malformed team catalog: {}", e))
        })?;
        TeamCatalog::new(teams)
    }

    pub fn builtin() -> AppResult<TeamCatalog> {
        Self::from_json_str(BUILTIN_CATALOG)
    }

    /// Load `path`, or the built-in catalog when nothing exists at `path`.
    /// A file that exists but cannot be read or parsed is an error.
    pub fn load_or_builtin(path: &Path) -> AppResult<TeamCatalog> {
        match fs::read_to_string(path) {
            Ok(raw) => {
                let catalog = Self::from_json_str(&raw)?;
                log_info!("Loaded {} teams from {}", catalog.len(), path.display());
                Ok(catalog)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log_warn!("No team file at {}; using the built-in catalog", path.display());
                Self::builtin()
            }
            Err(e) => Err(Self::read_error(path, &e)),
        }
    }

    /// The catalog the configuration points at. An explicitly configured
    /// file must load; only the default location may fall back.
    pub fn from_config(config: &AppConfig) -> AppResult<TeamCatalog> {
        if config.teams_file_configured {
            Self::load(&config.teams_file)
        } else {
            Self::load_or_builtin(&config.teams_file)
        }
    }

    fn read_error(path: &Path, err: &io::Error) -> AppError {
        AppError::CatalogUnavailable(format!(
            "Failed to read team file {}: {}",
            path.display(),
            err
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_builtin_catalog_has_all_teams() {
        let catalog = CatalogLoader::builtin().unwrap();
        assert_eq!(catalog.len(), 30);
        assert_eq!(
            catalog.get_by_abbreviation("nyk").map(|t| t.name.as_str()),
            Some("New York Knicks")
        );
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id": 1, "name": "Atlanta Hawks", "abbreviation": "ATL"}}]"#
        )
        .unwrap();

        let catalog = CatalogLoader::load(file.path()).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog[0].city, None);
    }

    #[test]
    fn test_missing_file_is_catalog_unavailable() {
        let result = CatalogLoader::load(Path::new("/nonexistent/nba_teams.json"));
        assert!(matches!(result, Err(AppError::CatalogUnavailable(_))));
    }

    #[test]
    fn test_malformed_json_is_catalog_unavailable() {
        let result = CatalogLoader::from_json_str("{not json");
        assert!(matches!(result, Err(AppError::CatalogUnavailable(_))));
    }

    #[test]
    fn test_load_or_builtin_falls_back() {
        let catalog = CatalogLoader::load_or_builtin(Path::new("/nonexistent/nba_teams.json")).unwrap();
        assert_eq!(catalog.len(), 30);
    }

    #[test]
    fn test_load_or_builtin_rejects_malformed_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();

        let result = CatalogLoader::load_or_builtin(file.path());
        assert!(matches!(result, Err(AppError::CatalogUnavailable(_))));
    }

    #[test]
    fn test_configured_file_never_falls_back() {
        let config = AppConfig {
            teams_file: "/nonexistent/nba_teams.json".into(),
            teams_file_configured: true,
            ..AppConfig::default()
        };
        let result = CatalogLoader::from_config(&config);
        assert!(matches!(result, Err(AppError::CatalogUnavailable(_))));
    }

    #[test]
    fn test_default_location_falls_back_when_missing() {
        let config = AppConfig {
            teams_file: "/nonexistent/nba_teams.json".into(),
            ..AppConfig::default()
        };
        assert_eq!(CatalogLoader::from_config(&config).unwrap().len(), 30);
    }

    #[test]
    fn test_empty_array_is_rejected() {
        let result = CatalogLoader::from_json_str("[]");
        assert!(matches!(result, Err(AppError::CatalogUnavailable(_))));
    }
}
