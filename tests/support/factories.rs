//! Team and search-result builders shared by the integration tests

use hoop_watcher_lib::{Conference, SearchResult, TeamCatalog, TeamRecord};

pub fn knicks() -> TeamRecord {
    TeamRecord::new(20, "New York Knicks", "NYK")
        .with_city("New York")
        .with_conference(Conference::East)
        .with_division("Atlantic")
}

pub fn grizzlies() -> TeamRecord {
    TeamRecord::new(15, "Memphis Grizzlies", "MEM")
        .with_city("Memphis")
        .with_conference(Conference::West)
        .with_division("Southwest")
}

/// The two-team catalog from the end-to-end scenario
pub fn two_team_catalog() -> TeamCatalog {
    TeamCatalog::new(vec![
        TeamRecord::new(1, "New York Knicks", "NYK"),
        TeamRecord::new(2, "Memphis Grizzlies", "MEM"),
    ])
    .expect("valid catalog")
}

pub fn result(video_id: &str, title: &str) -> SearchResult {
    SearchResult::new(video_id, title, "NBA")
}
