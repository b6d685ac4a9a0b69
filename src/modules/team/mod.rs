pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::TeamService;
pub use domain::{Conference, QueryResolver, TeamCatalog, TeamQuery, TeamRecord, TeamRepository};
pub use infrastructure::{CatalogLoader, SqliteTeamRepository};
