pub mod cli;
pub mod modules;
mod schema;
pub mod server;
pub mod shared;

pub use modules::highlight::{
    DateFormat, GameDate, Highlight, HighlightQueryBuilder, HighlightService, SearchResult,
    VideoSearchClient, YoutubeClient,
};
pub use modules::team::{
    CatalogLoader, Conference, QueryResolver, TeamCatalog, TeamQuery, TeamRecord, TeamRepository,
    TeamService,
};
pub use shared::errors::{AppError, AppResult};
