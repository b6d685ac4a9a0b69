pub mod catalog_loader;
pub mod models;
pub mod persistence;

pub use catalog_loader::CatalogLoader;
pub use persistence::SqliteTeamRepository;
