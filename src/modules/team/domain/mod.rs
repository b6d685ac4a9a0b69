pub mod catalog;
pub mod entities;
pub mod repositories;
pub mod services;
pub mod value_objects;

pub use catalog::TeamCatalog;
pub use entities::{Conference, TeamRecord};
pub use repositories::TeamRepository;
pub use services::QueryResolver;
pub use value_objects::{MatchTokens, TeamQuery};
