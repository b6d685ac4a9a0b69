pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod traits;

pub use application::HighlightService;
pub use domain::{DateFormat, GameDate, Highlight, HighlightQueryBuilder, SearchResult};
pub use infrastructure::YoutubeClient;
pub use traits::VideoSearchClient;
