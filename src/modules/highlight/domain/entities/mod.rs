mod highlight;
mod search_result;

pub use highlight::{Highlight, WATCH_URL_PREFIX};
pub use search_result::SearchResult;
