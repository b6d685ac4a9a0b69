pub mod highlight_filter;
pub mod query_builder;

pub use highlight_filter::{filter_highlights, is_relevant, retain_relevant};
pub use query_builder::{DateFormat, HighlightQueryBuilder, QUERY_SUFFIX};
