pub mod entities;
pub mod services;
pub mod value_objects;

pub use entities::{Highlight, SearchResult};
pub use services::{DateFormat, HighlightQueryBuilder};
pub use value_objects::GameDate;
