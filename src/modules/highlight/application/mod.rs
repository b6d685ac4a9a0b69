pub mod service;

pub use service::HighlightService;
