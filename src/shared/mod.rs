// Shared kernel: cross-cutting concerns used by every module

pub mod config;
pub mod database;
pub mod errors;
pub mod utils;

pub use config::AppConfig;
pub use database::Database;
