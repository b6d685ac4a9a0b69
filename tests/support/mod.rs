#![allow(dead_code)]

pub mod factories;
pub mod stub_search;
pub mod test_db;
