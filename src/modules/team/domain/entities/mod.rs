mod team;

pub use team::{Conference, TeamRecord};
