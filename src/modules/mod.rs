pub mod highlight;
pub mod team;
