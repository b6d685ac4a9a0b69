pub mod game_date;

pub use game_date::GameDate;
