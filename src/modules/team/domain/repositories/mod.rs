pub mod team_repository;

pub use team_repository::TeamRepository;
#[cfg(test)]
pub use team_repository::MockTeamRepository;
