mod match_tokens;
mod team_query;

pub use match_tokens::MatchTokens;
pub use team_query::{TeamQuery, MAX_TEAMS_PER_QUERY};
