use crate::modules::team::domain::{
    entities::TeamRecord,
    services::fuzzy::{
        BestOfStrategy, FuzzyMatchConfig, QueryNormalizer, SimilarityStrategy, TieBreak,
    },
    value_objects::{MatchTokens, TeamQuery},
};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::logger::LogContext;

/// Maps free-text team queries onto catalog entries.
///
/// # Exact resolution
///
/// An ordered scan of the catalog in three tiers. Inside a tier the first
/// team (in catalog order) that matches wins; a later tier only runs when the
/// earlier ones found nothing.
///
/// 1. the query contains the full name, or equals the abbreviation
/// 2. the query contains the city or the mascot as whole words
/// 3. the query contains the city or the mascot anywhere
///
/// The tiers keep teams that share a city apart ("los angeles lakers" never
/// lands on the Clippers) and stop short mascots from shadowing longer ones
/// ("hornets" is not "nets").
///
/// # Fuzzy resolution
///
/// Every team is scored by how many of its [`MatchTokens`] approximately
/// match the normalized query. The highest score wins, ties settled by
/// [`TieBreak`]. A zero score everywhere resolves to `None`.
pub struct QueryResolver {
    config: FuzzyMatchConfig,
    normalizer: QueryNormalizer,
    similarity_strategy: Box<dyn SimilarityStrategy>,
}

impl QueryResolver {
    /// Create a resolver with the default fuzzy configuration
    pub fn new() -> Self {
        Self {
            config: FuzzyMatchConfig::default(),
            normalizer: QueryNormalizer::default_pipeline(),
            similarity_strategy: Box::new(BestOfStrategy::default_fuzzy()),
        }
    }

    pub fn with_config(config: FuzzyMatchConfig) -> AppResult<Self> {
        config.validate().map_err(AppError::ConfigError)?;

        Ok(Self {
            config,
            normalizer: QueryNormalizer::default_pipeline(),
            similarity_strategy: Box::new(BestOfStrategy::default_fuzzy()),
        })
    }

    pub fn resolve_exact<'a>(&self, query: &str, catalog: &'a [TeamRecord]) -> Option<&'a TeamRecord> {
        let normalized = query
            .to_lowercase()
            .split_whitespace()
            .collect::<Vec<&str>>()
            .join(" ");

        if normalized.is_empty() {
            LogContext::resolution(query, "exact", None);
            return None;
        }

        let query_words: Vec<&str> = normalized.split(' ').collect();

        let found = Self::first_match(catalog, |tokens| Self::matches_name_or_code(&normalized, tokens))
            .or_else(|| Self::first_match(catalog, |tokens| Self::matches_words(&query_words, tokens)))
            .or_else(|| Self::first_match(catalog, |tokens| Self::matches_substring(&normalized, tokens)));

        LogContext::resolution(query, "exact", found.map(|team| team.name.as_str()));
        found
    }

    pub fn resolve_fuzzy<'a>(&self, query: &str, catalog: &'a [TeamRecord]) -> Option<&'a TeamRecord> {
        let normalized = self.normalizer.normalize(query);
        if normalized.chars().count() < self.config.min_query_length {
            LogContext::resolution(query, "fuzzy", None);
            return None;
        }

        let mut best: Option<(&'a TeamRecord, usize)> = None;
        for team in catalog {
            let score = self.score_normalized(&normalized, team);
            if score == 0 {
                continue;
            }

            let takes_lead = match best {
                None => true,
                Some((_, best_score)) => match self.config.tie_break {
                    TieBreak::FirstWins => score > best_score,
                    TieBreak::LastWins => score >= best_score,
                },
            };
            if takes_lead {
                log::trace!("Fuzzy lead: {} with score {}", team.name, score);
                best = Some((team, score));
            }
        }

        let found = best.map(|(team, _)| team);
        LogContext::resolution(query, "fuzzy", found.map(|team| team.name.as_str()));
        found
    }

    /// Resolve each fragment of a multi-team query with the exact resolver.
    /// Fragments that match nothing are skipped; order is preserved.
    pub fn resolve_all(&self, query: &TeamQuery, catalog: &[TeamRecord]) -> Vec<TeamRecord> {
        query
            .fragments()
            .iter()
            .filter_map(|fragment| {
                let team = self.resolve_exact(fragment, catalog);
                if team.is_none() {
                    log::warn!("No team matches '{}'", fragment);
                }
                team.cloned()
            })
            .collect()
    }

    /// Number of the team's match tokens the query approximately matches
    pub fn score(&self, query: &str, team: &TeamRecord) -> usize {
        self.score_normalized(&self.normalizer.normalize(query), team)
    }

    fn score_normalized(&self, normalized_query: &str, team: &TeamRecord) -> usize {
        team.match_tokens()
            .iter()
            .filter(|token| {
                let token = self.normalizer.normalize(token);
                self.similarity_strategy.calculate(normalized_query, &token)
                    >= self.config.similarity_threshold
            })
            .count()
    }

    fn first_match<F>(catalog: &[TeamRecord], predicate: F) -> Option<&TeamRecord>
    where
        F: Fn(&MatchTokens) -> bool,
    {
        catalog.iter().find(|team| predicate(&team.match_tokens()))
    }

    fn matches_name_or_code(query: &str, tokens: &MatchTokens) -> bool {
        (!tokens.full_name.is_empty() && query.contains(tokens.full_name.as_str()))
            || query == tokens.abbreviation
    }

    fn matches_words(query_words: &[&str], tokens: &MatchTokens) -> bool {
        Self::contains_word_sequence(query_words, &tokens.city)
            || Self::contains_word_sequence(query_words, &tokens.mascot)
    }

    fn matches_substring(query: &str, tokens: &MatchTokens) -> bool {
        (!tokens.city.is_empty() && query.contains(tokens.city.as_str()))
            || (!tokens.mascot.is_empty() && query.contains(tokens.mascot.as_str()))
    }

    fn contains_word_sequence(haystack: &[&str], needle: &str) -> bool {
        let needle: Vec<&str> = needle.split_whitespace().collect();
        !needle.is_empty()
            && haystack
                .windows(needle.len())
                .any(|window| window == needle.as_slice())
    }
}

impl Default for QueryResolver {
    fn default() -> Self {
        Self::new()
    }
}
