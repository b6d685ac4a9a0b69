use strsim::normalized_damerau_levenshtein;

/// Strategy for calculating similarity between a query and a match token
///
/// Both inputs are expected to be normalized already. Implementations return
/// a value between 0.0 (completely different) and 1.0 (identical).
pub trait SimilarityStrategy: Send + Sync {
    fn calculate(&self, query: &str, token: &str) -> f64;

    /// Get the name of this strategy for logging/debugging
    fn name(&self) -> &'static str;
}

/// Fuzzy-substring match: every character of the query appears in the token,
/// in order, with anything in between.
///
/// Binary score. "kncks" hits "knicks", "nw yrk" hits "new york knicks".
#[derive(Debug, Clone)]
pub struct SubsequenceStrategy;

impl SubsequenceStrategy {
    pub fn is_subsequence(query: &str, token: &str) -> bool {
        let mut token_chars = token.chars();
        query
            .chars()
            .all(|q| token_chars.by_ref().any(|t| t == q))
    }
}

impl SimilarityStrategy for SubsequenceStrategy {
    fn calculate(&self, query: &str, token: &str) -> f64 {
        if !query.is_empty() && Self::is_subsequence(query, token) {
            1.0
        } else {
            0.0
        }
    }

    fn name(&self) -> &'static str {
        "Subsequence"
    }
}

/// Normalized Damerau-Levenshtein similarity
///
/// Counts an adjacent transposition as one edit, so "knikcs" stays close to
/// "knicks".
#[derive(Debug, Clone)]
pub struct DamerauLevenshteinStrategy;

impl SimilarityStrategy for DamerauLevenshteinStrategy {
    fn calculate(&self, query: &str, token: &str) -> f64 {
        normalized_damerau_levenshtein(query, token)
    }

    fn name(&self) -> &'static str {
        "DamerauLevenshtein"
    }
}

/// Takes the best score of its member strategies
pub struct BestOfStrategy {
    strategies: Vec<Box<dyn SimilarityStrategy>>,
}

impl BestOfStrategy {
    pub fn new(strategies: Vec<Box<dyn SimilarityStrategy>>) -> Self {
        Self { strategies }
    }

    /// Subsequence for missing characters, Damerau-Levenshtein for swaps
    pub fn default_fuzzy() -> Self {
        Self::new(vec![
            Box::new(SubsequenceStrategy),
            Box::new(DamerauLevenshteinStrategy),
        ])
    }
}

impl SimilarityStrategy for BestOfStrategy {
    fn calculate(&self, query: &str, token: &str) -> f64 {
        self.strategies
            .iter()
            .map(|strategy| strategy.calculate(query, token))
            .fold(0.0, f64::max)
    }

    fn name(&self) -> &'static str {
        "BestOf"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subsequence_missing_characters() {
        let strategy = SubsequenceStrategy;
        assert_eq!(strategy.calculate("kncks", "knicks"), 1.0);
        assert_eq!(strategy.calculate("nw yrk", "new york"), 1.0);
        assert_eq!(strategy.calculate("nw yrk", "new york knicks"), 1.0);
    }

    #[test]
    fn test_subsequence_requires_order() {
        let strategy = SubsequenceStrategy;
        assert_eq!(strategy.calculate("skcink", "knicks"), 0.0);
        assert_eq!(strategy.calculate("knicksx", "knicks"), 0.0);
    }

    #[test]
    fn test_subsequence_empty_query_never_matches() {
        assert_eq!(SubsequenceStrategy.calculate("", "knicks"), 0.0);
    }

    #[test]
    fn test_damerau_transposition() {
        let strategy = DamerauLevenshteinStrategy;
        let similarity = strategy.calculate("knikcs", "knicks");
        assert!(similarity > 0.8); // One swap in six characters
        assert_eq!(strategy.calculate("heat", "heat"), 1.0);
    }

    #[test]
    fn test_best_of_takes_maximum() {
        let strategy = BestOfStrategy::default_fuzzy();
        assert_eq!(strategy.calculate("kncks", "new york knicks"), 1.0);

        let swapped = strategy.calculate("knikcs", "knicks");
        let expected = DamerauLevenshteinStrategy.calculate("knikcs", "knicks");
        assert!((swapped - expected).abs() < f64::EPSILON);
    }

    #[test]
    fn test_best_of_with_no_strategies_scores_zero() {
        let strategy = BestOfStrategy::new(vec![]);
        assert_eq!(strategy.calculate("knicks", "knicks"), 0.0);
    }
}
