/// How the fuzzy resolver settles two teams with the same score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TieBreak {
    /// Earliest team in catalog order keeps the lead
    #[default]
    FirstWins,
    /// A later team with an equal score takes the lead
    LastWins,
}

/// Configuration for the fuzzy team resolver
#[derive(Debug, Clone)]
pub struct FuzzyMatchConfig {
    /// A token counts as matched when its similarity reaches this value
    pub similarity_threshold: f64,

    /// Queries shorter than this (after normalization) resolve to nothing
    pub min_query_length: usize,

    pub tie_break: TieBreak,
}

impl FuzzyMatchConfig {
    pub fn new() -> Self {
        Self {
            similarity_threshold: 0.8,
            min_query_length: 1,
            tie_break: TieBreak::FirstWins,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        // 0.0 would count every token of every team as a match
        if !(self.similarity_threshold > 0.0 && self.similarity_threshold <= 1.0) {
            return Err(format!(
                "similarity_threshold must be in (0.0, 1.0], got {}",
                self.similarity_threshold
            ));
        }

        if self.min_query_length == 0 {
            return Err("min_query_length must be > 0".to_string());
        }

        Ok(())
    }
}

impl Default for FuzzyMatchConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for FuzzyMatchConfig to make test setup easier
#[derive(Default)]
pub struct FuzzyMatchConfigBuilder {
    config: FuzzyMatchConfig,
}

impl FuzzyMatchConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: FuzzyMatchConfig::new(),
        }
    }

    pub fn similarity_threshold(mut self, threshold: f64) -> Self {
        self.config.similarity_threshold = threshold;
        self
    }

    pub fn min_query_length(mut self, length: usize) -> Self {
        self.config.min_query_length = length;
        self
    }

    pub fn tie_break(mut self, tie_break: TieBreak) -> Self {
        self.config.tie_break = tie_break;
        self
    }

    pub fn build(self) -> Result<FuzzyMatchConfig, String> {
        self.config.validate()?;
        Ok(self.config)
    }
}
