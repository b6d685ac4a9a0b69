//! Building blocks for the fuzzy team resolver: a normalization pipeline for
//! queries and tokens, pluggable similarity strategies, and their config.

pub mod config;
pub mod query_normalizer;
pub mod similarity_strategy;

pub use config::{FuzzyMatchConfig, FuzzyMatchConfigBuilder, TieBreak};
pub use query_normalizer::{
    LowercaseTransform, NormalizeWhitespaceTransform, QueryNormalizer, QueryTransformation,
    RemoveSpecialCharsTransform,
};
pub use similarity_strategy::{
    BestOfStrategy, DamerauLevenshteinStrategy, SimilarityStrategy, SubsequenceStrategy,
};
