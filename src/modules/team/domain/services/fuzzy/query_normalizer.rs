/// Transformation that can be applied to a query or a match token
///
/// Each transformation is composable and testable in isolation.
pub trait QueryTransformation: Send + Sync {
    fn transform(&self, input: &str) -> String;
    fn name(&self) -> &'static str;
}

/// Converts input to lowercase
#[derive(Debug, Clone)]
pub struct LowercaseTransform;

impl QueryTransformation for LowercaseTransform {
    fn transform(&self, input: &str) -> String {
        input.to_lowercase()
    }

    fn name(&self) -> &'static str {
        "Lowercase"
    }
}

/// Removes special characters, keeping only alphanumeric and whitespace
#[derive(Debug, Clone)]
pub struct RemoveSpecialCharsTransform;

impl QueryTransformation for RemoveSpecialCharsTransform {
    fn transform(&self, input: &str) -> String {
        input
            .chars()
            .filter(|c| c.is_alphanumeric() || c.is_whitespace())
            .collect()
    }

    fn name(&self) -> &'static str {
        "RemoveSpecialChars"
    }
}

/// Normalizes whitespace (collapses multiple spaces, trims)
#[derive(Debug, Clone)]
pub struct NormalizeWhitespaceTransform;

impl QueryTransformation for NormalizeWhitespaceTransform {
    fn transform(&self, input: &str) -> String {
        input.split_whitespace().collect::<Vec<&str>>().join(" ")
    }

    fn name(&self) -> &'static str {
        "NormalizeWhitespace"
    }
}

/// Applies a pipeline of transformations, in insertion order.
pub struct QueryNormalizer {
    transformations: Vec<Box<dyn QueryTransformation>>,
}

impl QueryNormalizer {
    /// Create a new empty normalizer
    pub fn new() -> Self {
        Self {
            transformations: Vec::new(),
        }
    }

    /// Fold case, drop punctuation, collapse whitespace.
    /// "  N.Y.   Knicks!" becomes "ny knicks".
    pub fn default_pipeline() -> Self {
        Self::new()
            .with_lowercase()
            .with_remove_special_chars()
            .with_normalize_whitespace()
    }

    pub fn with_lowercase(mut self) -> Self {
        self.transformations.push(Box::new(LowercaseTransform));
        self
    }

    pub fn with_remove_special_chars(mut self) -> Self {
        self.transformations
            .push(Box::new(RemoveSpecialCharsTransform));
        self
    }

    pub fn with_normalize_whitespace(mut self) -> Self {
        self.transformations
            .push(Box::new(NormalizeWhitespaceTransform));
        self
    }

    pub fn normalize(&self, input: &str) -> String {
        let mut result = input.to_string();

        for transformation in &self.transformations {
            result = transformation.transform(&result);
            log::trace!("After {}: '{}'", transformation.name(), result);
        }

        result
    }

    pub fn transformation_count(&self) -> usize {
        self.transformations.len()
    }
}

impl Default for QueryNormalizer {
    fn default() -> Self {
        Self::default_pipeline()
    }
}
