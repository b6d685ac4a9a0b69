/// Lowercased tokens a team can be referred to by.
///
/// Order is fixed: full name, abbreviation, city, mascot. The city is every
/// word of the name except the last and is empty for one-word names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchTokens {
    pub full_name: String,
    pub abbreviation: String,
    pub city: String,
    pub mascot: String,
}

impl MatchTokens {
    pub fn new(name: &str, abbreviation: &str) -> Self {
        let full_name = name.to_lowercase();
        let words: Vec<&str> = full_name.split_whitespace().collect();

        let (city, mascot) = match words.split_last() {
            Some((last, rest)) => (rest.join(" "), last.to_string()),
            None => (String::new(), String::new()),
        };

        Self {
            full_name: words.join(" "),
            abbreviation: abbreviation.trim().to_lowercase(),
            city,
            mascot,
        }
    }

    /// Tokens in their canonical order
    pub fn as_array(&self) -> [&str; 4] {
        [
            self.full_name.as_str(),
            self.abbreviation.as_str(),
            self.city.as_str(),
            self.mascot.as_str(),
        ]
    }

    /// Non-empty tokens in canonical order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.as_array().into_iter().filter(|token| !token.is_empty())
    }
}
