use serde::{Deserialize, Serialize};
use std::fmt;

use super::SearchResult;

pub const WATCH_URL_PREFIX: &str = "https://www.youtube.com/watch?v=";

/// A search result that passed the relevance filter, ready to show or open
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Highlight {
    pub title: String,
    pub url: String,
    pub channel_title: String,
}

impl Highlight {
    pub fn watch_url(video_id: &str) -> String {
        format!("{}{}", WATCH_URL_PREFIX, urlencoding::encode(video_id))
    }

    /// Display line for a 1-based position: `[1] https://... : Title`
    pub fn label(&self, position: usize) -> String {
        format!("[{}] {} : {}", position, self.url, self.title)
    }
}

impl From<&SearchResult> for Highlight {
    fn from(result: &SearchResult) -> Self {
        Self {
            title: result.title.clone(),
            url: Self::watch_url(&result.video_id),
            channel_title: result.channel_title.clone(),
        }
    }
}

impl fmt::Display for Highlight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} : {}", self.url, self.title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_from_video_id() {
        let result = SearchResult::new("dQw4w9WgXcQ", "Knicks at Heat", "NBA");
        let highlight = Highlight::from(&result);
        assert_eq!(highlight.url, "https://www.youtube.com/watch?v=dQw4w9WgXcQ");
        assert_eq!(highlight.title, "Knicks at Heat");
    }

    #[test]
    fn test_url_escapes_odd_ids() {
        assert_eq!(
            Highlight::watch_url("a b&c"),
            "https://www.youtube.com/watch?v=a%20b%26c"
        );
    }

    #[test]
    fn test_label_is_one_based_line() {
        let highlight = Highlight::from(&SearchResult::new("abc", "Title", "NBA"));
        assert_eq!(
            highlight.label(1),
            "[1] https://www.youtube.com/watch?v=abc : Title"
        );
    }
}
