use serde::{Deserialize, Serialize};

/// One raw hit from the video search, in relevance order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub video_id: String,
    pub title: String,
    pub channel_title: String,
}

impl SearchResult {
    pub fn new(
        video_id: impl Into<String>,
        title: impl Into<String>,
        channel_title: impl Into<String>,
    ) -> Self {
        Self {
            video_id: video_id.into(),
            title: title.into(),
            channel_title: channel_title.into(),
        }
    }
}
