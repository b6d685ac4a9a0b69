use serde::{Deserialize, Serialize};

/// Query parameters of `GET {base}/search`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YoutubeSearchParams<'a> {
    pub part: &'a str,
    #[serde(rename = "type")]
    pub kind: &'a str,
    pub q: &'a str,
    pub max_results: u32,
    pub key: &'a str,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YoutubeSearchResponse {
    #[serde(default)]
    pub items: Vec<YoutubeSearchItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YoutubeSearchItem {
    pub id: YoutubeResourceId,
    pub snippet: Option<YoutubeSnippet>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YoutubeResourceId {
    pub kind: Option<String>,
    pub video_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YoutubeSnippet {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub channel_title: String,
    pub published_at: Option<String>,
}

/// Error body returned with non-2xx statuses
#[derive(Debug, Clone, Deserialize)]
pub struct YoutubeErrorResponse {
    pub error: YoutubeErrorBody,
}

#[derive(Debug, Clone, Deserialize)]
pub struct YoutubeErrorBody {
    pub code: u16,
    #[serde(default)]
    pub message: String,
}
