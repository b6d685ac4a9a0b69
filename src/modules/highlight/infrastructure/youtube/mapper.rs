use crate::modules::highlight::domain::entities::SearchResult;

use super::dto::YoutubeSearchItem;

pub struct YoutubeMapper;

impl YoutubeMapper {
    /// `None` for items that are not videos (channels, playlists)
    pub fn to_domain(item: YoutubeSearchItem) -> Option<SearchResult> {
        let video_id = item.id.video_id.filter(|id| !id.is_empty())?;
        let snippet = item.snippet?;

        Some(SearchResult {
            video_id,
            title: Self::unescape_html(&snippet.title),
            channel_title: Self::unescape_html(&snippet.channel_title),
        })
    }

    /// The API HTML-escapes snippet text ("Knicks &amp; Nets")
    fn unescape_html(text: &str) -> String {
        text.replace("&quot;", "\"")
            .replace("&#39;", "'")
            .replace("&lt;", "<")
            .replace("&gt;", ">")
            .replace("&amp;", "&")
    }
}
