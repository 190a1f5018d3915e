use serde::{Deserialize, Serialize};

/// Recurring automated update posts carry this exact title and are shown
/// with a compact numeric date instead of the long form.
pub const PATCH_NOTES_TITLE: &str = "Team Fortress 2 Update Released";

/// One article entry returned by the Steam news API for a given game.
///
/// Items are immutable once fetched; the feed payload carries more fields
/// than these, the rest are ignored on deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsItem {
    /// Globally unique article id.
    pub gid: String,
    pub title: String,
    /// Link to the full article on its source site.
    pub url: String,
    /// Frequently blank in the feed; rendered as "N/A" in that case.
    #[serde(default)]
    pub author: String,
    /// Free text, possibly embedding a `{STEAM_CLAN_IMAGE}` placeholder.
    #[serde(default)]
    pub contents: String,
    /// The game this article belongs to.
    pub appid: u32,
    /// Publication time as Unix seconds.
    pub date: i64,
}

impl NewsItem {
    /// Whether this item is one of the recurring automated update posts.
    pub fn is_patch_notes(&self) -> bool {
        self.title == PATCH_NOTES_TITLE
    }

    /// Author for display, substituting "N/A" when the feed left it blank.
    pub fn author_or_na(&self) -> &str {
        if self.author.trim().is_empty() {
            "N/A"
        } else {
            &self.author
        }
    }
}

/// Inner object of the Steam news response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppNews {
    pub appid: u32,
    pub newsitems: Vec<NewsItem>,
}

/// Wire envelope of `GetNewsForApp`: `{ "appnews": { "newsitems": [...] } }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsResponse {
    pub appnews: AppNews,
}

#[cfg(test)]
mod tests {
    use super::*;

    const FEED_SAMPLE: &str = r#"{
        "appnews": {
            "appid": 440,
            "newsitems": [
                {
                    "gid": "5124289255600679366",
                    "title": "Team Fortress 2 Update Released",
                    "url": "https://store.steampowered.com/news/12345",
                    "is_external_url": true,
                    "author": "",
                    "contents": "An update to Team Fortress 2 has been released.",
                    "feedlabel": "Product Update",
                    "date": 1700000000,
                    "feedname": "steam_updates",
                    "feed_type": 1,
                    "appid": 440
                },
                {
                    "gid": "5124289255600679367",
                    "title": "Scream Fortress XV has arrived!",
                    "url": "https://store.steampowered.com/news/12346",
                    "author": "erics",
                    "contents": "{STEAM_CLAN_IMAGE}/3384861/9112fee9ac6ff5f08e1c4e5c4a2a9ab1d4c0bdcc.png Spooky news.",
                    "appid": 440,
                    "date": 1699000000
                }
            ],
            "count": 2
        }
    }"#;

    #[test]
    fn deserializes_the_feed_envelope_ignoring_extra_fields() {
        let response: NewsResponse = serde_json::from_str(FEED_SAMPLE).unwrap();

        assert_eq!(response.appnews.appid, 440);
        assert_eq!(response.appnews.newsitems.len(), 2);

        let first = &response.appnews.newsitems[0];
        assert_eq!(first.gid, "5124289255600679366");
        assert_eq!(first.title, PATCH_NOTES_TITLE);
        assert_eq!(first.appid, 440);
        assert_eq!(first.date, 1700000000);
    }

    #[test]
    fn missing_author_defaults_to_empty() {
        let item: NewsItem = serde_json::from_str(
            r#"{
                "gid": "1",
                "title": "t",
                "url": "https://example.com",
                "contents": "c",
                "appid": 10,
                "date": 0
            }"#,
        )
        .unwrap();

        assert_eq!(item.author, "");
        assert_eq!(item.author_or_na(), "N/A");
    }

    #[test]
    fn blank_author_displays_as_na() {
        let response: NewsResponse = serde_json::from_str(FEED_SAMPLE).unwrap();

        assert_eq!(response.appnews.newsitems[0].author_or_na(), "N/A");
        assert_eq!(response.appnews.newsitems[1].author_or_na(), "erics");
    }

    #[test]
    fn only_the_exact_update_title_counts_as_patch_notes() {
        let response: NewsResponse = serde_json::from_str(FEED_SAMPLE).unwrap();

        assert!(response.appnews.newsitems[0].is_patch_notes());
        assert!(!response.appnews.newsitems[1].is_patch_notes());
    }
}
