use gamestrackers_core::news::{NewsItem, NewsResponse};

/// How many articles to request per fetch.
const NEWS_COUNT: u32 = 100;
/// Steam truncates article contents to this many characters.
const MAX_CONTENT_LENGTH: u32 = 300;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Steam news request failed: {0}")]
    Request(#[from] reqwest::Error),
}

fn news_url(base: &str, appid: u32) -> String {
    format!(
        "{base}/ISteamNews/GetNewsForApp/v0002/?appid={appid}&count={NEWS_COUNT}&maxlength={MAX_CONTENT_LENGTH}&format=json"
    )
}

/// Fetches news items for a game from the Steam Web API.
///
/// Network failures, non-success statuses and malformed payloads all map
/// into [`Error::Request`]; the view renders them as one message.
pub async fn fetch_news(
    client: &reqwest::Client,
    base: &str,
    appid: u32,
) -> Result<Vec<NewsItem>, Error> {
    let url = news_url(base, appid);
    tracing::info!(appid, "fetching Steam news");

    let response = client.get(&url).send().await?.error_for_status()?;
    let body: NewsResponse = response.json().await?;

    tracing::info!(appid, count = body.appnews.newsitems.len(), "news fetched");
    Ok(body.appnews.newsitems)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_the_documented_query() {
        assert_eq!(
            news_url("https://api.steampowered.com", 440),
            "https://api.steampowered.com/ISteamNews/GetNewsForApp/v0002/\
             ?appid=440&count=100&maxlength=300&format=json"
        );
    }

    #[test]
    fn base_url_is_not_normalized() {
        // Trailing slashes are the config's responsibility.
        assert!(news_url("http://localhost:9999", 10).starts_with("http://localhost:9999/"));
    }
}
