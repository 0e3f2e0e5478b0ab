//! YouTube Data API v3 adapter: `search.list` for candidate ids, then
//! `videos.list` for snippet and statistics.

use async_trait::async_trait;
use serde::Deserialize;

use crate::application::dto::videos::{VideoDto, watch_url};
use crate::application::ports::video_search_port::VideoSearchPort;
use crate::bootstrap::config::Config;

const SEARCH_URL: &str = "https://www.googleapis.com/youtube/v3/search";
const VIDEOS_URL: &str = "https://www.googleapis.com/youtube/v3/videos";
// Candidates fetched per query; ranking trims this down afterwards.
const MAX_CANDIDATES: usize = 10;
const DESCRIPTION_MAX_CHARS: usize = 200;

pub struct YoutubeVideoSearch {
    client: reqwest::Client,
    api_key: String,
    region_code: String,
    relevance_language: String,
}

impl YoutubeVideoSearch {
    pub fn new(cfg: &Config) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: cfg.youtube_api_key.clone(),
            region_code: cfg.youtube_region_code.clone(),
            relevance_language: cfg.youtube_relevance_language.clone(),
        }
    }

    async fn search_video_ids(&self, query: &str) -> anyhow::Result<Vec<String>> {
        let resp = self
            .client
            .get(SEARCH_URL)
            .query(&[
                ("part", "snippet"),
                ("q", query),
                ("type", "video"),
                ("maxResults", &MAX_CANDIDATES.to_string()),
                ("regionCode", &self.region_code),
                ("relevanceLanguage", &self.relevance_language),
                ("key", &self.api_key),
            ])
            .send()
            .await
            .map_err(|e| anyhow::anyhow!("youtube search request failed: {e}"))?;
        let status = resp.status();
        if !status.is_success() {
            anyhow::bail!("youtube search returned status {status}");
        }
        let parsed: SearchListResponse = resp
            .json()
            .await
            .map_err(|e| anyhow::anyhow!("failed to parse youtube search response: {e}"))?;
        let ids: Vec<String> = parsed
            .items
            .into_iter()
            .filter_map(|item| item.id.video_id)
            .filter(|id| !id.is_empty())
            .collect();
        tracing::info!(%query, found = ids.len(), "youtube_search_done");
        Ok(ids)
    }

    async fn fetch_video_details(&self, ids: &[String]) -> anyhow::Result<Vec<VideoDto>> {
        let resp = self
            .client
            .get(VIDEOS_URL)
            .query(&[
                ("part", "snippet,statistics"),
                ("id", &ids.join(",")),
                ("key", &self.api_key),
            ])
            .send()
            .await
            .map_err(|e| anyhow::anyhow!("youtube videos request failed: {e}"))?;
        let status = resp.status();
        if !status.is_success() {
            anyhow::bail!("youtube videos returned status {status}");
        }
        let parsed: VideoListResponse = resp
            .json()
            .await
            .map_err(|e| anyhow::anyhow!("failed to parse youtube videos response: {e}"))?;
        Ok(parsed.items.into_iter().map(into_dto).collect())
    }
}

#[async_trait]
impl VideoSearchPort for YoutubeVideoSearch {
    async fn search_candidates(&self, query: &str) -> anyhow::Result<Vec<VideoDto>> {
        if self.api_key.is_empty() {
            tracing::warn!("YOUTUBE_API_KEY is not configured; skipping video search");
            return Ok(Vec::new());
        }
        let ids = self.search_video_ids(query).await?;
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        self.fetch_video_details(&ids).await
    }
}

fn into_dto(item: VideoItem) -> VideoDto {
    let video_url = watch_url(&item.id);
    VideoDto {
        video_id: item.id,
        title: item.snippet.title,
        description: truncate_description(&item.snippet.description),
        thumbnail_url: item.snippet.thumbnails.best_url(),
        channel_title: item.snippet.channel_title,
        view_count: item.statistics.view_count(),
        video_url,
    }
}

fn truncate_description(description: &str) -> String {
    if description.chars().count() > DESCRIPTION_MAX_CHARS {
        let truncated: String = description.chars().take(DESCRIPTION_MAX_CHARS).collect();
        format!("{}...", truncated)
    } else {
        description.to_string()
    }
}

#[derive(Deserialize)]
struct SearchListResponse {
    #[serde(default)]
    items: Vec<SearchItem>,
}

#[derive(Deserialize)]
struct SearchItem {
    id: SearchItemId,
}

#[derive(Deserialize)]
struct SearchItemId {
    #[serde(rename = "videoId", default)]
    video_id: Option<String>,
}

#[derive(Deserialize)]
struct VideoListResponse {
    #[serde(default)]
    items: Vec<VideoItem>,
}

#[derive(Deserialize)]
struct VideoItem {
    id: String,
    snippet: Snippet,
    #[serde(default)]
    statistics: Statistics,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Snippet {
    #[serde(default)]
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    channel_title: String,
    #[serde(default)]
    thumbnails: Thumbnails,
}

#[derive(Deserialize, Default)]
struct Thumbnails {
    high: Option<Thumbnail>,
    medium: Option<Thumbnail>,
    default: Option<Thumbnail>,
}

impl Thumbnails {
    // high > medium > default
    fn best_url(self) -> String {
        self.high
            .or(self.medium)
            .or(self.default)
            .map(|t| t.url)
            .unwrap_or_default()
    }
}

#[derive(Deserialize)]
struct Thumbnail {
    url: String,
}

#[derive(Deserialize, Default)]
struct Statistics {
    // The API encodes counters as decimal strings.
    #[serde(rename = "viewCount", default)]
    view_count: Option<String>,
}

impl Statistics {
    fn view_count(&self) -> i64 {
        self.view_count
            .as_deref()
            .and_then(|s| s.parse().ok())
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_response_collects_video_ids() {
        let raw = r#"{
            "items": [
                {"id": {"kind": "youtube#video", "videoId": "abc"}},
                {"id": {"kind": "youtube#channel"}},
                {"id": {"videoId": "def"}}
            ]
        }"#;
        let parsed: SearchListResponse = serde_json::from_str(raw).unwrap();
        let ids: Vec<_> = parsed
            .items
            .into_iter()
            .filter_map(|i| i.id.video_id)
            .collect();
        assert_eq!(ids, ["abc", "def"]);
    }

    #[test]
    fn video_item_maps_to_dto() {
        let raw = r#"{
            "id": "abc",
            "snippet": {
                "title": "Easy fried rice",
                "description": "A quick recipe",
                "channelTitle": "Home Cooking",
                "thumbnails": {
                    "default": {"url": "http://img/default.jpg"},
                    "high": {"url": "http://img/high.jpg"}
                }
            },
            "statistics": {"viewCount": "12345"}
        }"#;
        let item: VideoItem = serde_json::from_str(raw).unwrap();
        let dto = into_dto(item);
        assert_eq!(dto.video_id, "abc");
        assert_eq!(dto.thumbnail_url, "http://img/high.jpg");
        assert_eq!(dto.view_count, 12345);
        assert_eq!(dto.video_url, "https://www.youtube.com/watch?v=abc");
    }

    #[test]
    fn thumbnail_falls_back_medium_then_default() {
        let t: Thumbnails = serde_json::from_str(
            r#"{"medium": {"url": "m"}, "default": {"url": "d"}}"#,
        )
        .unwrap();
        assert_eq!(t.best_url(), "m");
        let t: Thumbnails = serde_json::from_str(r#"{"default": {"url": "d"}}"#).unwrap();
        assert_eq!(t.best_url(), "d");
    }

    #[test]
    fn missing_view_count_defaults_to_zero() {
        let s: Statistics = serde_json::from_str("{}").unwrap();
        assert_eq!(s.view_count(), 0);
    }

    #[test]
    fn long_descriptions_are_truncated() {
        let long = "x".repeat(250);
        let out = truncate_description(&long);
        assert_eq!(out.chars().count(), DESCRIPTION_MAX_CHARS + 3);
        assert!(out.ends_with("..."));
        assert_eq!(truncate_description("short"), "short");
    }
}
