use crate::application::dto::videos::VideoDto;
use crate::application::ports::video_search_port::VideoSearchPort;

/// At most this many videos accompany a recipe, whatever the caller asks for.
pub const MAX_VIDEOS_PER_RECIPE: usize = 3;

pub struct SearchRecipeVideos<'a, V>
where
    V: VideoSearchPort + ?Sized,
{
    pub port: &'a V,
}

impl<'a, V> SearchRecipeVideos<'a, V>
where
    V: VideoSearchPort + ?Sized,
{
    /// Search videos for a recipe, ranked by view count. Upstream failures
    /// are soft: the recipe flow never fails because of video enrichment.
    pub async fn execute(&self, recipe_name: &str, max_count: usize) -> Vec<VideoDto> {
        let query = format!("{} recipe", recipe_name);
        let candidates = match self.port.search_candidates(&query).await {
            Ok(v) => v,
            Err(err) => {
                tracing::warn!(error = ?err, recipe = %recipe_name, "video_search_failed");
                return Vec::new();
            }
        };
        if candidates.is_empty() {
            tracing::info!(recipe = %recipe_name, "no_related_videos");
        }
        rank_videos(candidates, max_count)
    }
}

/// View-count descending, capped at `min(max_count, MAX_VIDEOS_PER_RECIPE)`.
pub fn rank_videos(mut videos: Vec<VideoDto>, max_count: usize) -> Vec<VideoDto> {
    videos.sort_by(|a, b| b.view_count.cmp(&a.view_count));
    videos.truncate(max_count.min(MAX_VIDEOS_PER_RECIPE));
    videos
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;

    use super::*;
    use crate::application::dto::videos::watch_url;

    fn video(id: &str, views: i64) -> VideoDto {
        VideoDto {
            video_id: id.to_string(),
            title: format!("video {}", id),
            description: String::new(),
            thumbnail_url: String::new(),
            channel_title: "channel".to_string(),
            view_count: views,
            video_url: watch_url(id),
        }
    }

    #[test]
    fn ranks_by_view_count_desc() {
        let out = rank_videos(vec![video("a", 10), video("b", 500), video("c", 42)], 3);
        let ids: Vec<_> = out.iter().map(|v| v.video_id.as_str()).collect();
        assert_eq!(ids, ["b", "c", "a"]);
    }

    #[test]
    fn caps_at_three_even_when_more_requested() {
        let videos = (0..10i64).map(|i| video(&i.to_string(), i)).collect();
        assert_eq!(rank_videos(videos, 10).len(), MAX_VIDEOS_PER_RECIPE);
    }

    #[test]
    fn respects_smaller_requested_count() {
        let videos = vec![video("a", 1), video("b", 2)];
        assert_eq!(rank_videos(videos, 1).len(), 1);
    }

    struct FailingPort;

    #[async_trait]
    impl VideoSearchPort for FailingPort {
        async fn search_candidates(&self, _query: &str) -> anyhow::Result<Vec<VideoDto>> {
            anyhow::bail!("quota exceeded")
        }
    }

    #[tokio::test]
    async fn upstream_failure_yields_empty_list() {
        let uc = SearchRecipeVideos { port: &FailingPort };
        assert!(uc.execute("bibimbap", 3).await.is_empty());
    }

    struct RecordingPort;

    #[async_trait]
    impl VideoSearchPort for RecordingPort {
        async fn search_candidates(&self, query: &str) -> anyhow::Result<Vec<VideoDto>> {
            assert_eq!(query, "bibimbap recipe");
            Ok(vec![])
        }
    }

    #[tokio::test]
    async fn query_appends_recipe_keyword() {
        let uc = SearchRecipeVideos {
            port: &RecordingPort,
        };
        uc.execute("bibimbap", 3).await;
    }
}
