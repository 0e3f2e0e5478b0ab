use async_trait::async_trait;

use crate::application::dto::videos::VideoDto;

#[async_trait]
pub trait VideoSearchPort: Send + Sync {
    /// Return unranked candidate videos for a query. Ranking and limits are
    /// applied by the use case.
    async fn search_candidates(&self, query: &str) -> anyhow::Result<Vec<VideoDto>>;
}
