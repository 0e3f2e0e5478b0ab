use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    routing::get,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::dto::videos::VideoDto;
use crate::application::use_cases::videos::search_recipe_videos::{
    MAX_VIDEOS_PER_RECIPE, SearchRecipeVideos,
};
use crate::bootstrap::app_context::AppContext;

#[derive(Debug, Serialize, ToSchema)]
pub struct VideoItem {
    pub video_id: String,
    pub title: String,
    pub description: String,
    pub thumbnail_url: String,
    pub channel_title: String,
    pub view_count: i64,
    pub video_url: String,
}

impl From<VideoDto> for VideoItem {
    fn from(d: VideoDto) -> Self {
        VideoItem {
            video_id: d.video_id,
            title: d.title,
            description: d.description,
            thumbnail_url: d.thumbnail_url,
            channel_title: d.channel_title,
            view_count: d.view_count,
            video_url: d.video_url,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct VideoSearchQuery {
    pub q: String,
    pub max: Option<usize>,
}

/// GET /api/videos/search?q=recipe-name — video search without the model,
/// handy for probing the YouTube integration on its own.
#[utoipa::path(
    get,
    path = "/api/videos/search",
    tag = "Videos",
    params(
        ("q" = String, Query, description = "Recipe name"),
        ("max" = Option<usize>, Query, description = "Max videos (capped at 3)")
    ),
    responses((status = 200, body = [VideoItem]))
)]
pub async fn search_videos(
    State(ctx): State<AppContext>,
    Query(query): Query<VideoSearchQuery>,
) -> Result<Json<Vec<VideoItem>>, StatusCode> {
    if query.q.trim().is_empty() {
        return Err(StatusCode::BAD_REQUEST);
    }
    let port = ctx.video_search();
    let uc = SearchRecipeVideos {
        port: port.as_ref(),
    };
    let videos = uc
        .execute(query.q.trim(), query.max.unwrap_or(MAX_VIDEOS_PER_RECIPE))
        .await;
    Ok(Json(videos.into_iter().map(Into::into).collect()))
}

pub fn routes(ctx: AppContext) -> Router {
    Router::new()
        .route("/videos/search", get(search_videos))
        .with_state(ctx)
}
