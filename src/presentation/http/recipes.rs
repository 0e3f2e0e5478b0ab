use axum::{
    Json, Router,
    extract::{Multipart, Query, State},
    http::StatusCode,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::dto::recipes::{
    RecipeDto, RecipeListDto, RecipeListWithVideosDto, RecipeWithVideosDto,
};
use crate::application::ports::chat_model_port::ImageAttachment;
use crate::application::use_cases::recipes::list_recipes::ListRecipes;
use crate::application::use_cases::recipes::recommend_recipes::{
    RecommendError, RecommendRecipes,
};
use crate::application::use_cases::recipes::recommend_with_videos::RecommendRecipesWithVideos;
use crate::application::use_cases::recipes::save_recipe::SaveRecipe;
use crate::application::use_cases::recipes::search_recipes::SearchRecipes;
use crate::bootstrap::app_context::AppContext;
use crate::domain::recipes::recipe::Recipe;
use crate::presentation::http::videos::VideoItem;

// Uses AppContext as router state

#[derive(Debug, Serialize, ToSchema)]
pub struct RecipeItem {
    pub recipe_name: String,
    pub description: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    /// Minutes
    pub estimated_time: i64,
    /// 'easy', 'normal' or 'hard'
    pub difficulty: String,
    pub tips: String,
}

impl From<RecipeDto> for RecipeItem {
    fn from(d: RecipeDto) -> Self {
        RecipeItem {
            recipe_name: d.recipe_name,
            description: d.description,
            ingredients: d.ingredients,
            instructions: d.instructions,
            estimated_time: d.estimated_time,
            difficulty: d.difficulty,
            tips: d.tips,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RecipeListResponse {
    pub recipes: Vec<RecipeItem>,
    pub message: String,
}

impl From<RecipeListDto> for RecipeListResponse {
    fn from(d: RecipeListDto) -> Self {
        RecipeListResponse {
            recipes: d.recipes.into_iter().map(Into::into).collect(),
            message: d.message,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RecipeWithVideos {
    pub recipe: RecipeItem,
    pub videos: Vec<VideoItem>,
}

impl From<RecipeWithVideosDto> for RecipeWithVideos {
    fn from(d: RecipeWithVideosDto) -> Self {
        RecipeWithVideos {
            recipe: d.recipe.into(),
            videos: d.videos.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RecipeListWithVideosResponse {
    pub recipes: Vec<RecipeWithVideos>,
    pub message: String,
}

impl From<RecipeListWithVideosDto> for RecipeListWithVideosResponse {
    fn from(d: RecipeListWithVideosDto) -> Self {
        RecipeListWithVideosResponse {
            recipes: d.recipes.into_iter().map(Into::into).collect(),
            message: d.message,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SavedRecipe {
    pub id: i64,
    pub recipe_name: String,
    pub description: Option<String>,
    /// Comma-joined ingredient list
    pub ingredients: Option<String>,
    /// Pipe-joined cooking steps
    pub instructions: Option<String>,
    pub estimated_time: i64,
    pub difficulty: Option<String>,
    pub tips: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<Recipe> for SavedRecipe {
    fn from(r: Recipe) -> Self {
        SavedRecipe {
            id: r.id,
            recipe_name: r.recipe_name,
            description: r.description,
            ingredients: r.ingredients,
            instructions: r.instructions,
            estimated_time: r.estimated_time,
            difficulty: r.difficulty,
            tips: r.tips,
            created_at: r.created_at,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct SaveRecipeRequest {
    pub recipe_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub instructions: Vec<String>,
    #[serde(default)]
    pub estimated_time: i64,
    #[serde(default)]
    pub difficulty: String,
    #[serde(default)]
    pub tips: String,
}

#[derive(ToSchema)]
#[allow(dead_code)]
pub struct RecommendMultipart {
    /// Photo of food ingredients
    #[schema(value_type = String, format = Binary)]
    image: String,
    /// Optional free-form request (style, excluded ingredients, ...)
    additional_request: Option<String>,
}

/// Pull the image and the optional extra request out of a multipart body.
async fn read_multipart(
    ctx: &AppContext,
    multipart: &mut Multipart,
) -> Result<(ImageAttachment, String), StatusCode> {
    let mut image: Option<ImageAttachment> = None;
    let mut additional_request = String::new();

    // MultipartError carries the right status itself: body-limit violations
    // surface as 413 instead of a blanket 400.
    while let Some(field) = multipart.next_field().await.map_err(|e| e.status())? {
        let name = field.name().map(|s| s.to_string());
        let content_type = field.content_type().map(|s| s.to_string());
        match name.as_deref() {
            Some("additional_request") => {
                additional_request = field.text().await.map_err(|e| e.status())?;
            }
            Some("image") => {
                let data = field.bytes().await.map_err(|e| e.status())?;
                // Additional safety besides DefaultBodyLimit
                if data.len() > ctx.cfg.upload_max_bytes {
                    return Err(StatusCode::PAYLOAD_TOO_LARGE);
                }
                image = Some(ImageAttachment {
                    mime_type: content_type.unwrap_or_default(),
                    data: data.to_vec(),
                });
            }
            _ => { /* ignore additional fields */ }
        }
    }

    let image = image.filter(|i| !i.data.is_empty()).ok_or(StatusCode::BAD_REQUEST)?;
    Ok((image, additional_request))
}

fn map_recommend_error(err: RecommendError) -> StatusCode {
    match err {
        RecommendError::NotAnImage => StatusCode::BAD_REQUEST,
        RecommendError::Model(source) => {
            tracing::error!(error = ?source, "recommend_model_failed");
            StatusCode::BAD_GATEWAY
        }
    }
}

/// POST /api/recipes/recommend (multipart/form-data)
/// Fields:
/// - image: ingredient photo (required)
/// - additional_request: free-form text (optional)
#[utoipa::path(
    post,
    path = "/api/recipes/recommend",
    tag = "Recipes",
    request_body(
        content = RecommendMultipart,
        content_type = "multipart/form-data",
    ),
    responses(
        (status = 200, description = "Recommended recipes", body = RecipeListResponse),
        (status = 400, description = "Missing or non-image upload"),
        (status = 502, description = "Chat model failure")
    )
)]
pub async fn recommend(
    State(ctx): State<AppContext>,
    mut multipart: Multipart,
) -> Result<Json<RecipeListResponse>, StatusCode> {
    let (image, additional_request) = read_multipart(&ctx, &mut multipart).await?;
    tracing::info!(
        mime = %image.mime_type,
        bytes = image.data.len(),
        has_extra = !additional_request.is_empty(),
        "recommend_requested"
    );

    let model = ctx.chat_model();
    let uc = RecommendRecipes {
        model: model.as_ref(),
    };
    let out = uc
        .execute(image, &additional_request)
        .await
        .map_err(map_recommend_error)?;
    Ok(Json(out.into()))
}

/// POST /api/recipes/recommend-with-videos (multipart/form-data)
/// Same input as /recommend; each recipe additionally carries up to three
/// related videos ranked by view count.
#[utoipa::path(
    post,
    path = "/api/recipes/recommend-with-videos",
    tag = "Recipes",
    request_body(
        content = RecommendMultipart,
        content_type = "multipart/form-data",
    ),
    responses(
        (status = 200, description = "Recommended recipes with videos", body = RecipeListWithVideosResponse),
        (status = 400, description = "Missing or non-image upload"),
        (status = 502, description = "Chat model failure")
    )
)]
pub async fn recommend_with_videos(
    State(ctx): State<AppContext>,
    mut multipart: Multipart,
) -> Result<Json<RecipeListWithVideosResponse>, StatusCode> {
    let (image, additional_request) = read_multipart(&ctx, &mut multipart).await?;
    tracing::info!(
        mime = %image.mime_type,
        bytes = image.data.len(),
        has_extra = !additional_request.is_empty(),
        "recommend_with_videos_requested"
    );

    let model = ctx.chat_model();
    let videos = ctx.video_search();
    let uc = RecommendRecipesWithVideos {
        model: model.as_ref(),
        videos: videos.as_ref(),
    };
    let out = uc
        .execute(image, &additional_request)
        .await
        .map_err(map_recommend_error)?;
    Ok(Json(out.into()))
}

/// GET /api/recipes
#[utoipa::path(
    get,
    path = "/api/recipes",
    tag = "Recipes",
    responses((status = 200, body = [SavedRecipe]))
)]
pub async fn list_recipes(
    State(ctx): State<AppContext>,
) -> Result<Json<Vec<SavedRecipe>>, StatusCode> {
    let repo = ctx.recipe_repo();
    let uc = ListRecipes {
        repo: repo.as_ref(),
    };
    let rows = uc
        .execute()
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;
    Ok(Json(rows.into_iter().map(Into::into).collect()))
}

#[derive(Debug, Deserialize)]
pub struct SearchRecipesQuery {
    pub q: Option<String>,
}

/// GET /api/recipes/search?q=name
#[utoipa::path(
    get,
    path = "/api/recipes/search",
    tag = "Recipes",
    params(("q" = Option<String>, Query, description = "Name contains")),
    responses((status = 200, body = [SavedRecipe]))
)]
pub async fn search_recipes(
    State(ctx): State<AppContext>,
    Query(query): Query<SearchRecipesQuery>,
) -> Result<Json<Vec<SavedRecipe>>, StatusCode> {
    let repo = ctx.recipe_repo();
    let uc = SearchRecipes {
        repo: repo.as_ref(),
    };
    let rows = uc
        .execute(query.q.as_deref().unwrap_or(""))
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;
    Ok(Json(rows.into_iter().map(Into::into).collect()))
}

/// POST /api/recipes — persist a recommended recipe.
#[utoipa::path(
    post,
    path = "/api/recipes",
    tag = "Recipes",
    request_body = SaveRecipeRequest,
    responses((status = 201, description = "Recipe stored", body = SavedRecipe))
)]
pub async fn save_recipe(
    State(ctx): State<AppContext>,
    Json(req): Json<SaveRecipeRequest>,
) -> Result<(StatusCode, Json<SavedRecipe>), StatusCode> {
    if req.recipe_name.trim().is_empty() {
        return Err(StatusCode::BAD_REQUEST);
    }
    let repo = ctx.recipe_repo();
    let uc = SaveRecipe {
        repo: repo.as_ref(),
    };
    let dto = RecipeDto {
        recipe_name: req.recipe_name,
        description: req.description,
        ingredients: req.ingredients,
        instructions: req.instructions,
        estimated_time: req.estimated_time,
        difficulty: req.difficulty,
        tips: req.tips,
    };
    let stored = uc
        .execute(dto)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;
    Ok((StatusCode::CREATED, Json(stored.into())))
}

pub fn routes(ctx: AppContext) -> Router {
    Router::new()
        .route("/recipes", get(list_recipes).post(save_recipe))
        .route("/recipes/search", get(search_recipes))
        .route("/recipes/recommend", post(recommend))
        .route("/recipes/recommend-with-videos", post(recommend_with_videos))
        .with_state(ctx)
}
