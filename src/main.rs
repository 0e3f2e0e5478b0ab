use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::extract::{DefaultBodyLimit, MatchedPath};
use dotenvy::dotenv;
use http::HeaderValue;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use snapcook::bootstrap::app_context::{AppContext, AppServices};
use snapcook::bootstrap::config::Config;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
        paths(
            snapcook::presentation::http::recipes::recommend,
            snapcook::presentation::http::recipes::recommend_with_videos,
            snapcook::presentation::http::recipes::list_recipes,
            snapcook::presentation::http::recipes::search_recipes,
            snapcook::presentation::http::recipes::save_recipe,
            snapcook::presentation::http::videos::search_videos,
            snapcook::presentation::http::health::health,
        ),
        components(schemas(
            snapcook::presentation::http::recipes::RecipeItem,
            snapcook::presentation::http::recipes::RecipeListResponse,
            snapcook::presentation::http::recipes::RecipeWithVideos,
            snapcook::presentation::http::recipes::RecipeListWithVideosResponse,
            snapcook::presentation::http::recipes::SavedRecipe,
            snapcook::presentation::http::recipes::SaveRecipeRequest,
            snapcook::presentation::http::recipes::RecommendMultipart,
            snapcook::presentation::http::videos::VideoItem,
            snapcook::presentation::http::health::HealthResp,
        )),
        tags(
            (name = "Recipes", description = "Image-based recipe recommendation and storage"),
            (name = "Videos", description = "Related video search"),
            (name = "Health", description = "System health checks")
        )
    )]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "snapcook=debug,axum=info,tower_http=info".into()),
        )
        .init();

    let cfg = Config::from_env()?;
    info!(port = cfg.api_port, "Starting Snap Cook backend");

    // Database
    let pool = snapcook::infrastructure::db::connect_pool(&cfg.database_url).await?;
    snapcook::infrastructure::db::migrate(&pool).await?;

    // Adapters behind the application ports
    let recipe_repo = Arc::new(
        snapcook::infrastructure::db::repositories::recipe_repository_sqlx::SqlxRecipeRepository::new(
            pool.clone(),
        ),
    );
    let chat_model = Arc::new(snapcook::infrastructure::ai::gemini::GeminiChatModel::new(
        &cfg,
    )?);
    let video_search = Arc::new(
        snapcook::infrastructure::video::youtube::YoutubeVideoSearch::new(&cfg),
    );

    let services = AppServices::new(recipe_repo, chat_model, video_search);
    let ctx = AppContext::new(cfg.clone(), services);

    // Build CORS
    let cors_methods = [
        http::Method::GET,
        http::Method::POST,
        http::Method::PUT,
        http::Method::DELETE,
        http::Method::OPTIONS,
    ];
    let cors = match cfg.frontend_url.as_deref().and_then(|o| HeaderValue::from_str(o).ok()) {
        Some(origin) => CorsLayer::new()
            .allow_origin(origin)
            .allow_methods(cors_methods)
            .allow_headers([http::header::CONTENT_TYPE]),
        None if cfg.is_production => {
            // FRONTEND_URL is enforced earlier in production; deny all as fallback
            CorsLayer::new()
                .allow_origin(AllowOrigin::exact(HeaderValue::from_static("http://invalid")))
                .allow_methods(cors_methods)
                .allow_headers([http::header::CONTENT_TYPE])
        }
        None => {
            // Development convenience
            CorsLayer::new()
                .allow_origin(AllowOrigin::mirror_request())
                .allow_methods(cors_methods)
                .allow_headers([http::header::CONTENT_TYPE])
        }
    };

    // Build API router
    let app = Router::new()
        .nest(
            "/api",
            snapcook::presentation::http::health::routes(pool.clone()),
        )
        .nest(
            "/api",
            snapcook::presentation::http::recipes::routes(ctx.clone()),
        )
        .nest(
            "/api",
            snapcook::presentation::http::videos::routes(ctx.clone()),
        )
        .merge(SwaggerUi::new("/api/docs").url("/api/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        // Global body size limit for image uploads (configurable)
        .layer(DefaultBodyLimit::max(cfg.upload_max_bytes))
        .layer(
            TraceLayer::new_for_http().make_span_with(|req: &http::Request<_>| {
                let method = req.method().clone();
                let uri = req.uri().clone();
                let matched = req
                    .extensions()
                    .get::<MatchedPath>()
                    .map(|p| p.as_str().to_string())
                    .unwrap_or_default();
                tracing::info_span!("http", %method, %uri, matched_path = %matched)
            }),
        );

    let api_addr = SocketAddr::from(([0, 0, 0, 0], cfg.api_port));
    info!(%api_addr, "HTTP API listening");
    let listener = tokio::net::TcpListener::bind(api_addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
