use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;
use utoipa::ToSchema;

use crate::infrastructure::db::DbPool;

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResp {
    pub status: &'static str,
    pub service: &'static str,
    /// Rows in the recipes table; doubles as a schema liveness probe.
    pub saved_recipes: i64,
}

#[utoipa::path(
    get,
    path = "/api/health",
    tag = "Health",
    responses((status = 200, body = HealthResp))
)]
pub async fn health(State(pool): State<DbPool>) -> Json<HealthResp> {
    let counted = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM recipes")
        .fetch_one(&pool)
        .await;
    let resp = match counted {
        Ok(saved_recipes) => HealthResp {
            status: "ok",
            service: "snapcook",
            saved_recipes,
        },
        Err(_) => HealthResp {
            status: "degraded",
            service: "snapcook",
            saved_recipes: 0,
        },
    };
    Json(resp)
}

pub fn routes(pool: DbPool) -> Router {
    Router::new().route("/health", get(health)).with_state(pool)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn reports_saved_recipe_count() {
        // Single connection: each in-memory SQLite connection is its own DB.
        let pool = sqlx::sqlite::SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        crate::infrastructure::db::migrate(&pool).await.unwrap();
        sqlx::query("INSERT INTO recipes (recipe_name, created_at) VALUES (?, ?)")
            .bind("Fried rice")
            .bind(chrono::Utc::now())
            .execute(&pool)
            .await
            .unwrap();

        let resp = health(State(pool)).await;
        assert_eq!(resp.0.status, "ok");
        assert_eq!(resp.0.service, "snapcook");
        assert_eq!(resp.0.saved_recipes, 1);
    }

    #[tokio::test]
    async fn missing_schema_degrades() {
        let pool = sqlx::sqlite::SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        // No migrations: the probe query has no table to hit.
        let resp = health(State(pool)).await;
        assert_eq!(resp.0.status, "degraded");
        assert_eq!(resp.0.saved_recipes, 0);
    }
}
