use async_trait::async_trait;
use sqlx::Row;
use sqlx::sqlite::SqliteRow;

use crate::application::ports::recipe_repository::{NewRecipe, RecipeRepository};
use crate::domain::recipes::recipe::Recipe;
use crate::infrastructure::db::DbPool;

pub struct SqlxRecipeRepository {
    pub pool: DbPool,
}

impl SqlxRecipeRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_row(row: SqliteRow) -> Recipe {
    Recipe {
        id: row.get("id"),
        recipe_name: row.get("recipe_name"),
        description: row.get("description"),
        ingredients: row.get("ingredients"),
        instructions: row.get("instructions"),
        estimated_time: row.get("estimated_time"),
        difficulty: row.get("difficulty"),
        tips: row.get("tips"),
        created_at: row.get("created_at"),
    }
}

#[async_trait]
impl RecipeRepository for SqlxRecipeRepository {
    async fn insert(&self, recipe: NewRecipe) -> anyhow::Result<Recipe> {
        let created_at = chrono::Utc::now();
        let row = sqlx::query(
            r#"INSERT INTO recipes
                   (recipe_name, description, ingredients, instructions,
                    estimated_time, difficulty, tips, created_at)
               VALUES (?, ?, ?, ?, ?, ?, ?, ?)
               RETURNING id, recipe_name, description, ingredients, instructions,
                         estimated_time, difficulty, tips, created_at"#,
        )
        .bind(&recipe.recipe_name)
        .bind(&recipe.description)
        .bind(&recipe.ingredients)
        .bind(&recipe.instructions)
        .bind(recipe.estimated_time)
        .bind(&recipe.difficulty)
        .bind(&recipe.tips)
        .bind(created_at)
        .fetch_one(&self.pool)
        .await?;
        Ok(map_row(row))
    }

    async fn list_all(&self) -> anyhow::Result<Vec<Recipe>> {
        let rows = sqlx::query(
            r#"SELECT id, recipe_name, description, ingredients, instructions,
                      estimated_time, difficulty, tips, created_at
               FROM recipes
               ORDER BY created_at DESC, id DESC"#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(map_row).collect())
    }

    async fn search_by_name(&self, fragment: &str) -> anyhow::Result<Vec<Recipe>> {
        let like = format!("%{}%", fragment.to_lowercase());
        let rows = sqlx::query(
            r#"SELECT id, recipe_name, description, ingredients, instructions,
                      estimated_time, difficulty, tips, created_at
               FROM recipes
               WHERE LOWER(recipe_name) LIKE ?
               ORDER BY created_at DESC, id DESC"#,
        )
        .bind(like)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(map_row).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn test_pool() -> DbPool {
        // Single connection: each in-memory SQLite connection is its own DB.
        let pool = sqlx::sqlite::SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        crate::infrastructure::db::migrate(&pool).await.unwrap();
        pool
    }

    fn new_recipe(name: &str) -> NewRecipe {
        NewRecipe {
            recipe_name: name.to_string(),
            description: Some("test".to_string()),
            ingredients: Some("rice,egg".to_string()),
            instructions: Some("cook|serve".to_string()),
            estimated_time: 25,
            difficulty: Some("easy".to_string()),
            tips: None,
        }
    }

    #[tokio::test]
    async fn insert_then_list() {
        let repo = SqlxRecipeRepository::new(test_pool().await);
        let stored = repo.insert(new_recipe("Fried rice")).await.unwrap();
        assert!(stored.id > 0);
        assert_eq!(stored.estimated_time, 25);

        let all = repo.list_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].recipe_name, "Fried rice");
        assert_eq!(all[0].ingredients.as_deref(), Some("rice,egg"));
    }

    #[tokio::test]
    async fn search_is_case_insensitive_substring() {
        let repo = SqlxRecipeRepository::new(test_pool().await);
        repo.insert(new_recipe("Kimchi Stew")).await.unwrap();
        repo.insert(new_recipe("Pancake")).await.unwrap();

        let hits = repo.search_by_name("kimchi").await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].recipe_name, "Kimchi Stew");

        assert!(repo.search_by_name("pizza").await.unwrap().is_empty());
    }
}
