use async_trait::async_trait;

use crate::domain::recipes::recipe::Recipe;

#[derive(Debug, Clone)]
pub struct NewRecipe {
    pub recipe_name: String,
    pub description: Option<String>,
    pub ingredients: Option<String>,
    pub instructions: Option<String>,
    pub estimated_time: i64,
    pub difficulty: Option<String>,
    pub tips: Option<String>,
}

#[async_trait]
pub trait RecipeRepository: Send + Sync {
    async fn insert(&self, recipe: NewRecipe) -> anyhow::Result<Recipe>;
    async fn list_all(&self) -> anyhow::Result<Vec<Recipe>>;
    /// Case-insensitive name substring search.
    async fn search_by_name(&self, fragment: &str) -> anyhow::Result<Vec<Recipe>>;
}
