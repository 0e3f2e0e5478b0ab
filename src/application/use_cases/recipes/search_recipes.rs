use crate::application::ports::recipe_repository::RecipeRepository;
use crate::domain::recipes::recipe::Recipe;

pub struct SearchRecipes<'a, R>
where
    R: RecipeRepository + ?Sized,
{
    pub repo: &'a R,
}

impl<'a, R> SearchRecipes<'a, R>
where
    R: RecipeRepository + ?Sized,
{
    /// Blank fragments fall back to the full listing.
    pub async fn execute(&self, fragment: &str) -> anyhow::Result<Vec<Recipe>> {
        let fragment = fragment.trim();
        if fragment.is_empty() {
            return self.repo.list_all().await;
        }
        self.repo.search_by_name(fragment).await
    }
}
