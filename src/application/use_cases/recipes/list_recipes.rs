use crate::application::ports::recipe_repository::RecipeRepository;
use crate::domain::recipes::recipe::Recipe;

pub struct ListRecipes<'a, R>
where
    R: RecipeRepository + ?Sized,
{
    pub repo: &'a R,
}

impl<'a, R> ListRecipes<'a, R>
where
    R: RecipeRepository + ?Sized,
{
    pub async fn execute(&self) -> anyhow::Result<Vec<Recipe>> {
        self.repo.list_all().await
    }
}
