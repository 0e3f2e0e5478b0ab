use crate::application::dto::recipes::RecipeDto;
use crate::application::ports::recipe_repository::{NewRecipe, RecipeRepository};
use crate::domain::recipes::recipe::Recipe;

pub struct SaveRecipe<'a, R>
where
    R: RecipeRepository + ?Sized,
{
    pub repo: &'a R,
}

impl<'a, R> SaveRecipe<'a, R>
where
    R: RecipeRepository + ?Sized,
{
    pub async fn execute(&self, recipe: RecipeDto) -> anyhow::Result<Recipe> {
        let row = NewRecipe {
            recipe_name: recipe.recipe_name,
            description: not_empty(recipe.description),
            ingredients: not_empty(recipe.ingredients.join(",")),
            instructions: not_empty(recipe.instructions.join("|")),
            estimated_time: recipe.estimated_time,
            difficulty: not_empty(recipe.difficulty),
            tips: not_empty(recipe.tips),
        };
        self.repo.insert(row).await
    }
}

fn not_empty(s: String) -> Option<String> {
    if s.is_empty() { None } else { Some(s) }
}
