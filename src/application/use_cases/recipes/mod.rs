pub mod list_recipes;
pub mod recommend_recipes;
pub mod recommend_with_videos;
pub mod save_recipe;
pub mod search_recipes;
