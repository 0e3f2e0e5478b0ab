pub mod search_recipe_videos;
