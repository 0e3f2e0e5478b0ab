pub mod recipe_repository_sqlx;
