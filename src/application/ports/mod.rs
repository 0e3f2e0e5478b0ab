pub mod chat_model_port;
pub mod recipe_repository;
pub mod video_search_port;
