pub mod recipes;
pub mod videos;
