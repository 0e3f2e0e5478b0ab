use crate::application::dto::videos::VideoDto;

/// One recipe as returned by the chat model.
#[derive(Debug, Clone)]
pub struct RecipeDto {
    pub recipe_name: String,
    pub description: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    /// Minutes.
    pub estimated_time: i64,
    /// 'easy', 'normal' or 'hard'
    pub difficulty: String,
    pub tips: String,
}

#[derive(Debug, Clone)]
pub struct RecipeListDto {
    pub recipes: Vec<RecipeDto>,
    /// Free-form message the model appends to its recommendation.
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct RecipeWithVideosDto {
    pub recipe: RecipeDto,
    pub videos: Vec<VideoDto>,
}

#[derive(Debug, Clone)]
pub struct RecipeListWithVideosDto {
    pub recipes: Vec<RecipeWithVideosDto>,
    pub message: String,
}
