/// Stored recipe row. Ingredients are comma-joined, instructions pipe-joined.
#[derive(Debug, Clone)]
pub struct Recipe {
    pub id: i64,
    pub recipe_name: String,
    pub description: Option<String>,
    pub ingredients: Option<String>,
    pub instructions: Option<String>,
    pub estimated_time: i64,
    pub difficulty: Option<String>,
    pub tips: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
