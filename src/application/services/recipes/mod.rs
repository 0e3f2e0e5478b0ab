//! Prompt construction and model reply parsing for recipe recommendation.
//!
//! Wire shapes of the model reply are private to this module; callers only
//! see `RecipeListDto`.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;

use crate::application::dto::recipes::{RecipeDto, RecipeListDto};

pub const SYSTEM_PROMPT: &str = r#"You are a professional chef with 20 years of experience.
Analyze the uploaded photo of food ingredients and recommend dishes that can be cooked from them.

Rules:
1. Base every recipe on the ingredients identified in the image.
2. Assume common pantry seasonings (salt, sugar, soy sauce, cooking oil) are already available.
3. Explain each step in enough detail for a beginner to follow.
4. Reply with JSON only, nothing before or after it.

Reply JSON format:
{
  "recipes": [
    {
      "recipe_name": "dish name",
      "description": "short description",
      "ingredients": ["ingredient 1", "ingredient 2"],
      "instructions": ["step 1", "step 2"],
      "estimated_time": 30,
      "difficulty": "easy|normal|hard",
      "tips": "cooking tips"
    }
  ],
  "message": "additional message"
}"#;

/// Build the user prompt, appending the optional extra request verbatim.
pub fn build_user_prompt(additional_request: &str) -> String {
    let mut prompt = String::from(
        "Identify the ingredients in this image and recommend 2-3 dishes that can be cooked from them.",
    );
    let extra = additional_request.trim();
    if !extra.is_empty() {
        prompt.push_str("\n\nAdditional request: ");
        prompt.push_str(extra);
    }
    prompt
}

static RE_CODE_FENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"```(?:json)?").expect("valid code fence regex"));

#[derive(Debug, Deserialize)]
struct ModelRecipe {
    recipe_name: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    ingredients: Vec<String>,
    #[serde(default)]
    instructions: Vec<String>,
    #[serde(default)]
    estimated_time: i64,
    #[serde(default)]
    difficulty: String,
    #[serde(default)]
    tips: String,
}

#[derive(Debug, Deserialize)]
struct ModelReply {
    #[serde(default)]
    recipes: Vec<ModelRecipe>,
    #[serde(default)]
    message: String,
}

/// Parse the raw model reply. Never fails: an unparseable reply degrades to
/// an empty recipe list carrying the raw output in the message.
pub fn parse_model_reply(raw: &str) -> RecipeListDto {
    let cleaned = RE_CODE_FENCE.replace_all(raw, "");
    let cleaned = cleaned.trim();
    match serde_json::from_str::<ModelReply>(cleaned) {
        Ok(reply) => RecipeListDto {
            recipes: reply
                .recipes
                .into_iter()
                .map(|r| RecipeDto {
                    recipe_name: r.recipe_name,
                    description: r.description,
                    ingredients: r.ingredients,
                    instructions: r.instructions,
                    estimated_time: r.estimated_time,
                    difficulty: r.difficulty,
                    tips: r.tips,
                })
                .collect(),
            message: reply.message,
        },
        Err(err) => {
            tracing::error!(error = %err, reply = %raw, "model_reply_parse_failed");
            RecipeListDto {
                recipes: Vec::new(),
                message: format!(
                    "Sorry, the recommendation could not be processed. Raw reply: {}",
                    raw
                ),
            }
        }
    }
}
