use crate::application::dto::recipes::{RecipeListWithVideosDto, RecipeWithVideosDto};
use crate::application::ports::chat_model_port::{ChatModelPort, ImageAttachment};
use crate::application::ports::video_search_port::VideoSearchPort;
use crate::application::use_cases::recipes::recommend_recipes::{
    RecommendError, RecommendRecipes,
};
use crate::application::use_cases::videos::search_recipe_videos::{
    MAX_VIDEOS_PER_RECIPE, SearchRecipeVideos,
};

pub struct RecommendRecipesWithVideos<'a, M, V>
where
    M: ChatModelPort + ?Sized,
    V: VideoSearchPort + ?Sized,
{
    pub model: &'a M,
    pub videos: &'a V,
}

impl<'a, M, V> RecommendRecipesWithVideos<'a, M, V>
where
    M: ChatModelPort + ?Sized,
    V: VideoSearchPort + ?Sized,
{
    pub async fn execute(
        &self,
        image: ImageAttachment,
        additional_request: &str,
    ) -> Result<RecipeListWithVideosDto, RecommendError> {
        let list = RecommendRecipes { model: self.model }
            .execute(image, additional_request)
            .await?;

        let search = SearchRecipeVideos { port: self.videos };
        let mut recipes = Vec::with_capacity(list.recipes.len());
        for recipe in list.recipes {
            let videos = search
                .execute(&recipe.recipe_name, MAX_VIDEOS_PER_RECIPE)
                .await;
            tracing::info!(recipe = %recipe.recipe_name, videos = videos.len(), "videos_attached");
            recipes.push(RecipeWithVideosDto { recipe, videos });
        }

        Ok(RecipeListWithVideosDto {
            recipes,
            message: list.message,
        })
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;

    use super::*;
    use crate::application::dto::videos::{VideoDto, watch_url};

    struct FixedModel;

    #[async_trait]
    impl ChatModelPort for FixedModel {
        async fn complete_with_image(
            &self,
            _system: &str,
            _user: &str,
            _image: &ImageAttachment,
        ) -> anyhow::Result<String> {
            Ok(r#"{"recipes":[{"recipe_name":"Kimchi stew"},{"recipe_name":"Pancake"}],"message":"two ideas"}"#
                .to_string())
        }
    }

    struct OneVideoPort;

    #[async_trait]
    impl VideoSearchPort for OneVideoPort {
        async fn search_candidates(&self, query: &str) -> anyhow::Result<Vec<VideoDto>> {
            Ok(vec![VideoDto {
                video_id: "v1".to_string(),
                title: query.to_string(),
                description: String::new(),
                thumbnail_url: String::new(),
                channel_title: "cooking".to_string(),
                view_count: 100,
                video_url: watch_url("v1"),
            }])
        }
    }

    #[tokio::test]
    async fn attaches_videos_to_every_recipe() {
        let uc = RecommendRecipesWithVideos {
            model: &FixedModel,
            videos: &OneVideoPort,
        };
        let image = ImageAttachment {
            mime_type: "image/png".into(),
            data: vec![0x89, 0x50],
        };
        let out = uc.execute(image, "").await.unwrap();
        assert_eq!(out.recipes.len(), 2);
        assert_eq!(out.message, "two ideas");
        for entry in &out.recipes {
            assert_eq!(entry.videos.len(), 1);
            assert!(entry.videos[0].title.ends_with(" recipe"));
        }
    }
}
