use crate::application::dto::recipes::RecipeListDto;
use crate::application::ports::chat_model_port::{ChatModelPort, ImageAttachment};
use crate::application::services::recipes::{SYSTEM_PROMPT, build_user_prompt, parse_model_reply};

#[derive(thiserror::Error, Debug)]
pub enum RecommendError {
    #[error("uploaded file is not an image")]
    NotAnImage,
    #[error("chat model request failed")]
    Model(#[source] anyhow::Error),
}

pub struct RecommendRecipes<'a, M>
where
    M: ChatModelPort + ?Sized,
{
    pub model: &'a M,
}

impl<'a, M> RecommendRecipes<'a, M>
where
    M: ChatModelPort + ?Sized,
{
    pub async fn execute(
        &self,
        image: ImageAttachment,
        additional_request: &str,
    ) -> Result<RecipeListDto, RecommendError> {
        if !image.mime_type.starts_with("image/") {
            return Err(RecommendError::NotAnImage);
        }
        let user_prompt = build_user_prompt(additional_request);
        let raw = self
            .model
            .complete_with_image(SYSTEM_PROMPT, &user_prompt, &image)
            .await
            .map_err(RecommendError::Model)?;
        tracing::debug!(reply_len = raw.len(), "chat_model_replied");
        Ok(parse_model_reply(&raw))
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;

    use super::*;

    struct FixedModel(String);

    #[async_trait]
    impl ChatModelPort for FixedModel {
        async fn complete_with_image(
            &self,
            _system: &str,
            _user: &str,
            _image: &ImageAttachment,
        ) -> anyhow::Result<String> {
            Ok(self.0.clone())
        }
    }

    struct FailingModel;

    #[async_trait]
    impl ChatModelPort for FailingModel {
        async fn complete_with_image(
            &self,
            _system: &str,
            _user: &str,
            _image: &ImageAttachment,
        ) -> anyhow::Result<String> {
            anyhow::bail!("upstream returned status 500")
        }
    }

    fn jpeg() -> ImageAttachment {
        ImageAttachment {
            mime_type: "image/jpeg".into(),
            data: vec![0xff, 0xd8, 0xff],
        }
    }

    #[tokio::test]
    async fn returns_parsed_recipes() {
        let model = FixedModel(
            r#"{"recipes":[{"recipe_name":"Fried rice"}],"message":"ok"}"#.to_string(),
        );
        let uc = RecommendRecipes { model: &model };
        let out = uc.execute(jpeg(), "").await.unwrap();
        assert_eq!(out.recipes.len(), 1);
        assert_eq!(out.recipes[0].recipe_name, "Fried rice");
    }

    #[tokio::test]
    async fn rejects_non_image_mime() {
        let model = FixedModel("{}".to_string());
        let uc = RecommendRecipes { model: &model };
        let image = ImageAttachment {
            mime_type: "application/pdf".into(),
            data: vec![1, 2, 3],
        };
        let err = uc.execute(image, "").await.unwrap_err();
        assert!(matches!(err, RecommendError::NotAnImage));
    }

    #[tokio::test]
    async fn model_failure_is_surfaced() {
        let uc = RecommendRecipes {
            model: &FailingModel,
        };
        let err = uc.execute(jpeg(), "").await.unwrap_err();
        assert!(matches!(err, RecommendError::Model(_)));
    }
}
