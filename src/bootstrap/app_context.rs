use std::sync::Arc;

use crate::application::ports::chat_model_port::ChatModelPort;
use crate::application::ports::recipe_repository::RecipeRepository;
use crate::application::ports::video_search_port::VideoSearchPort;
use crate::bootstrap::config::Config;

#[derive(Clone)]
pub struct AppContext {
    pub cfg: Config,
    services: Arc<AppServices>,
}

pub struct AppServices {
    recipe_repo: Arc<dyn RecipeRepository>,
    chat_model: Arc<dyn ChatModelPort>,
    video_search: Arc<dyn VideoSearchPort>,
}

impl AppServices {
    pub fn new(
        recipe_repo: Arc<dyn RecipeRepository>,
        chat_model: Arc<dyn ChatModelPort>,
        video_search: Arc<dyn VideoSearchPort>,
    ) -> Self {
        Self {
            recipe_repo,
            chat_model,
            video_search,
        }
    }
}

impl AppContext {
    pub fn new(cfg: Config, services: AppServices) -> Self {
        Self {
            cfg,
            services: Arc::new(services),
        }
    }

    pub fn recipe_repo(&self) -> Arc<dyn RecipeRepository> {
        self.services.recipe_repo.clone()
    }

    pub fn chat_model(&self) -> Arc<dyn ChatModelPort> {
        self.services.chat_model.clone()
    }

    pub fn video_search(&self) -> Arc<dyn VideoSearchPort> {
        self.services.video_search.clone()
    }
}
