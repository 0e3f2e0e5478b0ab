use std::env;

#[derive(Clone, Debug)]
pub struct Config {
    pub api_port: u16,
    pub frontend_url: Option<String>,
    pub database_url: String,
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub gemini_base_url: String,
    pub gemini_timeout_secs: u64,
    pub youtube_api_key: String,
    pub youtube_region_code: String,
    pub youtube_relevance_language: String,
    pub upload_max_bytes: usize,
    pub is_production: bool,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let api_port = env::var("API_PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(8080);
        let frontend_url = env::var("FRONTEND_URL").ok();
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://snapcook.db".into());
        let gemini_api_key = env::var("GEMINI_API_KEY").unwrap_or_default();
        let gemini_model =
            env::var("GEMINI_MODEL").unwrap_or_else(|_| "gemini-2.0-flash".into());
        let gemini_base_url = env::var("GEMINI_BASE_URL")
            .unwrap_or_else(|_| "https://generativelanguage.googleapis.com/v1beta".into());
        let gemini_timeout_secs = env::var("GEMINI_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(60);
        let youtube_api_key = env::var("YOUTUBE_API_KEY").unwrap_or_default();
        let youtube_region_code =
            env::var("YOUTUBE_REGION_CODE").unwrap_or_else(|_| "KR".into());
        let youtube_relevance_language =
            env::var("YOUTUBE_RELEVANCE_LANGUAGE").unwrap_or_else(|_| "ko".into());
        let upload_max_bytes = env::var("UPLOAD_MAX_BYTES")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(10 * 1024 * 1024);
        let is_production = matches!(
            env::var("RUST_ENV").ok().as_deref(),
            Some("production") | Some("prod")
        );

        // Production hardening: the model key is mandatory, and CORS must be
        // pinned to a real frontend origin.
        if is_production {
            if gemini_api_key.is_empty() {
                anyhow::bail!("GEMINI_API_KEY must be set in production");
            }
            if !frontend_url
                .as_deref()
                .map(|u| u.starts_with("http"))
                .unwrap_or(false)
            {
                anyhow::bail!(
                    "FRONTEND_URL must be set to a full origin in production (e.g., https://app.example.com)"
                );
            }
        }

        Ok(Self {
            api_port,
            frontend_url,
            database_url,
            gemini_api_key,
            gemini_model,
            gemini_base_url,
            gemini_timeout_secs,
            youtube_api_key,
            youtube_region_code,
            youtube_relevance_language,
            upload_max_bytes,
            is_production,
        })
    }
}
