use async_trait::async_trait;

/// Binary image passed through to a vision-capable model.
#[derive(Debug, Clone)]
pub struct ImageAttachment {
    pub mime_type: String,
    pub data: Vec<u8>,
}

#[async_trait]
pub trait ChatModelPort: Send + Sync {
    /// One round-trip: system prompt + user text + inline image.
    /// Returns the raw model reply text; parsing belongs to the caller.
    async fn complete_with_image(
        &self,
        system: &str,
        user: &str,
        image: &ImageAttachment,
    ) -> anyhow::Result<String>;
}
