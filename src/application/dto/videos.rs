#[derive(Debug, Clone)]
pub struct VideoDto {
    pub video_id: String,
    pub title: String,
    pub description: String,
    pub thumbnail_url: String,
    pub channel_title: String,
    pub view_count: i64,
    pub video_url: String,
}

/// Canonical watch URL for a video id.
pub fn watch_url(video_id: &str) -> String {
    format!("https://www.youtube.com/watch?v={}", video_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn watch_url_embeds_id() {
        assert_eq!(watch_url("abc123"), "https://www.youtube.com/watch?v=abc123");
    }
}
