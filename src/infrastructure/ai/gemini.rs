//! Google Gemini `generateContent` adapter.
//!
//! Wire types are private to this module; callers use the `ChatModelPort`
//! trait and see plain text replies.

use async_trait::async_trait;
use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::application::ports::chat_model_port::{ChatModelPort, ImageAttachment};
use crate::bootstrap::config::Config;

pub struct GeminiChatModel {
    client: reqwest::Client,
    base_url: String,
    model: String,
    api_key: String,
}

impl GeminiChatModel {
    pub fn new(cfg: &Config) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(cfg.gemini_timeout_secs))
            .build()?;
        Ok(Self {
            client,
            base_url: cfg.gemini_base_url.trim_end_matches('/').to_string(),
            model: cfg.gemini_model.clone(),
            api_key: cfg.gemini_api_key.clone(),
        })
    }
}

#[async_trait]
impl ChatModelPort for GeminiChatModel {
    async fn complete_with_image(
        &self,
        system: &str,
        user: &str,
        image: &ImageAttachment,
    ) -> anyhow::Result<String> {
        if self.api_key.is_empty() {
            anyhow::bail!("GEMINI_API_KEY is not configured");
        }
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url,
            self.model,
            urlencoding::encode(&self.api_key)
        );
        let body = GenerateContentRequest {
            system_instruction: SystemInstruction {
                parts: vec![TextPart {
                    text: system.to_string(),
                }],
            },
            contents: vec![Content {
                role: "user",
                parts: vec![
                    Part::text(user),
                    Part::inline_image(&image.mime_type, &image.data),
                ],
            }],
        };

        tracing::debug!(model = %self.model, image_bytes = image.data.len(), "gemini_request");
        let resp = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| anyhow::anyhow!("gemini request failed: {e}"))?;
        let status = resp.status();
        if !status.is_success() {
            let detail = resp.text().await.unwrap_or_default();
            anyhow::bail!("gemini returned status {status}: {detail}");
        }
        let parsed: GenerateContentResponse = resp
            .json()
            .await
            .map_err(|e| anyhow::anyhow!("failed to parse gemini response: {e}"))?;
        parsed
            .first_text()
            .ok_or_else(|| anyhow::anyhow!("gemini reply contained no text part"))
    }
}

#[derive(Serialize)]
struct GenerateContentRequest {
    #[serde(rename = "systemInstruction")]
    system_instruction: SystemInstruction,
    contents: Vec<Content>,
}

#[derive(Serialize)]
struct SystemInstruction {
    parts: Vec<TextPart>,
}

#[derive(Serialize)]
struct TextPart {
    text: String,
}

#[derive(Serialize)]
struct Content {
    role: &'static str,
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(rename = "inlineData", skip_serializing_if = "Option::is_none")]
    inline_data: Option<InlineData>,
}

impl Part {
    fn text(text: &str) -> Self {
        Self {
            text: Some(text.to_string()),
            inline_data: None,
        }
    }

    fn inline_image(mime_type: &str, data: &[u8]) -> Self {
        Self {
            text: None,
            inline_data: Some(InlineData {
                mime_type: mime_type.to_string(),
                data: base64::engine::general_purpose::STANDARD.encode(data),
            }),
        }
    }
}

#[derive(Serialize)]
struct InlineData {
    #[serde(rename = "mimeType")]
    mime_type: String,
    data: String,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

impl GenerateContentResponse {
    /// Concatenated text parts of the first candidate, or None when the
    /// reply carries no text at all.
    fn first_text(&self) -> Option<String> {
        let candidate = self.candidates.first()?;
        let content = candidate.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect();
        if text.is_empty() { None } else { Some(text) }
    }
}

#[derive(Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_camel_case_wire_names() {
        let body = GenerateContentRequest {
            system_instruction: SystemInstruction {
                parts: vec![TextPart {
                    text: "sys".to_string(),
                }],
            },
            contents: vec![Content {
                role: "user",
                parts: vec![Part::text("hello"), Part::inline_image("image/png", &[1, 2, 3])],
            }],
        };
        let json = serde_json::to_value(&body).unwrap();
        assert!(json.get("systemInstruction").is_some());
        let parts = &json["contents"][0]["parts"];
        assert_eq!(parts[0]["text"], "hello");
        assert_eq!(parts[1]["inlineData"]["mimeType"], "image/png");
        assert_eq!(parts[1]["inlineData"]["data"], "AQID");
        // text-only parts must not carry a null inlineData key
        assert!(parts[0].get("inlineData").is_none());
    }

    #[test]
    fn response_text_is_extracted() {
        let raw = r#"{
            "candidates": [
                {"content": {"parts": [{"text": "{\"recipes\":"}, {"text": "[]}"}]}}
            ]
        }"#;
        let parsed: GenerateContentResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.first_text().as_deref(), Some("{\"recipes\":[]}"));
    }

    #[test]
    fn empty_candidates_yield_none() {
        let parsed: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.first_text().is_none());
    }
}
