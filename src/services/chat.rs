use std::time::Duration;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::config::Config;
use crate::error::ChatError;

const SYSTEM_PROMPT_INTRO: &str = "You are an empathetic emotional support AI assistant. \
Your role is to provide compassionate, understanding, and helpful responses to users who \
may be experiencing various emotional states.";

const SYSTEM_PROMPT_GUIDELINES: &str = "Guidelines:
- Be warm, empathetic, and non-judgmental
- Provide emotional validation and support
- Offer practical coping strategies when appropriate
- Encourage professional help if the situation seems serious
- Keep responses conversational and supportive
- Avoid giving medical advice
- Focus on emotional support and understanding";

#[derive(Debug, Deserialize, Validate)]
pub struct ChatRequest {
    #[serde(default)]
    #[validate(length(max = 4000, message = "Message must be at most 4000 characters"))]
    pub message: String,
    pub mood: Option<String>,
    #[validate(length(max = 2000, message = "Context must be at most 2000 characters"))]
    pub context: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ChatReply {
    pub reply: String,
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

pub fn build_system_prompt(mood: Option<&str>, context: Option<&str>) -> String {
    let mut prompt = String::from(SYSTEM_PROMPT_INTRO);
    prompt.push_str("\n\n");
    if let Some(mood) = non_empty(mood) {
        prompt.push_str(&format!("The user's current mood is: {mood}\n"));
    }
    if let Some(context) = non_empty(context) {
        prompt.push_str(&format!("Additional context: {context}\n"));
    }
    if non_empty(mood).is_some() || non_empty(context).is_some() {
        prompt.push('\n');
    }
    prompt.push_str(SYSTEM_PROMPT_GUIDELINES);
    prompt
}

/// Maps a non-success upstream status onto what the caller sees.
pub fn upstream_error(status: u16) -> ChatError {
    match status {
        401 => ChatError::InvalidCredential,
        429 => ChatError::RateLimited,
        other => ChatError::Upstream(other),
    }
}

/// Pulls `choices[0].message.content` out of a completion response.
pub fn extract_reply(body: &serde_json::Value) -> Result<String, ChatError> {
    body["choices"][0]["message"]["content"]
        .as_str()
        .map(str::to_string)
        .ok_or(ChatError::MalformedReply)
}

/// Stateless forwarder to an OpenAI-compatible chat completion endpoint.
#[derive(Clone)]
pub struct ChatClient {
    http: reqwest::Client,
    api_url: String,
    api_key: String,
    model: String,
    temperature: f64,
    max_tokens: u32,
}

impl ChatClient {
    pub fn from_config(config: &Config) -> Result<Self, anyhow::Error> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.chat_timeout_secs))
            .build()?;
        Ok(Self {
            http,
            api_url: config.chat_api_url.clone(),
            api_key: config.chat_api_key.clone(),
            model: config.chat_model.clone(),
            temperature: config.chat_temperature,
            max_tokens: config.chat_max_tokens,
        })
    }

    pub fn is_configured(&self) -> bool {
        !self.api_key.is_empty()
    }

    pub fn request_body(&self, request: &ChatRequest) -> serde_json::Value {
        let system_prompt = build_system_prompt(request.mood.as_deref(), request.context.as_deref());
        serde_json::json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": system_prompt },
                { "role": "user", "content": request.message },
            ],
            "temperature": self.temperature,
            "max_tokens": self.max_tokens,
        })
    }

    /// One upstream round trip. No retries.
    pub async fn reply(&self, request: &ChatRequest) -> Result<ChatReply, ChatError> {
        if request.message.trim().is_empty() {
            return Err(ChatError::MissingMessage);
        }
        request
            .validate()
            .map_err(|e| ChatError::InvalidRequest(e.to_string()))?;
        if !self.is_configured() {
            return Err(ChatError::NotConfigured);
        }

        let response = self
            .http
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&self.request_body(request))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), body = %body, "Chat provider returned an error");
            return Err(upstream_error(status.as_u16()));
        }

        let body: serde_json::Value = response.json().await?;
        let reply = extract_reply(&body)?;
        tracing::debug!(reply_len = reply.len(), "Chat reply generated");
        Ok(ChatReply { reply })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(message: &str, mood: Option<&str>, context: Option<&str>) -> ChatRequest {
        ChatRequest {
            message: message.into(),
            mood: mood.map(Into::into),
            context: context.map(Into::into),
        }
    }

    #[test]
    fn test_prompt_includes_mood_and_context() {
        let prompt = build_system_prompt(Some("poor"), Some("exam week"));
        assert!(prompt.starts_with("You are an empathetic emotional support AI assistant."));
        assert!(prompt.contains("The user's current mood is: poor\n"));
        assert!(prompt.contains("Additional context: exam week\n"));
        assert!(prompt.ends_with("- Focus on emotional support and understanding"));
    }

    #[test]
    fn test_prompt_omits_missing_fields() {
        let prompt = build_system_prompt(None, Some("   "));
        assert!(!prompt.contains("current mood"));
        assert!(!prompt.contains("Additional context"));
        assert!(prompt.contains("\n\nGuidelines:"));
    }

    #[test]
    fn test_upstream_error_mapping() {
        assert!(matches!(upstream_error(401), ChatError::InvalidCredential));
        assert!(matches!(upstream_error(429), ChatError::RateLimited));
        assert!(matches!(upstream_error(500), ChatError::Upstream(500)));
    }

    #[test]
    fn test_extract_reply() {
        let body = serde_json::json!({
            "choices": [{ "message": { "role": "assistant", "content": "I hear you." } }]
        });
        assert_eq!(extract_reply(&body).unwrap(), "I hear you.");
        assert!(matches!(
            extract_reply(&serde_json::json!({ "choices": [] })),
            Err(ChatError::MalformedReply)
        ));
    }

    #[test]
    fn test_request_body_shape() {
        let client = ChatClient::from_config(&Config::for_tests()).unwrap();
        let body = client.request_body(&request("hello", Some("okay"), None));
        assert_eq!(body["model"], "gpt-4o-mini");
        assert_eq!(body["max_tokens"], 500);
        assert_eq!(body["messages"][0]["role"], "system");
        assert_eq!(body["messages"][1]["content"], "hello");
    }

    #[tokio::test]
    async fn test_missing_message_rejected_before_upstream() {
        let client = ChatClient::from_config(&Config::for_tests()).unwrap();
        let err = client.reply(&request("  ", None, None)).await.unwrap_err();
        assert!(matches!(err, ChatError::MissingMessage));
    }

    #[tokio::test]
    async fn test_unconfigured_key_rejected() {
        let client = ChatClient::from_config(&Config::for_tests()).unwrap();
        assert!(!client.is_configured());
        let err = client.reply(&request("hi", None, None)).await.unwrap_err();
        assert!(matches!(err, ChatError::NotConfigured));
    }
}
