//! OpenAI-compatible chat completion generator

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::time::Duration;

use shared::error::{AppError, AppResult, ErrorCode};

use super::{ContentGenerator, ContentRequest, GeneratedPayload, default_title};
use crate::core::LlmConfig;

const SYSTEM_PROMPT: &str = "You are a marketing copywriter for restaurants. \
Answer with a single JSON object and nothing else. Include a short \"title\" field.";

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: String,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatReply,
}

#[derive(Deserialize)]
struct ChatReply {
    #[serde(default)]
    content: Option<String>,
}

/// LLM 内容生成器
#[derive(Debug, Clone)]
pub struct LlmGenerator {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
    model: String,
}

impl LlmGenerator {
    pub fn new(config: &LlmConfig) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| AppError::config(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self {
            client,
            endpoint: format!(
                "{}/chat/completions",
                config.api_url.trim_end_matches('/')
            ),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ContentGenerator for LlmGenerator {
    fn name(&self) -> &'static str {
        "llm"
    }

    async fn generate(&self, request: &ContentRequest) -> AppResult<GeneratedPayload> {
        let body = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT.to_string(),
                },
                ChatMessage {
                    role: "user",
                    content: user_prompt(request),
                },
            ],
            temperature: 0.7,
        };

        let mut req = self.client.post(&self.endpoint).json(&body);
        if let Some(key) = &self.api_key {
            req = req.bearer_auth(key);
        }

        tracing::debug!(
            content_type = %request.content_type,
            model = %self.model,
            "Requesting chat completion"
        );
        let response = req.send().await.map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "Chat completion failed");
            return Err(
                AppError::upstream(format!("LLM API returned {status}"))
                    .with_detail("status", status.as_u16())
                    .with_detail("body", truncate(&text, 500)),
            );
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| AppError::upstream(format!("Invalid LLM API response: {e}")))?;
        let reply = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .filter(|c| !c.trim().is_empty())
            .ok_or_else(|| {
                AppError::with_message(ErrorCode::GenerationFailed, "LLM returned an empty reply")
            })?;

        Ok(parse_reply(request, &reply))
    }
}

fn map_transport_error(e: reqwest::Error) -> AppError {
    if e.is_timeout() {
        AppError::with_message(ErrorCode::TimeoutError, "LLM request timed out")
    } else if e.is_connect() {
        AppError::with_message(ErrorCode::NetworkError, format!("LLM API unreachable: {e}"))
    } else {
        AppError::upstream(format!("LLM request failed: {e}"))
    }
}

fn user_prompt(request: &ContentRequest) -> String {
    let items: Vec<Value> = request
        .menu_items
        .iter()
        .map(|i| json!({"name": i.name, "description": i.description, "price": i.price.to_string()}))
        .collect();
    format!(
        "Restaurant: {}\nCuisine: {}\nContent type: {}\nParameters: {}\nMenu: {}",
        request.restaurant_name,
        request.cuisine_type,
        request.content_type,
        request.params,
        Value::Array(items),
    )
}

/// Turn the model reply into a payload
///
/// A JSON object (optionally inside a markdown fence) is used as is and may
/// carry its own `title`; anything else is wrapped as `{"text": reply}`.
fn parse_reply(request: &ContentRequest, reply: &str) -> GeneratedPayload {
    let trimmed = strip_fence(reply.trim());
    match serde_json::from_str::<Value>(trimmed) {
        Ok(Value::Object(mut object)) => {
            let title = match object.remove("title") {
                Some(Value::String(t)) if !t.trim().is_empty() => t,
                _ => default_title(request.content_type, &request.params),
            };
            GeneratedPayload {
                title,
                content_data: Value::Object(object),
            }
        }
        _ => GeneratedPayload {
            title: default_title(request.content_type, &request.params),
            content_data: json!({ "text": reply.trim() }),
        },
    }
}

fn strip_fence(s: &str) -> &str {
    let Some(rest) = s.strip_prefix("```") else {
        return s;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    rest.strip_suffix("```").unwrap_or(rest).trim()
}

fn truncate(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}
