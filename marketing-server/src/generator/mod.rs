//! Content generation
//!
//! [`ContentGenerator`] is the seam between the facade and whatever produces
//! marketing copy. [`FixtureGenerator`] returns deterministic canned payloads;
//! [`LlmGenerator`] asks an OpenAI-compatible chat completion endpoint.

mod fixture;
mod llm;

pub use fixture::FixtureGenerator;
pub use llm::LlmGenerator;

use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

use shared::error::AppResult;
use shared::models::{ContentType, MenuItem};

use crate::core::{Config, GeneratorKind};

/// Everything a generator may draw on
#[derive(Debug, Clone)]
pub struct ContentRequest {
    pub content_type: ContentType,
    /// Caller supplied parameters (free-form JSON object)
    pub params: Value,
    pub restaurant_name: String,
    pub cuisine_type: String,
    /// Current menu items in menu order
    pub menu_items: Vec<MenuItem>,
}

/// Generator output, persisted by the facade
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedPayload {
    pub title: String,
    pub content_data: Value,
}

#[async_trait]
pub trait ContentGenerator: Send + Sync {
    /// Short identifier stored alongside generated records
    fn name(&self) -> &'static str;

    async fn generate(&self, request: &ContentRequest) -> AppResult<GeneratedPayload>;
}

/// Build the generator selected by `CONTENT_GENERATOR`
pub fn build_generator(config: &Config) -> AppResult<Arc<dyn ContentGenerator>> {
    let generator: Arc<dyn ContentGenerator> = match config.content_generator {
        GeneratorKind::Fixture => Arc::new(FixtureGenerator::new()),
        GeneratorKind::Llm => Arc::new(LlmGenerator::new(&config.llm)?),
    };
    tracing::info!(generator = generator.name(), "Content generator ready");
    Ok(generator)
}

/// Title used when a generator has nothing better
pub(crate) fn default_title(content_type: ContentType, params: &Value) -> String {
    match content_type {
        ContentType::Combos => "Combo Suggestions".to_string(),
        ContentType::SeasonalMenu => {
            let season = param_str(params, "season").unwrap_or("seasonal");
            format!("{} Menu", capitalize(season))
        }
        ContentType::ItemDescriptions => "Enhanced Item Descriptions".to_string(),
        ContentType::SocialPosts => {
            let platform = param_str(params, "platform").unwrap_or("social");
            format!("{} Posts", capitalize(platform))
        }
        ContentType::Promotions => "Promotion Ideas".to_string(),
    }
}

pub(crate) fn param_str<'a>(params: &'a Value, key: &str) -> Option<&'a str> {
    params
        .get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

pub(crate) fn param_u64(params: &Value, key: &str) -> Option<u64> {
    params.get(key).and_then(Value::as_u64)
}

pub(crate) fn param_str_list(params: &Value, key: &str) -> Vec<String> {
    params
        .get(key)
        .and_then(Value::as_array)
        .map(|values| {
            values
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

pub(crate) fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn default_titles_use_params() {
        assert_eq!(
            default_title(ContentType::SeasonalMenu, &json!({"season": "autumn"})),
            "Autumn Menu"
        );
        assert_eq!(
            default_title(ContentType::SocialPosts, &json!({})),
            "Social Posts"
        );
        assert_eq!(
            default_title(ContentType::Combos, &Value::Null),
            "Combo Suggestions"
        );
    }

    #[test]
    fn param_helpers_ignore_wrong_types() {
        let params = json!({"count": "3", "items": ["a", 1, "b"], "season": "  "});
        assert_eq!(param_u64(&params, "count"), None);
        assert_eq!(param_str_list(&params, "items"), vec!["a", "b"]);
        assert_eq!(param_str(&params, "season"), None);
    }

    #[test]
    fn builds_fixture_by_default() {
        let generator = build_generator(&Config::for_tests()).unwrap();
        assert_eq!(generator.name(), "fixture");
    }
}
