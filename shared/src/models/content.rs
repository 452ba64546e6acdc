//! Generated Content Model

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

use crate::error::{AppError, ErrorCode};

/// Content type tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContentType {
    /// Combo / bundle suggestions
    Combos,
    SeasonalMenu,
    /// Enhanced menu item descriptions
    ItemDescriptions,
    SocialPosts,
    Promotions,
}

impl ContentType {
    pub const ALL: [ContentType; 5] = [
        ContentType::Combos,
        ContentType::SeasonalMenu,
        ContentType::ItemDescriptions,
        ContentType::SocialPosts,
        ContentType::Promotions,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Combos => "combos",
            Self::SeasonalMenu => "seasonal-menu",
            Self::ItemDescriptions => "item-descriptions",
            Self::SocialPosts => "social-posts",
            Self::Promotions => "promotions",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| {
                AppError::new(ErrorCode::UnsupportedContentType).with_detail("content_type", s)
            })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentStatus {
    #[default]
    Generated,
    Applied,
}

/// Generated content entity (append-only list)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedContent {
    pub id: String,
    pub title: String,
    pub content_type: ContentType,
    pub status: ContentStatus,
    pub created_at: i64,
    /// Name of the generator that produced the payload
    pub generator: String,
    /// Parameters the payload was generated from
    #[serde(default)]
    pub params: Value,
    /// Shape depends on `content_type`
    pub content_data: Value,
}

/// Store-side input for a new generated content record
#[derive(Debug, Clone, PartialEq)]
pub struct NewGeneratedContent {
    pub title: String,
    pub content_type: ContentType,
    pub generator: String,
    pub params: Value,
    pub content_data: Value,
}

impl NewGeneratedContent {
    pub fn into_content(self, id: String, created_at: i64) -> GeneratedContent {
        GeneratedContent {
            id,
            title: self.title,
            content_type: self.content_type,
            status: ContentStatus::Generated,
            created_at,
            generator: self.generator,
            params: self.params,
            content_data: self.content_data,
        }
    }
}

/// `generateContent` request body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateContentRequest {
    /// Raw tag, parsed into [`ContentType`] by the service
    pub content_type: String,
    #[serde(default)]
    pub params: Value,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_known_tags() {
        assert_eq!("combos".parse::<ContentType>().unwrap(), ContentType::Combos);
        assert_eq!(
            "seasonal-menu".parse::<ContentType>().unwrap(),
            ContentType::SeasonalMenu
        );
        for t in ContentType::ALL {
            assert_eq!(t.as_str().parse::<ContentType>().unwrap(), t);
            assert_eq!(
                serde_json::to_value(t).unwrap(),
                Value::String(t.as_str().to_string())
            );
        }
    }

    #[test]
    fn unknown_tag_is_unsupported() {
        let err = "haiku".parse::<ContentType>().unwrap_err();
        assert_eq!(err.code, ErrorCode::UnsupportedContentType);
    }
}
