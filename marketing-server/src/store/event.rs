use serde::Serialize;
use std::fmt;

/// Store collection touched by a mutation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Resource {
    Restaurant,
    Menu,
    Customer,
    Review,
    Campaign,
    GeneratedContent,
}

impl Resource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Restaurant => "restaurant",
            Self::Menu => "menu",
            Self::Customer => "customer",
            Self::Review => "review",
            Self::Campaign => "campaign",
            Self::GeneratedContent => "generated_content",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StoreAction {
    Created,
    Updated,
    Replaced,
}

impl StoreAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Updated => "updated",
            Self::Replaced => "replaced",
        }
    }
}

/// 变更通知
///
/// Broadcast to every subscriber after the write lock is released.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoreEvent {
    pub resource: Resource,
    pub action: StoreAction,
    /// Id of the touched record, `None` for whole-collection writes
    pub id: Option<String>,
    pub version: u64,
}
