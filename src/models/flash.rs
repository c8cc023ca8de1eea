use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashCategory {
    Success,
    Error,
}

impl FlashCategory {
    /// CSS class suffix used by the template
    pub fn as_str(&self) -> &'static str {
        match self {
            FlashCategory::Success => "success",
            FlashCategory::Error => "error",
        }
    }
}

/// One-time status notification shown on the next render
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlashMessage {
    pub text: String,
    pub category: FlashCategory,
}

impl FlashMessage {
    pub fn success(text: impl Into<String>) -> Self {
        Self { text: text.into(), category: FlashCategory::Success }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { text: text.into(), category: FlashCategory::Error }
    }
}
