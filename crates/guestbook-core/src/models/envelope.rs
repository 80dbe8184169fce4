use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::models::wish::Wish;

/// Envelope the remote endpoint wraps around every response.
///
/// `success` defaults to `false` so a body without it reads as a failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub wishes: Option<Vec<Wish>>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub wish: Option<Wish>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub stack: Option<String>,
}

impl ApiResponse {
    pub fn from_json(text: &str) -> Result<Self, CoreError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn with_wishes(wishes: Vec<Wish>) -> Self {
        Self {
            success: true,
            count: Some(wishes.len() as u64),
            wishes: Some(wishes),
            ..Self::default()
        }
    }

    pub fn with_wish(wish: Wish) -> Self {
        Self {
            success: true,
            wish: Some(wish),
            ..Self::default()
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(error.into()),
            ..Self::default()
        }
    }
}
