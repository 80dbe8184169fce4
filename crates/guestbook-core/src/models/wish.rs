use serde::{Deserialize, Deserializer, Serialize};

use crate::dates;
use crate::error::CoreError;
use crate::ids;

/// A single guestbook entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wish {
    /// Server-issued, or `local-<millis>` for entries the remote has not
    /// confirmed. Spreadsheet backends often send row numbers; those are
    /// accepted and kept as strings.
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub name: String,
    pub message: String,
    /// Display-formatted date (`d/m/yyyy`).
    #[serde(default)]
    pub date: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub timestamp: Option<String>,
}

impl Wish {
    pub fn is_local(&self) -> bool {
        ids::is_local(&self.id)
    }
}

/// What a visitor typed into the form, trimmed and checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WishDraft {
    name: String,
    message: String,
}

impl WishDraft {
    pub fn new(name: &str, message: &str) -> Result<Self, CoreError> {
        let name = name.trim();
        let message = message.trim();
        if name.is_empty() {
            return Err(CoreError::MissingField("name"));
        }
        if message.is_empty() {
            return Err(CoreError::MissingField("message"));
        }
        Ok(Self {
            name: name.to_string(),
            message: message.to_string(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// The optimistic entry displayed before the remote answers.
    pub fn to_temp_wish(&self, id: String, now: &jiff::Zoned) -> Wish {
        Wish {
            id,
            name: self.name.clone(),
            message: self.message.clone(),
            date: dates::display_date(now.date()),
            timestamp: Some(now.timestamp().to_string()),
        }
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected a string or numeric id, got {other}"
        ))),
    }
}
