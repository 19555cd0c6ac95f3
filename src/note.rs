use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{JotterError, Result};

/// A single note, both the persisted and the wire representation.
///
/// `id` and `created_at` are assigned once at creation and never change;
/// `title` and `body` are replaced wholesale on update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Note {
    pub id: String,
    pub title: String,
    pub body: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl Note {
    pub fn new(title: String, body: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title,
            body,
            created_at: Utc::now(),
        }
    }
}

/// Request payload for create and update.
///
/// Absent fields deserialize to empty strings so the handler's validation
/// produces the 400, not the framework's deserializer.
#[derive(Debug, Default, Deserialize)]
pub struct NoteInput {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body: String,
}

impl NoteInput {
    /// Require both fields to be present and non-empty.
    pub fn validate(&self) -> Result<()> {
        if self.title.is_empty() {
            return Err(JotterError::ValidationFailed {
                field: "title".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if self.body.is_empty() {
            return Err(JotterError::ValidationFailed {
                field: "body".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_assigns_unique_ids() {
        let a = Note::new("a".to_string(), "1".to_string());
        let b = Note::new("a".to_string(), "1".to_string());
        assert!(!a.id.is_empty());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_created_at_serializes_under_camel_case_key() {
        let note = Note::new("title".to_string(), "body".to_string());
        let value = serde_json::to_value(&note).unwrap();
        assert!(value.get("createdAt").is_some());
        assert!(value.get("created_at").is_none());
    }

    #[test]
    fn test_input_missing_fields_default_to_empty() {
        let input: NoteInput = serde_json::from_str("{}").unwrap();
        assert!(input.title.is_empty());
        assert!(input.body.is_empty());
    }

    #[test]
    fn test_validate_rejects_empty_title_and_body() {
        let input = NoteInput {
            title: String::new(),
            body: "b".to_string(),
        };
        let err = input.validate().unwrap_err();
        assert!(matches!(err, JotterError::ValidationFailed { ref field, .. } if field == "title"));

        let input = NoteInput {
            title: "t".to_string(),
            body: String::new(),
        };
        let err = input.validate().unwrap_err();
        assert!(matches!(err, JotterError::ValidationFailed { ref field, .. } if field == "body"));

        let input = NoteInput {
            title: "t".to_string(),
            body: "b".to_string(),
        };
        assert!(input.validate().is_ok());
    }
}
