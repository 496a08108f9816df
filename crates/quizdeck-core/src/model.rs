//! Core data model types for quizdeck.
//!
//! These mirror the JSON resources a quiz source serves: the catalog
//! (`index.json`) and one file per quiz.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Title shown when neither the quiz nor its catalog entry carries one.
pub const DEFAULT_QUIZ_TITLE: &str = "Quiz";

/// One row of the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizIndexEntry {
    /// Optional stable identifier.
    #[serde(
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,
    /// Optional human-readable title.
    #[serde(
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub title: Option<String>,
    /// Quiz resource to load, relative to the quiz directory.
    #[serde(deserialize_with = "required_string")]
    pub file: String,
}

impl QuizIndexEntry {
    /// Label for a selectable list: title, then id, then file name.
    pub fn label(&self) -> &str {
        self.title
            .as_deref()
            .or(self.id.as_deref())
            .unwrap_or(&self.file)
    }
}

/// String form of a scalar JSON value. Numbers and booleans are written out
/// as JSON prints them; null, arrays and objects have no text.
fn scalar_text(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(scalar_text(Value::deserialize(deserializer)?))
}

fn required_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let kind = match &value {
        Value::Null => "null",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
        _ => "",
    };
    scalar_text(value).ok_or_else(|| D::Error::custom(format!("expected text, found {kind}")))
}

/// Numbers pass through; strings holding a number are parsed.
fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}

/// A single question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    /// Display ordering number. Not required to be unique or contiguous.
    #[serde(
        default,
        deserialize_with = "lenient_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub no: Option<f64>,
    /// Prompt text.
    #[serde(
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub q: Option<String>,
    /// Accepted answer, compared after normalization.
    #[serde(
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub a: Option<String>,
}

impl Question {
    pub fn new(no: Option<f64>, q: &str, a: &str) -> Self {
        Self {
            no,
            q: Some(q.to_string()),
            a: Some(a.to_string()),
        }
    }

    /// Sort key: `no`, with a missing number treated as 0.
    pub fn sort_key(&self) -> f64 {
        self.no.unwrap_or(0.0)
    }

    pub fn prompt(&self) -> &str {
        self.q.as_deref().unwrap_or("")
    }

    pub fn answer(&self) -> &str {
        self.a.as_deref().unwrap_or("")
    }

    /// Number shown next to the prompt: `no` if present, else the
    /// one-based position.
    pub fn display_number(&self, position: usize) -> String {
        match self.no {
            Some(no) => no.to_string(),
            None => (position + 1).to_string(),
        }
    }
}

/// A loaded quiz.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quiz {
    #[serde(
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub title: Option<String>,
    pub questions: Vec<Question>,
}

impl Quiz {
    pub fn display_title(&self) -> &str {
        match self.title.as_deref() {
            Some(title) if !title.is_empty() => title,
            _ => DEFAULT_QUIZ_TITLE,
        }
    }

    /// Stable sort by `no` ascending; ties keep their file order.
    pub fn sort_questions(&mut self) {
        self.questions
            .sort_by(|a, b| a.sort_key().total_cmp(&b.sort_key()));
    }
}
