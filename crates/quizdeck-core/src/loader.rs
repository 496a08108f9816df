//! Catalog loader.
//!
//! Fetches the catalog and individual quizzes through a [`QuizSource`] and
//! checks their shape before anything reaches the session.

use std::sync::Arc;

use serde_json::Value;
use tracing::{info, instrument, warn};

use crate::error::LoadError;
use crate::model::{Quiz, QuizIndexEntry};
use crate::traits::QuizSource;

/// Name of the catalog resource inside the quiz directory.
pub const INDEX_RESOURCE: &str = "index.json";

/// Loads the catalog and quizzes from one source.
#[derive(Clone)]
pub struct CatalogLoader {
    source: Arc<dyn QuizSource>,
}

impl CatalogLoader {
    pub fn new(source: Arc<dyn QuizSource>) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &dyn QuizSource {
        self.source.as_ref()
    }

    /// Load the catalog. Entry order is the catalog's display order.
    #[instrument(skip(self), fields(source = self.source.name()))]
    pub async fn load_catalog(&self) -> Result<Vec<QuizIndexEntry>, LoadError> {
        let body = self.source.fetch(INDEX_RESOURCE).await?;
        let entries = parse_catalog(INDEX_RESOURCE, &body)?;
        info!(entries = entries.len(), "catalog loaded");
        Ok(entries)
    }

    /// Load one quiz by its catalog `file`.
    #[instrument(skip(self), fields(source = self.source.name()))]
    pub async fn load_quiz(&self, file: &str) -> Result<Quiz, LoadError> {
        let body = self.source.fetch(file).await?;
        let quiz = parse_quiz(file, &body)?;
        info!(questions = quiz.questions.len(), "quiz loaded");
        Ok(quiz)
    }
}

fn parse_json(resource: &str, body: &str) -> Result<Value, LoadError> {
    serde_json::from_str(body).map_err(|e| LoadError::Malformed {
        resource: resource.to_string(),
        reason: format!("not valid JSON: {e}"),
    })
}

/// Decode a catalog body. The top level must be an array.
///
/// Entries are kept in order. One that cannot name a quiz `file` is skipped
/// with a warning; it never fails the catalog.
pub fn parse_catalog(resource: &str, body: &str) -> Result<Vec<QuizIndexEntry>, LoadError> {
    let Value::Array(items) = parse_json(resource, body)? else {
        return Err(LoadError::Malformed {
            resource: resource.to_string(),
            reason: "the catalog must be an array".into(),
        });
    };

    let entries: Vec<QuizIndexEntry> = items
        .into_iter()
        .enumerate()
        .filter_map(|(i, item)| match serde_json::from_value(item) {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!(resource, entry = i, error = %e, "skipping catalog entry");
                None
            }
        })
        .collect();
    Ok(entries)
}

/// Decode a quiz body. It must carry a `questions` array.
pub fn parse_quiz(resource: &str, body: &str) -> Result<Quiz, LoadError> {
    let value = parse_json(resource, body)?;
    if !value.get("questions").is_some_and(Value::is_array) {
        return Err(LoadError::Malformed {
            resource: resource.to_string(),
            reason: "`questions` must be an array".into(),
        });
    }

    serde_json::from_value(value).map_err(|e| LoadError::Malformed {
        resource: resource.to_string(),
        reason: e.to_string(),
    })
}
