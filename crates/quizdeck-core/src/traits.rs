//! The transport seam between the catalog loader and wherever quiz files
//! live.
//!
//! Implementations are provided by the `quizdeck-sources` crate.

use async_trait::async_trait;

use crate::error::LoadError;

/// A place quiz resources can be read from.
///
/// `resource` is always relative to the quiz directory: `index.json` for the
/// catalog, or a catalog entry's `file` for a quiz. Implementations must not
/// serve cached copies.
#[async_trait]
pub trait QuizSource: Send + Sync {
    /// Short name for logs (e.g. "http", "dir").
    fn name(&self) -> &str;

    /// Human-readable location of the quiz directory.
    fn location(&self) -> String;

    /// Fetch the raw body of one resource.
    async fn fetch(&self, resource: &str) -> Result<String, LoadError>;
}
