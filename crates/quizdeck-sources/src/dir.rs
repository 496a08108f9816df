//! Local directory quiz source.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::{debug, instrument};

use quizdeck_core::{LoadError, QuizSource};

use crate::resource::check_resource;

/// Reads quiz resources from files under a root directory.
pub struct DirSource {
    root: PathBuf,
}

impl DirSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

#[async_trait]
impl QuizSource for DirSource {
    fn name(&self) -> &str {
        "dir"
    }

    fn location(&self) -> String {
        self.root.display().to_string()
    }

    #[instrument(skip(self), fields(root = %self.root.display()))]
    async fn fetch(&self, resource: &str) -> Result<String, LoadError> {
        check_resource(resource)?;
        let path = self.root.join(resource);

        match tokio::fs::read_to_string(&path).await {
            Ok(body) => {
                debug!(path = %path.display(), bytes = body.len(), "read");
                Ok(body)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Err(LoadError::Unavailable {
                resource: resource.to_string(),
                status: 404,
            }),
            Err(e) => Err(LoadError::Io {
                resource: resource.to_string(),
                message: e.to_string(),
            }),
        }
    }
}
