//! Load error types.
//!
//! Every failure while fetching or decoding the catalog or a quiz file is a
//! [`LoadError`]. Its `Display` output is what ends up on the status line,
//! so messages are written for the person taking the quiz.

use thiserror::Error;

/// Errors that can occur while loading the catalog or a quiz.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    /// The source answered, but not with a success status.
    #[error("could not load {resource} (status {status})")]
    Unavailable { resource: String, status: u16 },

    /// The source could not be reached at all.
    #[error("could not load {resource}: {message}")]
    Network { resource: String, message: String },

    /// The payload was fetched but has the wrong shape.
    #[error("{resource} is malformed: {reason}")]
    Malformed { resource: String, reason: String },

    /// The resource name escapes the quiz directory or is otherwise unusable.
    #[error("invalid quiz resource: {0}")]
    InvalidResource(String),

    /// A local read failed for a reason other than a missing file.
    #[error("could not read {resource}: {message}")]
    Io { resource: String, message: String },
}

impl LoadError {
    /// The resource this error refers to.
    pub fn resource(&self) -> &str {
        match self {
            LoadError::Unavailable { resource, .. }
            | LoadError::Network { resource, .. }
            | LoadError::Malformed { resource, .. }
            | LoadError::Io { resource, .. } => resource,
            LoadError::InvalidResource(resource) => resource,
        }
    }

    /// Returns `true` if the resource simply does not exist at the source.
    pub fn is_not_found(&self) -> bool {
        matches!(self, LoadError::Unavailable { status: 404, .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_resource() {
        let err = LoadError::Unavailable {
            resource: "index.json".into(),
            status: 500,
        };
        assert_eq!(err.to_string(), "could not load index.json (status 500)");
        assert_eq!(err.resource(), "index.json");
        assert!(!err.is_not_found());

        let err = LoadError::Malformed {
            resource: "capitals.json".into(),
            reason: "`questions` must be an array".into(),
        };
        assert!(err.to_string().starts_with("capitals.json is malformed"));
    }

    #[test]
    fn not_found_is_only_404() {
        let err = LoadError::Unavailable {
            resource: "missing.json".into(),
            status: 404,
        };
        assert!(err.is_not_found());
        assert!(!LoadError::InvalidResource("../x".into()).is_not_found());
    }
}
