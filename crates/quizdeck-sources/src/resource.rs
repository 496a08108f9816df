//! Resource name checks shared by every source.

use std::path::{Component, Path};

use quizdeck_core::LoadError;

/// Refuse resource names that are empty or would leave the quiz directory.
pub(crate) fn check_resource(resource: &str) -> Result<(), LoadError> {
    let path = Path::new(resource);
    let escapes = path
        .components()
        .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
    if resource.trim().is_empty() || escapes || resource.contains('\\') {
        return Err(LoadError::InvalidResource(resource.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_relative_names() {
        assert!(check_resource("index.json").is_ok());
        assert!(check_resource("geo/capitals.json").is_ok());
        assert!(check_resource("./capitals.json").is_ok());
    }

    #[test]
    fn rejects_escapes() {
        for bad in ["", "  ", "../secret.json", "/etc/passwd", "geo/../../x", "a\\b.json"] {
            assert!(
                matches!(check_resource(bad), Err(LoadError::InvalidResource(_))),
                "{bad:?} should be rejected"
            );
        }
    }
}
