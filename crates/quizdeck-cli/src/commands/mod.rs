pub mod init;
pub mod list;
pub mod play;
pub mod validate;

use std::path::Path;

use anyhow::Result;

use quizdeck_core::CatalogLoader;
use quizdeck_sources::config::load_config_from;
use quizdeck_sources::{create_source, SourceConfig};

/// Build a loader from the config file, letting `--source` win.
pub fn build_loader(source: Option<&str>, config_path: Option<&Path>) -> Result<CatalogLoader> {
    let mut config = load_config_from(config_path)?;
    if let Some(location) = source {
        config.source = SourceConfig::from_location(location);
    }

    let source = create_source(&config)?;
    tracing::debug!(source = source.name(), location = %source.location(), "using quiz source");
    Ok(CatalogLoader::new(source))
}
