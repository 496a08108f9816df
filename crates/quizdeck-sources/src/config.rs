//! Source configuration and factory.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use quizdeck_core::QuizSource;

use crate::dir::DirSource;
use crate::http::{HttpSource, DEFAULT_TIMEOUT_SECS};

/// Where the quiz directory lives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SourceConfig {
    Http {
        base_url: String,
    },
    Dir {
        #[serde(default = "default_data_dir")]
        path: PathBuf,
    },
}

impl SourceConfig {
    /// Interpret a command-line location: `http://` and `https://` URLs are
    /// HTTP sources, anything else is a directory.
    pub fn from_location(location: &str) -> Self {
        if location.starts_with("http://") || location.starts_with("https://") {
            SourceConfig::Http {
                base_url: location.to_string(),
            }
        } else {
            SourceConfig::Dir {
                path: PathBuf::from(location),
            }
        }
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        SourceConfig::Dir {
            path: default_data_dir(),
        }
    }
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("./data/quizzes")
}

/// Top-level quizdeck configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizdeckConfig {
    #[serde(default)]
    pub source: SourceConfig,
    /// HTTP request timeout.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_timeout() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for QuizdeckConfig {
    fn default() -> Self {
        Self {
            source: SourceConfig::default(),
            timeout_secs: default_timeout(),
        }
    }
}

/// Resolve environment variable references like `${VAR_NAME}` in a string.
///
/// Substituted values are not scanned again.
fn resolve_env_vars(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(start) = rest.find("${") {
        let Some(end) = rest[start..].find('}') else {
            break;
        };
        result.push_str(&rest[..start]);
        let var_name = &rest[start + 2..start + end];
        result.push_str(&std::env::var(var_name).unwrap_or_default());
        rest = &rest[start + end + 1..];
    }
    result.push_str(rest);
    result
}

fn resolve_source_config(config: &SourceConfig) -> SourceConfig {
    match config {
        SourceConfig::Http { base_url } => SourceConfig::Http {
            base_url: resolve_env_vars(base_url),
        },
        SourceConfig::Dir { path } => SourceConfig::Dir {
            path: PathBuf::from(resolve_env_vars(&path.to_string_lossy())),
        },
    }
}

/// Load config from an explicit path, or search the well-known paths:
///
/// 1. `quizdeck.toml` in the current directory
/// 2. `~/.config/quizdeck/config.toml`
///
/// Environment variable overrides: `QUIZDECK_BASE_URL`, `QUIZDECK_DATA_DIR`.
pub fn load_config_from(path: Option<&Path>) -> Result<QuizdeckConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("quizdeck.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            toml::from_str::<QuizdeckConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => QuizdeckConfig::default(),
    };

    apply_env_overrides(&mut config);
    config.source = resolve_source_config(&config.source);

    Ok(config)
}

fn apply_env_overrides(config: &mut QuizdeckConfig) {
    if let Ok(dir) = std::env::var("QUIZDECK_DATA_DIR") {
        config.source = SourceConfig::Dir {
            path: PathBuf::from(dir),
        };
    }
    if let Ok(base_url) = std::env::var("QUIZDECK_BASE_URL") {
        config.source = SourceConfig::Http { base_url };
    }
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("quizdeck"))
}

/// Create a source from its configuration.
pub fn create_source(config: &QuizdeckConfig) -> Result<Arc<dyn QuizSource>> {
    match &config.source {
        SourceConfig::Http { base_url } => Ok(Arc::new(
            HttpSource::new(base_url, config.timeout_secs)
                .with_context(|| format!("invalid HTTP source: {base_url}"))?,
        )),
        SourceConfig::Dir { path } => Ok(Arc::new(DirSource::new(path.clone()))),
    }
}
