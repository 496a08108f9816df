//! quizdeck-sources — Where quiz files come from.
//!
//! Implements the `QuizSource` trait for HTTP(S) servers and local
//! directories, and loads the quizdeck configuration that picks between them.

pub mod config;
pub mod dir;
pub mod http;
pub mod mock;
mod resource;

pub use config::{create_source, load_config_from, QuizdeckConfig, SourceConfig};
pub use dir::DirSource;
pub use http::HttpSource;
pub use mock::MockSource;
