//! quizdeck-core — Quiz model, answer judging, and session navigation.
//!
//! This crate defines the data model, the catalog loader, the quiz session
//! state machine, and the command handlers that the quizdeck front ends
//! bind to. It has no terminal or network dependency of its own; transports
//! plug in through [`traits::QuizSource`].

pub mod app;
pub mod error;
pub mod judge;
pub mod loader;
pub mod model;
pub mod session;
pub mod traits;
pub mod validate;

#[cfg(test)]
mod testing;

pub use app::{Command, QuizApp, RenderState, SelectionTicket};
pub use error::LoadError;
pub use loader::CatalogLoader;
pub use model::{Question, Quiz, QuizIndexEntry};
pub use session::{QuizSession, Verdict};
pub use traits::QuizSource;
