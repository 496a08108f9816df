//! Command handlers for a quiz front end.
//!
//! [`QuizApp`] owns the catalog, the [`QuizSession`], and the status line.
//! Every handler mutates that state and returns a [`RenderState`] snapshot,
//! so a front end only has to draw what it is handed.
//!
//! Quiz selection is split into [`QuizApp::begin_select`] and
//! [`QuizApp::complete_select`] so a front end may drive the fetch itself.
//! Each `begin_select` issues a newer [`SelectionTicket`]; completing an
//! older ticket is discarded and changes nothing.

use serde::Serialize;
use tracing::{info, warn};

use crate::error::LoadError;
use crate::loader::CatalogLoader;
use crate::model::{Quiz, QuizIndexEntry};
use crate::session::QuizSession;

pub const STATUS_LOADING: &str = "Loading…";
pub const STATUS_EMPTY_QUIZ: &str = "Quiz data is empty.";
pub const STATUS_NO_QUIZZES: &str = "No quizzes available.";
pub const STATUS_CORRECT: &str = "Nice!";
pub const STATUS_INCORRECT: &str = "So close!";

pub const LABEL_CORRECT: &str = "Correct";
pub const LABEL_INCORRECT: &str = "Incorrect";

/// A user action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Load the quiz with this catalog `file`.
    Select(String),
    Next,
    Previous,
    /// Judge this answer against the current question.
    Check(String),
}

/// One entry of the selectable quiz list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogOption {
    pub file: String,
    pub label: String,
}

/// Judging result as the presentation layer shows it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerdictView {
    pub correct: bool,
    pub label: String,
    pub accepted_answer: String,
}

/// Everything a front end needs to redraw.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderState {
    pub options: Vec<CatalogOption>,
    /// Catalog `file` of the loaded quiz.
    pub selected: Option<String>,
    pub title: Option<String>,
    /// Question number text; empty when there is no current question.
    pub number: String,
    pub prompt: String,
    /// One-based position and total.
    pub progress: Option<(usize, usize)>,
    /// The answer input must be emptied.
    pub clear_input: bool,
    pub verdict: Option<VerdictView>,
    pub status: String,
}

/// Handle for one in-flight quiz selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionTicket {
    generation: u64,
    file: String,
}

impl SelectionTicket {
    pub fn file(&self) -> &str {
        &self.file
    }
}

/// The composition root for one quiz-taking session.
pub struct QuizApp {
    loader: CatalogLoader,
    catalog: Vec<QuizIndexEntry>,
    session: QuizSession,
    selected: Option<String>,
    verdict: Option<VerdictView>,
    status: String,
    generation: u64,
}

impl QuizApp {
    pub fn new(loader: CatalogLoader) -> Self {
        Self {
            loader,
            catalog: Vec::new(),
            session: QuizSession::new(),
            selected: None,
            verdict: None,
            status: String::new(),
            generation: 0,
        }
    }

    pub fn catalog(&self) -> &[QuizIndexEntry] {
        &self.catalog
    }

    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    /// Load the catalog and start a quiz: `initial` if given, otherwise the
    /// first catalog entry.
    pub async fn init(&mut self, initial: Option<&str>) -> RenderState {
        self.catalog = match self.loader.load_catalog().await {
            Ok(catalog) => catalog,
            Err(e) => return self.init_failed(&e),
        };

        let file = match initial {
            Some(file) => file.to_string(),
            None => match self.catalog.first() {
                Some(entry) => entry.file.clone(),
                None => {
                    self.status = STATUS_NO_QUIZZES.to_string();
                    return self.snapshot(false);
                }
            },
        };

        let ticket = self.begin_select(&file);
        match self.loader.load_quiz(ticket.file()).await {
            Ok(quiz) => self.complete_select(ticket, Ok(quiz)),
            Err(e) => self.init_failed(&e),
        }
    }

    fn init_failed(&mut self, error: &LoadError) -> RenderState {
        warn!(error = %error, "initialization failed");
        self.status = format!("Initialization error: {error}");
        self.snapshot(false)
    }

    pub async fn dispatch(&mut self, command: Command) -> RenderState {
        match command {
            Command::Select(file) => self.select(&file).await,
            Command::Next => self.next(),
            Command::Previous => self.previous(),
            Command::Check(answer) => self.check(&answer),
        }
    }

    /// Load and install the quiz at `file`.
    pub async fn select(&mut self, file: &str) -> RenderState {
        let ticket = self.begin_select(file);
        let result = self.loader.load_quiz(ticket.file()).await;
        self.complete_select(ticket, result)
    }

    /// Start a selection. Any ticket issued earlier becomes stale.
    pub fn begin_select(&mut self, file: &str) -> SelectionTicket {
        self.generation += 1;
        self.status = STATUS_LOADING.to_string();
        SelectionTicket {
            generation: self.generation,
            file: file.to_string(),
        }
    }

    /// Apply the outcome of a selection started with [`Self::begin_select`].
    ///
    /// On failure the previously loaded quiz stays in place and the error
    /// becomes the status text.
    pub fn complete_select(
        &mut self,
        ticket: SelectionTicket,
        result: Result<Quiz, LoadError>,
    ) -> RenderState {
        if ticket.generation != self.generation {
            warn!(
                file = %ticket.file,
                generation = ticket.generation,
                latest = self.generation,
                "discarding stale quiz selection"
            );
            return self.snapshot(false);
        }

        match result {
            Ok(quiz) => {
                let entry = self.catalog.iter().find(|e| e.file == ticket.file);
                self.session.select_quiz(entry, quiz);
                info!(file = %ticket.file, "quiz started");
                self.selected = Some(ticket.file);
                self.render_question()
            }
            Err(e) => {
                warn!(file = %ticket.file, error = %e, "quiz selection failed");
                self.status = e.to_string();
                self.snapshot(false)
            }
        }
    }

    pub fn next(&mut self) -> RenderState {
        if self.session.quiz().is_none() {
            return self.snapshot(false);
        }
        self.session.advance();
        self.render_question()
    }

    pub fn previous(&mut self) -> RenderState {
        if self.session.quiz().is_none() {
            return self.snapshot(false);
        }
        self.session.retreat();
        self.render_question()
    }

    pub fn check(&mut self, answer: &str) -> RenderState {
        let Some(verdict) = self.session.judge(answer) else {
            return self.snapshot(false);
        };

        let (label, status) = if verdict.correct {
            (LABEL_CORRECT, STATUS_CORRECT)
        } else {
            (LABEL_INCORRECT, STATUS_INCORRECT)
        };
        self.verdict = Some(VerdictView {
            correct: verdict.correct,
            label: label.to_string(),
            accepted_answer: verdict.accepted_answer,
        });
        self.status = status.to_string();
        self.snapshot(false)
    }

    /// Current state without side effects.
    pub fn render_state(&self) -> RenderState {
        self.snapshot(false)
    }

    fn render_question(&mut self) -> RenderState {
        self.verdict = None;
        match (self.session.quiz(), self.session.progress()) {
            (Some(quiz), Some((position, total))) => {
                self.status = format!("{}: {position}/{total}", quiz.display_title());
                self.snapshot(true)
            }
            _ => {
                self.status = STATUS_EMPTY_QUIZ.to_string();
                self.snapshot(false)
            }
        }
    }

    fn snapshot(&self, clear_input: bool) -> RenderState {
        let question = self.session.current_question();
        RenderState {
            options: self
                .catalog
                .iter()
                .map(|e| CatalogOption {
                    file: e.file.clone(),
                    label: e.label().to_string(),
                })
                .collect(),
            selected: self.selected.clone(),
            title: self
                .session
                .quiz()
                .map(|q| q.display_title().to_string()),
            number: question
                .map(|q| q.display_number(self.session.position()))
                .unwrap_or_default(),
            prompt: question.map(|q| q.prompt().to_string()).unwrap_or_default(),
            progress: self.session.progress(),
            clear_input,
            verdict: self.verdict.clone(),
            status: self.status.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::testing::MemorySource;

    const INDEX: &str = r#"[
        {"id": "capitals", "title": "Capitals", "file": "capitals.json"},
        {"id": "rivers", "file": "rivers.json"}
    ]"#;

    const CAPITALS: &str = r#"{"questions": [
        {"no": 2, "q": "Capital of Japan?", "a": "Tokyo"},
        {"no": 1, "q": "Capital of France?", "a": "paris"},
        {"no": 3, "q": "Capital of Peru?", "a": "Lima"}
    ]}"#;

    const RIVERS: &str = r#"{"title": "Rivers", "questions": [
        {"q": "Longest river?", "a": "Nile"}
    ]}"#;

    fn app_with(bodies: &[(&str, &str)]) -> (QuizApp, Arc<MemorySource>) {
        let source = MemorySource::with(bodies);
        (QuizApp::new(CatalogLoader::new(source.clone())), source)
    }

    #[tokio::test]
    async fn init_starts_first_quiz() {
        let (mut app, _) = app_with(&[
            ("index.json", INDEX),
            ("capitals.json", CAPITALS),
        ]);
        let state = app.init(None).await;

        assert_eq!(state.options.len(), 2);
        assert_eq!(state.options[0].label, "Capitals");
        assert_eq!(state.options[1].label, "rivers");
        assert_eq!(state.selected.as_deref(), Some("capitals.json"));
        assert_eq!(state.title.as_deref(), Some("Capitals"));
        assert_eq!(state.number, "1");
        assert_eq!(state.prompt, "Capital of France?");
        assert_eq!(state.progress, Some((1, 3)));
        assert!(state.clear_input);
        assert_eq!(state.status, "Capitals: 1/3");
    }

    #[tokio::test]
    async fn init_with_missing_catalog_reports_error() {
        let (mut app, _) = app_with(&[]);
        let state = app.init(None).await;
        assert!(state.status.starts_with("Initialization error: "));
        assert!(state.status.contains("index.json"));
        assert!(state.options.is_empty());
        assert!(app.session().quiz().is_none());
    }

    #[tokio::test]
    async fn reload_with_non_array_catalog_keeps_state() {
        let (mut app, source) = app_with(&[
            ("index.json", INDEX),
            ("capitals.json", CAPITALS),
        ]);
        app.init(None).await;
        app.next();
        let before = app.render_state();

        source.put("index.json", "{}");
        let state = app.init(None).await;

        assert!(state.status.starts_with("Initialization error"), "{}", state.status);
        assert!(state.status.contains("must be an array"));
        assert_eq!(app.catalog().len(), 2);
        assert_eq!(state.options, before.options);
        assert_eq!(state.selected.as_deref(), Some("capitals.json"));
        assert_eq!(state.title.as_deref(), Some("Capitals"));
        assert_eq!(state.prompt, before.prompt);
        assert_eq!(app.session().position(), 1);
    }

    #[tokio::test]
    async fn catalog_entry_without_file_is_not_offered() {
        let (mut app, _) = app_with(&[
            ("index.json", r#"[{"title": "Draft"}, {"id": 1, "file": "capitals.json"}]"#),
            ("capitals.json", CAPITALS),
        ]);
        let state = app.init(None).await;
        assert_eq!(state.options.len(), 1);
        assert_eq!(state.options[0].label, "1");
        assert_eq!(state.selected.as_deref(), Some("capitals.json"));
    }

    #[tokio::test]
    async fn numeric_answer_is_judged_as_text() {
        let (mut app, _) = app_with(&[
            ("index.json", r#"[{"file": "math.json"}]"#),
            ("math.json", r#"{"questions": [{"no": 1, "q": "6*7?", "a": 42}]}"#),
        ]);
        app.init(None).await;
        let verdict = app.check(" 42 ").verdict.unwrap();
        assert!(verdict.correct);
        assert_eq!(verdict.accepted_answer, "42");
    }

    #[tokio::test]
    async fn init_with_empty_catalog() {
        let (mut app, _) = app_with(&[("index.json", "[]")]);
        let state = app.init(None).await;
        assert_eq!(state.status, STATUS_NO_QUIZZES);
        assert!(state.selected.is_none());
    }

    #[tokio::test]
    async fn init_honours_initial_file() {
        let (mut app, _) = app_with(&[
            ("index.json", INDEX),
            ("rivers.json", RIVERS),
        ]);
        let state = app.init(Some("rivers.json")).await;
        assert_eq!(state.title.as_deref(), Some("Rivers"));
        assert_eq!(state.number, "1");
    }

    #[tokio::test]
    async fn navigation_wraps_and_clears_verdict() {
        let (mut app, _) = app_with(&[
            ("index.json", INDEX),
            ("capitals.json", CAPITALS),
        ]);
        app.init(None).await;

        let state = app.dispatch(Command::Check("Paris".into())).await;
        assert!(state.verdict.is_some());

        let state = app.dispatch(Command::Previous).await;
        assert_eq!(state.number, "3");
        assert_eq!(state.status, "Capitals: 3/3");
        assert!(state.verdict.is_none());
        assert!(state.clear_input);

        let state = app.dispatch(Command::Next).await;
        assert_eq!(state.number, "1");
    }

    #[tokio::test]
    async fn check_reports_verdict_and_accepted_answer() {
        let (mut app, _) = app_with(&[
            ("index.json", INDEX),
            ("capitals.json", CAPITALS),
        ]);
        app.init(None).await;

        let state = app.check(" PARIS ");
        let verdict = state.verdict.unwrap();
        assert!(verdict.correct);
        assert_eq!(verdict.label, LABEL_CORRECT);
        assert_eq!(verdict.accepted_answer, "paris");
        assert_eq!(state.status, STATUS_CORRECT);
        assert!(!state.clear_input);

        app.next();
        let state = app.check("Tokyo!");
        let verdict = state.verdict.unwrap();
        assert!(!verdict.correct);
        assert_eq!(verdict.label, LABEL_INCORRECT);
        assert_eq!(verdict.accepted_answer, "Tokyo");
        assert_eq!(state.status, STATUS_INCORRECT);
    }

    #[tokio::test]
    async fn failed_selection_keeps_previous_quiz() {
        let (mut app, _) = app_with(&[
            ("index.json", INDEX),
            ("capitals.json", CAPITALS),
        ]);
        app.init(None).await;
        app.next();

        let state = app.select("rivers.json").await;
        assert!(state.status.contains("rivers.json"));
        assert_eq!(state.selected.as_deref(), Some("capitals.json"));
        assert_eq!(state.title.as_deref(), Some("Capitals"));
        assert_eq!(app.session().position(), 1);
    }

    #[tokio::test]
    async fn selecting_malformed_quiz_reports_shape_error() {
        let (mut app, source) = app_with(&[
            ("index.json", INDEX),
            ("capitals.json", CAPITALS),
        ]);
        app.init(None).await;
        source.put("rivers.json", r#"{"title": "Rivers"}"#);

        let state = app.select("rivers.json").await;
        assert!(state.status.contains("malformed"));
        assert_eq!(state.selected.as_deref(), Some("capitals.json"));
    }

    #[tokio::test]
    async fn stale_selection_is_discarded() {
        let (mut app, source) = app_with(&[
            ("index.json", INDEX),
            ("capitals.json", CAPITALS),
            ("rivers.json", RIVERS),
        ]);
        app.init(None).await;
        let loader = CatalogLoader::new(source);

        let first = app.begin_select("capitals.json");
        let second = app.begin_select("rivers.json");

        let rivers = loader.load_quiz(second.file()).await;
        let state = app.complete_select(second, rivers);
        assert_eq!(state.title.as_deref(), Some("Rivers"));

        let capitals = loader.load_quiz(first.file()).await;
        let state = app.complete_select(first, capitals);
        assert_eq!(state.selected.as_deref(), Some("rivers.json"));
        assert_eq!(state.title.as_deref(), Some("Rivers"));
        assert_eq!(state.status, "Rivers: 1/1");
    }

    #[tokio::test]
    async fn stale_failure_does_not_touch_status() {
        let (mut app, _) = app_with(&[
            ("index.json", INDEX),
            ("capitals.json", CAPITALS),
        ]);
        app.init(None).await;

        let stale = app.begin_select("rivers.json");
        let _latest = app.begin_select("capitals.json");
        let state = app.complete_select(
            stale,
            Err(LoadError::Unavailable {
                resource: "rivers.json".into(),
                status: 404,
            }),
        );
        assert_eq!(state.status, STATUS_LOADING);
    }

    #[tokio::test]
    async fn empty_quiz_renders_empty_message() {
        let (mut app, _) = app_with(&[
            ("index.json", r#"[{"file": "empty.json"}]"#),
            ("empty.json", r#"{"questions": []}"#),
        ]);
        let state = app.init(None).await;
        assert_eq!(state.status, STATUS_EMPTY_QUIZ);
        assert_eq!(state.number, "");
        assert_eq!(state.prompt, "");

        let state = app.next();
        assert_eq!(state.progress, None);
        let state = app.check("anything");
        assert!(state.verdict.is_none());
    }

    #[tokio::test]
    async fn commands_without_quiz_are_noops() {
        let (mut app, _) = app_with(&[]);
        let before = app.render_state();
        assert_eq!(app.dispatch(Command::Next).await, before);
        assert_eq!(app.dispatch(Command::Previous).await, before);
        assert_eq!(app.dispatch(Command::Check("x".into())).await, before);
    }
}
