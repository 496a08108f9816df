//! Quiz session: the loaded quiz, the current position, and judging.
//!
//! Positions form a ring over the question list. `advance` and `retreat`
//! wrap in both directions and every (re)load starts at position 0.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::judge::answers_match;
use crate::model::{Question, Quiz, QuizIndexEntry};

/// Outcome of judging one answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    pub correct: bool,
    /// The stored answer, as written in the quiz file.
    pub accepted_answer: String,
}

/// Navigation and judging state for one quiz at a time.
#[derive(Debug, Default)]
pub struct QuizSession {
    quiz: Option<Quiz>,
    position: usize,
}

impl QuizSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a freshly loaded quiz.
    ///
    /// A missing quiz title is filled from the catalog entry. Questions are
    /// stably sorted by `no` and the position resets to the first question.
    pub fn select_quiz(&mut self, entry: Option<&QuizIndexEntry>, mut quiz: Quiz) {
        let untitled = quiz.title.as_deref().map_or(true, str::is_empty);
        if untitled {
            if let Some(title) = entry.and_then(|e| e.title.clone()) {
                quiz.title = Some(title);
            }
        }
        quiz.sort_questions();
        debug!(
            title = quiz.display_title(),
            questions = quiz.questions.len(),
            "quiz selected"
        );
        self.quiz = Some(quiz);
        self.position = 0;
    }

    pub fn quiz(&self) -> Option<&Quiz> {
        self.quiz.as_ref()
    }

    pub fn position(&self) -> usize {
        self.position
    }

    /// Number of questions in the loaded quiz (0 when nothing is loaded).
    pub fn len(&self) -> usize {
        self.quiz.as_ref().map_or(0, |q| q.questions.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// One-based position and total, for "i/N" progress text.
    pub fn progress(&self) -> Option<(usize, usize)> {
        self.current_question()
            .map(|_| (self.position + 1, self.len()))
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.quiz.as_ref()?.questions.get(self.position)
    }

    /// Move to the next question, wrapping from the last to the first.
    pub fn advance(&mut self) {
        let len = self.len();
        if len == 0 {
            return;
        }
        self.position = (self.position + 1) % len;
        debug!(position = self.position, "advanced");
    }

    /// Move to the previous question, wrapping from the first to the last.
    pub fn retreat(&mut self) {
        let len = self.len();
        if len == 0 {
            return;
        }
        self.position = (self.position + len - 1) % len;
        debug!(position = self.position, "retreated");
    }

    /// Judge `raw_answer` against the current question.
    ///
    /// Returns `None` when there is no current question.
    pub fn judge(&self, raw_answer: &str) -> Option<Verdict> {
        let question = self.current_question()?;
        Some(Verdict {
            correct: answers_match(Some(raw_answer), question.a.as_deref()),
            accepted_answer: question.answer().to_string(),
        })
    }
}
