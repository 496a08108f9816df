//! Lint checks for catalogs and quizzes.
//!
//! Nothing here is fatal: a quiz with warnings still plays. The checks
//! catch authoring mistakes that make a quiz awkward to take.

use std::collections::HashSet;

use crate::model::{Quiz, QuizIndexEntry};

/// A warning from catalog or quiz validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationWarning {
    /// The quiz file the warning belongs to, if any.
    pub file: Option<String>,
    /// One-based question position after sorting, if applicable.
    pub question: Option<usize>,
    pub message: String,
}

impl ValidationWarning {
    fn catalog(file: Option<&str>, message: String) -> Self {
        Self {
            file: file.map(String::from),
            question: None,
            message,
        }
    }
}

/// Validate the catalog for duplicate and unlabeled entries.
pub fn validate_catalog(entries: &[QuizIndexEntry]) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    if entries.is_empty() {
        warnings.push(ValidationWarning::catalog(None, "catalog is empty".into()));
    }

    let mut seen_files = HashSet::new();
    for entry in entries {
        if !seen_files.insert(entry.file.as_str()) {
            warnings.push(ValidationWarning::catalog(
                Some(&entry.file),
                format!("duplicate catalog file: {}", entry.file),
            ));
        }
    }

    for entry in entries {
        if entry.title.is_none() && entry.id.is_none() {
            warnings.push(ValidationWarning::catalog(
                Some(&entry.file),
                "entry has neither title nor id; the file name will be shown".into(),
            ));
        }
    }

    warnings
}

/// Validate one quiz. `quiz` is expected in file order; questions are
/// reported by their position after sorting.
pub fn validate_quiz(file: &str, quiz: &Quiz) -> Vec<ValidationWarning> {
    let mut sorted = quiz.clone();
    sorted.sort_questions();

    let warn = |question: Option<usize>, message: String| ValidationWarning {
        file: Some(file.to_string()),
        question,
        message,
    };
    let mut warnings = Vec::new();

    if sorted.questions.is_empty() {
        warnings.push(warn(None, "quiz has no questions".into()));
        return warnings;
    }

    let mut seen_numbers = HashSet::new();
    for question in &sorted.questions {
        if let Some(no) = question.no {
            if !seen_numbers.insert(no.to_bits()) {
                warnings.push(warn(None, format!("duplicate question number: {no}")));
            }
        }
    }

    for (i, question) in sorted.questions.iter().enumerate() {
        if question.prompt().trim().is_empty() {
            warnings.push(warn(Some(i + 1), "prompt is empty".into()));
        }
        if question.answer().trim().is_empty() {
            warnings.push(warn(
                Some(i + 1),
                "answer is missing; only a blank reply will be accepted".into(),
            ));
        }
    }

    warnings
}
