//! The `quizdeck validate` command.

use std::path::PathBuf;

use anyhow::{Context, Result};

use quizdeck_core::validate::{validate_catalog, validate_quiz, ValidationWarning};

pub async fn execute(source: Option<String>, config_path: Option<PathBuf>) -> Result<()> {
    let loader = super::build_loader(source.as_deref(), config_path.as_deref())?;
    let catalog = loader
        .load_catalog()
        .await
        .with_context(|| format!("failed to load catalog from {}", loader.source().location()))?;

    println!("Catalog: {} ({} quizzes)", loader.source().location(), catalog.len());

    let mut total_warnings = print_warnings(&validate_catalog(&catalog));
    let mut failed = 0;

    for entry in &catalog {
        match loader.load_quiz(&entry.file).await {
            Ok(quiz) => {
                println!("Quiz: {} ({} questions)", entry.label(), quiz.questions.len());
                total_warnings += print_warnings(&validate_quiz(&entry.file, &quiz));
            }
            Err(e) => {
                println!("Quiz: {} FAILED: {e}", entry.label());
                tracing::warn!(file = %entry.file, error = %e, "quiz failed to load");
                failed += 1;
            }
        }
    }

    if total_warnings == 0 && failed == 0 {
        println!("All quizzes valid.");
    } else if total_warnings > 0 {
        println!("\n{total_warnings} warning(s) found.");
    }

    anyhow::ensure!(failed == 0, "{failed} quiz file(s) failed to load");
    Ok(())
}

fn print_warnings(warnings: &[ValidationWarning]) -> usize {
    for w in warnings {
        let prefix = match (&w.file, w.question) {
            (Some(file), Some(n)) => format!("  [{file} #{n}]"),
            (Some(file), None) => format!("  [{file}]"),
            _ => "  ".to_string(),
        };
        println!("{prefix} WARNING: {}", w.message);
    }
    warnings.len()
}
