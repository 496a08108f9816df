//! Plain-text drawing of render-state snapshots.

use std::io::{self, Write};

use quizdeck_core::RenderState;

/// Draw the parts of `state` a terminal user needs after a command.
///
/// A verdict replaces the question line; otherwise the current question is
/// shown. The status line always comes last.
pub fn draw(out: &mut impl Write, state: &RenderState) -> io::Result<()> {
    if let Some(verdict) = &state.verdict {
        writeln!(
            out,
            "{} (answer: {})",
            verdict.label, verdict.accepted_answer
        )?;
    } else if state.clear_input && state.progress.is_some() {
        writeln!(out)?;
        writeln!(out, "Q{}. {}", state.number, state.prompt)?;
    }
    if !state.status.is_empty() {
        writeln!(out, "[{}]", state.status)?;
    }
    Ok(())
}

/// Numbered quiz list, marking the loaded quiz.
pub fn draw_catalog(out: &mut impl Write, state: &RenderState) -> io::Result<()> {
    if state.options.is_empty() {
        return writeln!(out, "No quizzes available.");
    }
    for (i, option) in state.options.iter().enumerate() {
        let marker = if state.selected.as_deref() == Some(option.file.as_str()) {
            '*'
        } else {
            ' '
        };
        writeln!(out, "{marker} {}. {} ({})", i + 1, option.label, option.file)?;
    }
    Ok(())
}

pub fn draw_help(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "Type an answer and press Enter to check it.")?;
    writeln!(out, "  :next, :n           next question")?;
    writeln!(out, "  :prev, :p           previous question")?;
    writeln!(out, "  :list, :l           list quizzes")?;
    writeln!(out, "  :select, :s <quiz>  switch quiz by number or file")?;
    writeln!(out, "  :help, :h           show this help")?;
    writeln!(out, "  :quit, :q           leave")?;
    writeln!(out, "Start an answer with `::` to check a literal `:`-prefixed answer.")
}
