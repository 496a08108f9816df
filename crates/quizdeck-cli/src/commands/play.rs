//! The `quizdeck play` command.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

use quizdeck_core::{Command, QuizApp};

use crate::render;

/// One line of user input.
#[derive(Debug, PartialEq, Eq)]
enum Input {
    Command(Command),
    Select(String),
    List,
    Help,
    Quit,
    Unknown(String),
}

/// Lines starting with `:` are commands; `::` escapes a literal answer that
/// begins with a colon.
fn parse_input(line: &str) -> Input {
    if let Some(literal) = line.trim_start().strip_prefix("::") {
        return Input::Command(Command::Check(format!(":{literal}")));
    }
    let Some(rest) = line.trim().strip_prefix(':') else {
        return Input::Command(Command::Check(line.to_string()));
    };

    let (name, arg) = match rest.split_once(char::is_whitespace) {
        Some((name, arg)) => (name, arg.trim()),
        None => (rest, ""),
    };
    match name {
        "n" | "next" => Input::Command(Command::Next),
        "p" | "prev" => Input::Command(Command::Previous),
        "l" | "list" => Input::List,
        "s" | "select" if !arg.is_empty() => Input::Select(arg.to_string()),
        "h" | "help" => Input::Help,
        "q" | "quit" => Input::Quit,
        _ => Input::Unknown(rest.to_string()),
    }
}

/// Resolve a `:select` argument: a 1-based catalog number or a file name.
fn resolve_selection(app: &QuizApp, arg: &str) -> String {
    arg.parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|i| app.catalog().get(i))
        .map(|entry| entry.file.clone())
        .unwrap_or_else(|| arg.to_string())
}

pub async fn execute(
    quiz: Option<String>,
    source: Option<String>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let loader = super::build_loader(source.as_deref(), config_path.as_deref())?;
    let mut app = QuizApp::new(loader);
    let input = BufReader::new(tokio::io::stdin());
    let mut out = std::io::stdout();

    run_loop(&mut app, quiz.as_deref(), input, &mut out).await
}

/// Drive `app` from `input` lines until `:quit` or end of input.
pub async fn run_loop<R, W>(
    app: &mut QuizApp,
    initial: Option<&str>,
    input: R,
    out: &mut W,
) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let state = app.init(initial).await;
    render::draw(out, &state)?;

    let mut lines = input.lines();
    loop {
        write!(out, "> ")?;
        out.flush()?;

        let Some(line) = lines.next_line().await? else {
            writeln!(out)?;
            break;
        };

        match parse_input(&line) {
            Input::Command(command) => {
                let state = app.dispatch(command).await;
                render::draw(out, &state)?;
            }
            Input::Select(arg) => {
                let file = resolve_selection(app, &arg);
                let state = app.select(&file).await;
                render::draw(out, &state)?;
            }
            Input::List => render::draw_catalog(out, &app.render_state())?,
            Input::Help => render::draw_help(out)?,
            Input::Quit => break,
            Input::Unknown(command) => {
                writeln!(out, "Unknown command `:{command}`. Type :help for commands.")?;
            }
        }
    }

    Ok(())
}
