//! The `quizdeck init` command.

use std::path::Path;

use anyhow::Result;

const DATA_DIR: &str = "data/quizzes";

pub fn execute() -> Result<()> {
    write_if_missing(Path::new("quizdeck.toml"), SAMPLE_CONFIG)?;

    std::fs::create_dir_all(DATA_DIR)?;
    write_if_missing(&Path::new(DATA_DIR).join("index.json"), SAMPLE_INDEX)?;
    write_if_missing(&Path::new(DATA_DIR).join("capitals.json"), SAMPLE_QUIZ)?;

    println!("\nNext steps:");
    println!("  1. Add quizzes to {DATA_DIR}/ and list them in index.json");
    println!("  2. Run: quizdeck validate");
    println!("  3. Run: quizdeck play");

    Ok(())
}

fn write_if_missing(path: &Path, content: &str) -> Result<()> {
    if path.exists() {
        println!("{} already exists, skipping.", path.display());
    } else {
        std::fs::write(path, content)?;
        println!("Created {}", path.display());
    }
    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# quizdeck configuration

timeout_secs = 30

[source]
type = "dir"
path = "./data/quizzes"

# Serve quizzes over HTTP instead:
# [source]
# type = "http"
# base_url = "https://example.com/data/quizzes"
"#;

const SAMPLE_INDEX: &str = r#"[
  { "id": "capitals", "title": "World Capitals", "file": "capitals.json" }
]
"#;

const SAMPLE_QUIZ: &str = r#"{
  "title": "World Capitals",
  "questions": [
    { "no": 1, "q": "What is the capital of France?", "a": "Paris" },
    { "no": 2, "q": "What is the capital of Japan?", "a": "Tokyo" },
    { "no": 3, "q": "What is the capital of Peru?", "a": "Lima" }
  ]
}
"#;
