//! The `quizdeck list` command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use comfy_table::{Cell, Table};

use quizdeck_core::QuizIndexEntry;

pub async fn execute(source: Option<String>, config_path: Option<PathBuf>) -> Result<()> {
    let loader = super::build_loader(source.as_deref(), config_path.as_deref())?;
    let catalog = loader
        .load_catalog()
        .await
        .with_context(|| format!("failed to load catalog from {}", loader.source().location()))?;

    if catalog.is_empty() {
        println!("No quizzes available.");
        return Ok(());
    }

    println!("{}", catalog_table(&catalog));
    Ok(())
}

fn catalog_table(catalog: &[QuizIndexEntry]) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["#", "File", "Id", "Title"]);

    for (i, entry) in catalog.iter().enumerate() {
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(&entry.file),
            Cell::new(entry.id.as_deref().unwrap_or("-")),
            Cell::new(entry.title.as_deref().unwrap_or("-")),
        ]);
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_has_one_row_per_entry() {
        let catalog = vec![
            QuizIndexEntry {
                id: Some("capitals".into()),
                title: Some("Capitals".into()),
                file: "capitals.json".into(),
            },
            QuizIndexEntry {
                id: None,
                title: None,
                file: "misc.json".into(),
            },
        ];
        let rendered = catalog_table(&catalog).to_string();
        assert!(rendered.contains("capitals.json"));
        assert!(rendered.contains("Capitals"));
        assert!(rendered.contains("misc.json"));
    }
}
