use crate::core::summary::total_label;
use crate::core::MenuRenderer;
use crate::domain::model::MenuEntry;
use crate::utils::error::{MenuError, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt::Write as _;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Csv,
}

pub fn renderer_for(format: OutputFormat) -> Box<dyn MenuRenderer> {
    match format {
        OutputFormat::Table => Box::new(TableRenderer),
        OutputFormat::Json => Box::new(JsonRenderer),
        OutputFormat::Csv => Box::new(CsvRenderer),
    }
}

/// Card-style text, one block per entry.
#[derive(Debug, Clone, Copy, Default)]
pub struct TableRenderer;

impl MenuRenderer for TableRenderer {
    fn render(&self, title: &str, entries: &[&MenuEntry]) -> Result<String> {
        let mut out = String::new();
        let _ = writeln!(out, "{}", title);
        let _ = writeln!(out, "{}", total_label(entries.len()));

        for entry in entries {
            let _ = writeln!(out);
            let _ = writeln!(out, "[{}] {}  ${}", entry.id(), entry.name(), entry.price());
            let _ = writeln!(out, "    {}", entry.description());
            let _ = writeln!(out, "    Course: {}", entry.course());
        }

        Ok(out)
    }
}

#[derive(Debug, Serialize)]
struct JsonDocument<'a> {
    title: &'a str,
    generated_at: DateTime<Utc>,
    count: usize,
    items: &'a [&'a MenuEntry],
}

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer;

impl MenuRenderer for JsonRenderer {
    fn render(&self, title: &str, entries: &[&MenuEntry]) -> Result<String> {
        let document = JsonDocument {
            title,
            generated_at: Utc::now(),
            count: entries.len(),
            items: entries,
        };
        Ok(serde_json::to_string_pretty(&document)?)
    }
}

#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    id: &'a str,
    name: &'a str,
    description: &'a str,
    course: &'static str,
    price: String,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CsvRenderer;

impl MenuRenderer for CsvRenderer {
    fn render(&self, _title: &str, entries: &[&MenuEntry]) -> Result<String> {
        let mut writer = csv::Writer::from_writer(Vec::new());

        if entries.is_empty() {
            writer.write_record(["id", "name", "description", "course", "price"])?;
        }
        for entry in entries {
            writer.serialize(CsvRow {
                id: entry.id().as_str(),
                name: entry.name(),
                description: entry.description(),
                course: entry.course().as_str(),
                price: entry.price().to_string(),
            })?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| MenuError::IoError(e.into_error()))?;
        String::from_utf8(bytes).map_err(|e| MenuError::ProcessingError {
            message: format!("CSV output is not UTF-8: {}", e),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::MenuCatalog;
    use crate::domain::model::Course;

    #[test]
    fn test_table_output() {
        let catalog = MenuCatalog::with_default_seed();
        let mains = catalog.filter_by_course(Some(Course::Main));
        let out = TableRenderer.render("Digital Menu", &mains).unwrap();

        assert!(out.starts_with("Digital Menu\n2 items total\n"));
        assert!(out.contains("[2] Grilled Salmon  $24.99"));
        assert!(out.contains("    Course: Main"));
        assert!(!out.contains("Tiramisu"));
    }

    #[test]
    fn test_json_output() {
        let catalog = MenuCatalog::with_default_seed();
        let all = catalog.filter_by_course(None);
        let out = JsonRenderer.render("Digital Menu", &all).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(value["title"], "Digital Menu");
        assert_eq!(value["count"], 6);
        assert_eq!(value["items"][0]["id"], "1");
        assert_eq!(value["items"][0]["course"], "Starter");
        assert_eq!(value["items"][0]["price"], "12.99");
        assert!(value["generated_at"].is_string());
    }

    #[test]
    fn test_csv_output() {
        let catalog = MenuCatalog::with_default_seed();
        let desserts = catalog.filter_by_course(Some(Course::Dessert));
        let out = CsvRenderer.render("Digital Menu", &desserts).unwrap();
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines[0], "id,name,description,course,price");
        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("3,Chocolate Lava Cake,"));
        assert!(lines[1].ends_with(",Dessert,8.99"));
    }

    #[test]
    fn test_csv_output_without_entries_keeps_header() {
        let out = CsvRenderer.render("Empty", &[]).unwrap();
        assert_eq!(out.trim_end(), "id,name,description,course,price");
    }
}
