//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use docsift_extractor::{FeatureRecord, FolderFeatures};
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

const SENTENCE_WIDTH: usize = 60;

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format the records of one document.
    pub fn format_records(&self, records: &[FeatureRecord]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(records)?),
            OutputFormat::Table => Ok(self.format_records_table(records)),
            OutputFormat::Quiet => Ok(records.len().to_string()),
        }
    }

    /// Format the outcome of a folder run.
    pub fn format_folder(&self, folder: &FolderFeatures) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(folder)?),
            OutputFormat::Table => {
                if folder.documents.is_empty() && folder.failures.is_empty() {
                    return Ok(self.colorize("No PDF files found.", "yellow"));
                }

                let mut sections = Vec::new();
                for document in &folder.documents {
                    sections.push(format!(
                        "{}\n{}",
                        self.colorize(&document.source, "cyan"),
                        self.format_records_table(&document.records)
                    ));
                }
                for failure in &folder.failures {
                    sections.push(self.error(&format!(
                        "{} [{}]: {}",
                        failure.file_name, failure.kind, failure.reason
                    )));
                }
                Ok(sections.join("\n\n"))
            }
            OutputFormat::Quiet => {
                let mut lines: Vec<String> = folder
                    .documents
                    .iter()
                    .map(|d| format!("{}\t{}", d.source, d.records.len()))
                    .collect();
                lines.extend(
                    folder
                        .failures
                        .iter()
                        .map(|f| format!("{}\t{}", f.file_name, f.kind)),
                );
                Ok(lines.join("\n"))
            }
        }
    }

    /// Format a list of PDF file names.
    pub fn format_files(&self, files: &[String]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(files)?),
            OutputFormat::Table if files.is_empty() => {
                Ok(self.colorize("No PDF files found.", "yellow"))
            }
            OutputFormat::Table | OutputFormat::Quiet => Ok(files.join("\n")),
        }
    }

    fn format_records_table(&self, records: &[FeatureRecord]) -> String {
        if records.is_empty() {
            return self.colorize("No sentences found.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(["#", "Sentence", "Dates", "Emails"]);

        for (index, record) in records.iter().enumerate() {
            let dates: Vec<&str> = record.dates.iter().map(|d| d.text.as_str()).collect();
            builder.push_record([
                (index + 1).to_string(),
                truncate(&record.text, SENTENCE_WIDTH),
                dates.join("; "),
                record.email_addresses.join("; "),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        table.to_string()
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}

/// Shorten `text` to at most `width` characters, marking the cut with "...".
fn truncate(text: &str, width: usize) -> String {
    // Sentences may span lines in the source PDF
    let flat = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.chars().count() <= width {
        return flat;
    }
    let kept: String = flat.chars().take(width.saturating_sub(3)).collect();
    format!("{}...", kept)
}
