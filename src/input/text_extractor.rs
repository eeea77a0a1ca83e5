//! Text extraction from various file formats

use crate::error::{MedScanError, Result};
use calamine::Reader;
use std::io::Cursor;
use std::path::Path;
use tokio::fs;

pub trait TextExtractor {
    fn extract(&self, path: &Path) -> impl std::future::Future<Output = Result<String>> + Send;
}

pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let content = fs::read_to_string(path).await.map_err(MedScanError::Io)?;
        Ok(content)
    }
}

pub struct CsvExtractor;

impl TextExtractor for CsvExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let content = fs::read_to_string(path).await.map_err(MedScanError::Io)?;

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(content.as_bytes());

        let mut lines = Vec::new();
        for record in reader.records() {
            let record = record.map_err(|e| {
                MedScanError::CsvParse(format!(
                    "Failed to parse CSV record in '{}': {}",
                    path.display(),
                    e
                ))
            })?;
            let fields: Vec<&str> = record.iter().collect();
            lines.push(fields.join(" "));
        }

        Ok(lines.join("\n"))
    }
}

pub struct SpreadsheetExtractor;

impl TextExtractor for SpreadsheetExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).await.map_err(MedScanError::Io)?;

        let mut workbook = calamine::open_workbook_auto_from_rs(Cursor::new(bytes))
            .map_err(|e| {
                MedScanError::SpreadsheetParse(format!(
                    "Failed to open spreadsheet '{}': {}",
                    path.display(),
                    e
                ))
            })?;

        // All sheets are concatenated in workbook order without boundary
        // markers, so the analyzer sees a single flat text.
        let mut sheet_texts = Vec::new();
        for sheet_name in workbook.sheet_names().to_vec() {
            let range = workbook.worksheet_range(&sheet_name).map_err(|e| {
                MedScanError::SpreadsheetParse(format!(
                    "Failed to read sheet '{}' in '{}': {}",
                    sheet_name,
                    path.display(),
                    e
                ))
            })?;

            let mut lines = Vec::new();
            for row in range.rows() {
                let cells: Vec<String> = row.iter().map(cell_to_string).collect();
                lines.push(cells.join(","));
            }
            sheet_texts.push(lines.join("\n"));
        }

        Ok(sheet_texts.join("\n"))
    }
}

fn cell_to_string(cell: &calamine::Data) -> String {
    match cell {
        calamine::Data::Empty => String::new(),
        calamine::Data::String(s) => s.clone(),
        calamine::Data::Float(f) => f.to_string(),
        calamine::Data::Int(i) => i.to_string(),
        calamine::Data::Bool(b) => b.to_string(),
        calamine::Data::DateTime(dt) => dt.to_string(),
        other => format!("{}", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn csv_fields_join_with_space_rows_with_newline() {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        writeln!(file, "Patient Name:,Jane Doe").unwrap();
        writeln!(file, "Age:,47").unwrap();

        let text = CsvExtractor.extract(file.path()).await.unwrap();
        assert_eq!(text, "Patient Name: Jane Doe\nAge: 47");
    }

    #[tokio::test]
    async fn plain_text_is_read_verbatim() {
        let mut file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
        write!(file, "diabetes mentioned once").unwrap();

        let text = PlainTextExtractor.extract(file.path()).await.unwrap();
        assert_eq!(text, "diabetes mentioned once");
    }
}
