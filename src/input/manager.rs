//! Input manager for handling different file types

use crate::error::{MedScanError, Result};
use crate::input::file_detector::FileType;
use crate::input::text_extractor::{
    CsvExtractor, PlainTextExtractor, SpreadsheetExtractor, TextExtractor,
};
use log::info;
use std::collections::HashMap;
use std::path::Path;

/// Text extracted from a report file, along with the metadata the
/// analyzer needs (declared type and byte size).
#[derive(Debug, Clone)]
pub struct ExtractedReport {
    pub content: String,
    pub file_type: FileType,
    pub byte_size: u64,
}

pub struct InputManager {
    cache: HashMap<String, ExtractedReport>,
    enable_cache: bool,
}

impl InputManager {
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
            enable_cache: true,
        }
    }

    pub fn with_cache(mut self, enable: bool) -> Self {
        self.enable_cache = enable;
        self
    }

    pub async fn extract_report(&mut self, path: &Path) -> Result<ExtractedReport> {
        let path_str = path.to_string_lossy().to_string();

        // Check cache first
        if self.enable_cache {
            if let Some(cached) = self.cache.get(&path_str) {
                info!("Using cached text for: {}", path.display());
                return Ok(cached.clone());
            }
        }

        // Validate file exists
        if !path.exists() {
            return Err(MedScanError::InvalidInput(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        // Detect file type; unsupported extensions fail before any read
        let file_type = self.detect_file_type(path)?;

        let content = match &file_type {
            FileType::Text => {
                info!("Reading plain text report: {}", path.display());
                PlainTextExtractor.extract(path).await?
            }
            FileType::Csv => {
                info!("Parsing CSV report: {}", path.display());
                CsvExtractor.extract(path).await?
            }
            FileType::Spreadsheet => {
                info!("Parsing spreadsheet report: {}", path.display());
                SpreadsheetExtractor.extract(path).await?
            }
            FileType::Unknown => {
                return Err(MedScanError::UnsupportedFormat(format!(
                    "Unsupported file type for: {}",
                    path.display()
                )));
            }
        };

        let byte_size = tokio::fs::metadata(path).await.map(|m| m.len())?;

        let report = ExtractedReport {
            content,
            file_type,
            byte_size,
        };

        // Cache the result
        if self.enable_cache {
            self.cache.insert(path_str, report.clone());
        }

        Ok(report)
    }

    fn detect_file_type(&self, path: &Path) -> Result<FileType> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| {
                MedScanError::InvalidInput(format!("File has no extension: {}", path.display()))
            })?;

        Ok(FileType::from_extension(extension))
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}
