//! File type detection

#[derive(Debug, Clone, PartialEq)]
pub enum FileType {
    Text,
    Csv,
    Spreadsheet,
    Unknown,
}

impl FileType {
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "txt" => FileType::Text,
            "csv" => FileType::Csv,
            "xlsx" | "xls" => FileType::Spreadsheet,
            _ => FileType::Unknown,
        }
    }

    /// Label used in rendered reports, e.g. "text/plain".
    pub fn label(&self) -> &'static str {
        match self {
            FileType::Text => "text/plain",
            FileType::Csv => "text/csv",
            FileType::Spreadsheet => "application/vnd.ms-excel",
            FileType::Unknown => "unknown",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_supported_extensions_case_insensitively() {
        assert_eq!(FileType::from_extension("TXT"), FileType::Text);
        assert_eq!(FileType::from_extension("csv"), FileType::Csv);
        assert_eq!(FileType::from_extension("XLSX"), FileType::Spreadsheet);
        assert_eq!(FileType::from_extension("xls"), FileType::Spreadsheet);
        assert_eq!(FileType::from_extension("pdf"), FileType::Unknown);
    }
}
