//! Analysis result structures

use serde::{Deserialize, Serialize};

/// One extracted demographic field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyInformation {
    pub label: String,
    pub value: String,
}

/// A matched condition with its occurrence-derived confidence score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionMatch {
    pub name: String,
    /// Heuristic 0-100 value derived from raw occurrence count,
    /// not a statistical probability.
    pub confidence: u8,
}

/// Complete result of analyzing one report file.
///
/// Created fresh on each analysis and never persisted; a pure function
/// of the report content, declared type, and byte size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub file_type: String,
    pub file_size: String,
    pub key_information: Vec<KeyInformation>,
    pub medical_terms: Vec<String>,
    pub potential_conditions: Vec<ConditionMatch>,
    pub risk_factors: Vec<String>,
    pub recommendations: Vec<String>,
}

/// Format a byte count for display, e.g. "12.4 KB".
pub fn format_file_size(bytes: u64) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = KB * 1024.0;

    let bytes = bytes as f64;
    if bytes >= MB {
        format!("{:.1} MB", bytes / MB)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes / KB)
    } else {
        format!("{} bytes", bytes as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_sizes_format_by_magnitude() {
        assert_eq!(format_file_size(512), "512 bytes");
        assert_eq!(format_file_size(12_698), "12.4 KB");
        assert_eq!(format_file_size(3 * 1024 * 1024), "3.0 MB");
    }
}
