//! Demographic field extraction via fixed regex patterns

use crate::analysis::report::KeyInformation;
use once_cell::sync::Lazy;
use regex::Regex;

/// Value recorded when a labeled pattern finds no match.
pub const NOT_FOUND: &str = "Not Found";

// Pre-compiled patterns for the four labeled fields (compiled once,
// used many times). Applied against the original-case content so the
// captured values keep their original casing. The separator class
// accepts a comma so labels survive the comma-joined spreadsheet rows.
static PATIENT_NAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?im)patient\s*name\s*[:\-][\s,]*(.+)").unwrap());

static AGE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?im)\bage\s*[:\-][\s,]*(\d{1,3})").unwrap());

static GENDER_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?im)\bgender\s*[:\-][\s,]*([a-zA-Z]+)").unwrap());

static DATE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?im)\bdate\s*[:\-][\s,]*([0-9]{1,4}[/\-.][0-9]{1,2}[/\-.][0-9]{1,4})").unwrap()
});

/// Extract the four fixed demographic fields from the report content.
///
/// Each entry records the first capture group trimmed of whitespace, or
/// the literal "Not Found" when the pattern does not match. The output
/// always contains exactly four entries in a fixed order.
pub fn extract_key_information(content: &str) -> Vec<KeyInformation> {
    let fields: [(&str, &Lazy<Regex>); 4] = [
        ("Patient Name", &PATIENT_NAME_PATTERN),
        ("Age", &AGE_PATTERN),
        ("Gender", &GENDER_PATTERN),
        ("Date", &DATE_PATTERN),
    ];

    fields
        .iter()
        .map(|(label, pattern)| {
            let value = pattern
                .captures(content)
                .and_then(|caps| caps.get(1))
                .map(|m| m.as_str().trim().to_string())
                .unwrap_or_else(|| NOT_FOUND.to_string());

            KeyInformation {
                label: label.to_string(),
                value,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn value_of<'a>(info: &'a [KeyInformation], label: &str) -> &'a str {
        &info.iter().find(|ki| ki.label == label).unwrap().value
    }

    #[test]
    fn extracts_all_four_fields_verbatim() {
        let content = "Patient Name: Jane Doe\nAge: 47\nGender: Female\nDate: 04/02/1990";
        let info = extract_key_information(content);

        assert_eq!(info.len(), 4);
        assert_eq!(value_of(&info, "Patient Name"), "Jane Doe");
        assert_eq!(value_of(&info, "Age"), "47");
        assert_eq!(value_of(&info, "Gender"), "Female");
        assert_eq!(value_of(&info, "Date"), "04/02/1990");
    }

    #[test]
    fn missing_field_yields_not_found_for_that_label_only() {
        let content = "Patient Name: John Smith\nGender: Male";
        let info = extract_key_information(content);

        assert_eq!(value_of(&info, "Patient Name"), "John Smith");
        assert_eq!(value_of(&info, "Age"), NOT_FOUND);
        assert_eq!(value_of(&info, "Gender"), "Male");
        assert_eq!(value_of(&info, "Date"), NOT_FOUND);
    }

    #[test]
    fn captured_values_are_trimmed() {
        let content = "Patient Name:   Ada Lovelace   \nAge:  36";
        let info = extract_key_information(content);

        assert_eq!(value_of(&info, "Patient Name"), "Ada Lovelace");
        assert_eq!(value_of(&info, "Age"), "36");
    }

    #[test]
    fn comma_joined_spreadsheet_rows_extract_cleanly() {
        let content = "Patient Name:,Jane Doe\nAge:,47\nGender:,Female\nDate:,04/02/1990";
        let info = extract_key_information(content);

        assert_eq!(value_of(&info, "Patient Name"), "Jane Doe");
        assert_eq!(value_of(&info, "Age"), "47");
        assert_eq!(value_of(&info, "Gender"), "Female");
        assert_eq!(value_of(&info, "Date"), "04/02/1990");
    }

    #[test]
    fn labels_match_case_insensitively_but_values_keep_case() {
        let content = "PATIENT NAME: Jane Doe\nGENDER: Female";
        let info = extract_key_information(content);

        assert_eq!(value_of(&info, "Patient Name"), "Jane Doe");
        assert_eq!(value_of(&info, "Gender"), "Female");
    }
}
