//! Medical term vocabulary and substring matching

use crate::error::{MedScanError, Result};
use aho_corasick::AhoCorasick;

/// Fixed sets of condition and risk-factor terms, compiled into
/// case-insensitive matchers for occurrence counting.
///
/// The vocabulary is constant for the process lifetime but carried as an
/// explicit value so configuration and tests can substitute alternates.
pub struct Vocabulary {
    conditions: Vec<String>,
    risk_factors: Vec<String>,
    condition_matcher: AhoCorasick,
    risk_factor_matcher: AhoCorasick,
}

/// Occurrence count for a single matched term.
#[derive(Debug, Clone, PartialEq)]
pub struct TermCount {
    pub term: String,
    pub count: usize,
}

impl Vocabulary {
    /// Build a vocabulary from explicit term lists. Terms are normalized
    /// to lowercase; matching is case-insensitive substring presence.
    pub fn new(conditions: Vec<String>, risk_factors: Vec<String>) -> Result<Self> {
        let conditions: Vec<String> = conditions.iter().map(|t| t.to_lowercase()).collect();
        let risk_factors: Vec<String> = risk_factors.iter().map(|t| t.to_lowercase()).collect();

        let condition_matcher = Self::build_matcher(&conditions)?;
        let risk_factor_matcher = Self::build_matcher(&risk_factors)?;

        Ok(Self {
            conditions,
            risk_factors,
            condition_matcher,
            risk_factor_matcher,
        })
    }

    fn build_matcher(terms: &[String]) -> Result<AhoCorasick> {
        AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(terms)
            .map_err(|e| {
                MedScanError::Configuration(format!("Failed to build vocabulary matcher: {}", e))
            })
    }

    pub fn conditions(&self) -> &[String] {
        &self.conditions
    }

    pub fn risk_factors(&self) -> &[String] {
        &self.risk_factors
    }

    /// Count occurrences of each condition term present in the text.
    /// Terms with zero occurrences are omitted.
    pub fn count_conditions(&self, text: &str) -> Vec<TermCount> {
        Self::count_terms(&self.condition_matcher, &self.conditions, text)
    }

    /// Risk factors matched in the text (presence only, no counts).
    pub fn match_risk_factors(&self, text: &str) -> Vec<String> {
        Self::count_terms(&self.risk_factor_matcher, &self.risk_factors, text)
            .into_iter()
            .map(|tc| tc.term)
            .collect()
    }

    fn count_terms(matcher: &AhoCorasick, terms: &[String], text: &str) -> Vec<TermCount> {
        let mut counts = vec![0usize; terms.len()];

        // Overlapping iteration so each term is counted independently,
        // even where one term is a substring of another's match.
        for mat in matcher.find_overlapping_iter(text) {
            counts[mat.pattern().as_usize()] += 1;
        }

        terms
            .iter()
            .zip(counts)
            .filter(|(_, count)| *count > 0)
            .map(|(term, count)| TermCount {
                term: term.clone(),
                count,
            })
            .collect()
    }
}

/// The default condition vocabulary.
pub fn default_conditions() -> Vec<String> {
    [
        "diabetes",
        "hypertension",
        "asthma",
        "arthritis",
        "cancer",
        "heart disease",
        "stroke",
        "pneumonia",
        "bronchitis",
        "migraine",
        "anemia",
        "depression",
        "anxiety",
        "obesity",
        "epilepsy",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

/// The default risk-factor vocabulary.
pub fn default_risk_factors() -> Vec<String> {
    [
        "smoking",
        "alcohol",
        "high cholesterol",
        "high blood pressure",
        "family history",
        "sedentary lifestyle",
        "overweight",
        "stress",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

impl Default for Vocabulary {
    fn default() -> Self {
        // Default terms are static and lowercase, so compilation cannot fail
        Self::new(default_conditions(), default_risk_factors())
            .unwrap_or_else(|e| panic!("default vocabulary failed to compile: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_each_occurrence_of_a_term() {
        let vocab = Vocabulary::default();
        let counts = vocab.count_conditions("diabetes, then Diabetes again, then DIABETES");

        assert_eq!(counts.len(), 1);
        assert_eq!(counts[0].term, "diabetes");
        assert_eq!(counts[0].count, 3);
    }

    #[test]
    fn matches_multi_word_terms_as_substrings() {
        let vocab = Vocabulary::default();
        let counts = vocab.count_conditions("history of heart disease in the family");

        assert_eq!(counts.len(), 1);
        assert_eq!(counts[0].term, "heart disease");
    }

    #[test]
    fn no_matches_in_unrelated_text() {
        let vocab = Vocabulary::default();
        assert!(vocab.count_conditions("routine inspection notes").is_empty());
        assert!(vocab.match_risk_factors("routine inspection notes").is_empty());
    }

    #[test]
    fn risk_factors_match_by_presence() {
        let vocab = Vocabulary::default();
        let matched = vocab.match_risk_factors("smoking and high cholesterol reported");

        assert_eq!(matched, vec!["smoking", "high cholesterol"]);
    }

    #[test]
    fn custom_vocabulary_substitutes_cleanly() {
        let vocab = Vocabulary::new(
            vec!["widgetitis".to_string()],
            vec!["gadget exposure".to_string()],
        )
        .unwrap();

        let counts = vocab.count_conditions("acute Widgetitis observed");
        assert_eq!(counts[0].term, "widgetitis");
        assert!(vocab.count_conditions("diabetes").is_empty());
    }
}
