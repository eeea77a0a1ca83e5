//! Keyword analysis engine

use crate::analysis::extractor::extract_key_information;
use crate::analysis::report::{format_file_size, AnalysisResult, ConditionMatch};
use crate::analysis::vocabulary::Vocabulary;
use crate::config::Config;
use crate::error::Result;
use crate::input::file_detector::FileType;
use log::debug;

/// Lifestyle-modification recommendation emitted when risk factors match.
pub const LIFESTYLE_RECOMMENDATION: &str =
    "Consider lifestyle modifications to address the identified risk factors.";

/// General check-up recommendation emitted alongside the lifestyle line.
pub const CHECKUP_RECOMMENDATION: &str =
    "Schedule a regular check-up with your primary care physician.";

/// Default recommendation when neither conditions nor risk factors match.
pub const DEFAULT_RECOMMENDATION: &str =
    "No specific recommendations. The report did not contain recognized conditions or risk factors.";

/// Scans report text for vocabulary terms, extracts demographic fields,
/// and assembles the analysis result.
///
/// Analysis is total and pure: it never fails, and identical inputs
/// always produce identical results.
pub struct KeywordAnalyzer {
    vocabulary: Vocabulary,
    occurrence_weight: u32,
    max_confidence: u32,
}

impl KeywordAnalyzer {
    pub fn new(vocabulary: Vocabulary) -> Self {
        Self {
            vocabulary,
            occurrence_weight: 20,
            max_confidence: 100,
        }
    }

    pub fn with_scoring(mut self, occurrence_weight: u32, max_confidence: u32) -> Self {
        self.occurrence_weight = occurrence_weight;
        self.max_confidence = max_confidence.min(100);
        self
    }

    /// Build an analyzer from the loaded configuration, using the
    /// configured vocabulary and scoring parameters.
    pub fn from_config(config: &Config) -> Result<Self> {
        let vocabulary = Vocabulary::new(
            config.vocabulary.conditions.clone(),
            config.vocabulary.risk_factors.clone(),
        )?;

        Ok(Self::new(vocabulary).with_scoring(
            config.scoring.occurrence_weight,
            config.scoring.max_confidence,
        ))
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Analyze report content against the vocabulary.
    pub fn analyze(&self, content: &str, file_type: &FileType, byte_size: u64) -> AnalysisResult {
        // Lowercase once; all term matching runs against this copy while
        // field extraction sees the original-case content.
        let lowered = content.to_lowercase();

        let key_information = extract_key_information(content);

        let condition_counts = self.vocabulary.count_conditions(&lowered);
        let medical_terms: Vec<String> =
            condition_counts.iter().map(|tc| tc.term.clone()).collect();

        let potential_conditions: Vec<ConditionMatch> = condition_counts
            .iter()
            .map(|tc| ConditionMatch {
                name: tc.term.clone(),
                confidence: self.confidence_for(tc.count),
            })
            .collect();

        let risk_factors = self.vocabulary.match_risk_factors(&lowered);

        debug!(
            "Matched {} condition(s) and {} risk factor(s)",
            potential_conditions.len(),
            risk_factors.len()
        );

        let recommendations = self.build_recommendations(&medical_terms, &risk_factors);

        AnalysisResult {
            file_type: file_type.label().to_string(),
            file_size: format_file_size(byte_size),
            key_information,
            medical_terms,
            potential_conditions,
            risk_factors,
            recommendations,
        }
    }

    /// Confidence is occurrence count times the weight, capped at the
    /// configured maximum. Monotonic non-decreasing in the count.
    fn confidence_for(&self, occurrences: usize) -> u8 {
        let raw = (occurrences as u32).saturating_mul(self.occurrence_weight);
        raw.min(self.max_confidence) as u8
    }

    fn build_recommendations(&self, conditions: &[String], risk_factors: &[String]) -> Vec<String> {
        let mut recommendations = Vec::new();

        if !conditions.is_empty() {
            recommendations.push(format!(
                "Consult a specialist regarding the detected conditions: {}.",
                conditions.join(", ")
            ));
        }

        if !risk_factors.is_empty() {
            recommendations.push(LIFESTYLE_RECOMMENDATION.to_string());
            recommendations.push(CHECKUP_RECOMMENDATION.to_string());
        }

        if recommendations.is_empty() {
            recommendations.push(DEFAULT_RECOMMENDATION.to_string());
        }

        recommendations
    }
}

impl Default for KeywordAnalyzer {
    fn default() -> Self {
        Self::new(Vocabulary::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyze(content: &str) -> AnalysisResult {
        KeywordAnalyzer::default().analyze(content, &FileType::Text, content.len() as u64)
    }

    #[test]
    fn empty_content_yields_default_recommendation_only() {
        let result = analyze("quarterly budget review, nothing medical here");

        assert!(result.medical_terms.is_empty());
        assert!(result.potential_conditions.is_empty());
        assert!(result.risk_factors.is_empty());
        assert_eq!(result.recommendations, vec![DEFAULT_RECOMMENDATION]);
    }

    #[test]
    fn confidence_scales_with_occurrences() {
        let result = analyze("diabetes diabetes diabetes");
        assert_eq!(result.potential_conditions[0].confidence, 60);
    }

    #[test]
    fn confidence_caps_at_one_hundred() {
        let content = "diabetes ".repeat(6);
        let result = analyze(&content);

        assert_eq!(result.potential_conditions[0].name, "diabetes");
        assert_eq!(result.potential_conditions[0].confidence, 100);
    }

    #[test]
    fn confidence_is_monotonic_in_count() {
        let analyzer = KeywordAnalyzer::default();
        let mut last = 0u8;
        for n in 1..=8 {
            let content = "asthma ".repeat(n);
            let result = analyzer.analyze(&content, &FileType::Text, content.len() as u64);
            let confidence = result.potential_conditions[0].confidence;
            assert!(confidence >= last);
            assert!(confidence <= 100);
            last = confidence;
        }
    }

    #[test]
    fn one_specialist_line_iff_conditions_matched() {
        let with_conditions = analyze("patient has asthma and hypertension");
        let specialist_lines = with_conditions
            .recommendations
            .iter()
            .filter(|r| r.contains("specialist"))
            .count();
        assert_eq!(specialist_lines, 1);
        assert!(with_conditions.recommendations[0].contains("asthma"));
        assert!(with_conditions.recommendations[0].contains("hypertension"));

        let without = analyze("smoking habit noted");
        assert!(!without.recommendations.iter().any(|r| r.contains("specialist")));
    }

    #[test]
    fn two_lifestyle_lines_iff_risk_factors_matched() {
        let result = analyze("smoking and stress reported");

        assert_eq!(
            result.recommendations,
            vec![LIFESTYLE_RECOMMENDATION, CHECKUP_RECOMMENDATION]
        );
    }

    #[test]
    fn matching_is_case_insensitive() {
        let result = analyze("Diagnosis: DIABETES. Risk: Smoking.");

        assert_eq!(result.medical_terms, vec!["diabetes"]);
        assert_eq!(result.risk_factors, vec!["smoking"]);
    }

    #[test]
    fn analysis_is_pure() {
        let content = "Patient Name: Jane Doe\nAge: 47\ndiabetes, smoking";
        let analyzer = KeywordAnalyzer::default();

        let first = analyzer.analyze(content, &FileType::Text, content.len() as u64);
        let second = analyzer.analyze(content, &FileType::Text, content.len() as u64);
        assert_eq!(first, second);
    }

    #[test]
    fn custom_scoring_weight_applies() {
        let analyzer = KeywordAnalyzer::default().with_scoring(50, 100);
        let result = analyzer.analyze("anemia anemia anemia", &FileType::Text, 20);

        assert_eq!(result.potential_conditions[0].confidence, 100);
    }
}
