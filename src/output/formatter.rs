//! Output formatters with multiple format support

use crate::analysis::report::AnalysisResult;
use crate::config::OutputFormat;
use crate::error::{MedScanError, Result};
use askama::Template;
use colored::{Color, Colorize};
use std::path::Path;

/// Trait for formatting analysis results
pub trait OutputFormatter {
    fn format_result(&self, result: &AnalysisResult) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Console formatter with colors and textual confidence bars
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

/// JSON formatter for structured output
pub struct JsonFormatter {
    pretty: bool,
}

/// Markdown formatter for documentation and sharing
pub struct MarkdownFormatter;

/// HTML formatter with styled confidence bars
pub struct HtmlFormatter {
    include_styles: bool,
}

/// Coordinates format dispatch and optional save-to-file
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
    html_formatter: HtmlFormatter,
}

/// Askama template for HTML output
#[derive(Template)]
#[template(source = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Medical Report Analysis</title>
    {% if include_styles %}
    <style>
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            line-height: 1.6;
            color: #333;
            max-width: 800px;
            margin: 0 auto;
            padding: 20px;
            background: #f8f9fa;
        }
        .container {
            background: white;
            padding: 30px;
            border-radius: 8px;
            box-shadow: 0 2px 10px rgba(0,0,0,0.1);
        }
        .header {
            text-align: center;
            margin-bottom: 30px;
            border-bottom: 3px solid #007acc;
            padding-bottom: 20px;
        }
        .section {
            margin: 25px 0;
        }
        .section h2 {
            color: #007acc;
            border-bottom: 2px solid #e9ecef;
            padding-bottom: 10px;
        }
        .key-info {
            display: grid;
            grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
            gap: 15px;
            margin: 20px 0;
        }
        .key-info-item {
            background: #f8f9fa;
            padding: 15px;
            border-radius: 6px;
            border-left: 4px solid #007acc;
        }
        .confidence-track {
            background: #e9ecef;
            border-radius: 10px;
            height: 18px;
            overflow: hidden;
            margin: 5px 0;
        }
        .confidence-fill {
            background: #17a2b8;
            height: 100%;
            border-radius: 10px;
        }
        .risk-factor {
            display: inline-block;
            background: #fff3cd;
            border: 1px solid #ffc107;
            border-radius: 12px;
            padding: 4px 12px;
            margin: 4px;
        }
        .recommendations {
            background: #f8f9fa;
            padding: 20px;
            border-radius: 6px;
            margin: 15px 0;
            border-left: 4px solid #28a745;
        }
        .metadata {
            background: #e9ecef;
            padding: 15px;
            border-radius: 6px;
            margin-top: 30px;
            font-size: 0.9em;
            color: #6c757d;
        }
    </style>
    {% endif %}
</head>
<body>
    <div class="container">
        <div class="header">
            <h1>Medical Report Analysis</h1>
            <p>Generated: {{ generated_at }}</p>
        </div>

        <div class="section">
            <h2>Key Information</h2>
            <div class="key-info">
                {% for item in key_information %}
                <div class="key-info-item">
                    <strong>{{ item.label }}</strong>
                    <p>{{ item.value }}</p>
                </div>
                {% endfor %}
            </div>
        </div>

        <div class="section">
            <h2>Potential Conditions</h2>
            {% if conditions.is_empty() %}
            <p>None detected.</p>
            {% endif %}
            {% for condition in conditions %}
            <div>
                <strong>{{ condition.name }}</strong> — {{ condition.confidence }}%
                <div class="confidence-track">
                    <div class="confidence-fill" style="width: {{ condition.confidence }}%"></div>
                </div>
            </div>
            {% endfor %}
        </div>

        <div class="section">
            <h2>Risk Factors</h2>
            {% if risk_factors.is_empty() %}
            <p>None detected.</p>
            {% endif %}
            {% for factor in risk_factors %}
            <span class="risk-factor">{{ factor }}</span>
            {% endfor %}
        </div>

        <div class="section">
            <h2>Recommendations</h2>
            <div class="recommendations">
                <ul>
                    {% for recommendation in recommendations %}
                    <li>{{ recommendation }}</li>
                    {% endfor %}
                </ul>
            </div>
        </div>

        <div class="metadata">
            <p><strong>File type:</strong> {{ file_type }} | <strong>Size:</strong> {{ file_size }}</p>
            <p>Generated by MedScan v{{ version }}</p>
        </div>
    </div>
</body>
</html>"#, ext = "html")]
struct HtmlReportTemplate {
    include_styles: bool,
    generated_at: String,
    key_information: Vec<HtmlKeyInfo>,
    conditions: Vec<HtmlCondition>,
    risk_factors: Vec<String>,
    recommendations: Vec<String>,
    file_type: String,
    file_size: String,
    version: String,
}

#[derive(Debug, Clone)]
struct HtmlKeyInfo {
    label: String,
    value: String,
}

#[derive(Debug, Clone)]
struct HtmlCondition {
    name: String,
    confidence: u8,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self {
            use_colors,
            detailed,
        }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str, level: u8) -> String {
        let prefix = match level {
            1 => "█",
            2 => "▓",
            _ => "▒",
        };

        let color = match level {
            1 => Color::Blue,
            2 => Color::Green,
            _ => Color::Yellow,
        };

        if self.use_colors {
            format!(
                "\n{} {}\n",
                prefix.color(color).bold(),
                title.color(color).bold()
            )
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }

    /// A ten-segment bar, e.g. `[████████░░]` for 80%.
    fn format_confidence_bar(&self, confidence: u8) -> String {
        let filled = (confidence as usize / 10).min(10);
        let bar: String = "█".repeat(filled) + &"░".repeat(10 - filled);

        let color = match confidence {
            80..=100 => Color::Red,
            40..=79 => Color::Yellow,
            _ => Color::Green,
        };

        if self.use_colors {
            format!("[{}]", bar.color(color))
        } else {
            format!("[{}]", bar)
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_result(&self, result: &AnalysisResult) -> Result<String> {
        let mut output = String::new();

        output.push_str(&self.format_header("MEDICAL REPORT ANALYSIS", 1));
        output.push_str(&format!(
            "File type: {} | Size: {}\n",
            result.file_type, result.file_size
        ));

        // Key information
        output.push_str(&self.format_header("Key Information", 2));
        for item in &result.key_information {
            output.push_str(&format!(
                "  {} {}\n",
                self.colorize(&format!("{}:", item.label), Color::Cyan),
                item.value
            ));
        }

        // Potential conditions with confidence bars
        output.push_str(&self.format_header("Potential Conditions", 2));
        if result.potential_conditions.is_empty() {
            output.push_str("  None detected.\n");
        }
        for condition in &result.potential_conditions {
            output.push_str(&format!(
                "  {} {} {}%\n",
                self.format_confidence_bar(condition.confidence),
                self.colorize(&condition.name, Color::White),
                condition.confidence
            ));
        }

        // Risk factors
        output.push_str(&self.format_header("Risk Factors", 2));
        if result.risk_factors.is_empty() {
            output.push_str("  None detected.\n");
        }
        for factor in &result.risk_factors {
            output.push_str(&format!("  • {}\n", self.colorize(factor, Color::Yellow)));
        }

        // Recommendations
        output.push_str(&self.format_header("Recommendations", 2));
        for (i, recommendation) in result.recommendations.iter().enumerate() {
            output.push_str(&format!("  {}. {}\n", i + 1, recommendation));
        }

        if self.detailed {
            output.push_str(&self.format_header("Matched Terms", 3));
            if result.medical_terms.is_empty() {
                output.push_str("  None.\n");
            } else {
                output.push_str(&format!("  {}\n", result.medical_terms.join(", ")));
            }
        }

        output.push_str(&format!(
            "\n{} Generated by MedScan v{}\n",
            self.colorize("ℹ", Color::Blue),
            env!("CARGO_PKG_VERSION")
        ));

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_result(&self, result: &AnalysisResult) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(result)?
        } else {
            serde_json::to_string(result)?
        };
        Ok(json)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_result(&self, result: &AnalysisResult) -> Result<String> {
        let mut output = String::new();

        output.push_str("# Medical Report Analysis\n\n");
        output.push_str(&format!(
            "**File type:** {} | **Size:** {}\n\n",
            result.file_type, result.file_size
        ));

        output.push_str("## Key Information\n\n");
        output.push_str("| Field | Value |\n|-------|-------|\n");
        for item in &result.key_information {
            output.push_str(&format!("| {} | {} |\n", item.label, item.value));
        }
        output.push('\n');

        output.push_str("## Potential Conditions\n\n");
        if result.potential_conditions.is_empty() {
            output.push_str("None detected.\n");
        } else {
            output.push_str("| Condition | Confidence |\n|-----------|------------|\n");
            for condition in &result.potential_conditions {
                output.push_str(&format!(
                    "| {} | {}% |\n",
                    condition.name, condition.confidence
                ));
            }
        }
        output.push('\n');

        output.push_str("## Risk Factors\n\n");
        if result.risk_factors.is_empty() {
            output.push_str("None detected.\n");
        } else {
            for factor in &result.risk_factors {
                output.push_str(&format!("- {}\n", factor));
            }
        }
        output.push('\n');

        output.push_str("## Recommendations\n\n");
        for recommendation in &result.recommendations {
            output.push_str(&format!("1. {}\n", recommendation));
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

impl HtmlFormatter {
    pub fn new(include_styles: bool) -> Self {
        Self { include_styles }
    }
}

impl OutputFormatter for HtmlFormatter {
    fn format_result(&self, result: &AnalysisResult) -> Result<String> {
        let template = HtmlReportTemplate {
            include_styles: self.include_styles,
            generated_at: chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string(),
            key_information: result
                .key_information
                .iter()
                .map(|ki| HtmlKeyInfo {
                    label: ki.label.clone(),
                    value: ki.value.clone(),
                })
                .collect(),
            conditions: result
                .potential_conditions
                .iter()
                .map(|c| HtmlCondition {
                    name: c.name.clone(),
                    confidence: c.confidence,
                })
                .collect(),
            risk_factors: result.risk_factors.clone(),
            recommendations: result.recommendations.clone(),
            file_type: result.file_type.clone(),
            file_size: result.file_size.clone(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        };

        template
            .render()
            .map_err(|e| MedScanError::OutputFormatting(format!("HTML rendering failed: {}", e)))
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Html
    }
}

impl ReportGenerator {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed),
            json_formatter: JsonFormatter::new(true),
            markdown_formatter: MarkdownFormatter,
            html_formatter: HtmlFormatter::new(true),
        }
    }

    pub fn format(&self, result: &AnalysisResult, format: &OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_result(result),
            OutputFormat::Json => self.json_formatter.format_result(result),
            OutputFormat::Markdown => self.markdown_formatter.format_result(result),
            OutputFormat::Html => self.html_formatter.format_result(result),
        }
    }

    pub fn save(&self, formatted: &str, path: &Path) -> Result<()> {
        std::fs::write(path, formatted)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::report::{ConditionMatch, KeyInformation};

    fn sample_result() -> AnalysisResult {
        AnalysisResult {
            file_type: "text/plain".to_string(),
            file_size: "1.2 KB".to_string(),
            key_information: vec![KeyInformation {
                label: "Patient Name".to_string(),
                value: "Jane Doe".to_string(),
            }],
            medical_terms: vec!["diabetes".to_string()],
            potential_conditions: vec![ConditionMatch {
                name: "diabetes".to_string(),
                confidence: 60,
            }],
            risk_factors: vec!["smoking".to_string()],
            recommendations: vec!["Consult a specialist regarding the detected conditions: diabetes.".to_string()],
        }
    }

    #[test]
    fn console_output_contains_all_four_sections() {
        let formatter = ConsoleFormatter::new(false, false);
        let output = formatter.format_result(&sample_result()).unwrap();

        assert!(output.contains("Key Information"));
        assert!(output.contains("Potential Conditions"));
        assert!(output.contains("Risk Factors"));
        assert!(output.contains("Recommendations"));
        assert!(output.contains("Jane Doe"));
        assert!(output.contains("60%"));
    }

    #[test]
    fn confidence_bar_fills_proportionally() {
        let formatter = ConsoleFormatter::new(false, false);
        assert_eq!(formatter.format_confidence_bar(60), "[██████░░░░]");
        assert_eq!(formatter.format_confidence_bar(100), "[██████████]");
        assert_eq!(formatter.format_confidence_bar(0), "[░░░░░░░░░░]");
    }

    #[test]
    fn json_output_round_trips() {
        let formatter = JsonFormatter::new(false);
        let output = formatter.format_result(&sample_result()).unwrap();
        let parsed: AnalysisResult = serde_json::from_str(&output).unwrap();

        assert_eq!(parsed, sample_result());
    }

    #[test]
    fn markdown_output_renders_condition_table() {
        let output = MarkdownFormatter.format_result(&sample_result()).unwrap();

        assert!(output.contains("# Medical Report Analysis"));
        assert!(output.contains("| diabetes | 60% |"));
        assert!(output.contains("- smoking"));
    }

    #[test]
    fn html_output_renders_confidence_bar_width() {
        let formatter = HtmlFormatter::new(true);
        let output = formatter.format_result(&sample_result()).unwrap();

        assert!(output.contains("width: 60%"));
        assert!(output.contains("diabetes"));
        assert!(output.contains("<style>"));
    }
}
