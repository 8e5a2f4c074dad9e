//! Review task prompts and report types.
//!
//! The three operations the app performs over a provider: analyze files
//! for issues, fix a single issue, and reformat a file. The analyze
//! prompt requests a structured JSON report; [`AnalysisReport`] mirrors
//! that schema.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A source file submitted for review.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceFile {
    /// File path shown to the model and echoed back in issues.
    pub path: String,
    /// Full file content.
    pub content: String,
}

/// Issue severity in an analysis report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// A bug or defect.
    Error,
    /// A likely problem worth attention.
    Warning,
    /// A style or informational note.
    Info,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => f.write_str("error"),
            Self::Warning => f.write_str("warning"),
            Self::Info => f.write_str("info"),
        }
    }
}

/// A single issue in an analysis report.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisIssue {
    /// File the issue was found in.
    pub file_name: String,
    /// 1-based line number.
    pub line: u32,
    /// Issue severity.
    pub severity: Severity,
    /// Human-readable description.
    pub message: String,
    /// Optional fix direction.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggested_fix: Option<String>,
}

/// The structured report the analyze prompt requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// One-paragraph summary of the findings.
    pub summary: String,
    /// Individual issues.
    #[serde(default)]
    pub issues: Vec<AnalysisIssue>,
}

impl AnalysisReport {
    /// Parse a report out of completion text, tolerating a wrapping
    /// markdown code fence.
    pub fn from_completion(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(strip_code_fence(text))
    }
}

/// Build the analyze prompt over one or more files.
pub fn analyze_prompt(files: &[SourceFile]) -> String {
    let context = files
        .iter()
        .map(|file| format!("FILE: {}\nCONTENT:\n{}", file.path, file.content))
        .collect::<Vec<_>>()
        .join("\n\n---\n\n");
    format!(
        "Analyze this Python code for bugs, architectural issues, and PEP8 violations. \
         Return a structured JSON report with 'summary' and 'issues' fields, where each \
         issue has 'fileName', 'line', 'severity' (error|warning|info), 'message', and an \
         optional 'suggestedFix'. Return ONLY the JSON object.\n\nFILE CONTENT:\n{context}"
    )
}

/// Build the fix prompt for a single issue in a file.
pub fn fix_prompt(content: &str, line: u32, message: &str, direction: Option<&str>) -> String {
    format!(
        "You are a Python expert. Fix the following issue in this file.\n\
         Issue: {message} at line {line}.\n\
         Suggested Fix Direction: {}\n\n\
         CODE:\n{content}\n\n\
         Return ONLY the corrected full content of the file.",
        direction.unwrap_or("Apply best practices")
    )
}

/// Build the reformat prompt for a file.
pub fn format_prompt(content: &str) -> String {
    format!(
        "Reformat the following Python code to strictly adhere to PEP 8 standards, \
         similar to what the 'black' formatter would do. Maintain all logic exactly \
         as is.\n\nCODE:\n{content}\n\nReturn ONLY the formatted code content."
    )
}

/// Strip a wrapping markdown code fence from model output.
pub fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // Drop the info string on the opening fence line.
    let Some((_, body)) = rest.split_once('\n') else {
        return trimmed;
    };
    let body = body.trim_end();
    let body = body.strip_suffix("```").unwrap_or(body);
    body.trim()
}
