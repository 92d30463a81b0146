//! Job title and department extraction.

use super::keywords::DEPARTMENT_KEYWORDS;
use super::patterns::TITLE_KEYWORD_PATTERNS;

/// Extract the job title.
///
/// The first line containing a title keyword wins. Text directly in front of
/// the keyword is kept so compound titles such as `개발팀 팀장` survive.
pub fn extract_title(lines: &[&str]) -> Option<String> {
    lines.iter().find_map(|line| {
        let (keyword, pattern) = TITLE_KEYWORD_PATTERNS
            .iter()
            .find(|(keyword, _)| line.contains(keyword))?;

        let title = pattern
            .find(line)
            .map(|m| m.as_str().trim().to_string())
            .unwrap_or_else(|| keyword.to_string());
        Some(title)
    })
}

/// Extract the department line.
///
/// Not part of [`crate::ParsedCardInfo`]; kept for callers that want it.
pub fn extract_department(lines: &[&str]) -> Option<String> {
    lines
        .iter()
        .find(|line| DEPARTMENT_KEYWORDS.iter().any(|k| line.contains(k)))
        .map(|line| line.trim().to_string())
}
