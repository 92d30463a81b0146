//! Company name extraction.

use super::keywords::{contains_title_keyword, CORPORATE_MARKER, CORPORATE_MARKER_MISREADS};
use super::patterns::{COMPANY_FALLBACK, COMPANY_KEYWORD_PATTERNS};

/// Company extractor.
///
/// Lines carrying a legal-entity marker (주식회사, (주), Inc., ...) are
/// tried first. Only when no line has a marker does the extractor fall back
/// to the first plain Hangul run of three or more syllables.
pub struct CompanyExtractor {
    name_line_slack: usize,
}

impl CompanyExtractor {
    /// Create a new company extractor.
    pub fn new() -> Self {
        Self { name_line_slack: 5 }
    }

    /// Set how much longer than the name a line may be and still count as
    /// the name line.
    pub fn with_name_line_slack(mut self, slack: usize) -> Self {
        self.name_line_slack = slack;
        self
    }

    pub fn extract(&self, lines: &[&str], name: Option<&str>) -> Option<String> {
        let name = name.filter(|n| !n.is_empty());

        let candidates: Vec<&str> = lines
            .iter()
            .copied()
            .filter(|line| !self.is_name_line(line, name))
            .collect();

        candidates
            .iter()
            .find_map(|line| match_keyword(line))
            .or_else(|| candidates.iter().find_map(|line| match_unmarked(line, name)))
    }

    fn is_name_line(&self, line: &str, name: Option<&str>) -> bool {
        match name {
            Some(name) => {
                line.contains(name)
                    && line.chars().count() <= name.chars().count() + self.name_line_slack
            }
            None => false,
        }
    }
}

impl Default for CompanyExtractor {
    fn default() -> Self {
        Self::new()
    }
}

fn match_keyword(line: &str) -> Option<String> {
    let (_, pattern) = COMPANY_KEYWORD_PATTERNS
        .iter()
        .find(|(keyword, _)| line.contains(keyword))?;

    let company = pattern.find(line).map(|m| m.as_str()).unwrap_or(line);
    Some(normalize_corporate_marker(company.trim()))
}

fn match_unmarked(line: &str, name: Option<&str>) -> Option<String> {
    let m = COMPANY_FALLBACK.find(line)?;

    if contains_title_keyword(line) {
        return None;
    }
    if name.is_some_and(|n| m.as_str().contains(n)) {
        return None;
    }

    Some(m.as_str().trim().to_string())
}

/// Replace OCR misreads of `(주)` (`I주I`, `|주|`) with the canonical form.
pub fn normalize_corporate_marker(company: &str) -> String {
    CORPORATE_MARKER_MISREADS
        .iter()
        .fold(company.to_string(), |acc, misread| {
            acc.replace(misread, CORPORATE_MARKER)
        })
}

/// Extract the company name.
pub fn extract_company(lines: &[&str], name: Option<&str>) -> Option<String> {
    CompanyExtractor::new().extract(lines, name)
}
