//! Person name extraction.

use super::keywords::is_title_keyword;
use super::patterns::{ENGLISH_NAME, KOREAN_NAME};

/// Name extractor.
///
/// Names are printed largest near the top of a card, so only the first few
/// lines are searched. A Hangul run that is itself a title keyword
/// (e.g. `대표이사`) is not a name.
pub struct NameExtractor {
    search_lines: usize,
}

impl NameExtractor {
    /// Create a new name extractor searching the first three lines.
    pub fn new() -> Self {
        Self { search_lines: 3 }
    }

    /// Set how many leading lines are searched.
    pub fn with_search_lines(mut self, lines: usize) -> Self {
        self.search_lines = lines;
        self
    }

    pub fn extract(&self, lines: &[&str]) -> Option<String> {
        for line in lines.iter().take(self.search_lines) {
            // Only the first Hangul run of the line is considered
            if let Some(caps) = KOREAN_NAME.captures(line) {
                let candidate = &caps[1];
                if !is_title_keyword(candidate) {
                    return Some(candidate.to_string());
                }
            }

            if let Some(m) = ENGLISH_NAME.find(line) {
                return Some(m.as_str().to_string());
            }
        }

        None
    }
}

impl Default for NameExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Extract a person's name from the leading lines.
pub fn extract_name(lines: &[&str]) -> Option<String> {
    NameExtractor::new().extract(lines)
}
