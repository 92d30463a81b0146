//! Website extraction.

use super::patterns::{EMAIL, WEBSITE};
use super::{ExtractionMatch, FieldExtractor};

/// Website field extractor.
///
/// Candidates overlapping an email address (local part or domain) are skipped.
pub struct WebsiteExtractor;

impl WebsiteExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for WebsiteExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for WebsiteExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        let emails: Vec<(usize, usize)> = EMAIL
            .find_iter(text)
            .map(|m| (m.start(), m.end()))
            .collect();

        WEBSITE
            .find_iter(text)
            .filter(|m| !overlaps_any(&emails, m.start(), m.end()))
            .map(ExtractionMatch::verbatim)
            .collect()
    }
}

fn overlaps_any(spans: &[(usize, usize)], start: usize, end: usize) -> bool {
    spans.iter().any(|&(s, e)| start < e && s < end)
}

/// Extract the first website from text, as written.
pub fn extract_website(text: &str) -> Option<String> {
    WebsiteExtractor::new().extract(text).map(|m| m.value)
}
