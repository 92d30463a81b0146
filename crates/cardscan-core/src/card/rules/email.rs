//! Email address extraction.

use super::patterns::EMAIL;
use super::{ExtractionMatch, FieldExtractor};

/// Email field extractor. Shape only, no deliverability checks.
pub struct EmailExtractor;

impl EmailExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for EmailExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for EmailExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        EMAIL.find(text).map(ExtractionMatch::verbatim)
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        EMAIL.find_iter(text).map(ExtractionMatch::verbatim).collect()
    }
}

/// Extract the first email address from text.
pub fn extract_email(text: &str) -> Option<String> {
    EmailExtractor::new().extract(text).map(|m| m.value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labeled_email() {
        let text = "Mobile: 010-1234-5678\nEmail: hong@technova.com\nwww.technova.com";
        assert_eq!(extract_email(text), Some("hong@technova.com".to_string()));
    }

    #[test]
    fn test_first_of_many() {
        let text = "E. gd.hong+card@technova.co.kr / sales@technova.com";
        let all = EmailExtractor::new().extract_all(text);
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].value, "gd.hong+card@technova.co.kr");
        assert_eq!(all[0].position, Some((3, 30)));
        assert_eq!(extract_email(text), Some("gd.hong+card@technova.co.kr".to_string()));
    }

    #[test]
    fn test_no_email() {
        assert_eq!(extract_email("hong at technova dot com"), None);
        assert_eq!(extract_email("hong@localhost"), None);
    }
}
