//! Korean phone, mobile and fax number extraction.
//!
//! OCR regularly turns hyphens into dots or spaces, or drops them entirely,
//! so separators are optional and may be mixed within one number.

use crate::models::card::ContactNumbers;

use super::patterns::{FAX, FAX_LABEL, LANDLINE, MOBILE, PHONE_SEPARATOR};

/// Phone number extractor producing mobile, landline and fax together.
pub struct PhoneExtractor;

impl PhoneExtractor {
    pub fn new() -> Self {
        Self
    }

    pub fn extract(&self, text: &str) -> ContactNumbers {
        let fax = self.extract_fax(text);
        let mobile = self.extract_mobile(text);
        let landline = self.extract_landline(text, fax.as_deref(), mobile.as_deref());

        ContactNumbers {
            mobile,
            landline,
            fax,
        }
    }

    /// Labeled fax number with the label stripped.
    pub fn extract_fax(&self, text: &str) -> Option<String> {
        FAX.find(text)
            .map(|m| FAX_LABEL.replace_all(m.as_str(), "").trim().to_string())
    }

    /// First mobile number, normalized to domestic digits.
    pub fn extract_mobile(&self, text: &str) -> Option<String> {
        MOBILE.find(text).map(|m| normalize_mobile(m.as_str()))
    }

    /// First landline number that is neither the fax nor the mobile number.
    pub fn extract_landline(
        &self,
        text: &str,
        fax: Option<&str>,
        mobile: Option<&str>,
    ) -> Option<String> {
        LANDLINE
            .find_iter(text)
            .filter(|m| !fax.is_some_and(|f| f.contains(m.as_str())))
            .map(|m| strip_separators(m.as_str()))
            .find(|number| mobile != Some(number.as_str()))
    }
}

impl Default for PhoneExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Extract mobile, landline and fax numbers from text.
pub fn extract_phones(text: &str) -> ContactNumbers {
    PhoneExtractor::new().extract(text)
}

/// Remove hyphens, dots and whitespace.
pub fn strip_separators(number: &str) -> String {
    PHONE_SEPARATOR.replace_all(number, "").into_owned()
}

/// Normalize a mobile number to domestic digits (`+82 10...` -> `010...`).
///
/// A trunk `0` kept after the country code (`+82 010...`) is not doubled,
/// so this yields `010...` where a plain prefix swap would give `0010...`.
pub fn normalize_mobile(number: &str) -> String {
    let digits = strip_separators(number);

    match digits.strip_prefix("+82") {
        Some(rest) if rest.starts_with('0') => rest.to_string(),
        Some(rest) => format!("0{}", rest),
        None => digits,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mobile_separator_tolerance() {
        for text in [
            "010-1234-5678",
            "010.1234.5678",
            "010 1234 5678",
            "01012345678",
            "010-1234.5678",
        ] {
            assert_eq!(
                extract_phones(text).mobile,
                Some("01012345678".to_string()),
                "input {text}"
            );
        }
    }

    #[test]
    fn test_mobile_international_prefix() {
        for text in [
            "+82. 10 6430 0932",
            "+82. 106430.0932",
            "+82-10-6430-0932",
            "+82.10.6430.0932",
            "+82 010-6430-0932",
        ] {
            assert_eq!(
                extract_phones(text).mobile,
                Some("01064300932".to_string()),
                "input {text}"
            );
        }
    }

    #[test]
    fn test_fax_excluded_from_landline() {
        let text = "Fax: 02-123-4567\nTel: 02-987-6543";
        let phones = extract_phones(text);
        assert_eq!(phones.fax, Some("02-123-4567".to_string()));
        assert_eq!(phones.landline, Some("029876543".to_string()));
        assert_eq!(phones.mobile, None);
    }

    #[test]
    fn test_fax_label_case_insensitive() {
        let phones = extract_phones("T. 031-123-4567 FAX 031-123-4568");
        assert_eq!(phones.fax, Some("031-123-4568".to_string()));
        assert_eq!(phones.landline, Some("0311234567".to_string()));
    }

    #[test]
    fn test_mobile_not_reported_as_landline() {
        let phones = extract_phones("M. 010-1234-5678");
        assert_eq!(phones.mobile, Some("01012345678".to_string()));
        assert_eq!(phones.landline, None);

        let phones = extract_phones("M. 010-1234-5678\nT. 02-555-0101");
        assert_eq!(phones.landline, Some("025550101".to_string()));
        assert_eq!(phones.primary(), Some("01012345678"));
    }

    #[test]
    fn test_no_numbers() {
        assert_eq!(extract_phones("홍길동\n대표이사"), ContactNumbers::default());
        assert_eq!(extract_phones(""), ContactNumbers::default());
    }

    #[test]
    fn test_normalize_mobile() {
        assert_eq!(normalize_mobile("+82 10-1234-5678"), "01012345678");
        assert_eq!(normalize_mobile("010 1234 5678"), "01012345678");
    }
}
