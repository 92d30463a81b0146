//! Rule-based field extractors for business cards.
//!
//! Line-oriented extractors (name, company, title, department) work on the
//! split line sequence; the others scan the full OCR text.

pub mod name;
pub mod company;
pub mod title;
pub mod email;
pub mod phone;
pub mod website;
pub mod address;
pub mod keywords;
pub mod patterns;

pub use name::{extract_name, NameExtractor};
pub use company::{extract_company, normalize_corporate_marker, CompanyExtractor};
pub use title::{extract_department, extract_title};
pub use email::{extract_email, EmailExtractor};
pub use phone::{extract_phones, normalize_mobile, strip_separators, PhoneExtractor};
pub use website::{extract_website, WebsiteExtractor};
pub use address::{extract_address, AddressExtractor};
pub use keywords::*;
pub use patterns::*;

/// Trait for extractors that scan the full text.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract the field from text.
    fn extract(&self, text: &str) -> Option<Self::Output>;

    /// Extract all occurrences of the field.
    fn extract_all(&self, text: &str) -> Vec<Self::Output>;
}

/// A value matched in the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionMatch<T> {
    /// Extracted value.
    pub value: T,
    /// Byte range in source text.
    pub position: Option<(usize, usize)>,
    /// Source text that was matched.
    pub source: String,
}

impl<T> ExtractionMatch<T> {
    pub fn new(value: T, source: impl Into<String>) -> Self {
        Self {
            value,
            position: None,
            source: source.into(),
        }
    }

    pub fn with_position(mut self, start: usize, end: usize) -> Self {
        self.position = Some((start, end));
        self
    }
}

impl ExtractionMatch<String> {
    /// Build a match whose value is the matched text itself.
    pub(crate) fn verbatim(m: regex::Match<'_>) -> Self {
        Self::new(m.as_str().to_string(), m.as_str()).with_position(m.start(), m.end())
    }
}
