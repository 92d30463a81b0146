//! Korean postal address extraction.

use super::patterns::ADDRESS;
use super::{ExtractionMatch, FieldExtractor};

/// Address field extractor.
///
/// Matches from the first province or metropolitan city name to the end of
/// the text. Korean addresses vary too much after the city to cut them
/// reliably, so the capture is deliberately permissive.
pub struct AddressExtractor;

impl AddressExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for AddressExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for AddressExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        ADDRESS
            .find_iter(text)
            .filter_map(|m| {
                let address = m.as_str().trim();
                (!address.is_empty()).then(|| {
                    ExtractionMatch::new(address.to_string(), m.as_str())
                        .with_position(m.start(), m.end())
                })
            })
            .collect()
    }
}

/// Extract the address from text.
pub fn extract_address(text: &str) -> Option<String> {
    AddressExtractor::new().extract(text).map(|m| m.value)
}
