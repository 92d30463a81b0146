//! Business card field extraction module.

mod confidence;
mod lines;
mod parser;
pub mod rules;

pub use confidence::calculate_confidence;
pub use lines::split_lines;
pub use parser::{parse_card_text, CardParser, ExtractionResult};

use crate::error::Result;
use crate::models::card::ParsedCardInfo;
use crate::ocr::OcrSpaceResponse;

/// Trait for business card extractors.
pub trait CardExtractor {
    /// Extract card data from an OCR provider response.
    fn extract(&self, response: &OcrSpaceResponse) -> Result<ParsedCardInfo>;

    /// Extract card data from plain recognized text. Never fails.
    fn extract_from_text(&self, text: &str) -> ParsedCardInfo;
}
