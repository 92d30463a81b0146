//! Adapters for text returned by upstream OCR providers.
//!
//! The OCR call itself happens outside this crate; this module only turns a
//! provider response into the recognized text the card parser consumes.

mod ocr_space;

pub use ocr_space::{ErrorMessage, OcrSpaceResponse, ParsedResult, TextLine, TextOverlay};

/// Recognized text of a typical Korean business card, used for development
/// without an OCR provider.
pub const SAMPLE_CARD_TEXT: &str = "홍길동
주식회사 테크노바
대표이사

서울시 강남구 테헤란로 123
Mobile: 010-1234-5678
Email: hong@technova.com
www.technova.com";
