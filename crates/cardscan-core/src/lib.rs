//! Core library for business card OCR text parsing.
//!
//! This crate provides:
//! - Line splitting of raw OCR text
//! - Korean/English contact field extraction (name, company, title, phones,
//!   email, website, address)
//! - Confidence scoring of the extracted record
//! - An adapter for OCR.space JSON responses

pub mod error;
pub mod models;
pub mod ocr;
pub mod card;

pub use error::{CardScanError, Result};
pub use models::card::{CardField, ContactNumbers, ParsedCardInfo};
pub use models::config::CardScanConfig;
pub use ocr::{OcrSpaceResponse, SAMPLE_CARD_TEXT};
pub use card::{CardExtractor, CardParser, ExtractionResult, parse_card_text};
