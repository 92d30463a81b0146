//! WASM bindings for business card OCR text parsing.
//!
//! This crate provides WebAssembly bindings for use in browsers and Node.js.

use wasm_bindgen::prelude::*;

use cardscan_core::card::rules;
use cardscan_core::{CardParser, ContactNumbers, ParsedCardInfo, OcrSpaceResponse};

/// Initialize panic hook for better error messages in console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Version information.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Parse recognized card text into structured contact fields.
#[wasm_bindgen]
pub fn parse_card_text(text: &str) -> Result<JsValue, JsValue> {
    to_js(&cardscan_core::parse_card_text(text))
}

/// Parse a raw OCR.space JSON response.
///
/// Fails with the OCR error message when the response reports a
/// processing error or contains no text.
#[wasm_bindgen]
pub fn parse_ocr_response(json: &str) -> Result<JsValue, JsValue> {
    to_js(&card_from_ocr_json(json, &CardParser::new())?)
}

/// Extract mobile, landline and fax numbers separately.
#[wasm_bindgen]
pub fn extract_phone_numbers(text: &str) -> Result<JsValue, JsValue> {
    let numbers: ContactNumbers = rules::extract_phones(text);
    to_js(&numbers)
}

/// Normalize a Korean mobile number to bare digits (e.g. "01012345678").
#[wasm_bindgen]
pub fn normalize_mobile(number: &str) -> String {
    rules::normalize_mobile(number)
}

/// Card scanner class for browser use.
#[wasm_bindgen]
pub struct CardScanner {
    parser: CardParser,
}

#[wasm_bindgen]
impl CardScanner {
    /// Create a new card scanner.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            parser: CardParser::new(),
        }
    }

    /// Configure how many leading lines are searched for a name.
    #[wasm_bindgen]
    pub fn set_name_search_lines(&mut self, lines: usize) {
        self.parser = self.parser.clone().with_name_search_lines(lines.max(1));
    }

    /// Parse card text.
    #[wasm_bindgen]
    pub fn parse(&self, text: &str) -> Result<JsValue, JsValue> {
        to_js(&self.parser.parse(text).card)
    }

    /// Parse an OCR.space JSON response.
    #[wasm_bindgen]
    pub fn parse_ocr_response(&self, json: &str) -> Result<JsValue, JsValue> {
        to_js(&card_from_ocr_json(json, &self.parser)?)
    }

    /// Parse card text and include the separated phone numbers.
    #[wasm_bindgen]
    pub fn parse_with_numbers(&self, text: &str) -> Result<JsValue, JsValue> {
        let result = self.parser.parse(text);

        #[derive(serde::Serialize)]
        #[serde(rename_all = "camelCase")]
        struct ParseOutput {
            card: ParsedCardInfo,
            numbers: ContactNumbers,
            line_count: usize,
        }

        to_js(&ParseOutput {
            card: result.card,
            numbers: result.phones,
            line_count: result.line_count,
        })
    }
}

impl Default for CardScanner {
    fn default() -> Self {
        Self::new()
    }
}

fn card_from_ocr_json(json: &str, parser: &CardParser) -> Result<ParsedCardInfo, String> {
    let response = OcrSpaceResponse::from_json(json).map_err(|e| e.to_string())?;
    let text = response.full_text().map_err(|e| e.to_string())?;
    Ok(parser.parse(&text).card)
}

fn to_js<T: serde::Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsValue::from_str(&e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!version().is_empty());
    }

    #[test]
    fn test_normalize_mobile() {
        assert_eq!(normalize_mobile("010-1234-5678"), "01012345678");
        assert_eq!(normalize_mobile("+82 10 1234 5678"), "01012345678");
    }

    #[test]
    fn test_card_from_ocr_json() {
        let json = r#"{
            "ParsedResults": [{"ParsedText": "홍길동\n010-1234-5678"}],
            "OCRExitCode": 1,
            "IsErroredOnProcessing": false
        }"#;
        let card = card_from_ocr_json(json, &CardParser::new()).unwrap();
        assert_eq!(card.name.as_deref(), Some("홍길동"));
        assert_eq!(card.phone.as_deref(), Some("01012345678"));
    }

    #[test]
    fn test_card_from_ocr_json_error() {
        let json = r#"{
            "OCRExitCode": 3,
            "IsErroredOnProcessing": true,
            "ErrorMessage": ["Timed out"]
        }"#;
        let err = card_from_ocr_json(json, &CardParser::new()).unwrap_err();
        assert_eq!(err, "OCR processing error: Timed out");
    }
}
