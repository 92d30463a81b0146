//! Card parser assembling the individual field extractors.

use tracing::{debug, info, trace};

use crate::error::Result;
use crate::models::card::{CardField, ContactNumbers, ParsedCardInfo};
use crate::models::config::ExtractionConfig;
use crate::ocr::OcrSpaceResponse;

use super::confidence::calculate_confidence;
use super::lines::split_lines;
use super::rules::{
    address::extract_address, email::extract_email, phone::extract_phones,
    title::extract_title, website::extract_website, CompanyExtractor, NameExtractor,
};
use super::CardExtractor;

/// Result of card extraction.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractionResult {
    /// The record handed to callers.
    pub card: ParsedCardInfo,
    /// All phone numbers found, before mobile/landline are collapsed.
    pub phones: ContactNumbers,
    /// Number of non-empty lines in the input.
    pub line_count: usize,
}

/// Rule-based business card parser.
///
/// Holds no per-call state; one instance can be shared across threads.
#[derive(Debug, Clone)]
pub struct CardParser {
    /// Leading lines searched for the name.
    name_search_lines: usize,
    /// Extra characters allowed on the name line.
    name_line_slack: usize,
}

impl CardParser {
    /// Create a new parser with default settings.
    pub fn new() -> Self {
        Self {
            name_search_lines: 3,
            name_line_slack: 5,
        }
    }

    /// Create a parser from extraction configuration.
    pub fn from_config(config: &ExtractionConfig) -> Self {
        Self::new()
            .with_name_search_lines(config.name_search_lines)
            .with_name_line_slack(config.name_line_slack)
    }

    /// Set how many leading lines are searched for the name.
    pub fn with_name_search_lines(mut self, lines: usize) -> Self {
        self.name_search_lines = lines;
        self
    }

    /// Set the name line slack used when looking for the company.
    pub fn with_name_line_slack(mut self, slack: usize) -> Self {
        self.name_line_slack = slack;
        self
    }

    /// Parse recognized card text.
    pub fn parse(&self, text: &str) -> ExtractionResult {
        info!("Parsing card from {} characters of text", text.chars().count());

        let lines = split_lines(text);
        debug!("OCR lines: {:?}", lines);

        let name = non_empty(
            NameExtractor::new()
                .with_search_lines(self.name_search_lines)
                .extract(&lines),
        );
        let company = non_empty(
            CompanyExtractor::new()
                .with_name_line_slack(self.name_line_slack)
                .extract(&lines, name.as_deref()),
        );
        let title = non_empty(extract_title(&lines));
        let email = non_empty(extract_email(text));
        let phones = extract_phones(text);
        let phone = phones.primary().map(str::to_string);
        let website = non_empty(extract_website(text));
        let address = non_empty(extract_address(text));

        let mut card = ParsedCardInfo {
            name,
            company,
            title,
            phone,
            email,
            address,
            website,
            confidence: 0.0,
            detected_fields: Vec::new(),
        };

        card.detected_fields = CardField::ALL
            .into_iter()
            .filter(|field| card.get(*field).is_some())
            .collect();
        card.confidence = calculate_confidence(&card.detected_fields);

        debug!(
            "Extracted {} fields with confidence {:.2}: {:?}",
            card.detected_fields.len(),
            card.confidence,
            card.detected_fields
        );
        trace!("Parsed card: {:?}, phones: {:?}", card, phones);

        ExtractionResult {
            card,
            phones,
            line_count: lines.len(),
        }
    }
}

impl Default for CardParser {
    fn default() -> Self {
        Self::new()
    }
}

impl CardExtractor for CardParser {
    fn extract(&self, response: &OcrSpaceResponse) -> Result<ParsedCardInfo> {
        let text = response.full_text()?;
        Ok(self.parse(&text).card)
    }

    fn extract_from_text(&self, text: &str) -> ParsedCardInfo {
        self.parse(text).card
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Parse recognized card text with default settings.
pub fn parse_card_text(text: &str) -> ParsedCardInfo {
    CardParser::new().parse(text).card
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    use crate::ocr::SAMPLE_CARD_TEXT;

    #[test]
    fn test_parse_sample_card() {
        let result = CardParser::new().parse(SAMPLE_CARD_TEXT);

        assert_eq!(
            result.card,
            ParsedCardInfo {
                name: Some("홍길동".to_string()),
                company: Some("주식회사 테크노바".to_string()),
                title: Some("대표이사".to_string()),
                phone: Some("01012345678".to_string()),
                email: Some("hong@technova.com".to_string()),
                address: Some(
                    "서울시 강남구 테헤란로 123\nMobile: 010-1234-5678\nEmail: hong@technova.com\nwww.technova.com"
                        .to_string()
                ),
                website: Some("www.technova.com".to_string()),
                confidence: result.card.confidence,
                detected_fields: CardField::ALL.to_vec(),
            }
        );
        assert!((result.card.confidence - 0.85).abs() < 1e-6);
        assert_eq!(result.line_count, 7);
        assert_eq!(result.phones.landline, None);
    }

    #[test]
    fn test_empty_text() {
        let card = parse_card_text("");
        assert_eq!(card, ParsedCardInfo::default());
        assert_eq!(parse_card_text(" \r\n\t \n"), ParsedCardInfo::default());
    }

    #[test]
    fn test_landline_used_without_mobile() {
        let card = parse_card_text("김영수\nFax: 02-123-4567\nTel: 02-987-6543");
        assert_eq!(card.phone, Some("029876543".to_string()));
        assert!(card.has(CardField::Phone));
    }

    #[test]
    fn test_name_search_lines_setting() {
        let text = "TECHNOVA\nwww.technova.com\nhong@technova.com\n홍길동";
        assert_eq!(parse_card_text(text).name, None);

        let parser = CardParser::new().with_name_search_lines(4);
        assert_eq!(
            parser.extract_from_text(text).name,
            Some("홍길동".to_string())
        );
    }

    #[test]
    fn test_from_config_defaults_match_new() {
        let parser = CardParser::from_config(&ExtractionConfig::default());
        assert_eq!(
            parser.extract_from_text(SAMPLE_CARD_TEXT),
            parse_card_text(SAMPLE_CARD_TEXT)
        );
    }
}
