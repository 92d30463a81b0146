//! OCR.space `parse/image` response model.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{OcrResponseError, Result};

/// Response body of the OCR.space `parse/image` endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OcrSpaceResponse {
    /// One entry per processed page/image.
    #[serde(default)]
    pub parsed_results: Vec<ParsedResult>,

    #[serde(rename = "OCRExitCode", default)]
    pub ocr_exit_code: i32,

    #[serde(default)]
    pub is_errored_on_processing: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<ErrorMessage>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_details: Option<String>,
}

/// Recognition result for one image.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ParsedResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_overlay: Option<TextOverlay>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parsed_text: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<ErrorMessage>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_details: Option<String>,
}

/// Line-level overlay, present when requested.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TextOverlay {
    #[serde(default)]
    pub lines: Vec<TextLine>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TextLine {
    pub line_text: String,
}

/// OCR.space reports errors either as one string or as a list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ErrorMessage {
    One(String),
    Many(Vec<String>),
}

impl std::fmt::Display for ErrorMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorMessage::One(message) => f.write_str(message),
            ErrorMessage::Many(messages) => f.write_str(&messages.join("; ")),
        }
    }
}

impl OcrSpaceResponse {
    /// Parse a response body.
    pub fn from_json(body: &str) -> Result<Self> {
        Ok(serde_json::from_str(body)?)
    }

    /// Recognized text of the first result.
    ///
    /// `ParsedText` is preferred; the overlay lines are used when it is
    /// missing or blank.
    pub fn full_text(&self) -> std::result::Result<String, OcrResponseError> {
        if self.is_errored_on_processing {
            let message = self
                .error_message
                .as_ref()
                .map(ToString::to_string)
                .unwrap_or_else(|| "Unknown error".to_string());
            warn!("OCR provider reported a processing error: {}", message);
            return Err(OcrResponseError::Processing {
                message,
                details: self.error_details.clone(),
            });
        }

        let text = self
            .parsed_results
            .first()
            .map(ParsedResult::text)
            .unwrap_or_default();

        if text.is_empty() {
            warn!("OCR response contained no text");
            return Err(OcrResponseError::NoText);
        }

        debug!("OCR response yielded {} characters", text.len());
        Ok(text)
    }
}

impl ParsedResult {
    fn text(&self) -> String {
        if let Some(parsed) = self.parsed_text.as_deref().map(str::trim) {
            if !parsed.is_empty() {
                return parsed.to_string();
            }
        }

        self.text_overlay
            .as_ref()
            .map(|overlay| {
                overlay
                    .lines
                    .iter()
                    .map(|line| line.line_text.as_str())
                    .collect::<Vec<_>>()
                    .join("\n")
                    .trim()
                    .to_string()
            })
            .unwrap_or_default()
    }
}
