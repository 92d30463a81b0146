//! Error types for the cardscan-core library.
//!
//! Card text parsing itself never fails; these errors cover configuration
//! handling and unwrapping OCR provider responses.

use thiserror::Error;

/// Main error type for the cardscan library.
#[derive(Error, Debug)]
pub enum CardScanError {
    /// OCR provider response could not be turned into text.
    #[error("OCR response error: {0}")]
    OcrResponse(#[from] OcrResponseError),

    /// JSON (de)serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors related to OCR provider responses.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OcrResponseError {
    /// The provider flagged the request as failed.
    #[error("OCR processing error: {message}{}", details_suffix(.details))]
    Processing {
        message: String,
        details: Option<String>,
    },

    /// The response carried no recognized text.
    #[error("No text detected in the image")]
    NoText,
}

fn details_suffix(details: &Option<String>) -> String {
    details
        .as_deref()
        .map(|d| format!(" - {}", d))
        .unwrap_or_default()
}

/// Result type for the cardscan library.
pub type Result<T> = std::result::Result<T, CardScanError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_processing_error_message() {
        let err = OcrResponseError::Processing {
            message: "File failed validation".to_string(),
            details: Some("Unsupported file type".to_string()),
        };
        assert_eq!(
            err.to_string(),
            "OCR processing error: File failed validation - Unsupported file type"
        );

        let err = OcrResponseError::Processing {
            message: "Timed out".to_string(),
            details: None,
        };
        assert_eq!(err.to_string(), "OCR processing error: Timed out");
    }

    #[test]
    fn test_wraps_into_top_level() {
        let err: CardScanError = OcrResponseError::NoText.into();
        assert_eq!(
            err.to_string(),
            "OCR response error: No text detected in the image"
        );
    }
}
