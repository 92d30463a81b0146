//! Parsed business card record handed to form pre-fill and persistence.

use serde::{Deserialize, Serialize};

/// Structured contact data extracted from one OCR text.
///
/// Serialized in camelCase so the record matches the shape the web form
/// layer already consumes (`detectedFields`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedCardInfo {
    /// Person's name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Company name, with `(주)` OCR misreads normalized.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,

    /// Job title, possibly prefixed by a department.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Mobile number if found, otherwise landline. Digits only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// Email address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Postal address starting at the province/city token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    /// Website as written on the card.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,

    /// Average weight of the scored fields that were found (0.0 - 1.0).
    pub confidence: f32,

    /// Fields that carry a non-empty value, in extraction order.
    #[serde(default)]
    pub detected_fields: Vec<CardField>,
}

impl ParsedCardInfo {
    /// Value of a single field.
    pub fn get(&self, field: CardField) -> Option<&str> {
        let value = match field {
            CardField::Name => &self.name,
            CardField::Company => &self.company,
            CardField::Title => &self.title,
            CardField::Phone => &self.phone,
            CardField::Email => &self.email,
            CardField::Address => &self.address,
            CardField::Website => &self.website,
        };
        value.as_deref()
    }

    /// Check whether a field was detected.
    pub fn has(&self, field: CardField) -> bool {
        self.detected_fields.contains(&field)
    }

    /// Check whether nothing at all was extracted.
    pub fn is_empty(&self) -> bool {
        self.detected_fields.is_empty()
    }
}

/// Fields of a parsed card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardField {
    Name,
    Company,
    Title,
    Phone,
    Email,
    Address,
    Website,
}

impl CardField {
    /// All fields in detection order.
    pub const ALL: [CardField; 7] = [
        CardField::Name,
        CardField::Company,
        CardField::Title,
        CardField::Phone,
        CardField::Email,
        CardField::Address,
        CardField::Website,
    ];

    /// Field name as reported in `detectedFields`.
    pub fn as_str(&self) -> &'static str {
        match self {
            CardField::Name => "name",
            CardField::Company => "company",
            CardField::Title => "title",
            CardField::Phone => "phone",
            CardField::Email => "email",
            CardField::Address => "address",
            CardField::Website => "website",
        }
    }

    /// Confidence weight of the field, `None` for fields that are not scored.
    pub fn weight(&self) -> Option<f32> {
        match self {
            CardField::Name => Some(0.8),
            CardField::Company => Some(0.85),
            CardField::Title => Some(0.75),
            CardField::Phone => Some(0.9),
            CardField::Email => Some(0.95),
            CardField::Address | CardField::Website => None,
        }
    }
}

impl std::fmt::Display for CardField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Phone numbers found on a card, kept apart before they are collapsed
/// into [`ParsedCardInfo::phone`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactNumbers {
    /// Korean mobile number in domestic format (`010...`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile: Option<String>,

    /// Landline number, separators stripped.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub landline: Option<String>,

    /// Fax number as written, without the `fax` label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fax: Option<String>,
}

impl ContactNumbers {
    /// Number reported as the card's phone. Mobile wins over landline.
    pub fn primary(&self) -> Option<&str> {
        self.mobile
            .as_deref()
            .filter(|m| !m.is_empty())
            .or_else(|| self.landline.as_deref().filter(|l| !l.is_empty()))
    }
}
