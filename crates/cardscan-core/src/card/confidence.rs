//! Confidence scoring of a parsed card.

use crate::models::card::CardField;

/// Average weight of the scored fields that were detected.
///
/// This is not a completeness score: a card with only an email (0.95)
/// outscores a card with every field. Address and website carry no weight.
pub fn calculate_confidence(detected: &[CardField]) -> f32 {
    let weights: Vec<f32> = detected.iter().filter_map(|f| f.weight()).collect();

    if weights.is_empty() {
        return 0.0;
    }

    weights.iter().sum::<f32>() / weights.len() as f32
}
