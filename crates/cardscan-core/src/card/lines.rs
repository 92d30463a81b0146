//! Line splitting of raw OCR text.

/// Split OCR text into trimmed, non-empty lines, keeping their order.
///
/// Trimming also removes the `\r` of `\r\n` line endings.
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}
