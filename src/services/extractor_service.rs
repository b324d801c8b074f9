use crate::errors::{AppError, AppResult};

#[cfg_attr(test, mockall::automock)]
pub trait TextExtractor: Send + Sync {
    /// Turn an uploaded document into plain text.
    fn extract(&self, document: &[u8]) -> AppResult<String>;
}

/// Extracts text from PDF bytes with `pdf-extract`.
pub struct PdfTextExtractor;

impl TextExtractor for PdfTextExtractor {
    fn extract(&self, document: &[u8]) -> AppResult<String> {
        if !document.starts_with(b"%PDF") {
            return Err(AppError::Extraction(
                "Not a valid PDF file (missing %PDF header)".to_string(),
            ));
        }

        let text = pdf_extract::extract_text_from_mem(document)
            .map_err(|e| AppError::Extraction(format!("PDF extraction error: {:?}", e)))?;

        let text = normalize_whitespace(&text);
        if text.is_empty() {
            return Err(AppError::Extraction(
                "The document does not contain any extractable text".to_string(),
            ));
        }

        log::debug!("Extracted {} characters from PDF", text.len());
        Ok(text)
    }
}

/// Collapse page breaks and runs of whitespace into single spaces.
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Cut `text` to at most `max_chars` characters.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => &text[..byte_index],
        None => text,
    }
}
