use super::ExtractError;

/// Extracts the visible text of a PDF, pages concatenated in document order.
/// Structural parse failures are wrapped; a scanned PDF with no text layer
/// succeeds with an empty result.
pub fn extract(bytes: &[u8]) -> Result<String, ExtractError> {
    let text =
        pdf_extract::extract_text_from_mem(bytes).map_err(|e| ExtractError::Pdf(e.to_string()))?;
    Ok(text.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_buffer_fails_wrapped() {
        let err = extract(b"not a pdf at all").unwrap_err();
        assert!(matches!(err, ExtractError::Pdf(_)));
    }

    #[test]
    fn empty_buffer_fails_wrapped() {
        let err = extract(b"").unwrap_err();
        assert!(matches!(err, ExtractError::Pdf(_)));
    }
}
