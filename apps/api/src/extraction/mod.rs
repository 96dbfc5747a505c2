//! Upload text extraction.
//!
//! Turns uploaded bytes into the plain text the scoring engine consumes.
//! PDFs go through `pdf-extract`; every other format is read as UTF-8 with
//! lossy replacement, the same way a browser `File.text()` read behaves.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("Could not extract text from PDF: {0}")]
    Pdf(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Pdf,
    PlainText,
}

impl DocumentFormat {
    /// Content type wins when it names PDF; otherwise the file extension decides.
    pub fn detect(filename: &str, content_type: Option<&str>) -> Self {
        let by_type = content_type
            .map(|ct| ct.eq_ignore_ascii_case("application/pdf"))
            .unwrap_or(false);
        let by_extension = filename
            .rsplit_once('.')
            .map(|(_, ext)| ext.eq_ignore_ascii_case("pdf"))
            .unwrap_or(false);

        if by_type || by_extension {
            DocumentFormat::Pdf
        } else {
            DocumentFormat::PlainText
        }
    }
}

/// Extracts plain text from an uploaded document. Empty uploads yield an empty string.
pub fn extract_text(
    filename: &str,
    content_type: Option<&str>,
    bytes: &[u8],
) -> Result<String, ExtractionError> {
    if bytes.is_empty() {
        return Ok(String::new());
    }

    match DocumentFormat::detect(filename, content_type) {
        DocumentFormat::Pdf => pdf_extract::extract_text_from_mem(bytes)
            .map_err(|e| ExtractionError::Pdf(e.to_string())),
        DocumentFormat::PlainText => Ok(String::from_utf8_lossy(bytes).into_owned()),
    }
}
