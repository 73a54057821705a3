//! Text extraction adapter: raw uploaded bytes in, plain text or a typed
//! extraction failure out. The rest of the core only ever sees the extracted
//! string.

use thiserror::Error;

/// Uploads larger than this are rejected before any parsing work.
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

const PDF_MAGIC: &[u8] = b"%PDF-";

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("File too large: maximum upload size is 10 MB")]
    TooLarge,

    #[error("DOCX files are not yet supported. Please convert your resume to PDF or plain text format.")]
    DocxUnsupported,

    #[error("Unsupported file format. Please upload a PDF or text file.")]
    UnsupportedFormat,

    #[error("Failed to extract text from PDF: {0}")]
    Pdf(String),

    #[error("Failed to read text file: not valid UTF-8")]
    Encoding,
}

/// Extracts plain text from an uploaded document, dispatching on the file
/// name extension with a magic-byte check for PDFs whose name lies.
pub fn extract_text(bytes: &[u8], file_name: &str) -> Result<String, ExtractionError> {
    if bytes.len() > MAX_UPLOAD_BYTES {
        return Err(ExtractionError::TooLarge);
    }

    let lower = file_name.to_lowercase();

    if lower.ends_with(".docx") || lower.ends_with(".doc") {
        return Err(ExtractionError::DocxUnsupported);
    }

    if lower.ends_with(".pdf") || bytes.starts_with(PDF_MAGIC) {
        return extract_pdf(bytes);
    }

    if lower.ends_with(".txt") || lower.ends_with(".text") || lower.ends_with(".md") {
        return std::str::from_utf8(bytes)
            .map(|s| s.to_string())
            .map_err(|_| ExtractionError::Encoding);
    }

    // No recognized extension: accept clean UTF-8 as plain text, reject
    // anything binary.
    match std::str::from_utf8(bytes) {
        Ok(s) if !s.trim().is_empty() => Ok(s.to_string()),
        _ => Err(ExtractionError::UnsupportedFormat),
    }
}

fn extract_pdf(bytes: &[u8]) -> Result<String, ExtractionError> {
    if !bytes.starts_with(PDF_MAGIC) {
        return Err(ExtractionError::Pdf(
            "file does not begin with a PDF header".to_string(),
        ));
    }
    pdf_extract::extract_text_from_mem(bytes).map_err(|e| ExtractionError::Pdf(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_txt_passes_through() {
        let text = "Jane Doe\nSoftware Engineer\njane@example.com";
        let result = extract_text(text.as_bytes(), "resume.txt").unwrap();
        assert_eq!(result, text);
    }

    #[test]
    fn test_docx_rejected_with_typed_error() {
        let result = extract_text(b"PK\x03\x04", "resume.docx");
        assert!(matches!(result, Err(ExtractionError::DocxUnsupported)));
    }

    #[test]
    fn test_binary_without_extension_unsupported() {
        let result = extract_text(&[0u8, 159, 146, 150], "resume");
        assert!(matches!(result, Err(ExtractionError::UnsupportedFormat)));
    }

    #[test]
    fn test_oversized_upload_rejected() {
        let bytes = vec![b'a'; MAX_UPLOAD_BYTES + 1];
        assert!(matches!(
            extract_text(&bytes, "resume.txt"),
            Err(ExtractionError::TooLarge)
        ));
    }

    #[test]
    fn test_pdf_named_txt_dispatches_on_magic() {
        // .pdf-less name but PDF magic bytes: must go down the PDF path,
        // which fails on this truncated document rather than returning
        // binary garbage as "text"
        let result = extract_text(b"%PDF-1.4 garbage", "resume");
        assert!(matches!(result, Err(ExtractionError::Pdf(_))));
    }

    #[test]
    fn test_invalid_utf8_txt_is_encoding_error() {
        let result = extract_text(&[0xff, 0xfe, 0x00], "notes.txt");
        assert!(matches!(result, Err(ExtractionError::Encoding)));
    }
}
