use bytes::Bytes;

/// Below this many characters the embedded text layer is treated as a scan.
pub static MIN_PDF_TEXT_CHARS: usize = 50;

/// Reads the embedded text layer. Malformed documents yield an empty string
/// so the caller can fall back to OCR.
pub async fn extract_text(data: Bytes) -> String {
    let result =
        tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&data)).await;

    match result {
        Ok(Ok(text)) => text.trim().to_string(),
        Ok(Err(e)) => {
            tracing::warn!("pdf text extraction failed: {}", e);
            String::new()
        }
        Err(e) => {
            tracing::warn!("pdf text extraction panicked: {}", e);
            String::new()
        }
    }
}

pub fn needs_ocr(text: &str) -> bool {
    text.trim().chars().count() < MIN_PDF_TEXT_CHARS
}
