//! PDF text extraction for uploaded resumes.
//!
//! Uploaded bytes are staged in a named temp file and parsed with
//! `pdf-extract` on the blocking pool; the parse is CPU-bound and must not
//! stall the async runtime. The temp file is owned by the blocking closure,
//! so RAII removes it on success, parse failure, and panic alike.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::info;

use crate::errors::AppError;

/// Extracts and flattens the text of a PDF given its raw bytes.
///
/// Unreadable or malformed input fails with a resume-parse error; the ingest
/// attempt is abandoned, never retried.
pub async fn extract_pdf_text(bytes: Vec<u8>) -> Result<String, AppError> {
    let text = tokio::task::spawn_blocking(move || -> Result<String, AppError> {
        let mut file = NamedTempFile::new()
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to create temp file: {e}")))?;
        file.write_all(&bytes)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to stage upload: {e}")))?;
        extract_from_path(file.path())
        // `file` drops here, removing the staged upload on every exit path
    })
    .await
    .map_err(|e| AppError::Internal(anyhow::anyhow!("PDF parse task failed: {e}")))??;

    info!("Parsed PDF into {} characters of text", text.len());
    Ok(text)
}

fn extract_from_path(path: &Path) -> Result<String, AppError> {
    let raw = pdf_extract::extract_text(path)
        .map_err(|e| AppError::ResumeParse(format!("Could not read PDF: {e}")))?;
    Ok(flatten_text(&raw))
}

/// Flattens extracted text into a single line: fragments keep their order,
/// whitespace runs collapse to single spaces, ends are trimmed.
pub fn flatten_text(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}
