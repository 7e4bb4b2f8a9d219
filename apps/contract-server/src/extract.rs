//! Upload handling: file type detection and plain-text decoding
//!
//! PDF and DOCX parsing belong to an external extraction service. This
//! module recognises those formats so they can be rejected cleanly, and
//! decodes plain-text uploads itself.

use std::fmt;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::Serialize;

use crate::error::ServerError;

const PDF_MIME: &str = "application/pdf";
const DOCX_MIME: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
const TXT_MIME: &str = "text/plain";

/// Upload formats the analysis API recognises
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileType {
    Pdf,
    Docx,
    Txt,
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FileType::Pdf => "PDF",
            FileType::Docx => "DOCX",
            FileType::Txt => "TXT",
        };
        f.write_str(name)
    }
}

/// Detect file type from MIME type or extension
pub fn detect_file_type(mime_type: &str, filename: &str) -> Option<FileType> {
    let filename = filename.to_lowercase();

    if mime_type == PDF_MIME || filename.ends_with(".pdf") {
        Some(FileType::Pdf)
    } else if mime_type == DOCX_MIME || filename.ends_with(".docx") {
        Some(FileType::Docx)
    } else if mime_type == TXT_MIME || filename.ends_with(".txt") {
        Some(FileType::Txt)
    } else {
        None
    }
}

/// Decode a base64 upload body
pub fn decode_upload(content_base64: &str) -> Result<Vec<u8>, ServerError> {
    STANDARD
        .decode(content_base64.trim())
        .map_err(|e| ServerError::ExtractionFailed(format!("Invalid base64 upload: {}", e)))
}

/// Extract plain text from an uploaded file
pub fn extract_text(bytes: &[u8], file_type: FileType) -> Result<String, ServerError> {
    match file_type {
        FileType::Txt => {
            let text = std::str::from_utf8(bytes).map_err(|e| {
                ServerError::ExtractionFailed(format!("Text file is not valid UTF-8: {}", e))
            })?;
            Ok(text.trim_start_matches('\u{feff}').to_string())
        }
        FileType::Pdf | FileType::Docx => Err(ServerError::ExtractionUnavailable(file_type)),
    }
}
