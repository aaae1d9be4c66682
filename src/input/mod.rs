//! Document extraction collaborators.
//!
//! Each loader turns a container format into plain text and hands it to the
//! engine's tokenizer; the core never learns where words came from.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::engine::{EngineError, TokenSequence};

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("text file error: {0}")]
    TextRead(String),

    #[error("PDF parse error: {0}")]
    PdfParse(String),

    #[error("EPUB parse error: {0}")]
    EpubParse(String),

    #[error("clipboard error: {0}")]
    Clipboard(String),

    #[error("file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("unsupported format: {0} (use .txt, .epub or .pdf)")]
    UnsupportedFormat(String),

    #[error("no readable words in {0}")]
    EmptyDocument(String),
}

/// A tokenized document ready for playback.
pub struct LoadedDocument {
    pub title: String,
    pub sequence: TokenSequence,
}

pub mod clipboard;
pub mod epub;
pub mod pdf;
pub mod text;

/// Dispatches on file extension.
pub fn load_path(path: &str) -> Result<LoadedDocument, LoadError> {
    let extension = Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("txt") => text::load(path),
        Some("pdf") => pdf::load(path),
        Some("epub") => epub::load(path),
        _ => Err(LoadError::UnsupportedFormat(path.to_string())),
    }
}

// Shared tail of every loader: tokenize and name the document.
fn document_from_text(title: &str, raw: &str) -> Result<LoadedDocument, LoadError> {
    match crate::engine::tokenize(raw) {
        Ok(sequence) => Ok(LoadedDocument {
            title: title.to_string(),
            sequence,
        }),
        Err(EngineError::EmptyContent) => Err(LoadError::EmptyDocument(title.to_string())),
        Err(other) => Err(LoadError::TextRead(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_path_rejects_unknown_extension() {
        let result = load_path("document.docx");
        assert!(matches!(result, Err(LoadError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_load_path_rejects_no_extension() {
        let result = load_path("README");
        assert!(matches!(result, Err(LoadError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_document_from_text_tokenizes() {
        let doc = document_from_text("sample", "hello brave world").unwrap();
        assert_eq!(doc.title, "sample");
        assert_eq!(doc.sequence.len(), 3);
    }

    #[test]
    fn test_document_from_text_empty_is_error() {
        let result = document_from_text("blank", "   \n  ");
        assert!(matches!(result, Err(LoadError::EmptyDocument(_))));
    }
}
