use std::fs::File;
use std::io::Read;
use std::path::Path;

use super::{document_from_text, LoadError, LoadedDocument};

/// Extract text from a PDF with the `pdf-extract` crate. Image-based PDFs
/// yield no text and surface as an empty-document error.
pub fn load(path: &str) -> Result<LoadedDocument, LoadError> {
    let path_ref = Path::new(path);

    if !path_ref.exists() {
        return Err(LoadError::FileNotFound(path_ref.to_path_buf()));
    }

    let mut file = File::open(path_ref).map_err(|e| LoadError::PdfParse(e.to_string()))?;
    let mut buffer = Vec::new();
    file.read_to_end(&mut buffer)
        .map_err(|e| LoadError::PdfParse(e.to_string()))?;

    let raw = pdf_extract::extract_text_from_mem(&buffer)
        .map_err(|e| LoadError::PdfParse(e.to_string()))?;

    let title = path_ref
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(path);

    document_from_text(title, &raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_nonexistent_file() {
        let result = load("/nonexistent/path/document.pdf");
        assert!(matches!(result, Err(LoadError::FileNotFound(_))));
    }

    #[test]
    fn test_parse_error_carries_detail() {
        let err = LoadError::PdfParse("bad xref table".to_string());
        assert!(err.to_string().contains("bad xref table"));
    }
}
