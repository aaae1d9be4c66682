use super::{document_from_text, LoadError, LoadedDocument};

/// Load pasted text from the system clipboard via `arboard`.
pub fn load() -> Result<LoadedDocument, LoadError> {
    let mut clipboard = arboard::Clipboard::new().map_err(|e| LoadError::Clipboard(e.to_string()))?;
    let raw = clipboard
        .get_text()
        .map_err(|e| LoadError::Clipboard(e.to_string()))?;

    document_from_text("Pasted text", &raw)
}
