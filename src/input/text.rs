use std::path::Path;

use super::{document_from_text, LoadError, LoadedDocument};

/// Load a plain `.txt` file.
pub fn load(path: &str) -> Result<LoadedDocument, LoadError> {
    let path_ref = Path::new(path);

    if !path_ref.exists() {
        return Err(LoadError::FileNotFound(path_ref.to_path_buf()));
    }

    let raw = std::fs::read_to_string(path_ref).map_err(|e| LoadError::TextRead(e.to_string()))?;

    let title = path_ref
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(path);

    document_from_text(title, &raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Write;

    #[test]
    fn test_load_nonexistent_file() {
        let result = load("/nonexistent/path/story.txt");
        assert!(matches!(result, Err(LoadError::FileNotFound(_))));
    }

    #[test]
    fn test_load_plain_text() {
        let test_file = "test_input_text.txt";
        let mut file = fs::File::create(test_file).unwrap();
        file.write_all(b"One two three.").unwrap();

        let doc = load(test_file).unwrap();
        assert_eq!(doc.title, test_file);
        assert_eq!(doc.sequence.len(), 3);
        assert_eq!(doc.sequence.get(2).unwrap().as_str(), "three.");

        fs::remove_file(test_file).unwrap();
    }

    #[test]
    fn test_load_whitespace_only_file_is_empty_document() {
        let test_file = "test_input_blank.txt";
        let mut file = fs::File::create(test_file).unwrap();
        file.write_all(b"  \n\t\n  ").unwrap();

        let result = load(test_file);
        assert!(matches!(result, Err(LoadError::EmptyDocument(_))));

        fs::remove_file(test_file).unwrap();
    }
}
