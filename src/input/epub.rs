use std::path::Path;

use super::{document_from_text, LoadError, LoadedDocument};

/// Extract text from an EPUB by walking its spine in order and stripping
/// markup from each chapter. DRM-protected books come out empty and are
/// reported as such rather than silently loading nothing.
pub fn load(path: &str) -> Result<LoadedDocument, LoadError> {
    let path_ref = Path::new(path);

    if !path_ref.exists() {
        return Err(LoadError::FileNotFound(path_ref.to_path_buf()));
    }

    let mut doc =
        epub::doc::EpubDoc::new(path_ref).map_err(|e| LoadError::EpubParse(e.to_string()))?;

    let num_chapters = doc.get_num_chapters();
    if num_chapters == 0 {
        return Err(LoadError::EpubParse("no chapters found".to_string()));
    }

    let mut content = String::new();
    for chapter_idx in 0..num_chapters {
        if !doc.set_current_chapter(chapter_idx) {
            continue;
        }
        if let Some((chapter_html, _mime)) = doc.get_current_str() {
            if !chapter_html.is_empty() {
                if !content.is_empty() {
                    content.push_str("\n\n");
                }
                content.push_str(&strip_markup(&chapter_html));
            }
        }
    }

    if content.is_empty() {
        return Err(LoadError::EpubParse(
            "no extractable text content (possibly DRM-protected)".to_string(),
        ));
    }

    let title = doc.mdata("title").map(|m| m.value.clone()).unwrap_or_else(|| {
        path_ref
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or(path)
            .to_string()
    });

    document_from_text(&title, &content)
}

/// Drop tags and collapse the remaining text. Crude but good enough: the
/// tokenizer normalizes whitespace anyway, so only tag removal matters here.
fn strip_markup(html: &str) -> String {
    let mut result = String::with_capacity(html.len());
    let mut in_tag = false;

    for c in html.chars() {
        if c == '<' {
            in_tag = true;
            // Tag boundaries separate words ("...end</p><p>Next...").
            result.push(' ');
        } else if c == '>' {
            in_tag = false;
        } else if !in_tag {
            result.push(c);
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_nonexistent_file() {
        let result = load("/nonexistent/path/book.epub");
        assert!(matches!(result, Err(LoadError::FileNotFound(_))));
    }

    #[test]
    fn test_strip_markup_removes_tags() {
        let html = "<html><body><p>Hello World</p></body></html>";
        let text = strip_markup(html);
        assert!(text.contains("Hello World"));
        assert!(!text.contains('<'));
        assert!(!text.contains("body"));
    }

    #[test]
    fn test_strip_markup_separates_adjacent_blocks() {
        let html = "<p>end.</p><p>Next</p>";
        let text = strip_markup(html);
        let seq = crate::engine::tokenize(&text).unwrap();
        let words: Vec<&str> = seq.iter().map(|t| t.as_str()).collect();
        assert_eq!(words, vec!["end.", "Next"]);
    }
}
