use std::time::Duration;

use crate::app::mode::AppMode;
use crate::engine::TokenSequence;

/// Data-only snapshot for the UI. Built fresh each frame; the UI never
/// reaches into the engine directly.
pub struct RenderState {
    pub mode: AppMode,
    pub title: Option<String>,
    pub current_word: Option<String>,
    pub highlight_orp: bool,
    pub context_left: Vec<String>,
    pub context_right: Vec<String>,
    pub progress: (usize, usize),
    pub wpm: u32,
    pub time_remaining: Duration,
    pub status_message: Option<String>,
}

impl RenderState {
    /// State for when no document is loaded.
    pub fn empty(mode: AppMode) -> Self {
        Self {
            mode,
            title: None,
            current_word: None,
            highlight_orp: true,
            context_left: vec![],
            context_right: vec![],
            progress: (0, 0),
            wpm: crate::engine::DEFAULT_WPM,
            time_remaining: Duration::ZERO,
            status_message: None,
        }
    }
}

/// Words immediately before `index`, closest last.
pub fn context_before(sequence: &TokenSequence, index: usize, window: usize) -> Vec<String> {
    let start = index.saturating_sub(window);
    sequence.as_slice()[start..index.min(sequence.len())]
        .iter()
        .map(|t| t.as_str().to_string())
        .collect()
}

/// Words immediately after `index`, closest first.
pub fn context_after(sequence: &TokenSequence, index: usize, window: usize) -> Vec<String> {
    if index + 1 >= sequence.len() {
        return vec![];
    }
    let end = (index + 1 + window).min(sequence.len());
    sequence.as_slice()[index + 1..end]
        .iter()
        .map(|t| t.as_str().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::tokenize;

    #[test]
    fn test_context_windows_in_the_middle() {
        let seq = tokenize("a b c d e f g").unwrap();
        assert_eq!(context_before(&seq, 3, 2), vec!["b", "c"]);
        assert_eq!(context_after(&seq, 3, 2), vec!["e", "f"]);
    }

    #[test]
    fn test_context_windows_at_edges() {
        let seq = tokenize("a b c").unwrap();
        assert!(context_before(&seq, 0, 3).is_empty());
        assert_eq!(context_after(&seq, 0, 3), vec!["b", "c"]);
        assert_eq!(context_before(&seq, 2, 3), vec!["a", "b"]);
        assert!(context_after(&seq, 2, 3).is_empty());
    }

    #[test]
    fn test_empty_render_state() {
        let state = RenderState::empty(AppMode::Command);
        assert_eq!(state.mode, AppMode::Command);
        assert!(state.current_word.is_none());
        assert_eq!(state.progress, (0, 0));
    }
}
