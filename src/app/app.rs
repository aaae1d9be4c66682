use std::time::Duration;

use super::event::AppEvent;
use super::mode::AppMode;
use super::render_state::{context_after, context_before, RenderState};
use crate::engine::{PlaybackEngine, PlaybackEvent, PlaybackStatus, Token};
use crate::input::{self, LoadedDocument};

/// Words of context shown either side of the current word while paused.
const CONTEXT_WINDOW: usize = 3;

/// Speed change per arrow-key press.
const WPM_STEP: i32 = 50;

/// An in-memory reading position marker. Deliberately not persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bookmark {
    pub position: usize,
    pub word: String,
}

/// Application core: one open document, one playback engine, presentation
/// settings. Holds no terminal or rendering state.
pub struct App {
    mode: AppMode,
    engine: PlaybackEngine,
    title: Option<String>,
    last_shown: Option<(usize, Token)>,
    bookmarks: Vec<Bookmark>,
    highlight_orp: bool,
    status_message: Option<String>,
}

impl App {
    pub fn new() -> Self {
        Self {
            mode: AppMode::Command,
            engine: PlaybackEngine::new(),
            title: None,
            last_shown: None,
            bookmarks: vec![],
            highlight_orp: true,
            status_message: None,
        }
    }

    pub fn mode(&self) -> AppMode {
        self.mode
    }

    pub fn wpm(&self) -> u32 {
        self.engine.wpm()
    }

    pub fn bookmarks(&self) -> &[Bookmark] {
        &self.bookmarks
    }

    pub fn highlight_orp(&self) -> bool {
        self.highlight_orp
    }

    /// Replaces the open document wholesale and parks at word 0.
    pub fn open_document(&mut self, doc: LoadedDocument) {
        let words = doc.sequence.len();
        self.engine.load(doc.sequence);
        self.status_message = Some(format!("Loaded {} ({} words)", doc.title, words));
        self.title = Some(doc.title);
        self.last_shown = None;
        self.bookmarks.clear();
        self.mode = AppMode::Paused;
        self.drain_engine_events();
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::LoadFile(path) => match input::load_path(&path) {
                Ok(doc) => self.open_document(doc),
                Err(err) => self.status_message = Some(err.to_string()),
            },
            AppEvent::LoadClipboard => match input::clipboard::load() {
                Ok(doc) => self.open_document(doc),
                Err(err) => self.status_message = Some(err.to_string()),
            },
            AppEvent::SetWpm(wpm) => match self.engine.set_wpm(wpm) {
                Ok(()) => self.status_message = Some(format!("{} wpm", self.engine.wpm())),
                Err(err) => self.status_message = Some(err.to_string()),
            },
            AppEvent::Quit => self.mode = AppMode::Quit,
            AppEvent::Help => {
                self.status_message = Some(
                    "@file loads a document, @@ pastes, :wpm N sets speed, :q quits".to_string(),
                );
            }
            AppEvent::Warning(message) | AppEvent::InvalidCommand(message) => {
                self.status_message = Some(message);
            }
            AppEvent::None => {}
        }
    }

    /// Reader-mode key bindings (the command deck handles its own input).
    pub fn handle_keypress(&mut self, c: char) {
        match c {
            ' ' | 'k' => self.toggle_play_pause(),
            'r' => {
                self.engine.restart();
                self.last_shown = None;
            }
            'b' => self.add_bookmark(),
            '\'' => self.jump_to_bookmark(),
            'o' => self.highlight_orp = !self.highlight_orp,
            'q' => {
                self.engine.pause();
                self.mode = AppMode::Command;
            }
            _ => {}
        }
        self.drain_engine_events();
    }

    pub fn toggle_play_pause(&mut self) {
        if self.engine.is_playing() {
            self.engine.pause();
        } else {
            self.engine.play();
        }
        self.drain_engine_events();
    }

    pub fn adjust_wpm(&mut self, direction: i32) {
        self.engine.adjust_wpm(direction.signum() * WPM_STEP);
        self.status_message = Some(format!("{} wpm", self.engine.wpm()));
    }

    /// Marks the word the cursor currently points at.
    pub fn add_bookmark(&mut self) {
        let position = self.engine.cursor().min(self.engine.total_words().saturating_sub(1));
        if let Some(token) = self.engine.sequence().and_then(|s| s.get(position)) {
            let word = token.as_str().to_string();
            self.status_message = Some(format!("Bookmarked \"{}\" at {}", word, position));
            self.bookmarks.push(Bookmark { position, word });
        }
    }

    /// Seeks to the most recently added bookmark.
    pub fn jump_to_bookmark(&mut self) {
        if let Some(bookmark) = self.bookmarks.last() {
            self.engine.seek(bookmark.position);
            self.last_shown = None;
            self.status_message = Some(format!("Jumped to {}", bookmark.position));
        } else {
            self.status_message = Some("No bookmarks yet".to_string());
        }
        self.drain_engine_events();
    }

    /// Resumes a document at a saved position, clamped by the engine.
    pub fn resume_at(&mut self, doc: LoadedDocument, position: usize) {
        self.open_document(doc);
        self.engine.seek(position);
        self.drain_engine_events();
    }

    /// How long the event loop may sleep before the next word is due.
    pub fn poll_timeout(&self) -> Option<Duration> {
        self.engine.poll_timeout()
    }

    /// Runs due playback steps and folds engine events into app state.
    /// Called once per event-loop iteration.
    pub fn pump(&mut self) {
        while self.engine.tick() {}
        self.drain_engine_events();
    }

    fn drain_engine_events(&mut self) {
        while let Some(event) = self.engine.pop_event() {
            match event {
                PlaybackEvent::WordDisplayed { index, word } => {
                    self.last_shown = Some((index, word));
                }
                PlaybackEvent::Completed => {
                    self.status_message = Some("Finished - space replays".to_string());
                }
                PlaybackEvent::ProgressChanged { .. } => {}
                PlaybackEvent::PlayStateChanged { .. } => {}
            }
        }
        self.sync_mode();
    }

    // Reading/Paused shadow the engine; Command and Quit are sticky.
    fn sync_mode(&mut self) {
        if matches!(self.mode, AppMode::Reading | AppMode::Paused) {
            self.mode = if self.engine.is_playing() {
                AppMode::Reading
            } else {
                AppMode::Paused
            };
        }
    }

    /// Index of the word the UI should display right now.
    fn display_index(&self) -> Option<usize> {
        let total = self.engine.total_words();
        if total == 0 {
            return None;
        }
        match self.engine.status() {
            PlaybackStatus::Playing | PlaybackStatus::Finished => self
                .last_shown
                .as_ref()
                .map(|(index, _)| *index)
                .or(Some(self.engine.cursor().min(total - 1))),
            _ => Some(self.engine.cursor().min(total - 1)),
        }
    }

    pub fn render_state(&self) -> RenderState {
        let sequence = match self.engine.sequence() {
            Some(sequence) => sequence,
            None => {
                let mut state = RenderState::empty(self.mode);
                state.wpm = self.engine.wpm();
                state.status_message = self.status_message.clone();
                return state;
            }
        };

        let display_index = self.display_index();
        let (context_left, context_right) = match display_index {
            Some(index) => (
                context_before(sequence, index, CONTEXT_WINDOW),
                context_after(sequence, index, CONTEXT_WINDOW),
            ),
            None => (vec![], vec![]),
        };

        RenderState {
            mode: self.mode,
            title: self.title.clone(),
            current_word: display_index
                .and_then(|index| sequence.get(index))
                .map(|t| t.as_str().to_string()),
            highlight_orp: self.highlight_orp,
            context_left,
            context_right,
            progress: self.engine.progress(),
            wpm: self.engine.wpm(),
            time_remaining: self.engine.time_remaining(),
            status_message: self.status_message.clone(),
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
