//! Word-by-word playback state machine.
//!
//! One engine instance owns one loaded sequence and its playback state.
//! Scheduling is cooperative and single-threaded: at most one step is ever
//! pending, the driver asks `poll_timeout` how long to sleep and calls
//! `tick` when it wakes. Pausing, seeking or loading clears the pending
//! slot synchronously, so a cancelled step can never emit events.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use super::config::{TimingConfig, DEFAULT_WPM};
use super::error::EngineError;
use super::timing::word_delay;
use super::token::{Token, TokenSequence};

/// Time source for step scheduling. Injectable so tests can run playback
/// without real time.
pub trait Clock {
    fn now(&self) -> Instant;
}

/// Production clock backed by `Instant::now`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackStatus {
    /// No sequence loaded.
    Idle,
    /// Sequence loaded, cursor parked, not advancing.
    Ready,
    /// Actively advancing.
    Playing,
    /// Cursor ran off the end.
    Finished,
}

/// Data-only notifications for collaborators. The presentation layer
/// renders them; a persistence layer may record `ProgressChanged`. The
/// engine itself persists nothing.
#[derive(Debug, Clone, PartialEq)]
pub enum PlaybackEvent {
    /// `word` was just put on display at sequence position `index`.
    WordDisplayed { index: usize, word: Token },
    /// Cursor moved; `index` is the next word to display, in `0..=total`.
    ProgressChanged { index: usize, total: usize },
    /// The whole sequence has been displayed.
    Completed,
    /// Fires on every play/pause transition.
    PlayStateChanged { playing: bool },
}

#[derive(Debug, Clone, Copy)]
struct PendingStep {
    due: Instant,
}

/// RSVP playback over one `TokenSequence`.
pub struct PlaybackEngine<C: Clock = SystemClock> {
    clock: C,
    config: TimingConfig,
    sequence: Option<TokenSequence>,
    cursor: usize,
    wpm: u32,
    status: PlaybackStatus,
    pending: Option<PendingStep>,
    events: VecDeque<PlaybackEvent>,
}

impl PlaybackEngine<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock, TimingConfig::default())
    }
}

impl Default for PlaybackEngine<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> PlaybackEngine<C> {
    pub fn with_clock(clock: C, config: TimingConfig) -> Self {
        let wpm = config.clamp_wpm(DEFAULT_WPM);
        Self {
            clock,
            config,
            sequence: None,
            cursor: 0,
            wpm,
            status: PlaybackStatus::Idle,
            pending: None,
            events: VecDeque::new(),
        }
    }

    pub fn status(&self) -> PlaybackStatus {
        self.status
    }

    pub fn is_playing(&self) -> bool {
        self.status == PlaybackStatus::Playing
    }

    /// Cursor position: index of the next word to display, `0..=total_words`.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn wpm(&self) -> u32 {
        self.wpm
    }

    pub fn total_words(&self) -> usize {
        self.sequence.as_ref().map_or(0, TokenSequence::len)
    }

    pub fn sequence(&self) -> Option<&TokenSequence> {
        self.sequence.as_ref()
    }

    /// The word the cursor currently points at (None when finished or idle).
    pub fn current_token(&self) -> Option<&Token> {
        self.sequence.as_ref()?.get(self.cursor)
    }

    pub fn progress(&self) -> (usize, usize) {
        (self.cursor, self.total_words())
    }

    /// Estimated reading time left at the current speed.
    pub fn time_remaining(&self) -> Duration {
        let remaining = self.total_words().saturating_sub(self.cursor);
        Duration::from_secs_f64(remaining as f64 * 60.0 / self.wpm as f64)
    }

    /// Loads a new sequence, replacing any previous one wholesale.
    pub fn load(&mut self, sequence: TokenSequence) {
        self.load_at(sequence, 0);
    }

    /// Loads a sequence and parks the cursor at a resume position (clamped),
    /// e.g. when continuing from a saved bookmark.
    pub fn load_at(&mut self, sequence: TokenSequence, resume: usize) {
        self.cancel_pending();
        self.cursor = resume.min(sequence.len());
        self.sequence = Some(sequence);
        self.status = PlaybackStatus::Ready;
    }

    /// Starts (or resumes) playback. The first word is displayed
    /// immediately; from the end, playback restarts at word 0. No-op while
    /// already playing or with nothing loaded.
    pub fn play(&mut self) {
        if self.sequence.is_none() || self.status == PlaybackStatus::Playing {
            return;
        }
        if self.cursor >= self.total_words() {
            self.cursor = 0;
        }
        self.status = PlaybackStatus::Playing;
        self.events
            .push_back(PlaybackEvent::PlayStateChanged { playing: true });
        self.step();
    }

    /// Stops advancing without moving the cursor. The word about to display
    /// stays undisplayed. No-op unless playing.
    pub fn pause(&mut self) {
        if self.status != PlaybackStatus::Playing {
            return;
        }
        self.pending = None;
        self.status = PlaybackStatus::Ready;
        self.events
            .push_back(PlaybackEvent::PlayStateChanged { playing: false });
    }

    /// Back to word 0, stopped.
    pub fn restart(&mut self) {
        self.seek(0);
    }

    /// Parks the cursor at `index` (clamped to `0..=total_words`), stopped.
    /// Used for bookmarks and resume.
    pub fn seek(&mut self, index: usize) {
        let total = match &self.sequence {
            Some(sequence) => sequence.len(),
            None => return,
        };
        self.cancel_pending();
        self.cursor = index.min(total);
        self.status = PlaybackStatus::Ready;
        self.events.push_back(PlaybackEvent::ProgressChanged {
            index: self.cursor,
            total,
        });
    }

    /// Changes speed. Zero is rejected; anything else is clamped to the
    /// configured range. A pending step keeps its already-computed delay;
    /// the new speed applies from the next word on.
    pub fn set_wpm(&mut self, wpm: u32) -> Result<(), EngineError> {
        if wpm == 0 {
            return Err(EngineError::Configuration(
                "wpm must be positive".to_string(),
            ));
        }
        self.wpm = self.config.clamp_wpm(wpm);
        Ok(())
    }

    /// Relative speed change, clamped. Convenient for keyboard bindings.
    pub fn adjust_wpm(&mut self, delta: i32) {
        let wpm = (self.wpm as i64 + delta as i64).max(1) as u32;
        self.wpm = self.config.clamp_wpm(wpm);
    }

    /// How long the driver may sleep before the next `tick`. None when no
    /// step is pending.
    pub fn poll_timeout(&self) -> Option<Duration> {
        let due = self.pending?.due;
        Some(due.saturating_duration_since(self.clock.now()))
    }

    /// Fires the pending step if its deadline has passed. Returns whether a
    /// step ran; drivers loop on this to catch up after long sleeps.
    pub fn tick(&mut self) -> bool {
        if self.status != PlaybackStatus::Playing {
            return false;
        }
        let due = match self.pending {
            Some(pending) => pending.due,
            None => return false,
        };
        if self.clock.now() < due {
            return false;
        }
        self.pending = None;
        self.step();
        true
    }

    /// Drains one queued event. Callers pump this after every engine call.
    pub fn pop_event(&mut self) -> Option<PlaybackEvent> {
        self.events.pop_front()
    }

    // Displays the current word, advances, and schedules the next step.
    // Past the end: Finished, exactly one Completed event.
    fn step(&mut self) {
        let total = match &self.sequence {
            Some(sequence) => sequence.len(),
            None => return,
        };

        if self.cursor >= total {
            self.pending = None;
            self.status = PlaybackStatus::Finished;
            self.events
                .push_back(PlaybackEvent::PlayStateChanged { playing: false });
            self.events.push_back(PlaybackEvent::Completed);
            return;
        }

        let word = match self.sequence.as_ref().and_then(|s| s.get(self.cursor)) {
            Some(word) => word.clone(),
            None => return,
        };

        let index = self.cursor;
        self.cursor += 1;

        let delay = word_delay(&word, self.wpm, &self.config);
        self.pending = Some(PendingStep {
            due: self.clock.now() + delay,
        });

        self.events
            .push_back(PlaybackEvent::WordDisplayed { index, word });
        self.events.push_back(PlaybackEvent::ProgressChanged {
            index: self.cursor,
            total,
        });
    }

    fn cancel_pending(&mut self) {
        self.pending = None;
        if self.status == PlaybackStatus::Playing {
            self.status = PlaybackStatus::Ready;
            self.events
                .push_back(PlaybackEvent::PlayStateChanged { playing: false });
        }
    }
}
