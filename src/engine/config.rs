// Pacing constants for the flashy engine.
// The multiplier values are reading-research tuning, not arbitrary knobs.

use std::ops::RangeInclusive;

/// Default reading speed in words per minute.
pub const DEFAULT_WPM: u32 = 300;

/// Per-word delay tuning.
#[derive(Debug, Clone, PartialEq)]
pub struct TimingConfig {
    /// Supported words-per-minute range; speeds outside it are clamped.
    pub wpm_range: RangeInclusive<u32>,

    /// Words longer than this get `long_word_multiplier` (default 8 → 1.3x).
    pub long_word_threshold: usize,
    pub long_word_multiplier: f64,

    /// Words longer than this get `very_long_word_multiplier` instead
    /// (default 12 → 1.5x). The two thresholds never compound.
    pub very_long_word_threshold: usize,
    pub very_long_word_multiplier: f64,

    /// Trailing `.` `!` `?` — longest pause (default 2.5x).
    pub sentence_end_multiplier: f64,

    /// Trailing `,` `;` `:` — medium pause (default 1.8x).
    pub clause_multiplier: f64,

    /// Dash or parenthesis anywhere in the word — short pause (default 1.3x).
    pub dash_paren_multiplier: f64,

    /// Applied to the length multiplier when the word contains a digit
    /// (default 1.5x). Numbers need extra processing time.
    pub digit_multiplier: f64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            wpm_range: 200..=1200,
            long_word_threshold: 8,
            long_word_multiplier: 1.3,
            very_long_word_threshold: 12,
            very_long_word_multiplier: 1.5,
            sentence_end_multiplier: 2.5,
            clause_multiplier: 1.8,
            dash_paren_multiplier: 1.3,
            digit_multiplier: 1.5,
        }
    }
}

impl TimingConfig {
    pub fn clamp_wpm(&self, wpm: u32) -> u32 {
        wpm.clamp(*self.wpm_range.start(), *self.wpm_range.end())
    }
}
