//! The pacing core: tokenization, fixation-point math, per-word timing and
//! the playback state machine. Everything here is presentation-free and
//! does no I/O; collaborators hand it plain text and consume its events.

pub mod config;
pub mod error;
pub mod orp;
pub mod playback;
pub mod timing;
pub mod token;

pub use config::{TimingConfig, DEFAULT_WPM};
pub use error::EngineError;
pub use orp::{orp_index, split_word, WordSplit};
pub use playback::{Clock, PlaybackEngine, PlaybackEvent, PlaybackStatus, SystemClock};
pub use timing::{base_delay_ms, word_delay, word_delay_ms};
pub use token::{tokenize, PunctuationClass, Token, TokenSequence};
