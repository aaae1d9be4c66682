//! flashy - an RSVP (rapid serial visual presentation) reader.
//!
//! `engine` holds the pacing core: tokenization, fixation-point math,
//! per-word delays and the playback state machine. `input` extracts plain
//! text from documents, `app` ties one document to one engine, and `ui`
//! renders it all in the terminal.

pub mod app;
pub mod engine;
pub mod input;
pub mod ui;
