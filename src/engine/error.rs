use thiserror::Error;

/// Errors the pacing engine can surface to callers.
///
/// Everything else in the engine is total: given a loaded sequence and a
/// positive wpm, every operation produces a result and leaves the engine in
/// a well-defined state.
#[derive(Error, Debug)]
pub enum EngineError {
    /// Tokenization produced no words (empty or whitespace-only input).
    #[error("no readable words in input text")]
    EmptyContent,

    /// A caller-supplied parameter was rejected outright.
    #[error("invalid configuration: {0}")]
    Configuration(String),
}
