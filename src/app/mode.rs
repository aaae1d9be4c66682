/// Top-level application modes.
///
/// `Command` is the deck where documents get loaded; `Reading`/`Paused`
/// mirror the engine's playing flag while a document is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Command,
    Reading,
    Paused,
    Quit,
}
