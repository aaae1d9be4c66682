/// Application events produced by the command deck.
#[derive(Debug, PartialEq, Clone)]
pub enum AppEvent {
    LoadFile(String),
    LoadClipboard,
    SetWpm(u32),
    Quit,
    Help,
    Warning(String),
    InvalidCommand(String),
    None,
}
