//! Command deck input parsing.
//!
//! - `:q` / `:quit` quits
//! - `:h` / `:help` shows key bindings
//! - `:wpm N` sets the reading speed
//! - `@filename` loads a file (txt, pdf, epub)
//! - `@@` loads the clipboard

use crate::app::AppEvent;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Quit,
    Help,
    SetWpm(u32),
    LoadFile(String),
    LoadClipboard,
    Unknown(String),
}

pub fn parse_command(input: &str) -> Command {
    let input = input.trim();

    if input.is_empty() {
        return Command::Unknown(input.to_string());
    }

    if let Some(cmd) = input.strip_prefix(':') {
        if let Some(rest) = cmd.strip_prefix("wpm") {
            return match rest.trim().parse::<u32>() {
                Ok(wpm) => Command::SetWpm(wpm),
                Err(_) => Command::Unknown(input.to_string()),
            };
        }
        match cmd {
            "q" | "quit" => Command::Quit,
            "h" | "help" => Command::Help,
            _ => Command::Unknown(input.to_string()),
        }
    } else if let Some(rest) = input.strip_prefix('@') {
        let filename = rest.trim();
        if filename.is_empty() || filename == "@" {
            Command::LoadClipboard
        } else {
            Command::LoadFile(filename.to_string())
        }
    } else {
        Command::Unknown(input.to_string())
    }
}

/// Translation layer between deck input and the application core.
pub fn command_to_app_event(command: Command) -> AppEvent {
    match command {
        Command::Quit => AppEvent::Quit,
        Command::Help => AppEvent::Help,
        Command::SetWpm(wpm) => AppEvent::SetWpm(wpm),
        Command::LoadFile(path) => AppEvent::LoadFile(path),
        Command::LoadClipboard => AppEvent::LoadClipboard,
        Command::Unknown(input) => AppEvent::InvalidCommand(format!("unknown command: {input}")),
    }
}
