use std::time::Duration;

use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use unicode_width::UnicodeWidthStr;

use crate::app::{AppMode, RenderState};
use crate::engine::split_word;
use crate::ui::theme::colors;

/// Terminal column (inside the word area) the fixation character is pinned
/// to, so the eye never travels between words.
pub const FIXATION_COLUMN: usize = 12;

/// Width of the word area in the reader layout.
pub const WORD_AREA_WIDTH: u16 = 34;

/// The centerpiece: one word, horizontally shifted so its fixation
/// character sits at `FIXATION_COLUMN`, highlighted when ORP display is on.
pub fn render_word_display(word: &str, highlight_orp: bool) -> Paragraph<'static> {
    if !highlight_orp {
        return Paragraph::new(word.to_string())
            .alignment(Alignment::Center)
            .style(Style::default().fg(colors::text()).bg(colors::background()));
    }

    let split = split_word(word);
    let padding = FIXATION_COLUMN.saturating_sub(split.before.width());

    let spans = vec![
        Span::raw(" ".repeat(padding)),
        Span::styled(
            split.before.to_string(),
            Style::default().fg(colors::text()),
        ),
        Span::styled(
            split.fixation.to_string(),
            Style::default()
                .fg(colors::fixation())
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(split.after.to_string(), Style::default().fg(colors::text())),
    ];

    Paragraph::new(Line::from(spans))
        .alignment(Alignment::Left)
        .style(Style::default().bg(colors::background()))
}

pub fn render_progress_bar(progress: (usize, usize)) -> Line<'static> {
    let (current, total) = progress;
    let filled_len = if total == 0 {
        0
    } else {
        (current as f64 / total as f64 * 20.0) as usize
    };
    let empty_len = 20 - filled_len.min(20);

    let mut spans = Vec::new();
    for _ in 0..filled_len {
        spans.push(Span::styled("\u{2500}", Style::default().fg(colors::text())));
    }
    for _ in 0..empty_len {
        spans.push(Span::styled(
            "\u{2500}",
            Style::default().fg(colors::dimmed()),
        ));
    }

    Line::from(spans).alignment(Alignment::Center)
}

pub fn render_context_left(words: &[String]) -> Paragraph<'static> {
    Paragraph::new(words.join(" ")).alignment(Alignment::Right).style(
        Style::default()
            .fg(colors::dimmed())
            .bg(colors::background()),
    )
}

pub fn render_context_right(words: &[String]) -> Paragraph<'static> {
    Paragraph::new(words.join(" ")).alignment(Alignment::Left).style(
        Style::default()
            .fg(colors::dimmed())
            .bg(colors::background()),
    )
}

/// `m:ss` countdown for the words left at the current speed.
pub fn format_time_remaining(remaining: Duration) -> String {
    let secs = remaining.as_secs();
    format!("{}:{:02}", secs / 60, secs % 60)
}

pub fn render_status_line(state: &RenderState) -> Line<'static> {
    let mode_tag = match state.mode {
        AppMode::Reading => " READING ",
        AppMode::Paused => " PAUSED ",
        AppMode::Command => " COMMAND ",
        AppMode::Quit => " QUIT ",
    };

    let (current, total) = state.progress;
    let position = format!(" {} / {} ", current, total);
    let speed = format!(" {} wpm ", state.wpm);
    let remaining = format!(" -{} ", format_time_remaining(state.time_remaining));

    Line::from(vec![
        Span::styled(
            mode_tag,
            Style::default()
                .fg(colors::background())
                .bg(colors::fixation()),
        ),
        Span::styled(speed, Style::default().fg(colors::text())),
        Span::styled(position, Style::default().fg(colors::dimmed())),
        Span::styled(remaining, Style::default().fg(colors::dimmed())),
    ])
}

pub fn render_placeholder() -> Paragraph<'static> {
    let text = "@file.txt | @file.pdf | @file.epub to load a document\n\
                @@ to read from the clipboard\n\
                :wpm N to set speed, :h for help, :q to quit";
    Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(colors::dimmed()).bg(colors::background()))
}

/// Bottom strip: latest status message plus the typed command line.
pub fn render_command_deck(input: &str, status: Option<&str>) -> Paragraph<'static> {
    let mut lines = Vec::new();
    if let Some(message) = status {
        lines.push(Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(colors::dimmed()),
        )));
    } else {
        lines.push(Line::from(""));
    }
    lines.push(Line::from(vec![
        Span::styled("\u{258c} ", Style::default().fg(colors::fixation())),
        Span::styled(format!("{input}\u{2588}"), Style::default().fg(colors::text())),
    ]));

    Paragraph::new(lines).style(Style::default().bg(colors::surface()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_word_display_with_highlight() {
        let paragraph = render_word_display("reading", true);
        let _ = paragraph;
    }

    #[test]
    fn test_render_word_display_plain() {
        let paragraph = render_word_display("reading", false);
        let _ = paragraph;
    }

    #[test]
    fn test_render_progress_bar_bounds() {
        let _ = render_progress_bar((0, 0));
        let _ = render_progress_bar((50, 100));
        let _ = render_progress_bar((100, 100));
    }

    #[test]
    fn test_format_time_remaining() {
        assert_eq!(format_time_remaining(Duration::from_secs(0)), "0:00");
        assert_eq!(format_time_remaining(Duration::from_secs(59)), "0:59");
        assert_eq!(format_time_remaining(Duration::from_secs(61)), "1:01");
        assert_eq!(format_time_remaining(Duration::from_secs(600)), "10:00");
    }

    #[test]
    fn test_render_context_empty() {
        let _ = render_context_left(&[]);
        let _ = render_context_right(&[]);
    }

    #[test]
    fn test_render_command_deck_with_and_without_status() {
        let _ = render_command_deck("@book.txt", Some("Loaded something"));
        let _ = render_command_deck("", None);
    }
}
