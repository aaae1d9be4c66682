use std::io::{self, Stdout};
use std::sync::Once;
use std::time::{Duration, Instant};

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout},
    Terminal,
};

use crate::app::{App, AppMode};
use crate::ui::command::{command_to_app_event, parse_command};
use crate::ui::view::{
    render_command_deck, render_context_left, render_context_right, render_placeholder,
    render_progress_bar, render_status_line, render_word_display, WORD_AREA_WIDTH,
};

static PANIC_HOOK_SET: Once = Once::new();

// Restore the terminal even when we unwind mid-draw.
fn set_panic_hook() {
    PANIC_HOOK_SET.call_once(|| {
        let default_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            default_hook(panic_info);
        }));
    });
}

pub struct TuiManager {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    input_buffer: String,
}

impl TuiManager {
    pub fn new() -> Result<Self, io::Error> {
        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen)?;
        set_panic_hook();

        let backend = CrosstermBackend::new(io::stdout());
        let terminal = Terminal::new(backend)?;

        Ok(TuiManager {
            terminal,
            input_buffer: String::new(),
        })
    }

    /// Drives the app until quit. The poll timeout is the smaller of the
    /// engine's next word deadline and the render tick, so words appear on
    /// time and the UI stays responsive while paused.
    pub fn run_event_loop(&mut self, app: &mut App) -> io::Result<()> {
        let render_tick = Duration::from_millis(33);
        let mut last_render = Instant::now();
        self.render_frame(app)?;

        loop {
            if app.mode() == AppMode::Quit {
                return Ok(());
            }

            let timeout = app
                .poll_timeout()
                .map_or(render_tick, |until_step| until_step.min(render_tick));

            if event::poll(timeout)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(app, key);
                    }
                }
            }

            // Fires any word whose deadline elapsed while we were polling.
            app.pump();

            if last_render.elapsed() >= render_tick {
                self.render_frame(app)?;
                last_render = Instant::now();
            }
        }
    }

    fn handle_key(&mut self, app: &mut App, key: KeyEvent) {
        match app.mode() {
            AppMode::Command => match key.code {
                KeyCode::Enter => {
                    let command = parse_command(&self.input_buffer);
                    self.input_buffer.clear();
                    app.handle_event(command_to_app_event(command));
                }
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Esc => self.input_buffer.clear(),
                KeyCode::Char(c) => self.input_buffer.push(c),
                _ => {}
            },
            AppMode::Reading | AppMode::Paused => match key.code {
                KeyCode::Up => app.adjust_wpm(1),
                KeyCode::Down => app.adjust_wpm(-1),
                KeyCode::Esc => app.handle_keypress('q'),
                KeyCode::Char(c) => app.handle_keypress(c),
                _ => {}
            },
            AppMode::Quit => {}
        }
    }

    pub fn render_frame(&mut self, app: &App) -> io::Result<()> {
        let state = app.render_state();
        let input = self.input_buffer.as_str();

        self.terminal.draw(|frame| {
            let area = frame.area();

            let rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Min(3),
                    Constraint::Length(1),
                    Constraint::Length(1),
                    Constraint::Length(2),
                ])
                .split(area);

            if state.mode == AppMode::Command && state.current_word.is_none() {
                frame.render_widget(render_placeholder(), rows[0]);
            } else {
                let columns = Layout::default()
                    .direction(Direction::Horizontal)
                    .constraints([
                        Constraint::Percentage(40),
                        Constraint::Length(WORD_AREA_WIDTH),
                        Constraint::Percentage(40),
                    ])
                    .split(rows[0]);

                frame.render_widget(render_context_left(&state.context_left), columns[0]);
                if let Some(word) = &state.current_word {
                    frame.render_widget(
                        render_word_display(word, state.highlight_orp),
                        columns[1],
                    );
                }
                frame.render_widget(render_context_right(&state.context_right), columns[2]);
            }

            frame.render_widget(
                render_progress_bar(state.progress)
                    .alignment(Alignment::Center),
                rows[1],
            );
            frame.render_widget(render_status_line(&state), rows[2]);
            frame.render_widget(
                render_command_deck(input, state.status_message.as_deref()),
                rows[3],
            );
        })?;

        Ok(())
    }
}

impl Drop for TuiManager {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}
