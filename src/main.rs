use flashy::app::{App, AppEvent};
use flashy::ui::TuiManager;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::new();

    // A path on the command line skips the command deck.
    if let Some(path) = std::env::args().nth(1) {
        app.handle_event(AppEvent::LoadFile(path));
    }

    let mut tui = TuiManager::new()?;
    tui.run_event_loop(&mut app)?;

    Ok(())
}
