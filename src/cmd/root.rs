use crate::data::{persistence::get_data_dir, PageSettings, Profile};
use crate::ui::page_view::{run_app, App};
use crate::ui::{restore_terminal, setup_terminal};
use anyhow::Result;
use std::time::Instant;

pub fn run() -> Result<()> {
    let dir = get_data_dir()?;
    let profile = Profile::load_from(&dir)?;
    let settings = PageSettings::load_from(&dir)?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = crossterm::terminal::disable_raw_mode();
        let _ = crossterm::execute!(
            std::io::stdout(),
            crossterm::terminal::LeaveAlternateScreen,
            crossterm::event::DisableMouseCapture
        );
        original_hook(info);
    }));

    let mut terminal = setup_terminal()?;

    let mut app = App::new(profile, &settings, Instant::now());
    if settings.fetch_advice {
        app.fetch_advice();
    }

    let result = run_app(&mut terminal, &mut app);

    restore_terminal(&mut terminal)?;
    result
}
