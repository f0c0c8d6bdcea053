use crate::{app::App, error::Result, events::translate};
use log::debug;
use ratatui::{backend::Backend, Terminal};

/// Draws, waits for the next terminal event and dispatches it, until the app
/// stops running.
pub(crate) fn run_home<B>(term: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B: Backend,
{
    while app.is_running() {
        term.draw(|frame| app.draw(frame))?;
        let raw = crossterm::event::read()?;
        match translate(raw, app.is_confirming()) {
            Some(event) => app.handle(event)?,
            None => debug!("Ignoring terminal event."),
        }
    }
    Ok(())
}
