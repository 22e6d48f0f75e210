use ratatui::crossterm::event::KeyEvent;
use tracing::trace;

use crate::ui::{
    app::App,
    input::InputHandler,
    message::AppMessage,
    tui::{TerminalEvent, Tui},
};

pub struct EventHandler;

impl EventHandler {
    /// Processes one terminal event, then applies any search responses that
    /// arrived in the meantime. Both happen on the UI loop, so the controller
    /// state only changes between frames.
    pub async fn handle_events(app: &mut App, tui: &mut Tui) -> color_eyre::Result<()> {
        if let Some(evt) = tui.next().await {
            Self::handle_event(app, evt, tui)?;
        }

        let applied = app.search.pump();
        if applied > 0 {
            trace!(applied, "search responses applied");
        }

        Ok(())
    }

    pub fn handle_event(app: &mut App, evt: TerminalEvent, tui: &mut Tui) -> color_eyre::Result<()> {
        match evt {
            TerminalEvent::Init | TerminalEvent::Tick | TerminalEvent::Error => {}
            TerminalEvent::Quit => app.should_quit = true,
            TerminalEvent::FocusGained => {
                app.has_focus = true;
                tui.clear()?;
            }
            TerminalEvent::FocusLost => app.has_focus = false,
            TerminalEvent::Resize(_, _) => tui.clear()?,
            TerminalEvent::Paste(s) => app.update(AppMessage::Paste(s)),
            TerminalEvent::Key(key) => Self::handle_key_event(app, key),
        }

        Ok(())
    }

    fn handle_key_event(app: &mut App, key: KeyEvent) {
        if let Some(msg) = InputHandler::handle_key(key) {
            app.update(msg);
        }
    }
}
