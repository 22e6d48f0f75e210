use crate::ui::message::AppMessage;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub struct InputHandler;

impl InputHandler {
    pub fn handle_key(key: KeyEvent) -> Option<AppMessage> {
        match (key.code, key.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => Some(AppMessage::Quit),
            (KeyCode::Char('u'), KeyModifiers::CONTROL) => Some(AppMessage::ClearField),
            (KeyCode::Esc, _) => Some(AppMessage::Quit),
            (KeyCode::Tab, _) => Some(AppMessage::FocusNext),
            (KeyCode::BackTab, _) => Some(AppMessage::FocusPrevious),
            (KeyCode::Enter, _) => Some(AppMessage::Submit),
            (KeyCode::Backspace, _) => Some(AppMessage::Backspace),
            (KeyCode::Up, _) => Some(AppMessage::ScrollUp),
            (KeyCode::Down, _) => Some(AppMessage::ScrollDown),
            (KeyCode::PageUp, _) => Some(AppMessage::PageUp),
            (KeyCode::PageDown, _) => Some(AppMessage::PageDown),
            (KeyCode::Char(c), m) if !m.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
                Some(AppMessage::Input(c))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn printable_keys_become_input() {
        assert_eq!(
            InputHandler::handle_key(key(KeyCode::Char('q'), KeyModifiers::NONE)),
            Some(AppMessage::Input('q'))
        );
        assert_eq!(
            InputHandler::handle_key(key(KeyCode::Char('Q'), KeyModifiers::SHIFT)),
            Some(AppMessage::Input('Q'))
        );
    }

    #[test]
    fn control_chords_are_commands() {
        assert_eq!(
            InputHandler::handle_key(key(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(AppMessage::Quit)
        );
        assert_eq!(
            InputHandler::handle_key(key(KeyCode::Char('x'), KeyModifiers::CONTROL)),
            None
        );
        assert_eq!(
            InputHandler::handle_key(key(KeyCode::Enter, KeyModifiers::NONE)),
            Some(AppMessage::Submit)
        );
    }
}
