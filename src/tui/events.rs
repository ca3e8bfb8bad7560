//! Event handling for keyboard input

use crate::{Result, StarSearchError};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;

/// Which screen the keys are being interpreted for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyContext {
    /// The query input is visible
    Input,
    /// A result is shown and the input is hidden
    Result,
}

/// Event handler for TUI input
pub struct EventHandler;

impl EventHandler {
    pub fn new() -> Result<Self> {
        Ok(Self)
    }

    /// Poll for the next event with timeout
    pub fn next_event(&self, timeout: Duration) -> Result<Option<Event>> {
        if event::poll(timeout)
            .map_err(|e| StarSearchError::TuiError(format!("Event polling failed: {}", e)))?
        {
            let event = event::read()
                .map_err(|e| StarSearchError::TuiError(format!("Event reading failed: {}", e)))?;
            Ok(Some(event))
        } else {
            Ok(None)
        }
    }

    /// Handle a key event and return the action to take
    pub fn handle_key_event(&self, event: KeyEvent, context: KeyContext) -> KeyAction {
        // Windows reports releases too
        if event.kind == KeyEventKind::Release {
            return KeyAction::None;
        }

        match (event.code, event.modifiers) {
            (KeyCode::Esc, _) => return KeyAction::Quit,
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => return KeyAction::Quit,
            _ => {}
        }

        match context {
            KeyContext::Input => match (event.code, event.modifiers) {
                (KeyCode::Enter, _) => KeyAction::Search,
                (KeyCode::Backspace, KeyModifiers::NONE) => KeyAction::DeleteChar,
                (KeyCode::Char('u'), KeyModifiers::CONTROL) => KeyAction::ClearInput,
                (KeyCode::Char(c), KeyModifiers::NONE) | (KeyCode::Char(c), KeyModifiers::SHIFT) => {
                    KeyAction::InputChar(c)
                }
                _ => KeyAction::None,
            },
            KeyContext::Result => match (event.code, event.modifiers) {
                (KeyCode::Backspace, _) | (KeyCode::Char('b'), KeyModifiers::NONE) => {
                    KeyAction::Back
                }
                (KeyCode::Char('t'), KeyModifiers::NONE) => KeyAction::ToggleView,
                (KeyCode::Up, _) | (KeyCode::Char('k'), KeyModifiers::NONE) => KeyAction::ScrollUp,
                (KeyCode::Down, _) | (KeyCode::Char('j'), KeyModifiers::NONE) => {
                    KeyAction::ScrollDown
                }
                (KeyCode::PageUp, _) => KeyAction::PageUp,
                (KeyCode::PageDown, _) => KeyAction::PageDown,
                (KeyCode::Home, _) => KeyAction::ScrollTop,
                _ => KeyAction::None,
            },
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum KeyAction {
    Quit,
    Search,
    InputChar(char),
    DeleteChar,
    ClearInput,
    Back,
    ToggleView,
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    ScrollTop,
    None,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_handler() -> EventHandler {
        EventHandler::new().unwrap()
    }

    fn assert_key_action(
        key_code: KeyCode,
        modifiers: KeyModifiers,
        context: KeyContext,
        expected: KeyAction,
    ) {
        let handler = test_handler();
        let event = KeyEvent::new(key_code, modifiers);
        assert_eq!(
            handler.handle_key_event(event, context),
            expected,
            "{:?} {:?} in {:?}",
            key_code,
            modifiers,
            context
        );
    }

    #[test]
    fn test_quit_keys_in_every_context() {
        for context in [KeyContext::Input, KeyContext::Result] {
            assert_key_action(KeyCode::Esc, KeyModifiers::NONE, context, KeyAction::Quit);
            assert_key_action(
                KeyCode::Char('c'),
                KeyModifiers::CONTROL,
                context,
                KeyAction::Quit,
            );
        }
    }

    #[test]
    fn test_input_key_mappings() {
        let test_cases = [
            (KeyCode::Enter, KeyModifiers::NONE, KeyAction::Search),
            (KeyCode::Backspace, KeyModifiers::NONE, KeyAction::DeleteChar),
            (KeyCode::Char('u'), KeyModifiers::CONTROL, KeyAction::ClearInput),
            (KeyCode::Char('S'), KeyModifiers::SHIFT, KeyAction::InputChar('S')),
            // Result-view shortcuts are plain characters while typing
            (KeyCode::Char('b'), KeyModifiers::NONE, KeyAction::InputChar('b')),
            (KeyCode::Char('t'), KeyModifiers::NONE, KeyAction::InputChar('t')),
            (KeyCode::Up, KeyModifiers::NONE, KeyAction::None),
            (KeyCode::F(1), KeyModifiers::NONE, KeyAction::None),
            (KeyCode::Char('a'), KeyModifiers::ALT, KeyAction::None),
        ];

        for (key_code, modifiers, expected) in test_cases {
            assert_key_action(key_code, modifiers, KeyContext::Input, expected);
        }

        let chars = ['a', 'Z', '1', '@', ' ', '-', '_', 'α'];
        for c in chars {
            assert_key_action(
                KeyCode::Char(c),
                KeyModifiers::NONE,
                KeyContext::Input,
                KeyAction::InputChar(c),
            );
        }
    }

    #[test]
    fn test_result_key_mappings() {
        let test_cases = [
            (KeyCode::Backspace, KeyModifiers::NONE, KeyAction::Back),
            (KeyCode::Char('b'), KeyModifiers::NONE, KeyAction::Back),
            (KeyCode::Char('t'), KeyModifiers::NONE, KeyAction::ToggleView),
            (KeyCode::Up, KeyModifiers::NONE, KeyAction::ScrollUp),
            (KeyCode::Char('k'), KeyModifiers::NONE, KeyAction::ScrollUp),
            (KeyCode::Down, KeyModifiers::NONE, KeyAction::ScrollDown),
            (KeyCode::Char('j'), KeyModifiers::NONE, KeyAction::ScrollDown),
            (KeyCode::PageUp, KeyModifiers::NONE, KeyAction::PageUp),
            (KeyCode::PageDown, KeyModifiers::NONE, KeyAction::PageDown),
            (KeyCode::Home, KeyModifiers::NONE, KeyAction::ScrollTop),
            // No searching from the result view
            (KeyCode::Enter, KeyModifiers::NONE, KeyAction::None),
            (KeyCode::Char('x'), KeyModifiers::NONE, KeyAction::None),
        ];

        for (key_code, modifiers, expected) in test_cases {
            assert_key_action(key_code, modifiers, KeyContext::Result, expected);
        }
    }

    #[test]
    fn test_key_release_is_ignored() {
        let handler = test_handler();
        let mut event = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        event.kind = KeyEventKind::Release;
        assert_eq!(
            handler.handle_key_event(event, KeyContext::Input),
            KeyAction::None
        );
    }

    #[test]
    fn test_key_action_debug_trait() {
        assert_eq!(format!("{:?}", KeyAction::Search), "Search");
        assert_eq!(format!("{:?}", KeyAction::Back), "Back");
        assert_eq!(format!("{:?}", KeyAction::InputChar('a')), "InputChar('a')");
    }
}
