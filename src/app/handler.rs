//! Maps application events (terminal input, ticks) onto engine gestures and
//! UI state changes.

use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::state::{AppState, FocusPanel, PRESS_FLASH};
use crate::engine::event::{CalcEvent, Operator};
use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;
use tracing::debug;

/// Transient status messages disappear after this long.
const STATUS_TIMEOUT: Duration = Duration::from_secs(3);

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => handle_terminal(state, cevent),
        AppEvent::Tick => handle_tick(state),
    }
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) => handle_key(state, key),
        CEvent::Resize(_, _) => {
            state.dirty = true;
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    if key.kind == KeyEventKind::Release {
        return vec![];
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }

    // Direct calculator keys work regardless of panel focus.
    if let Some(event) = calc_event_for(key.code) {
        debug!(?event, "calculator key");
        state.press(event);
        return vec![];
    }

    match key.code {
        KeyCode::Char('q') => return vec![Action::Quit],
        KeyCode::Tab => state.cycle_focus(),
        _ => match state.focus {
            FocusPanel::Keypad => handle_keypad_key(state, key),
            FocusPanel::Tape => handle_tape_key(state, key),
        },
    }
    vec![]
}

/// Translate a key press into a calculator gesture, if it is one.
fn calc_event_for(code: KeyCode) -> Option<CalcEvent> {
    match code {
        KeyCode::Char(c @ '0'..='9') => Some(CalcEvent::Digit(c as u8 - b'0')),
        KeyCode::Char('.') => Some(CalcEvent::Dot),
        KeyCode::Char('n') => Some(CalcEvent::ToggleSign),
        KeyCode::Char('=') | KeyCode::Enter => Some(CalcEvent::Equals),
        KeyCode::Char('c') | KeyCode::Esc => Some(CalcEvent::Clear),
        KeyCode::Backspace | KeyCode::Delete => Some(CalcEvent::Backspace),
        KeyCode::Char(c) => Operator::from_char(c).map(CalcEvent::Operator),
        _ => None,
    }
}

fn handle_keypad_key(state: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Up => state.keypad_move(-1, 0),
        KeyCode::Down => state.keypad_move(1, 0),
        KeyCode::Left => state.keypad_move(0, -1),
        KeyCode::Right => state.keypad_move(0, 1),
        KeyCode::Char(' ') => {
            let cap = state.keypad_selected();
            state.press(cap.event);
        }
        _ => {}
    }
}

fn handle_tape_key(state: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Up => state.scroll_tape(1),
        KeyCode::Down => state.scroll_tape(-1),
        KeyCode::PageUp => state.scroll_tape(10),
        KeyCode::PageDown => state.scroll_tape(-10),
        KeyCode::End => state.scroll_tape(isize::MIN / 2),
        _ => {}
    }
}

fn handle_tick(state: &mut AppState) -> Vec<Action> {
    if let Some((_, since)) = &state.status_message {
        if since.elapsed() >= STATUS_TIMEOUT {
            state.status_message = None;
            state.dirty = true;
        }
    }
    if let Some((_, at)) = state.last_press {
        if at.elapsed() >= PRESS_FLASH {
            state.last_press = None;
            state.dirty = true;
        }
    }
    vec![]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;

    fn state() -> AppState {
        AppState::new(AppConfig::default())
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_keys(state: &mut AppState, codes: &[KeyCode]) {
        for &code in codes {
            handle_event(state, AppEvent::Terminal(CEvent::Key(key(code))));
        }
    }

    fn type_chars(state: &mut AppState, chars: &str) {
        let codes: Vec<KeyCode> = chars.chars().map(KeyCode::Char).collect();
        type_keys(state, &codes);
    }

    #[test]
    fn test_typed_digits_reach_the_display() {
        let mut st = state();
        type_chars(&mut st, "42");
        assert_eq!(st.display, "42");
        assert!(!st.display_is_error);
    }

    #[test]
    fn test_enter_acts_as_equals() {
        let mut st = state();
        type_chars(&mut st, "2+3");
        type_keys(&mut st, &[KeyCode::Enter]);
        assert_eq!(st.display, "5");
        assert_eq!(st.tape.len(), 1);
        assert_eq!(st.tape[0].text, "2 + 3 = 5");
    }

    #[test]
    fn test_x_maps_to_multiply() {
        let mut st = state();
        type_chars(&mut st, "6x7=");
        assert_eq!(st.display, "42");
    }

    #[test]
    fn test_divide_by_zero_shows_error_text() {
        let mut st = state();
        type_chars(&mut st, "8/0=");
        assert_eq!(st.display, "Divide By Zero!");
        assert!(st.display_is_error);
        assert!(st.tape.last().is_some_and(|e| e.is_error));
    }

    #[test]
    fn test_q_and_ctrl_c_quit() {
        let mut st = state();
        let actions = handle_event(&mut st, AppEvent::Terminal(CEvent::Key(key(KeyCode::Char('q')))));
        assert!(matches!(actions[..], [Action::Quit]));

        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        let actions = handle_event(&mut st, AppEvent::Terminal(CEvent::Key(ctrl_c)));
        assert!(matches!(actions[..], [Action::Quit]));
    }

    #[test]
    fn test_tab_cycles_focus() {
        let mut st = state();
        assert_eq!(st.focus, FocusPanel::Keypad);
        type_keys(&mut st, &[KeyCode::Tab]);
        assert_eq!(st.focus, FocusPanel::Tape);
        type_keys(&mut st, &[KeyCode::Tab]);
        assert_eq!(st.focus, FocusPanel::Keypad);
    }

    #[test]
    fn test_space_presses_the_highlighted_key() {
        let mut st = state();
        // Down from the top row lands on the `7` key.
        type_keys(&mut st, &[KeyCode::Down, KeyCode::Char(' ')]);
        assert_eq!(st.display, "7");
    }

    #[test]
    fn test_repeated_equals_tapes_the_replay() {
        let mut st = state();
        type_chars(&mut st, "5+3==");
        assert_eq!(st.display, "11");
        assert_eq!(st.tape.len(), 2);
        assert_eq!(st.tape[0].text, "5 + 3 = 8");
        assert_eq!(st.tape[1].text, "8 + 3 = 11");
    }
}
