use crate::config::AppConfig;
use crate::engine::event::{CalcEvent, Operator};
use crate::engine::handler as engine;
use crate::engine::output::EngineOutput;
use crate::engine::state::EngineState;
use chrono::Local;
use std::time::{Duration, Instant};

/// How long a pressed keypad button stays highlighted.
pub const PRESS_FLASH: Duration = Duration::from_millis(150);

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FocusPanel {
    Keypad,
    Tape,
}

/// One completed calculation (or error) shown in the tape panel. The tape
/// lives in memory only and dies with the session.
#[derive(Debug, Clone)]
pub struct TapeEntry {
    pub timestamp: String,
    pub text: String,
    pub is_error: bool,
}

/// One button in the on-screen keypad.
#[derive(Debug, Clone, Copy)]
pub struct KeyCap {
    pub label: &'static str,
    pub event: CalcEvent,
}

const fn key(label: &'static str, event: CalcEvent) -> KeyCap {
    KeyCap { label, event }
}

/// Button grid for the keypad panel. Rows may differ in width; cursor
/// navigation clamps the column.
pub const KEYPAD: &[&[KeyCap]] = &[
    &[
        key("C", CalcEvent::Clear),
        key("⌫", CalcEvent::Backspace),
        key("±", CalcEvent::ToggleSign),
        key("÷", CalcEvent::Operator(Operator::Divide)),
    ],
    &[
        key("7", CalcEvent::Digit(7)),
        key("8", CalcEvent::Digit(8)),
        key("9", CalcEvent::Digit(9)),
        key("×", CalcEvent::Operator(Operator::Multiply)),
    ],
    &[
        key("4", CalcEvent::Digit(4)),
        key("5", CalcEvent::Digit(5)),
        key("6", CalcEvent::Digit(6)),
        key("−", CalcEvent::Operator(Operator::Subtract)),
    ],
    &[
        key("1", CalcEvent::Digit(1)),
        key("2", CalcEvent::Digit(2)),
        key("3", CalcEvent::Digit(3)),
        key("+", CalcEvent::Operator(Operator::Add)),
    ],
    &[
        key("0", CalcEvent::Digit(0)),
        key(".", CalcEvent::Dot),
        key("=", CalcEvent::Equals),
    ],
];

pub struct AppState {
    pub config: AppConfig,
    pub engine: EngineState,
    /// Text currently shown in the display panel.
    pub display: String,
    pub display_is_error: bool,
    pub tape: Vec<TapeEntry>,
    /// Scroll offset in lines, counted up from the bottom of the tape.
    pub tape_scroll: usize,
    pub focus: FocusPanel,
    pub keypad_cursor: (usize, usize),
    pub last_press: Option<(CalcEvent, Instant)>,
    pub should_quit: bool,
    pub dirty: bool,
    pub status_message: Option<(String, Instant)>,
    pub timestamp_format: String,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let timestamp_format = config.ui.timestamp_format.clone();
        let engine = EngineState::new();
        let display = engine.display_text().to_owned();
        Self {
            config,
            engine,
            display,
            display_is_error: false,
            tape: Vec::new(),
            tape_scroll: 0,
            focus: FocusPanel::Keypad,
            keypad_cursor: (0, 0),
            last_press: None,
            should_quit: false,
            dirty: true,
            status_message: None,
            timestamp_format,
        }
    }

    /// Forward one gesture to the engine and record the outcome.
    pub fn press(&mut self, event: CalcEvent) {
        let snapshot = self.expression_snapshot(event);
        let output = engine::handle_event(&mut self.engine, event);
        self.display = output.text();
        self.display_is_error = output.is_error();
        match &output {
            EngineOutput::Display(text) => {
                if let Some(expr) = snapshot {
                    self.push_tape(format!("{expr} = {text}"), false);
                }
            }
            EngineOutput::Error(err) => {
                self.push_tape(err.to_string(), true);
                self.set_status("Error: pending operation cleared");
            }
        }
        self.last_press = Some((event, Instant::now()));
        self.dirty = true;
    }

    /// Left-hand side of a tape line (`3 + 4`), captured before the engine
    /// consumes the operands. Only equals presses that will actually
    /// compute produce one.
    fn expression_snapshot(&self, event: CalcEvent) -> Option<String> {
        if event != CalcEvent::Equals {
            return None;
        }
        if self.engine.operation.is_none() && self.engine.previous.is_empty() {
            return None;
        }
        let op = self.engine.operation.or(self.engine.last_operation)?;
        Some(if self.engine.operation.is_some() {
            let rhs = if self.engine.current.is_empty() {
                self.engine.previous.as_str()
            } else {
                self.engine.current.as_str()
            };
            format!("{} {} {}", self.engine.previous.as_str(), op.symbol(), rhs)
        } else {
            // Repeated equals replays against the displayed result.
            format!(
                "{} {} {}",
                self.engine.current.as_str(),
                op.symbol(),
                self.engine.last_operand.as_str()
            )
        })
    }

    fn push_tape(&mut self, text: String, is_error: bool) {
        self.tape.push(TapeEntry {
            timestamp: Local::now().format(&self.timestamp_format).to_string(),
            text,
            is_error,
        });
        if self.tape.len() > self.config.ui.max_tape {
            self.tape.remove(0);
            self.tape_scroll = self.tape_scroll.saturating_sub(1);
        }
        self.dirty = true;
    }

    /// Pending-operation summary for the status bar, e.g. `12 +`.
    pub fn pending_text(&self) -> Option<String> {
        let op = self.engine.operation?;
        if self.engine.previous.is_empty() {
            return None;
        }
        Some(format!("{} {}", self.engine.previous.as_str(), op.symbol()))
    }

    pub fn set_status(&mut self, text: impl Into<String>) {
        self.status_message = Some((text.into(), Instant::now()));
        self.dirty = true;
    }

    pub fn cycle_focus(&mut self) {
        self.focus = match self.focus {
            FocusPanel::Keypad => FocusPanel::Tape,
            FocusPanel::Tape => FocusPanel::Keypad,
        };
        self.dirty = true;
    }

    /// Move the keypad cursor, wrapping at the grid edges.
    pub fn keypad_move(&mut self, dr: isize, dc: isize) {
        let (r, c) = self.keypad_cursor;
        let rows = KEYPAD.len() as isize;
        let r = (r as isize + dr).rem_euclid(rows) as usize;
        let cols = KEYPAD[r].len() as isize;
        let c = (c.min(KEYPAD[r].len() - 1) as isize + dc).rem_euclid(cols) as usize;
        self.keypad_cursor = (r, c);
        self.dirty = true;
    }

    pub fn keypad_selected(&self) -> KeyCap {
        let (r, c) = self.keypad_cursor;
        let row = KEYPAD[r];
        row[c.min(row.len() - 1)]
    }

    pub fn scroll_tape(&mut self, delta: isize) {
        let max = self.tape.len() as isize;
        self.tape_scroll = (self.tape_scroll as isize + delta).clamp(0, max) as usize;
        self.dirty = true;
    }
}
