use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct AppLayout {
    pub display: Rect,
    pub keypad: Rect,
    pub tape: Rect,
    pub status_bar: Rect,
}

pub fn compute_layout(area: Rect, show_tape: bool) -> AppLayout {
    // Main vertical split: display | content | status bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Display
            Constraint::Min(7),    // Keypad / tape
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let display = main_chunks[0];
    let content = main_chunks[1];
    let status_bar = main_chunks[2];

    if !show_tape {
        return AppLayout {
            display,
            keypad: content,
            tape: Rect::default(),
            status_bar,
        };
    }

    // Horizontal: keypad | gap | tape
    let h_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .spacing(1)
        .constraints([
            Constraint::Length(32), // Keypad
            Constraint::Min(20),    // Tape
        ])
        .split(content);

    AppLayout {
        display,
        keypad: h_chunks[0],
        tape: h_chunks[1],
        status_bar,
    }
}
