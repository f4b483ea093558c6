mod display;
mod keypad;
mod layout;
mod status_bar;
mod tape;
mod theme;

use crate::app::state::AppState;
use ratatui::prelude::*;

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let app_layout = layout::compute_layout(area, state.config.ui.show_tape);

    display::render(frame, app_layout.display, state);
    keypad::render(frame, app_layout.keypad, state);
    if state.config.ui.show_tape {
        tape::render(frame, app_layout.tape, state);
    }
    status_bar::render(frame, app_layout.status_bar, state);
}
