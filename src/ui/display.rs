use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::block::Padding;
use ratatui::widgets::{Block, Borders, Paragraph};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .title(" crabcalc ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_style(Theme::border())
        .padding(Padding::horizontal(1));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let style = if state.display_is_error {
        Theme::display_error()
    } else {
        Theme::display_text()
    };

    // Pending operation on a dim line above the main readout.
    let pending = state.pending_text().unwrap_or_default();
    let lines = vec![
        Line::from(Span::styled(pending, Theme::pending())).alignment(Alignment::Right),
        Line::from(Span::styled(state.display.as_str(), style)).alignment(Alignment::Right),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}
