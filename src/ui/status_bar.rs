use crate::app::state::{AppState, FocusPanel};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut parts: Vec<Span> = Vec::new();

    // Pending operation indicator
    if let Some(pending) = state.pending_text() {
        parts.push(Span::styled(
            format!(" [{}] ", pending),
            Style::default().fg(Color::Green).bg(Color::DarkGray),
        ));
    }

    // Transient status message, else key hints
    let text = match &state.status_message {
        Some((msg, _)) => msg.clone(),
        None => "0-9 . + - * / | enter: = | n: sign | c: clear | tab: focus | q: quit".to_string(),
    };
    parts.push(Span::styled(format!(" {} ", text), Theme::status_bar()));

    // Focus indicator, right aligned
    let focus_name = match state.focus {
        FocusPanel::Keypad => "KEYPAD",
        FocusPanel::Tape => "TAPE",
    };
    let used: usize = parts.iter().map(|s| s.content.width()).sum();
    let remaining = (area.width as usize).saturating_sub(used + focus_name.len() + 2);
    parts.push(Span::styled(" ".repeat(remaining), Theme::status_bar()));
    parts.push(Span::styled(
        format!(" {} ", focus_name),
        Style::default().fg(Color::Black).bg(Color::Cyan),
    ));

    frame.render_widget(Paragraph::new(Line::from(parts)), area);
}
