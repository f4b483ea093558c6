use crate::app::state::{AppState, FocusPanel};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let focused = state.focus == FocusPanel::Tape;
    let block = Block::default()
        .title(" Tape ")
        .title_style(if focused { Theme::title() } else { Theme::border() })
        .borders(Borders::ALL)
        .border_style(if focused {
            Theme::border_focused()
        } else {
            Theme::border()
        });

    let visible = area.height.saturating_sub(2) as usize;

    // The scroll offset counts up from the newest entry.
    let end = state.tape.len().saturating_sub(state.tape_scroll);
    let start = end.saturating_sub(visible);

    let mut items: Vec<ListItem> = state.tape[start..end]
        .iter()
        .map(|entry| {
            let style = if entry.is_error {
                Theme::tape_error()
            } else {
                Theme::tape_text()
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!("{} ", entry.timestamp), Theme::timestamp()),
                Span::styled(entry.text.as_str(), style),
            ]))
        })
        .collect();

    if items.is_empty() {
        items.push(ListItem::new(Span::styled(
            " No calculations yet",
            Theme::hint(),
        )));
    }

    frame.render_widget(List::new(items).block(block), area);
}
