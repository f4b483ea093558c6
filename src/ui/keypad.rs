use crate::app::state::{AppState, FocusPanel, KEYPAD, PRESS_FLASH};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let focused = state.focus == FocusPanel::Keypad;
    let block = Block::default()
        .title(" Keypad ")
        .title_style(if focused { Theme::title() } else { Theme::border() })
        .borders(Borders::ALL)
        .border_style(if focused {
            Theme::border_focused()
        } else {
            Theme::border()
        });

    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height == 0 || inner.width == 0 {
        return;
    }

    let row_height = (inner.height / KEYPAD.len() as u16).max(1);
    for (r, row) in KEYPAD.iter().enumerate() {
        let y = inner.y + r as u16 * row_height;
        if y >= inner.bottom() {
            break;
        }
        let col_width = (inner.width / row.len() as u16).max(1);
        for (c, cap) in row.iter().enumerate() {
            let x = inner.x + c as u16 * col_width;
            if x >= inner.right() {
                break;
            }
            let cell = Rect {
                x,
                y,
                width: col_width.min(inner.right() - x),
                height: row_height.min(inner.bottom() - y),
            };

            let selected = focused && state.keypad_cursor == (r, c);
            let pressed = state
                .last_press
                .is_some_and(|(ev, at)| ev == cap.event && at.elapsed() < PRESS_FLASH);
            let style = if pressed {
                Theme::key_pressed()
            } else if selected {
                Theme::key_selected()
            } else {
                Theme::key_label()
            };

            // Label on the vertical center line of the cell.
            let label_rect = Rect {
                x: cell.x,
                y: cell.y + cell.height / 2,
                width: cell.width,
                height: 1,
            };
            let label = Paragraph::new(
                Line::from(Span::styled(cap.label, style)).alignment(Alignment::Center),
            );
            frame.render_widget(label, label_rect);
        }
    }
}
