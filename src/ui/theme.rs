use ratatui::style::{Color, Modifier, Style};

pub struct Theme;

impl Theme {
    pub fn border() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn border_focused() -> Style {
        Style::default().fg(Color::Cyan)
    }

    pub fn title() -> Style {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    }

    pub fn display_text() -> Style {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    }

    pub fn display_error() -> Style {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    }

    pub fn pending() -> Style {
        Style::default().fg(Color::Yellow)
    }

    pub fn key_label() -> Style {
        Style::default().fg(Color::White)
    }

    pub fn key_selected() -> Style {
        Style::default().fg(Color::Black).bg(Color::Cyan)
    }

    pub fn key_pressed() -> Style {
        Style::default().fg(Color::Black).bg(Color::Yellow)
    }

    pub fn timestamp() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn tape_text() -> Style {
        Style::default().fg(Color::White)
    }

    pub fn tape_error() -> Style {
        Style::default().fg(Color::Red)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Color::White).bg(Color::DarkGray)
    }

    pub fn hint() -> Style {
        Style::default().fg(Color::DarkGray)
    }
}
