use crossterm::event::Event as CrosstermEvent;

/// Events consumed by the application loop.
#[derive(Debug)]
pub enum AppEvent {
    /// Terminal input event
    Terminal(CrosstermEvent),

    /// Tick for UI refresh
    Tick,
}
