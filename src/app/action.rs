/// Side effects requested by the event handler, executed by the main loop.
#[derive(Debug)]
pub enum Action {
    Quit,
}
