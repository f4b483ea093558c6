//! The calculator engine: a pure state machine turning button events into
//! display text.
//!
//! The UI layer forwards one [`event::CalcEvent`] per gesture and renders
//! whatever [`handler::handle_event`] returns. It never reaches into the
//! state fields to decide what to draw; the display rule lives here.

pub mod event;
pub mod format;
pub mod handler;
pub mod output;
pub mod state;
