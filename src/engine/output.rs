use thiserror::Error;

/// Outcome of one engine event. Both variants carry text the UI can show;
/// an error additionally means the engine dropped its pending operation
/// (see `handler::reset_after_error`).
#[derive(Debug, Clone, PartialEq)]
pub enum EngineOutput {
    Display(String),
    Error(CalcError),
}

impl EngineOutput {
    pub fn text(&self) -> String {
        match self {
            EngineOutput::Display(s) => s.clone(),
            EngineOutput::Error(e) => e.to_string(),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, EngineOutput::Error(_))
    }
}

/// Recoverable calculation errors. The display text is the error message.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    #[error("Divide By Zero!")]
    DivideByZero,
    /// A value that is infinite, not a number, or an incomplete literal
    /// used as an operand. Carries the offending text.
    #[error("{0}")]
    InvalidNumber(String),
}
