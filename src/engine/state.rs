//! Engine state: the number entry being edited and the pending-operation
//! fields driving chained arithmetic and repeated-equals replay.

use crate::engine::event::Operator;

/// Maximum number of characters the user can type into one operand.
pub const INPUT_CAP: usize = 9;

/// A number literal under construction, or a formatted result.
///
/// Typed input goes through [`Entry::accepts`] and [`Entry::push_token`],
/// which enforce the single-dot and input-cap invariants. Formatted results
/// are installed with [`Entry::literal`] and may exceed the cap (scientific
/// notation is wider than nine characters).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Entry(String);

impl Entry {
    pub fn zero() -> Self {
        Entry("0".to_string())
    }

    pub fn empty() -> Self {
        Entry::default()
    }

    pub fn literal(text: impl Into<String>) -> Self {
        Entry(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether a typed token would be accepted right now. A second dot and
    /// anything past the input cap are rejected.
    pub fn accepts(&self, token: char) -> bool {
        if token == '.' && self.0.contains('.') {
            return false;
        }
        self.0.len() < INPUT_CAP
    }

    /// Append one typed token, applying the leading-zero rules: a digit
    /// replaces a bare `0`, and a dot on an empty entry becomes `0.`.
    pub fn push_token(&mut self, token: char) {
        if !self.accepts(token) {
            return;
        }
        if self.0 == "0" && token != '.' {
            self.0 = token.to_string();
        } else if self.0.is_empty() && token == '.' {
            self.0.push_str("0.");
        } else {
            self.0.push(token);
        }
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Drop the last character. The caller decides what an emptied entry
    /// falls back to.
    pub fn pop_char(&mut self) {
        self.0.pop();
    }

    /// Flip the leading minus sign. The sign does not count against the
    /// input cap.
    pub fn toggle_sign(&mut self) {
        if let Some(rest) = self.0.strip_prefix('-') {
            self.0 = rest.to_string();
        } else {
            self.0.insert(0, '-');
        }
    }

    /// Numeric value of the entry. `None` for the empty and transient
    /// (`.`, `-`) states that have no value yet.
    pub fn value(&self) -> Option<f64> {
        self.0.parse().ok()
    }
}

/// All state owned by the calculator engine. Exclusively owned by one
/// session; every event runs to completion before the next is accepted.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineState {
    /// Operand being typed, or the last result. `0` in the initial state.
    pub current: Entry,
    /// Left operand of a pending or completed operation. Empty means unset.
    pub previous: Entry,
    /// Operator awaiting its right operand.
    pub operation: Option<Operator>,
    /// Most recently used operator, replayed on repeated equals.
    pub last_operation: Option<Operator>,
    /// Right operand of the last completed computation, replayed on
    /// repeated equals.
    pub last_operand: Entry,
    /// The next digit or dot starts a fresh number instead of appending.
    pub is_new_input: bool,
}

impl Default for EngineState {
    fn default() -> Self {
        Self {
            current: Entry::zero(),
            previous: Entry::empty(),
            operation: None,
            last_operation: None,
            last_operand: Entry::empty(),
            is_new_input: false,
        }
    }
}

impl EngineState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text the UI should show: the operand being edited, else the left
    /// operand.
    pub fn display_text(&self) -> &str {
        if self.current.is_empty() {
            self.previous.as_str()
        } else {
            self.current.as_str()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_token_rules() {
        let mut e = Entry::zero();
        e.push_token('7');
        assert_eq!(e.as_str(), "7");

        let mut e = Entry::zero();
        e.push_token('.');
        assert_eq!(e.as_str(), "0.");

        let mut e = Entry::empty();
        e.push_token('.');
        assert_eq!(e.as_str(), "0.");

        let mut e = Entry::literal("1.2");
        e.push_token('.');
        assert_eq!(e.as_str(), "1.2");
        e.push_token('3');
        assert_eq!(e.as_str(), "1.23");
    }

    #[test]
    fn test_input_cap() {
        let mut e = Entry::empty();
        for c in "123456789".chars() {
            e.push_token(c);
        }
        assert_eq!(e.as_str(), "123456789");
        assert!(!e.accepts('0'));
        assert!(!e.accepts('.'));
        e.push_token('0');
        assert_eq!(e.as_str(), "123456789");
    }

    #[test]
    fn test_toggle_sign() {
        let mut e = Entry::literal("12");
        e.toggle_sign();
        assert_eq!(e.as_str(), "-12");
        e.toggle_sign();
        assert_eq!(e.as_str(), "12");
    }

    #[test]
    fn test_value_of_transient_states() {
        assert_eq!(Entry::empty().value(), None);
        assert_eq!(Entry::literal(".").value(), None);
        assert_eq!(Entry::literal("-").value(), None);
        assert_eq!(Entry::literal("-4.5").value(), Some(-4.5));
    }

    #[test]
    fn test_display_text_falls_back_to_previous() {
        let mut state = EngineState::new();
        assert_eq!(state.display_text(), "0");
        state.previous = Entry::literal("12");
        state.current = Entry::empty();
        assert_eq!(state.display_text(), "12");
    }
}
