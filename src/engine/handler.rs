//! Event dispatch for the calculator engine.
//!
//! Every event is total: it always returns an outcome and always leaves the
//! state valid. Errors drop the pending operation and operands but keep the
//! replay operand, so the next key press starts cleanly.

use crate::engine::event::{CalcEvent, Operator};
use crate::engine::format::{format_number, round_to_decimals};
use crate::engine::output::{CalcError, EngineOutput};
use crate::engine::state::{Entry, EngineState};

pub fn handle_event(state: &mut EngineState, event: CalcEvent) -> EngineOutput {
    match event {
        CalcEvent::Digit(d) => append_token(state, char::from(b'0' + d.min(9))),
        CalcEvent::Dot => append_token(state, '.'),
        CalcEvent::ToggleSign => toggle_sign(state),
        CalcEvent::Operator(op) => set_operation(state, op),
        CalcEvent::Equals => equals(state),
        CalcEvent::Clear => clear(state),
        CalcEvent::Backspace => backspace(state),
    }
}

fn display(state: &EngineState) -> EngineOutput {
    EngineOutput::Display(state.display_text().to_owned())
}

fn append_token(state: &mut EngineState, token: char) -> EngineOutput {
    // The dot and cap checks run against the displayed text, before any
    // new-input reset. A result wider than the cap therefore blocks digit
    // entry until an operator or clear arrives.
    if !state.current.accepts(token) {
        return display(state);
    }
    if state.is_new_input {
        state.current.clear();
        state.is_new_input = false;
    }
    state.current.push_token(token);
    display(state)
}

fn toggle_sign(state: &mut EngineState) -> EngineOutput {
    if !state.current.is_empty() && state.current.as_str() != "." {
        state.current.toggle_sign();
    } else if state.operation.is_some() && !state.previous.is_empty() {
        // Sign pressed right after an operator: negate the left operand
        // into the editing slot and resume editing there.
        let mut negated = state.previous.clone();
        negated.toggle_sign();
        state.current = negated;
        state.is_new_input = false;
    }
    display(state)
}

fn set_operation(state: &mut EngineState, op: Operator) -> EngineOutput {
    // Operator pressed with no fresh input: the user is correcting their
    // operator choice. `last_operation` keeps its old value here.
    if state.is_new_input {
        state.operation = Some(op);
        return display(state);
    }

    let chained = state
        .operation
        .filter(|_| !state.previous.is_empty() && !state.current.is_empty());

    let mut failed = None;
    match chained {
        Some(pending) => {
            if let Err(err) = compute_intermediate(state, pending) {
                reset_after_error(state);
                failed = Some(err);
            }
        }
        None => {
            state.previous = std::mem::take(&mut state.current);
        }
    }

    // The new operator is installed even when the intermediate computation
    // failed; only the operands were reset.
    state.operation = Some(op);
    state.last_operation = Some(op);
    state.is_new_input = true;

    match failed {
        Some(err) => EngineOutput::Error(err),
        None => display(state),
    }
}

/// Apply the pending operation early so chained input (`3 + 4 +`) shows a
/// running total. The result becomes both operands.
fn compute_intermediate(state: &mut EngineState, pending: Operator) -> Result<(), CalcError> {
    let rhs = parse_operand(&state.current)?;
    if !rhs.is_finite() {
        return Err(CalcError::InvalidNumber(state.current.as_str().to_owned()));
    }
    // Only the literal `0` is caught here; `0.0` and friends divide through
    // and surface as an invalid result on the next computation.
    if pending == Operator::Divide && state.current.as_str() == "0" {
        return Err(CalcError::DivideByZero);
    }
    let lhs = parse_operand(&state.previous)?;

    let result = Entry::literal(format_number(pending.apply(lhs, rhs)));
    state.current = result.clone();
    state.previous = result;
    Ok(())
}

fn equals(state: &mut EngineState) -> EngineOutput {
    // Equals with no operator ever chosen: reformat the bare number.
    if state.operation.is_none() && state.previous.is_empty() {
        return match parse_operand(&state.current) {
            Ok(value) => {
                state.current = Entry::literal(format_number(value));
                display(state)
            }
            Err(err) => fail(state, err),
        };
    }

    match compute(state) {
        Ok(()) => display(state),
        Err(err) => fail(state, err),
    }
}

fn compute(state: &mut EngineState) -> Result<(), CalcError> {
    // Equals straight after an operator reuses the left operand on the
    // right (`5 + =` means `5 + 5`).
    if state.current.is_empty() && state.operation.is_some() {
        state.current = state.previous.clone();
    }

    if state.operation.is_some() {
        state.last_operand = state.current.clone();
    } else if state.last_operation.is_some() {
        // Repeated equals: replay the last operation against the result.
        state.previous = state.current.clone();
        state.current = state.last_operand.clone();
    }

    let Some(op) = state.operation.or(state.last_operation) else {
        return Ok(());
    };

    if op == Operator::Divide {
        let rhs_is_zero = state.current.as_str() == "."
            || state.current.value().is_some_and(|v| v == 0.0);
        if rhs_is_zero {
            return Err(CalcError::DivideByZero);
        }
    }

    let lhs = parse_operand(&state.previous)?;
    let rhs = parse_operand(&state.current)?;
    let raw = op.apply(lhs, rhs);
    let formatted = format_number(round_to_decimals(raw, 10));

    // A result that no longer reads back as a finite value (overflow to
    // infinity, inf - inf producing NaN) becomes the error text itself.
    let reparsed: f64 = formatted.parse().unwrap_or(f64::NAN);
    if !reparsed.is_finite() {
        return Err(CalcError::InvalidNumber(formatted));
    }

    state.current = Entry::literal(formatted);
    state.operation = None;
    Ok(())
}

fn clear(state: &mut EngineState) -> EngineOutput {
    *state = EngineState::default();
    display(state)
}

fn backspace(state: &mut EngineState) -> EngineOutput {
    if !state.current.is_empty() {
        state.current.pop_char();
        if state.current.is_empty() || state.current.as_str() == "-" {
            state.current = Entry::zero();
        }
    }
    display(state)
}

fn parse_operand(entry: &Entry) -> Result<f64, CalcError> {
    entry
        .value()
        .ok_or_else(|| CalcError::InvalidNumber(entry.as_str().to_owned()))
}

fn fail(state: &mut EngineState, err: CalcError) -> EngineOutput {
    reset_after_error(state);
    EngineOutput::Error(err)
}

/// Partial reset after an error: the pending operation and operands are
/// dropped, the replay operand and the new-input flag are kept.
fn reset_after_error(state: &mut EngineState) {
    state.current = Entry::zero();
    state.previous = Entry::empty();
    state.operation = None;
    state.last_operation = None;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event_for(key: char) -> CalcEvent {
        match key {
            '0'..='9' => CalcEvent::Digit(key as u8 - b'0'),
            '.' => CalcEvent::Dot,
            '~' => CalcEvent::ToggleSign,
            '=' => CalcEvent::Equals,
            'c' => CalcEvent::Clear,
            '<' => CalcEvent::Backspace,
            _ => CalcEvent::Operator(Operator::from_char(key).unwrap()),
        }
    }

    fn press(state: &mut EngineState, keys: &str) -> EngineOutput {
        let mut out = EngineOutput::Display(state.display_text().to_owned());
        for key in keys.chars() {
            out = handle_event(state, event_for(key));
        }
        out
    }

    fn run(keys: &str) -> (EngineState, EngineOutput) {
        let mut state = EngineState::new();
        let out = press(&mut state, keys);
        (state, out)
    }

    #[test]
    fn test_digit_entry_is_literal() {
        assert_eq!(run("12.5").1.text(), "12.5");
        assert_eq!(run(".5").1.text(), "0.5");
    }

    #[test]
    fn test_leading_zero_suppressed() {
        assert_eq!(run("007").1.text(), "7");
    }

    #[test]
    fn test_second_dot_ignored() {
        assert_eq!(run("1.2.3").1.text(), "1.23");
    }

    #[test]
    fn test_input_cap_blocks_further_digits() {
        let (mut state, out) = run("123456789");
        assert_eq!(out.text(), "123456789");
        assert_eq!(press(&mut state, "0").text(), "123456789");
        assert_eq!(press(&mut state, ".").text(), "123456789");
    }

    #[test]
    fn test_toggle_sign_is_its_own_inverse() {
        let (mut state, out) = run("12~");
        assert_eq!(out.text(), "-12");
        assert_eq!(press(&mut state, "~").text(), "12");
    }

    #[test]
    fn test_toggle_sign_after_operator_negates_left_operand() {
        let (mut state, out) = run("5+~");
        assert_eq!(out.text(), "-5");
        assert!(!state.is_new_input);
        assert_eq!(state.previous.as_str(), "5");
        assert_eq!(press(&mut state, "=").text(), "0");
    }

    #[test]
    fn test_double_toggle_on_fresh_operator() {
        let (mut state, out) = run("5+~~");
        assert_eq!(out.text(), "5");
        assert_eq!(press(&mut state, "=").text(), "10");
    }

    #[test]
    fn test_chained_operations_compute_intermediates() {
        let (_, out) = run("3+4+");
        assert_eq!(out.text(), "7");
        assert_eq!(run("3+4+5=").1.text(), "12");
    }

    #[test]
    fn test_repeated_equals_replays_last_operation() {
        let (mut state, out) = run("5+3=");
        assert_eq!(out.text(), "8");
        assert_eq!(press(&mut state, "=").text(), "11");
        assert_eq!(press(&mut state, "=").text(), "14");
    }

    #[test]
    fn test_operator_correction_uses_the_last_choice() {
        let (mut state, _) = run("5+*");
        assert_eq!(state.operation, Some(Operator::Multiply));
        // Correction keeps the previously recorded operator for replay.
        assert_eq!(state.last_operation, Some(Operator::Add));
        assert_eq!(press(&mut state, "3=").text(), "15");
    }

    #[test]
    fn test_equals_right_after_operator_reuses_left_operand() {
        assert_eq!(run("5+=").1.text(), "10");
        assert_eq!(run("4*=").1.text(), "16");
    }

    #[test]
    fn test_divide_by_zero_on_equals() {
        let (state, out) = run("8/0=");
        assert_eq!(out, EngineOutput::Error(CalcError::DivideByZero));
        assert_eq!(out.text(), "Divide By Zero!");
        assert_eq!(state.current.as_str(), "0");
        assert!(state.previous.is_empty());
        assert_eq!(state.operation, None);
        assert_eq!(state.last_operation, None);
    }

    #[test]
    fn test_divide_by_zero_on_chained_operator() {
        let (state, out) = run("8/0+");
        assert_eq!(out, EngineOutput::Error(CalcError::DivideByZero));
        // The freshly pressed operator is still installed after the reset.
        assert_eq!(state.operation, Some(Operator::Add));
        assert!(state.is_new_input);
        assert_eq!(state.current.as_str(), "0");
        assert!(state.previous.is_empty());
    }

    #[test]
    fn test_divide_by_decimal_zero_overflows_to_invalid() {
        // `0.0` is not the literal `0`, so the intermediate division goes
        // through and produces an infinite running total.
        let (mut state, out) = run("8/0.0+");
        assert_eq!(out.text(), "inf");
        let out = press(&mut state, "=");
        assert_eq!(out, EngineOutput::Error(CalcError::InvalidNumber("inf".into())));
    }

    #[test]
    fn test_large_results_render_scientific() {
        assert_eq!(run("9999999+1=").1.text(), "1.000000e7");
    }

    #[test]
    fn test_rounding_hides_float_noise() {
        assert_eq!(run(".1+.2=").1.text(), "0.3");
    }

    #[test]
    fn test_negative_results() {
        assert_eq!(run("5-9=").1.text(), "-4");
    }

    #[test]
    fn test_backspace_drops_last_character() {
        assert_eq!(run("120<").1.text(), "12");
    }

    #[test]
    fn test_backspace_to_bare_minus_resets_to_zero() {
        let (state, out) = run("5~<");
        assert_eq!(out.text(), "0");
        assert_eq!(state.current.as_str(), "0");
    }

    #[test]
    fn test_backspace_with_empty_entry_is_a_no_op() {
        // After an operator the editing slot is empty and the display
        // falls back to the left operand.
        let (state, out) = run("5+<");
        assert_eq!(out.text(), "5");
        assert!(state.current.is_empty());
        assert_eq!(state.previous.as_str(), "5");
    }

    #[test]
    fn test_clear_resets_everything() {
        let (state, out) = run("5+3c");
        assert_eq!(out.text(), "0");
        assert_eq!(state, EngineState::default());
    }

    #[test]
    fn test_equals_without_operator_normalizes_in_place() {
        let (mut state, out) = run("5.0=");
        assert_eq!(out.text(), "5");
        assert_eq!(press(&mut state, "=").text(), "5");
    }

    #[test]
    fn test_digits_extend_the_displayed_result() {
        // Equals does not arm the new-input flag, so typing continues the
        // result instead of starting over.
        assert_eq!(run("5+3=2").1.text(), "82");
    }

    #[test]
    fn test_operator_after_equals_chains_from_result() {
        assert_eq!(run("5+3=*2=").1.text(), "16");
    }
}
