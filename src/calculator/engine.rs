//! The calculator state machine.
//!
//! A [`Calculator`] owns the number being typed, at most one pending binary
//! operation, and the history log. The UI calls one action per key press and
//! re-reads [`Calculator::display`] and [`Calculator::recent_history`] after.
//!
//! Failure policy differs per action:
//! - [`Calculator::select_operator`] leaves state untouched so the entry can
//!   be corrected.
//! - [`Calculator::evaluate`] resets to the cleared state.
//! - [`Calculator::evaluate_unary`] leaves state untouched, keeping any
//!   pending binary operation.

use super::format::{display_number, history_number, parse_input};
use super::history::{DEFAULT_HISTORY_LIMIT, History, HistoryEntry};
use super::operations::{BinaryOperator, CalcError, UnaryOperator};
use chrono::Local;
use tracing::{debug, warn};

/// A single character of number entry: a digit or the decimal point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InputToken(char);

impl InputToken {
    pub const POINT: InputToken = InputToken('.');

    pub fn as_char(self) -> char {
        self.0
    }

    pub fn is_digit(self) -> bool {
        self.0.is_ascii_digit()
    }
}

impl TryFrom<char> for InputToken {
    type Error = char;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        if c.is_ascii_digit() || c == '.' {
            Ok(Self(c))
        } else {
            Err(c)
        }
    }
}

/// Entry state of the calculator, excluding history.
#[derive(Clone, Debug, PartialEq)]
pub struct CalculatorState {
    /// The number as typed; never empty.
    pub current_input: String,
    /// Left-hand operand captured when a binary operator was selected.
    pub pending_operand: Option<f64>,
    pub pending_operator: Option<BinaryOperator>,
    /// The next digit starts a new number instead of extending this one.
    pub awaiting_new_entry: bool,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self {
            current_input: "0".to_string(),
            pending_operand: None,
            pending_operator: None,
            awaiting_new_entry: true,
        }
    }
}

/// Interactive calculator engine.
#[derive(Debug)]
pub struct Calculator {
    state: CalculatorState,
    history: History,
    history_limit: usize,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    pub fn new() -> Self {
        Self::with_history_limit(DEFAULT_HISTORY_LIMIT)
    }

    /// Create a calculator that surfaces at most `limit` history entries.
    pub fn with_history_limit(limit: usize) -> Self {
        Self {
            state: CalculatorState::default(),
            history: History::new(),
            history_limit: limit,
        }
    }

    /// Entry and pending state, without history.
    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// Text currently shown on the display.
    pub fn display(&self) -> &str {
        &self.state.current_input
    }

    /// Left operand and operator waiting for the right operand, if any.
    pub fn pending(&self) -> Option<(f64, BinaryOperator)> {
        self.state.pending_operand.zip(self.state.pending_operator)
    }

    /// The full history, newest first.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// The most recent history entries, newest first.
    pub fn recent_history(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.history.recent(self.history_limit)
    }

    /// How many entries [`Calculator::recent_history`] yields at most.
    pub fn history_limit(&self) -> usize {
        self.history_limit
    }

    /// Type a digit or decimal point.
    ///
    /// Multiple decimal points are accepted here; a malformed number is
    /// only rejected once it is used by an operator or evaluation.
    pub fn enter(&mut self, token: InputToken) {
        let state = &mut self.state;
        if state.awaiting_new_entry {
            state.current_input = token.as_char().to_string();
            state.awaiting_new_entry = false;
        } else if state.current_input == "0" && token.is_digit() {
            state.current_input = token.as_char().to_string();
        } else {
            state.current_input.push(token.as_char());
        }
        debug!(input = %state.current_input, "entry");
    }

    /// Capture the current input as the left operand of `op`.
    ///
    /// Any operation already pending is replaced, not evaluated.
    pub fn select_operator(&mut self, op: BinaryOperator) -> Result<(), CalcError> {
        let operand = parse_input(&self.state.current_input).inspect_err(|err| {
            warn!(error = %err, operator = %op, "operator rejected");
        })?;

        if let Some(previous) = self.state.pending_operator {
            debug!(%previous, replacement = %op, "replacing pending operator");
        }
        self.state.pending_operand = Some(operand);
        self.state.pending_operator = Some(op);
        self.state.awaiting_new_entry = true;
        debug!(operand, operator = %op, "operator selected");
        Ok(())
    }

    /// Apply the pending binary operation to the current input.
    ///
    /// Does nothing when no operation is pending. On failure the calculator
    /// is cleared before the error is returned.
    pub fn evaluate(&mut self) -> Result<(), CalcError> {
        let Some((lhs, op)) = self.pending() else {
            debug!("evaluate with nothing pending");
            return Ok(());
        };

        let outcome = parse_input(&self.state.current_input)
            .and_then(|rhs| op.apply(lhs, rhs).map(|result| (rhs, result)));

        match outcome {
            Ok((rhs, result)) => {
                let expression = format!(
                    "{} {} {} = {}",
                    history_number(lhs),
                    op,
                    history_number(rhs),
                    history_number(result)
                );
                self.finish(expression, result);
                self.state.pending_operand = None;
                self.state.pending_operator = None;
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, operator = %op, "evaluation failed, clearing");
                self.clear();
                Err(err)
            }
        }
    }

    /// Apply `op` to the current input alone.
    ///
    /// A pending binary operation is left as it is, on success and failure.
    pub fn evaluate_unary(&mut self, op: UnaryOperator) -> Result<(), CalcError> {
        let outcome = parse_input(&self.state.current_input)
            .and_then(|operand| op.apply(operand).map(|result| (operand, result)));

        match outcome {
            Ok((operand, result)) => {
                // Factorials are integers and are recorded without a fraction
                let result_text = match op {
                    UnaryOperator::Factorial => display_number(result),
                    UnaryOperator::SquareRoot | UnaryOperator::Percentage => {
                        history_number(result)
                    }
                };
                let expression =
                    format!("{} = {}", op.notation(&history_number(operand)), result_text);
                self.finish(expression, result);
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, operator = ?op, "unary operation failed");
                Err(err)
            }
        }
    }

    /// Reset entry and pending state. History is kept.
    pub fn clear(&mut self) {
        self.state = CalculatorState::default();
        debug!("cleared");
    }

    /// Drop all history entries. Entry state is kept.
    pub fn clear_history(&mut self) {
        self.history.clear();
        debug!("history cleared");
    }

    fn finish(&mut self, expression: String, result: f64) {
        debug!(%expression, "calculated");
        self.history
            .record(HistoryEntry::new(expression, result, Local::now()));
        self.state.current_input = display_number(result);
        self.state.awaiting_new_entry = true;
    }
}
