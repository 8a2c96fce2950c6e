//! Observable calculator state, as rendered by the shell.

use crate::calculator::{Calculator, CalcError, history_number};

/// Everything the shell shows after an action.
#[derive(Clone, Debug, PartialEq)]
pub struct DisplaySnapshot {
    /// The current input or last result.
    pub display: String,
    /// Pending left operand and operator, e.g. `5.0 +`.
    pub pending: Option<String>,
    /// Error banner from the last action, if it failed.
    pub error: Option<String>,
}

impl DisplaySnapshot {
    /// Capture the calculator after an action, with that action's error.
    pub fn capture(calc: &Calculator, error: Option<&CalcError>) -> Self {
        Self {
            display: calc.display().to_string(),
            pending: calc
                .pending()
                .map(|(operand, op)| format!("{} {}", history_number(operand), op)),
            error: error.map(|e| format!("Error: {}", e)),
        }
    }

    /// Whether the last action failed.
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    /// The main display line, `[<pending>] <display>`.
    pub fn display_line(&self) -> String {
        match &self.pending {
            Some(pending) => format!("[{}] {}", pending, self.display),
            None => self.display.clone(),
        }
    }
}

/// Render the most recent history entries, one line each.
///
/// Returns an empty list when there is no history.
pub fn history_lines(calc: &Calculator, timestamp_format: &str) -> Vec<String> {
    calc.recent_history()
        .map(|entry| entry.render(timestamp_format))
        .collect()
}
