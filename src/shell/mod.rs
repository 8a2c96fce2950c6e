//! Line-oriented terminal front end for the calculator.
//!
//! Each input line is split into keys (see [`keys`]), the keys are applied to
//! the [`Calculator`] in order, and the display is printed once per line.

mod keys;
mod view;

pub use keys::{Key, KeyError, parse_keys};
pub use view::{DisplaySnapshot, history_lines};

use crate::calculator::{CalcError, Calculator};
use crate::config::Config;
use anyhow::Result;
use std::io::{BufRead, Write};

const HELP: &str = "\
keys:      0-9 .  + - * / ^ (or × ÷ x)  =
unary:     sqrt (√)  %  ! (fact)
commands:  c/clear  ch/clear-history  history  help  q/quit
example:   12.5 * 4 =";

/// What the loop should do after a line has been applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// The calculator plus the presentation settings the shell needs.
pub struct Shell {
    calc: Calculator,
    timestamp_format: String,
}

impl Shell {
    pub fn new(config: &Config) -> Self {
        Self {
            calc: Calculator::with_history_limit(config.history_limit),
            timestamp_format: config.timestamp_format.clone(),
        }
    }

    pub fn calculator(&self) -> &Calculator {
        &self.calc
    }

    /// Apply one key, returning the error it reported, if any.
    fn press(&mut self, key: Key, out: &mut impl Write) -> Result<(Flow, Option<CalcError>)> {
        let outcome = match key {
            Key::Entry(token) => {
                self.calc.enter(token);
                Ok(())
            }
            Key::Operator(op) => self.calc.select_operator(op),
            Key::Unary(op) => self.calc.evaluate_unary(op),
            Key::Equals => self.calc.evaluate(),
            Key::Clear => {
                self.calc.clear();
                Ok(())
            }
            Key::ClearHistory => {
                self.calc.clear_history();
                Ok(())
            }
            Key::ShowHistory => {
                self.write_history(out)?;
                Ok(())
            }
            Key::Help => {
                writeln!(out, "{}", HELP)?;
                Ok(())
            }
            Key::Quit => return Ok((Flow::Quit, None)),
        };
        Ok((Flow::Continue, outcome.err()))
    }

    /// Apply a whole line and print the resulting display.
    ///
    /// Errors from individual keys are shown as a banner and do not stop the
    /// remaining keys on the line. A line with an unknown key is not applied.
    pub fn handle_line(&mut self, line: &str, out: &mut impl Write) -> Result<Flow> {
        let keys = match parse_keys(line) {
            Ok(keys) => keys,
            Err(e) => {
                tracing::debug!(error = %e, line, "rejected input line");
                writeln!(out, "Error: {}", e)?;
                return Ok(Flow::Continue);
            }
        };
        if keys.is_empty() {
            return Ok(Flow::Continue);
        }

        let mut last_error = None;
        for key in keys {
            let (flow, error) = self.press(key, out)?;
            if flow == Flow::Quit {
                return Ok(Flow::Quit);
            }
            if let Some(error) = error {
                writeln!(out, "Error: {}", error)?;
                last_error = Some(error);
            }
        }

        let snapshot = DisplaySnapshot::capture(&self.calc, last_error.as_ref());
        writeln!(out, "{}", snapshot.display_line())?;
        Ok(Flow::Continue)
    }

    fn write_history(&self, out: &mut impl Write) -> Result<()> {
        let lines = history_lines(&self.calc, &self.timestamp_format);
        if lines.is_empty() {
            writeln!(out, "(no history)")?;
        }
        for line in lines {
            writeln!(out, "{}", line)?;
        }
        Ok(())
    }
}

/// Run the interactive loop until end of input or `quit`.
pub fn run(config: &Config, input: impl BufRead, mut out: impl Write) -> Result<()> {
    let mut shell = Shell::new(config);
    writeln!(out, "{}", shell.calc.display())?;

    for line in input.lines() {
        if shell.handle_line(&line?, &mut out)? == Flow::Quit {
            break;
        }
        out.flush()?;
    }
    Ok(())
}

/// Apply a single line of keys and return the final snapshot.
///
/// Output of `history` and `help` keys is written to `out`. Fails if the line
/// contains an unknown key.
pub fn eval_line(config: &Config, line: &str, out: &mut impl Write) -> Result<DisplaySnapshot> {
    let mut shell = Shell::new(config);
    let keys = parse_keys(line)?;

    let mut last_error = None;
    for key in keys {
        let (flow, error) = shell.press(key, out)?;
        if flow == Flow::Quit {
            break;
        }
        if error.is_some() {
            last_error = error;
        }
    }
    Ok(DisplaySnapshot::capture(&shell.calc, last_error.as_ref()))
}
