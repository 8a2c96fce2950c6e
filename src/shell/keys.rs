//! Key parsing for the terminal shell.
//!
//! A line of input is split into calculator keys: single digits, the decimal
//! point, operator symbols, `=` and a few word commands. `5+3=` and
//! `5 + 3 =` both yield the same four keys.

use crate::calculator::{BinaryOperator, InputToken, UnaryOperator};
use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

lazy_static! {
    /// Matches one key at the start of the remaining input.
    /// Words (commands like `clear`, `sqrt`) or a single symbol character.
    static ref KEY: Regex = Regex::new(
        r"^(?:[A-Za-z][A-Za-z-]*|[0-9.=+\-*/×÷^√%!])"
    ).unwrap();
}

/// A single key press or shell command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Entry(InputToken),
    Operator(BinaryOperator),
    Unary(UnaryOperator),
    Equals,
    Clear,
    ClearHistory,
    ShowHistory,
    Help,
    Quit,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum KeyError {
    #[error("Unknown key '{0}'")]
    Unknown(String),
}

impl Key {
    fn from_token(token: &str) -> Result<Self, KeyError> {
        let mut chars = token.chars();
        if let (Some(c), None) = (chars.next(), chars.next())
            && let Ok(entry) = InputToken::try_from(c)
        {
            return Ok(Self::Entry(entry));
        }

        if let Ok(op) = token.parse::<BinaryOperator>() {
            return Ok(Self::Operator(op));
        }
        if let Ok(op) = token.to_lowercase().parse::<UnaryOperator>() {
            return Ok(Self::Unary(op));
        }

        match token.to_lowercase().as_str() {
            "=" => Ok(Self::Equals),
            "c" | "clear" => Ok(Self::Clear),
            "ch" | "clear-history" => Ok(Self::ClearHistory),
            "h" | "history" => Ok(Self::ShowHistory),
            "help" => Ok(Self::Help),
            "q" | "quit" | "exit" => Ok(Self::Quit),
            _ => Err(KeyError::Unknown(token.to_string())),
        }
    }
}

/// Split a line into keys.
///
/// Fails on the first unrecognized key; nothing from the line should be
/// applied in that case.
pub fn parse_keys(line: &str) -> Result<Vec<Key>, KeyError> {
    let mut keys = Vec::new();
    let mut rest = line.trim_start();

    while !rest.is_empty() {
        let Some(m) = KEY.find(rest) else {
            // Report the offending word or character, not the whole tail
            let bad = rest.split_whitespace().next().unwrap_or(rest);
            return Err(KeyError::Unknown(bad.to_string()));
        };
        keys.push(Key::from_token(m.as_str())?);
        rest = rest[m.end()..].trim_start();
    }

    Ok(keys)
}
