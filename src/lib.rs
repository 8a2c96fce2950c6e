//! A pocket-calculator engine with a timestamped history.
//!
//! The [`calculator`] module holds the arithmetic and the input state
//! machine; [`shell`] is a terminal front end driving it one key at a time.

pub mod calculator;
pub mod config;
pub mod logging;
pub mod shell;

pub use calculator::{BinaryOperator, CalcError, Calculator, InputToken, UnaryOperator};
pub use config::Config;
