//! Calculator core.
//!
//! This module provides:
//! - Pure arithmetic operations with typed failures
//! - The input state machine driving a pocket-calculator style interaction
//! - A timestamped history of completed calculations

mod engine;
mod format;
mod history;
mod operations;

pub use engine::{Calculator, CalculatorState, InputToken};
pub use format::{display_number, history_number, parse_input};
pub use history::{DEFAULT_HISTORY_LIMIT, DEFAULT_TIMESTAMP_FORMAT, History, HistoryEntry};
pub use operations::{
    BinaryOperator, CalcError, UnaryOperator, add, divide, factorial, multiply, percentage, power,
    square_root, subtract,
};
