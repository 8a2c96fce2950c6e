//! Arithmetic operations used by the calculator.
//!
//! Every function here is pure: it takes plain `f64` values and either returns
//! the result or a [`CalcError`] describing why the operation is undefined.
//! Non-finite results (e.g. `(-8)^0.5` or `171!`) are returned as-is.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors raised while evaluating calculator input.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CalcError {
    #[error("Cannot divide by zero")]
    DivideByZero,
    #[error("Cannot calculate square root of negative number")]
    NegativeRadicand,
    #[error("Cannot calculate factorial of negative number")]
    NegativeOperand,
    #[error("Factorial only works with integers")]
    NonIntegerOperand,
    /// The current input could not be read as a finite number.
    #[error("Invalid number format: {0:?}")]
    InvalidNumber(String),
}

/// `a + b`.
pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

/// `a - b`.
pub fn subtract(a: f64, b: f64) -> f64 {
    a - b
}

/// `a × b`.
pub fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

/// `a ÷ b`, failing when `b` is zero.
pub fn divide(a: f64, b: f64) -> Result<f64, CalcError> {
    if b == 0.0 {
        return Err(CalcError::DivideByZero);
    }
    Ok(a / b)
}

/// `a` raised to `b`. Invalid combinations yield `NaN` rather than an error.
pub fn power(a: f64, b: f64) -> f64 {
    a.powf(b)
}

/// Non-negative square root, failing for negative `a`.
pub fn square_root(a: f64) -> Result<f64, CalcError> {
    if a < 0.0 {
        return Err(CalcError::NegativeRadicand);
    }
    Ok(a.sqrt())
}

/// `a` as a fraction of one hundred.
pub fn percentage(a: f64) -> f64 {
    a / 100.0
}

/// Integer factorial of `a`.
///
/// `a` must be a non-negative value with no fractional part. The product is
/// accumulated in floating point, so anything above `170!` becomes infinity.
pub fn factorial(a: f64) -> Result<f64, CalcError> {
    if a < 0.0 {
        return Err(CalcError::NegativeOperand);
    }
    if a.fract() != 0.0 {
        return Err(CalcError::NonIntegerOperand);
    }

    let mut result = 1.0;
    let mut n = 2.0;
    while n <= a {
        result *= n;
        if result.is_infinite() {
            break;
        }
        n += 1.0;
    }
    Ok(result)
}

/// A binary operator that can be left pending while the right operand is typed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
}

impl BinaryOperator {
    /// Every binary operator.
    pub const ALL: [BinaryOperator; 5] = [
        Self::Add,
        Self::Subtract,
        Self::Multiply,
        Self::Divide,
        Self::Power,
    ];

    /// Symbol used when the operator is written into history.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "×",
            Self::Divide => "÷",
            Self::Power => "^",
        }
    }

    /// Apply the operator as `lhs <op> rhs`.
    pub fn apply(self, lhs: f64, rhs: f64) -> Result<f64, CalcError> {
        match self {
            Self::Add => Ok(add(lhs, rhs)),
            Self::Subtract => Ok(subtract(lhs, rhs)),
            Self::Multiply => Ok(multiply(lhs, rhs)),
            Self::Divide => divide(lhs, rhs),
            Self::Power => Ok(power(lhs, rhs)),
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for BinaryOperator {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" => Ok(Self::Add),
            "-" => Ok(Self::Subtract),
            "*" | "×" | "x" => Ok(Self::Multiply),
            "/" | "÷" => Ok(Self::Divide),
            "^" => Ok(Self::Power),
            _ => Err(()),
        }
    }
}

/// An operator applied immediately to the current input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
    SquareRoot,
    Percentage,
    Factorial,
}

impl UnaryOperator {
    /// Every unary operator.
    pub const ALL: [UnaryOperator; 3] = [Self::SquareRoot, Self::Percentage, Self::Factorial];

    /// Apply the operator to `operand`.
    pub fn apply(self, operand: f64) -> Result<f64, CalcError> {
        match self {
            Self::SquareRoot => square_root(operand),
            Self::Percentage => Ok(percentage(operand)),
            Self::Factorial => factorial(operand),
        }
    }

    /// Write `operand` in this operator's notation: `√x`, `x%` or `x!`.
    pub fn notation(self, operand: &str) -> String {
        match self {
            Self::SquareRoot => format!("√{}", operand),
            Self::Percentage => format!("{}%", operand),
            Self::Factorial => format!("{}!", operand),
        }
    }
}

impl FromStr for UnaryOperator {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "√" | "sqrt" => Ok(Self::SquareRoot),
            "%" => Ok(Self::Percentage),
            "!" | "fact" => Ok(Self::Factorial),
            _ => Err(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_arithmetic() {
        assert_eq!(add(5.0, 3.0), 8.0);
        assert_eq!(add(-5.0, 3.0), -2.0);
        assert_eq!(subtract(5.0, 3.0), 2.0);
        assert_eq!(subtract(-5.0, -3.0), -2.0);
        assert_eq!(multiply(-4.0, 3.0), -12.0);
        assert_eq!(divide(10.0, 4.0), Ok(2.5));
        assert_eq!(divide(-10.0, 2.0), Ok(-5.0));
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(divide(5.0, 0.0), Err(CalcError::DivideByZero));
        assert_eq!(divide(0.0, 0.0), Err(CalcError::DivideByZero));
        assert_eq!(divide(5.0, -0.0), Err(CalcError::DivideByZero));
    }

    #[test]
    fn test_power() {
        assert_eq!(power(2.0, 10.0), 1024.0);
        assert_eq!(power(4.0, 0.5), 2.0);
        assert_eq!(power(2.0, -1.0), 0.5);
        // Fractional power of a negative base is not an error
        assert!(power(-8.0, 0.5).is_nan());
        assert!(power(10.0, 400.0).is_infinite());
    }

    #[test]
    fn test_square_root() {
        assert_eq!(square_root(4.0), Ok(2.0));
        assert_eq!(square_root(0.0), Ok(0.0));
        assert_eq!(square_root(-4.0), Err(CalcError::NegativeRadicand));
    }

    #[test]
    fn test_percentage() {
        assert_eq!(percentage(150.0), 1.5);
        assert_eq!(percentage(0.0), 0.0);
        assert_eq!(percentage(-50.0), -0.5);
    }

    #[test]
    fn test_factorial() {
        assert_eq!(factorial(5.0), Ok(120.0));
        assert_eq!(factorial(0.0), Ok(1.0));
        assert_eq!(factorial(1.0), Ok(1.0));
        assert_eq!(factorial(5.5), Err(CalcError::NonIntegerOperand));
        assert_eq!(factorial(-5.0), Err(CalcError::NegativeOperand));
        assert_eq!(factorial(-0.5), Err(CalcError::NegativeOperand));
    }

    #[test]
    fn test_factorial_overflow() {
        assert!(factorial(170.0).unwrap().is_finite());
        assert_eq!(factorial(171.0), Ok(f64::INFINITY));
        assert_eq!(factorial(100_000.0), Ok(f64::INFINITY));
    }

    #[test]
    fn test_binary_dispatch() {
        assert_eq!(BinaryOperator::Add.apply(5.0, 3.0), Ok(8.0));
        assert_eq!(BinaryOperator::Subtract.apply(5.0, 3.0), Ok(2.0));
        assert_eq!(BinaryOperator::Multiply.apply(5.0, 3.0), Ok(15.0));
        assert_eq!(BinaryOperator::Divide.apply(6.0, 3.0), Ok(2.0));
        assert_eq!(BinaryOperator::Power.apply(5.0, 3.0), Ok(125.0));
        assert_eq!(
            BinaryOperator::Divide.apply(6.0, 0.0),
            Err(CalcError::DivideByZero)
        );
    }

    #[test]
    fn test_operator_symbols() {
        for op in BinaryOperator::ALL {
            assert_eq!(op.symbol().parse::<BinaryOperator>(), Ok(op));
        }
        assert_eq!("*".parse::<BinaryOperator>(), Ok(BinaryOperator::Multiply));
        assert_eq!("/".parse::<BinaryOperator>(), Ok(BinaryOperator::Divide));
        assert!("%".parse::<BinaryOperator>().is_err());
        assert_eq!("sqrt".parse::<UnaryOperator>(), Ok(UnaryOperator::SquareRoot));
        assert_eq!("!".parse::<UnaryOperator>(), Ok(UnaryOperator::Factorial));
    }

    #[test]
    fn test_unary_notation() {
        assert_eq!(UnaryOperator::SquareRoot.notation("4.0"), "√4.0");
        assert_eq!(UnaryOperator::Percentage.notation("150.0"), "150.0%");
        assert_eq!(UnaryOperator::Factorial.notation("5.0"), "5.0!");
    }

    #[test]
    fn test_unary_dispatch() {
        let results: Vec<_> = UnaryOperator::ALL
            .into_iter()
            .map(|op| op.apply(4.0))
            .collect();
        assert_eq!(results, [Ok(2.0), Ok(0.04), Ok(24.0)]);
        for op in UnaryOperator::ALL {
            assert_eq!(op.apply(-1.0).is_ok(), op == UnaryOperator::Percentage);
        }
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(CalcError::DivideByZero.to_string(), "Cannot divide by zero");
        assert_eq!(
            CalcError::NonIntegerOperand.to_string(),
            "Factorial only works with integers"
        );
        assert_eq!(
            CalcError::InvalidNumber("1.2.3".to_string()).to_string(),
            "Invalid number format: \"1.2.3\""
        );
    }
}
