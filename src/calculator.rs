//! Calculator
//!
//! A standalone integer-sum helper bundled alongside the cart; the cart does
//! not use it.

use thiserror::Error;

/// Errors raised while summing textual operands.
#[derive(Debug, Error, PartialEq)]
pub enum CalculatorError {
    /// An operand did not parse as an integer.
    #[error("please check your input: {0:?} is not an integer")]
    NotANumber(String),
}

/// Adds two integers provided as text.
///
/// # Errors
///
/// Returns [`CalculatorError::NotANumber`] when either operand fails to
/// parse as an integer.
pub fn sum(first: &str, second: &str) -> Result<i64, CalculatorError> {
    Ok(parse_operand(first)? + parse_operand(second)?)
}

fn parse_operand(raw: &str) -> Result<i64, CalculatorError> {
    raw.trim()
        .parse()
        .map_err(|_err| CalculatorError::NotANumber(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn sums_two_integers() -> TestResult {
        assert_eq!(sum("2", "3")?, 5);

        Ok(())
    }

    #[test]
    fn accepts_surrounding_whitespace_and_signs() -> TestResult {
        assert_eq!(sum(" 40 ", "-2")?, 38);

        Ok(())
    }

    #[test]
    fn rejects_a_non_numeric_operand() {
        assert_eq!(
            sum("2", "three"),
            Err(CalculatorError::NotANumber("three".to_string()))
        );
    }

    #[test]
    fn rejects_an_empty_operand() {
        assert!(matches!(sum("", "3"), Err(CalculatorError::NotANumber(_))));
    }
}
