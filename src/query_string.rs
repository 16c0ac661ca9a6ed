//! Query Strings
//!
//! A standalone codec between a flat key/value mapping and a
//! `key=value&key=value` string, bundled alongside the cart; the cart does
//! not use it.

use thiserror::Error;

/// Errors raised while decoding a query string.
#[derive(Debug, Error, PartialEq)]
pub enum QueryStringError {
    /// A `&`-separated segment had no `=` separator.
    #[error("malformed pair {0:?}: expected key=value")]
    MalformedPair(String),
}

/// A value on the right-hand side of a pair: a single scalar or a flat list.
///
/// Nested mappings are not representable, so encoding can never meet one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// A single textual value.
    Scalar(String),

    /// A flat list, encoded comma-separated.
    List(Vec<String>),
}

/// Encodes a flat mapping as `key=value` pairs joined by `&`.
///
/// List values are joined by commas, so `("abilities", ["Js", "TDD"])`
/// encodes as `abilities=Js,TDD`.
pub fn encode(pairs: &[(String, Value)]) -> String {
    pairs
        .iter()
        .map(|(key, value)| match value {
            Value::Scalar(scalar) => format!("{key}={scalar}"),
            Value::List(list) => format!("{key}={}", list.join(",")),
        })
        .collect::<Vec<_>>()
        .join("&")
}

/// Decodes `key=value` pairs joined by `&`; a comma-containing value decodes
/// as a list.
///
/// # Errors
///
/// Returns [`QueryStringError::MalformedPair`] for a segment without `=`.
pub fn parse(input: &str) -> Result<Vec<(String, Value)>, QueryStringError> {
    input
        .split('&')
        .map(|pair| {
            let (key, value) = pair
                .split_once('=')
                .ok_or_else(|| QueryStringError::MalformedPair(pair.to_string()))?;

            let value = if value.contains(',') {
                Value::List(value.split(',').map(str::to_string).collect())
            } else {
                Value::Scalar(value.to_string())
            };

            Ok((key.to_string(), value))
        })
        .collect()
}
