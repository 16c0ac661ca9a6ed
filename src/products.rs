//! Products

use rusty_money::{Money, iso::Currency};

/// A product offered for sale.
///
/// Products are plain values: two products with the same title and price are
/// the same product as far as cart lookups are concerned.
#[derive(Debug, Clone, PartialEq)]
pub struct Product<'a> {
    /// Product title
    pub title: String,

    /// Unit price
    pub price: Money<'a, Currency>,
}

impl Product<'_> {
    /// Creates a new product priced in minor units of the given currency.
    pub fn from_minor(title: impl Into<String>, minor: i64, currency: &'static Currency) -> Self {
        Product {
            title: title.into(),
            price: Money::from_minor(minor, currency),
        }
    }
}
