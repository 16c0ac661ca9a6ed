//! Receipts

use rusty_money::{Money, iso::Currency};

use crate::items::LineItem;

/// Read-only snapshot of a cart: the total, its formatted rendering and the
/// line items it was computed from.
#[derive(Debug, Clone)]
pub struct Summary<'a> {
    total: Money<'a, Currency>,
    formatted: String,
    items: Vec<LineItem<'a>>,
}

impl<'a> Summary<'a> {
    /// Creates a summary for the given total and items.
    pub fn new(total: Money<'a, Currency>, items: Vec<LineItem<'a>>) -> Self {
        Self {
            formatted: total.to_string(),
            total,
            items,
        }
    }

    /// Total payable across all items.
    pub fn total(&self) -> Money<'a, Currency> {
        self.total
    }

    /// The total rendered in the currency's locale format.
    pub fn formatted(&self) -> &str {
        &self.formatted
    }

    /// The line items the total was computed from.
    pub fn items(&self) -> &[LineItem<'a>] {
        &self.items
    }
}

/// Final payload of a checked-out cart.
#[derive(Debug, Clone)]
pub struct Receipt<'a> {
    total: Money<'a, Currency>,
    items: Vec<LineItem<'a>>,
}

impl<'a> Receipt<'a> {
    /// Creates a receipt for the given total and items.
    pub fn new(total: Money<'a, Currency>, items: Vec<LineItem<'a>>) -> Self {
        Self { total, items }
    }

    /// Total paid across all items.
    pub fn total(&self) -> Money<'a, Currency> {
        self.total
    }

    /// The line items that were checked out.
    pub fn items(&self) -> &[LineItem<'a>] {
        &self.items
    }
}
