//! Line Items

use rusty_money::{Money, iso::Currency};
use smallvec::SmallVec;
use thiserror::Error;

use crate::{
    conditions::{Condition, ConditionError, evaluate, full_price},
    products::Product,
};

/// Errors raised when constructing a line item.
#[derive(Debug, Error, PartialEq)]
pub enum LineItemError {
    /// Quantity must be at least one unit.
    #[error("line item quantity must be at least 1")]
    ZeroQuantity,
}

/// One product's quantity in a cart, plus the discount conditions attached
/// to it.
#[derive(Debug, Clone, PartialEq)]
pub struct LineItem<'a> {
    product: Product<'a>,
    quantity: u32,
    conditions: SmallVec<[Condition; 2]>,
}

impl<'a> LineItem<'a> {
    /// Creates a line item with no conditions attached.
    ///
    /// # Errors
    ///
    /// Returns [`LineItemError::ZeroQuantity`] when `quantity` is zero.
    pub fn new(product: Product<'a>, quantity: u32) -> Result<Self, LineItemError> {
        Self::with_conditions(product, quantity, [])
    }

    /// Creates a line item with a single condition attached.
    ///
    /// # Errors
    ///
    /// Returns [`LineItemError::ZeroQuantity`] when `quantity` is zero.
    pub fn with_condition(
        product: Product<'a>,
        quantity: u32,
        condition: Condition,
    ) -> Result<Self, LineItemError> {
        Self::with_conditions(product, quantity, [condition])
    }

    /// Creates a line item with the given conditions attached.
    ///
    /// # Errors
    ///
    /// Returns [`LineItemError::ZeroQuantity`] when `quantity` is zero.
    pub fn with_conditions(
        product: Product<'a>,
        quantity: u32,
        conditions: impl IntoIterator<Item = Condition>,
    ) -> Result<Self, LineItemError> {
        if quantity == 0 {
            return Err(LineItemError::ZeroQuantity);
        }

        Ok(Self {
            product,
            quantity,
            conditions: conditions.into_iter().collect(),
        })
    }

    /// Returns the product of the line item
    pub fn product(&self) -> &Product<'a> {
        &self.product
    }

    /// Returns the quantity of the line item
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Returns the conditions attached to the line item
    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    /// Calculates the price payable for this line.
    ///
    /// Every attached condition is evaluated independently and the cheapest
    /// result wins; with no conditions the undiscounted price is returned.
    /// A condition that does not apply contributes its full-price candidate,
    /// so attaching conditions can never raise the price.
    ///
    /// # Errors
    ///
    /// Returns a [`ConditionError`] if a condition fails validation or an
    /// amount overflows minor unit arithmetic.
    pub fn payable(&self) -> Result<Money<'a, Currency>, ConditionError> {
        let mut best = full_price(&self.product.price, self.quantity)?;

        for condition in &self.conditions {
            let candidate = evaluate(condition, &self.product.price, self.quantity)?;

            if candidate.to_minor_units() < best.to_minor_units() {
                best = candidate;
            }
        }

        Ok(best)
    }
}
