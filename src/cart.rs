//! Cart

use rusty_money::{Money, iso::Currency};
use thiserror::Error;

use crate::{
    items::LineItem,
    pricing::{TotalPriceError, total_price},
    products::Product,
    receipt::{Receipt, Summary},
};

/// Errors related to cart mutation.
#[derive(Debug, Error, PartialEq)]
pub enum CartError {
    /// An item's currency differs from the cart currency (item currency, cart currency).
    #[error("item has currency {0}, but cart has currency {1}")]
    CurrencyMismatch(&'static str, &'static str),
}

/// A mutable, ordered collection of line items with cart-level pricing.
///
/// The cart holds at most one line item per distinct product: adding a
/// product that is already present replaces the earlier line outright.
#[derive(Debug)]
pub struct Cart<'a> {
    items: Vec<LineItem<'a>>,
    currency: &'static Currency,
}

impl<'a> Cart<'a> {
    /// Creates an empty cart priced in the given currency.
    pub fn new(currency: &'static Currency) -> Self {
        Cart {
            items: Vec::new(),
            currency,
        }
    }

    /// Adds a line item, replacing any existing line for the same product.
    ///
    /// Replacement is wholesale: the quantity of an earlier add is discarded,
    /// never merged into the new line. The new line is appended at the end.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::CurrencyMismatch`] if the item is priced in a
    /// currency other than the cart's.
    pub fn add(&mut self, item: LineItem<'a>) -> Result<(), CartError> {
        let item_currency = item.product().price.currency();

        if item_currency != self.currency {
            return Err(CartError::CurrencyMismatch(
                item_currency.iso_alpha_code,
                self.currency.iso_alpha_code,
            ));
        }

        self.items
            .retain(|existing| existing.product() != item.product());
        self.items.push(item);

        Ok(())
    }

    /// Removes the line item matching the given product, if present.
    ///
    /// Matching is structural; removing an absent product does nothing.
    pub fn remove(&mut self, product: &Product<'a>) {
        self.items.retain(|item| item.product() != product);
    }

    /// Calculates the total payable for the cart.
    ///
    /// # Errors
    ///
    /// Returns a [`TotalPriceError`] if a line item's conditions fail to
    /// evaluate or money arithmetic fails.
    pub fn total(&self) -> Result<Money<'a, Currency>, TotalPriceError> {
        if self.is_empty() {
            return Ok(Money::from_minor(0, self.currency));
        }

        total_price(&self.items)
    }

    /// Returns a read-only snapshot of the cart: total, formatted total and
    /// line items. The cart itself is left untouched.
    ///
    /// # Errors
    ///
    /// Returns a [`TotalPriceError`] if the total cannot be computed.
    pub fn summary(&self) -> Result<Summary<'a>, TotalPriceError> {
        Ok(Summary::new(self.total()?, self.items.clone()))
    }

    /// Closes out the cart: returns the total and line items as they stood
    /// before the call, then leaves the cart empty.
    ///
    /// The total is computed before any state changes, so a failure leaves
    /// the cart exactly as it was and a caller can never observe a partially
    /// cleared cart.
    ///
    /// # Errors
    ///
    /// Returns a [`TotalPriceError`] if the total cannot be computed.
    pub fn checkout(&mut self) -> Result<Receipt<'a>, TotalPriceError> {
        let total = self.total()?;
        let items = std::mem::take(&mut self.items);

        Ok(Receipt::new(total, items))
    }

    /// Returns the line items currently in the cart, in add order.
    pub fn items(&self) -> &[LineItem<'a>] {
        &self.items
    }

    /// Get the number of line items in the cart.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get the currency of the cart.
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }
}
