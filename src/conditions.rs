//! Conditions
//!
//! Discount conditions that can be attached to a cart line item, and the
//! evaluation of a single condition against a unit price and quantity.

use rust_decimal::{Decimal, RoundingStrategy, prelude::ToPrimitive};
use rusty_money::{Money, iso::Currency};
use thiserror::Error;

/// Errors specific to condition validation and evaluation.
#[derive(Debug, Error, PartialEq)]
pub enum ConditionError {
    /// Percentage lies outside the 0..=100 range.
    #[error("percentage must lie in 0..=100, got {0}")]
    InvalidPercent(u8),

    /// Tier size is zero or odd.
    #[error("tier size must be a positive even number of units, got {0}")]
    InvalidTierSize(u32),

    /// An intermediate amount could not be represented in minor units.
    #[error("amount overflowed minor unit arithmetic")]
    AmountOverflow,
}

/// A single discount rule attached to a line item.
///
/// Conditions never stack: when a line item carries several, each is
/// evaluated on its own and the cheapest result wins.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Condition {
    /// Percentage off the whole line once the quantity exceeds a minimum.
    Percentage {
        /// Percentage taken off the undiscounted line price, 0..=100.
        percent: u8,

        /// The discount applies only when the quantity is strictly greater
        /// than this.
        minimum: u32,
    },

    /// Pay for half the units in every complete group of `size` units.
    QuantityTier {
        /// Group size; positive and even.
        size: u32,
    },
}

impl Condition {
    /// Checks the condition's parameters without evaluating it.
    ///
    /// # Errors
    ///
    /// - [`ConditionError::InvalidPercent`]: the percentage exceeds 100.
    /// - [`ConditionError::InvalidTierSize`]: the tier size is zero or odd.
    pub fn validate(&self) -> Result<(), ConditionError> {
        match *self {
            Condition::Percentage { percent, .. } if percent > 100 => {
                Err(ConditionError::InvalidPercent(percent))
            }
            Condition::QuantityTier { size } if size == 0 || size % 2 != 0 => {
                Err(ConditionError::InvalidTierSize(size))
            }
            Condition::Percentage { .. } | Condition::QuantityTier { .. } => Ok(()),
        }
    }
}

/// Calculates the price payable for `quantity` units under one condition.
///
/// A condition that does not apply at this quantity still yields the full,
/// undiscounted price, so it remains a candidate when a line item selects
/// the cheapest of several conditions.
///
/// # Errors
///
/// - [`ConditionError::InvalidPercent`] / [`ConditionError::InvalidTierSize`]:
///   the condition's parameters fail validation.
/// - [`ConditionError::AmountOverflow`]: the amount cannot be represented in
///   minor units.
pub fn evaluate<'a>(
    condition: &Condition,
    unit_price: &Money<'a, Currency>,
    quantity: u32,
) -> Result<Money<'a, Currency>, ConditionError> {
    condition.validate()?;

    match *condition {
        Condition::Percentage { percent, minimum } => {
            if quantity > minimum {
                percentage_price(unit_price, quantity, percent)
            } else {
                full_price(unit_price, quantity)
            }
        }
        Condition::QuantityTier { size } => {
            let groups = quantity / size;
            let paid_units = groups * (size / 2) + quantity % size;

            full_price(unit_price, paid_units)
        }
    }
}

/// Calculates the undiscounted price for a quantity of units.
///
/// # Errors
///
/// Returns [`ConditionError::AmountOverflow`] if the line price exceeds the
/// minor unit range.
pub fn full_price<'a>(
    unit_price: &Money<'a, Currency>,
    quantity: u32,
) -> Result<Money<'a, Currency>, ConditionError> {
    let minor = unit_price
        .to_minor_units()
        .checked_mul(i64::from(quantity))
        .ok_or(ConditionError::AmountOverflow)?;

    Ok(Money::from_minor(minor, unit_price.currency()))
}

/// Price the whole line with a percentage taken off, rounding the payable
/// amount half away from zero at the single point it becomes minor units.
fn percentage_price<'a>(
    unit_price: &Money<'a, Currency>,
    quantity: u32,
    percent: u8,
) -> Result<Money<'a, Currency>, ConditionError> {
    let line_minor = full_price(unit_price, quantity)?.to_minor_units();

    // 30% off means the customer pays 0.70 of the line price.
    let payable_fraction = Decimal::new(i64::from(100 - percent), 2);

    let payable = Decimal::from(line_minor)
        .checked_mul(payable_fraction)
        .ok_or(ConditionError::AmountOverflow)?
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .ok_or(ConditionError::AmountOverflow)?;

    Ok(Money::from_minor(payable, unit_price.currency()))
}
