//! Pricing

use rusty_money::{Money, MoneyError, iso::Currency};
use thiserror::Error;

use crate::{conditions::ConditionError, items::LineItem};

/// Errors that can occur while totalling line items.
#[derive(Debug, Error, PartialEq)]
pub enum TotalPriceError {
    /// No items were provided, so currency could not be determined.
    #[error("no items provided; cannot determine currency")]
    NoItems,

    /// A condition failed validation or overflowed while evaluating.
    #[error(transparent)]
    Condition(#[from] ConditionError),

    /// Wrapped money arithmetic or currency mismatch error.
    #[error(transparent)]
    Money(#[from] MoneyError),
}

/// Calculates the combined payable price of a list of line items.
///
/// # Errors
///
/// - [`TotalPriceError::NoItems`]: no items were provided, so currency could
///   not be determined.
/// - [`TotalPriceError::Condition`]: a line item's conditions failed to
///   evaluate.
/// - [`TotalPriceError::Money`]: wrapped money arithmetic or currency
///   mismatch error.
pub fn total_price<'a>(items: &[LineItem<'a>]) -> Result<Money<'a, Currency>, TotalPriceError> {
    let first = items.first().ok_or(TotalPriceError::NoItems)?;

    let mut total = Money::from_minor(0, first.product().price.currency());

    for item in items {
        total = total.add(item.payable()?)?;
    }

    Ok(total)
}

#[cfg(test)]
mod tests {
    use rusty_money::iso::USD;
    use testresult::TestResult;

    use crate::{conditions::Condition, products::Product};

    use super::*;

    #[test]
    fn sums_payable_prices_across_items() -> TestResult {
        let items = [
            LineItem::new(
                Product::from_minor("Adidas running shoes - men", 35_388, USD),
                2,
            )?,
            LineItem::new(
                Product::from_minor("Adidas running shoes - woman", 41_872, USD),
                3,
            )?,
        ];

        assert_eq!(total_price(&items)?, Money::from_minor(196_392, USD));

        Ok(())
    }

    #[test]
    fn uses_discounted_line_prices() -> TestResult {
        let items = [LineItem::with_condition(
            Product::from_minor("Adidas running shoes - men", 35_388, USD),
            4,
            Condition::QuantityTier { size: 2 },
        )?];

        assert_eq!(total_price(&items)?, Money::from_minor(70_776, USD));

        Ok(())
    }

    #[test]
    fn no_items_is_an_error() {
        let items: [LineItem<'static>; 0] = [];

        assert!(matches!(total_price(&items), Err(TotalPriceError::NoItems)));
    }

    #[test]
    fn condition_failures_bubble_up() -> TestResult {
        let items = [LineItem::with_condition(
            Product::from_minor("Adidas running shoes - men", 35_388, USD),
            1,
            Condition::QuantityTier { size: 3 },
        )?];

        assert!(matches!(
            total_price(&items),
            Err(TotalPriceError::Condition(_))
        ));

        Ok(())
    }
}
