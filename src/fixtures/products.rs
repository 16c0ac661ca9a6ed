//! Product Fixtures

use rust_decimal::{Decimal, prelude::ToPrimitive};
use rustc_hash::FxHashMap;
use rusty_money::{
    Money,
    iso::{Currency, EUR, GBP, USD},
};
use serde::Deserialize;

use crate::{fixtures::FixtureError, products::Product};

/// Wrapper for products in YAML
#[derive(Debug, Deserialize)]
pub struct ProductsFixture {
    /// Map of fixture id -> product fixture
    pub products: FxHashMap<String, ProductFixture>,
}

/// Product Fixture
#[derive(Debug, Deserialize)]
pub struct ProductFixture {
    /// Product title
    pub title: String,

    /// Product price (e.g., "353.88 USD")
    pub price: String,
}

impl TryFrom<ProductFixture> for Product<'_> {
    type Error = FixtureError;

    fn try_from(fixture: ProductFixture) -> Result<Self, Self::Error> {
        let (minor_units, currency) = parse_price(&fixture.price)?;

        Ok(Product {
            title: fixture.title,
            price: Money::from_minor(minor_units, currency),
        })
    }
}

/// Parse a price string (e.g., "353.88 USD") into minor units and currency
///
/// # Errors
///
/// Returns an error if the string is not in the format "AMOUNT CURRENCY",
/// if the amount cannot be parsed as a decimal, or if the currency code is
/// not recognized.
pub fn parse_price(raw: &str) -> Result<(i64, &'static Currency), FixtureError> {
    let (amount_str, currency_code) = raw.trim().split_once(' ').ok_or_else(|| {
        FixtureError::InvalidPrice(format!("Expected format 'AMOUNT CURRENCY', got: {raw}"))
    })?;

    let amount = amount_str
        .parse::<Decimal>()
        .map_err(|_err| FixtureError::InvalidPrice(raw.to_string()))?;

    let minor_units = amount
        .checked_mul(Decimal::ONE_HUNDRED)
        .and_then(|value| value.round_dp(0).to_i64())
        .ok_or_else(|| FixtureError::InvalidPrice(raw.to_string()))?;

    let currency = match currency_code {
        "GBP" => GBP,
        "USD" => USD,
        "EUR" => EUR,
        other => return Err(FixtureError::UnknownCurrency(other.to_string())),
    };

    Ok((minor_units, currency))
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn parses_a_two_decimal_price() -> TestResult {
        let (minor, currency) = parse_price("353.88 USD")?;

        assert_eq!(minor, 35_388);
        assert_eq!(currency, USD);

        Ok(())
    }

    #[test]
    fn parses_a_whole_number_price() -> TestResult {
        let (minor, currency) = parse_price("12 GBP")?;

        assert_eq!(minor, 1200);
        assert_eq!(currency, GBP);

        Ok(())
    }

    #[test]
    fn rejects_a_price_without_a_currency() {
        assert!(matches!(
            parse_price("353.88"),
            Err(FixtureError::InvalidPrice(_))
        ));
    }

    #[test]
    fn rejects_an_unknown_currency() {
        assert!(matches!(
            parse_price("10.00 XYZ"),
            Err(FixtureError::UnknownCurrency(_))
        ));
    }

    #[test]
    fn builds_a_product_from_a_fixture() -> TestResult {
        let fixture = ProductFixture {
            title: "Adidas running shoes - men".to_string(),
            price: "353.88 USD".to_string(),
        };

        let product: Product<'_> = fixture.try_into()?;

        assert_eq!(product.price, Money::from_minor(35_388, USD));

        Ok(())
    }
}
