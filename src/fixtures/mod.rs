//! Fixtures
//!
//! Named fixture sets for products and carts, loaded from YAML files under a
//! base path (`./fixtures` by default).

use std::{fs, path::PathBuf};

use rustc_hash::FxHashMap;
use rusty_money::iso::Currency;
use thiserror::Error;

use crate::{
    cart::{Cart, CartError},
    conditions::ConditionError,
    fixtures::{carts::CartFixture, products::ProductsFixture},
    items::{LineItem, LineItemError},
    products::Product,
};

pub mod carts;
pub mod products;

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid price format
    #[error("Invalid price format: {0}")]
    InvalidPrice(String),

    /// Unknown currency code
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),

    /// Product referenced by a cart fixture was not loaded
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Currency mismatch between products
    #[error("Currency mismatch: expected {0}, found {1}")]
    CurrencyMismatch(String, String),

    /// No products loaded yet
    #[error("No products loaded yet; currency unknown")]
    NoCurrency,

    /// A condition in a cart fixture failed validation
    #[error("Invalid condition: {0}")]
    InvalidCondition(#[from] ConditionError),

    /// A line item in a cart fixture failed validation
    #[error("Invalid line item: {0}")]
    InvalidLineItem(#[from] LineItemError),

    /// Cart assembly error
    #[error("Failed to assemble cart: {0}")]
    Cart(#[from] CartError),
}

/// Loads named product and cart fixture sets from YAML files.
#[derive(Debug)]
pub struct Fixture<'a> {
    /// Base path for fixture files
    base_path: PathBuf,

    /// Fixture id -> product mappings for cart assembly
    products: FxHashMap<String, Product<'a>>,

    /// Currency for the fixture set
    currency: Option<&'static Currency>,
}

impl<'a> Fixture<'a> {
    /// Create a new empty fixture with the default base path
    pub fn new() -> Self {
        Self::with_base_path("./fixtures")
    }

    /// Create a new empty fixture with a custom base path
    pub fn with_base_path(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
            products: FxHashMap::default(),
            currency: None,
        }
    }

    /// Load products from a YAML fixture file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if a product
    /// is priced in a different currency than the ones already loaded.
    pub fn load_products(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let file_path = self.base_path.join("products").join(format!("{name}.yml"));
        let contents = fs::read_to_string(&file_path)?;
        let fixture: ProductsFixture = serde_norway::from_str(&contents)?;

        for (key, product_fixture) in fixture.products {
            // Parse to get the 'static currency first, then build the product.
            let (_minor_units, currency) = products::parse_price(&product_fixture.price)?;

            if let Some(existing) = self.currency {
                if existing != currency {
                    return Err(FixtureError::CurrencyMismatch(
                        existing.iso_alpha_code.to_string(),
                        currency.iso_alpha_code.to_string(),
                    ));
                }
            } else {
                self.currency = Some(currency);
            }

            let product: Product<'a> = product_fixture.try_into()?;

            self.products.insert(key, product);
        }

        Ok(self)
    }

    /// Assemble a cart from a YAML cart fixture
    ///
    /// Products referenced by the cart must have been loaded first.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, if a referenced
    /// product was not loaded, or if an item or condition fails validation.
    pub fn cart(&self, name: &str) -> Result<Cart<'a>, FixtureError> {
        let file_path = self.base_path.join("carts").join(format!("{name}.yml"));
        let contents = fs::read_to_string(&file_path)?;
        let fixture: CartFixture = serde_norway::from_str(&contents)?;

        let currency = self.currency.ok_or(FixtureError::NoCurrency)?;
        let mut cart = Cart::new(currency);

        for item_fixture in fixture.items {
            let product = self
                .products
                .get(&item_fixture.product)
                .ok_or_else(|| FixtureError::ProductNotFound(item_fixture.product.clone()))?;

            let conditions = item_fixture
                .conditions
                .iter()
                .map(carts::ConditionFixture::to_condition)
                .collect::<Result<Vec<_>, _>>()?;

            let item = LineItem::with_conditions(product.clone(), item_fixture.quantity, conditions)?;

            cart.add(item)?;
        }

        Ok(cart)
    }

    /// Look up a loaded product by fixture id.
    pub fn product(&self, key: &str) -> Option<&Product<'a>> {
        self.products.get(key)
    }

    /// The products loaded so far, keyed by fixture id.
    pub fn products(&self) -> &FxHashMap<String, Product<'a>> {
        &self.products
    }
}

impl Default for Fixture<'_> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn cart_before_products_reports_missing_currency() {
        let fixture = Fixture::new();

        assert!(matches!(fixture.cart("shoes"), Err(FixtureError::NoCurrency)));
    }

    #[test]
    fn loads_the_shoes_product_set() -> TestResult {
        let mut fixture = Fixture::new();
        fixture.load_products("shoes")?;

        assert_eq!(fixture.products().len(), 2);
        assert!(fixture.product("running_shoes_men").is_some());

        Ok(())
    }
}
