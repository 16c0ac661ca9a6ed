//! Till
//!
//! Till is a shopping-cart pricing engine. A cart holds line items, each a
//! product, a quantity and any number of discount conditions, and prices
//! every line at the cheapest of its attached conditions using exact
//! minor-unit arithmetic.

pub mod calculator;
pub mod cart;
pub mod conditions;
pub mod fixtures;
pub mod items;
pub mod pricing;
pub mod products;
pub mod query_string;
pub mod receipt;
