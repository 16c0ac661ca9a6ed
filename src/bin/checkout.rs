//! Checkout demo
//!
//! Loads a product and cart fixture set, prints the priced line items and
//! the formatted total, then checks the cart out.

use anyhow::Result;
use clap::Parser;
use tabled::{Table, Tabled};

use till::fixtures::Fixture;

/// Arguments for the checkout demo
#[derive(Debug, Parser)]
struct Args {
    /// Fixture set to use for products and the cart
    #[clap(short, long, default_value = "shoes")]
    fixture: String,

    /// Base path for fixture files
    #[clap(short, long, default_value = "./fixtures")]
    base_path: String,
}

/// One printed row of the cart table
#[derive(Tabled)]
struct Row {
    #[tabled(rename = "Product")]
    title: String,

    #[tabled(rename = "Qty")]
    quantity: u32,

    #[tabled(rename = "Unit")]
    unit: String,

    #[tabled(rename = "Payable")]
    payable: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut fixture = Fixture::with_base_path(&args.base_path);
    fixture.load_products(&args.fixture)?;

    let mut cart = fixture.cart(&args.fixture)?;
    let summary = cart.summary()?;

    let rows = summary
        .items()
        .iter()
        .map(|item| {
            Ok(Row {
                title: item.product().title.clone(),
                quantity: item.quantity(),
                unit: item.product().price.to_string(),
                payable: item.payable()?.to_string(),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    println!("{}", Table::new(rows));
    println!("Total: {}", summary.formatted());

    let receipt = cart.checkout()?;
    println!(
        "Checked out {} line(s) for {}; the cart is now empty.",
        receipt.items().len(),
        receipt.total()
    );

    Ok(())
}
