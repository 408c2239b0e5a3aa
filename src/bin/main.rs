// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2025 Daniel Negri
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

use beverage_pricing::{Catalog, ClientId, PricingError, ProductName, Receipt};
use clap::{Parser, ValueEnum};
use std::io::Write;
use std::process;
use tracing_subscriber::EnvFilter;

/// Beverage Pricing - Price an order for one of the distributor's clients
///
/// Places the given quantities of products A to D for a client and prints
/// the receipt with the order total and both discounted totals.
#[derive(Parser, Debug)]
#[command(name = "beverage-pricing")]
#[command(about = "Prices beverage orders with promotions and client discounts", long_about = None)]
struct Args {
    /// Client ID (1-5)
    #[arg(value_name = "CLIENT", value_parser = clap::value_parser!(u32).range(1..=5))]
    client: u32,

    /// Quantity of product A
    #[arg(value_name = "A", value_parser = clap::value_parser!(i64).range(0..))]
    quantity_a: i64,

    /// Quantity of product B
    #[arg(value_name = "B", value_parser = clap::value_parser!(i64).range(0..))]
    quantity_b: i64,

    /// Quantity of product C
    #[arg(value_name = "C", value_parser = clap::value_parser!(i64).range(0..))]
    quantity_c: i64,

    /// Quantity of product D
    #[arg(value_name = "D", value_parser = clap::value_parser!(i64).range(0..))]
    quantity_d: i64,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Human-readable receipt with totals
    Text,
    /// Order lines as CSV
    Csv,
}

fn main() {
    init_tracing();

    let args = Args::parse();

    let receipt = match price_order(&args) {
        Ok(receipt) => receipt,
        Err(e) => {
            eprintln!("Error pricing order: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = write_receipt(&receipt, args.format, std::io::stdout()) {
        eprintln!("Error writing output: {}", e);
        process::exit(1);
    }
}

/// Logs go to stderr so they never mix with the receipt. Level comes from
/// `RUST_LOG`, defaulting to `warn`.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Places the order from the command line on the seeded catalog.
fn price_order(args: &Args) -> Result<Receipt, PricingError> {
    let mut catalog = Catalog::seeded()?;
    let quantities = [
        (ProductName('A'), args.quantity_a),
        (ProductName('B'), args.quantity_b),
        (ProductName('C'), args.quantity_c),
        (ProductName('D'), args.quantity_d),
    ];
    let client = catalog.place_order(ClientId(args.client), &quantities)?;
    Receipt::for_client(client)
}

/// Writes the receipt in the requested format.
///
/// # Errors
///
/// Returns an error if writing to `writer` fails.
fn write_receipt<W: Write>(
    receipt: &Receipt,
    format: OutputFormat,
    mut writer: W,
) -> Result<(), Box<dyn std::error::Error>> {
    match format {
        OutputFormat::Text => write!(writer, "{receipt}")?,
        OutputFormat::Csv => receipt.write_csv(writer)?,
    }
    Ok(())
}
