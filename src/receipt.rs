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

//! Order receipts.
//!
//! A [`Receipt`] is a snapshot of a client's order: one line per ordered
//! product and the three totals. Money on the lines is rounded up to whole
//! cents for display only; totals come straight from [`Client`].

use crate::PricingError;
use crate::base::{ClientId, ProductName};
use crate::client::Client;
use crate::rounding;
use csv::Writer;
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;
use std::io::Write;

/// One ordered product on a receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReceiptLine {
    pub product: ProductName,
    pub quantity: i64,
    pub unit_cost: Decimal,
    /// Promotional per-item price, only present when a promotion is active.
    pub price_per_item: Option<Decimal>,
    pub price: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Receipt {
    client: ClientId,
    lines: Vec<ReceiptLine>,
    sum_of_orders: Decimal,
    price_with_basic_discount: Decimal,
    price_with_additional_discount: Decimal,
}

impl Receipt {
    /// Prices the client's current order.
    ///
    /// # Errors
    ///
    /// Propagates pricing errors from the client's products.
    pub fn for_client(client: &Client) -> Result<Self, PricingError> {
        let mut lines = Vec::new();
        for (product, quantity) in client.ordered_products() {
            let price_per_item = if product.promotion().is_active() {
                Some(rounding::round_up(product.calculated_price_per_item(quantity)?))
            } else {
                None
            };
            lines.push(ReceiptLine {
                product: product.name(),
                quantity,
                unit_cost: rounding::round_up(product.unit_cost()),
                price_per_item,
                price: rounding::round_up(product.calculated_price(quantity)?),
            });
        }

        Ok(Self {
            client: client.id(),
            lines,
            sum_of_orders: client.sum_of_orders()?,
            price_with_basic_discount: client.price_with_basic_discount()?,
            price_with_additional_discount: client.price_with_additional_discount()?,
        })
    }

    pub fn client(&self) -> ClientId {
        self.client
    }

    pub fn lines(&self) -> &[ReceiptLine] {
        &self.lines
    }

    pub fn sum_of_orders(&self) -> Decimal {
        self.sum_of_orders
    }

    pub fn price_with_basic_discount(&self) -> Decimal {
        self.price_with_basic_discount
    }

    pub fn price_with_additional_discount(&self) -> Decimal {
        self.price_with_additional_discount
    }

    /// Writes the order lines as CSV.
    ///
    /// # CSV Format
    ///
    /// Columns: `product, quantity, unit_cost, price_per_item, price`.
    /// `price_per_item` is empty for products without a promotion.
    ///
    /// ```csv
    /// product,quantity,unit_cost,price_per_item,price
    /// A,10,0.52,,9.36
    /// B,5,0.38,0.59,2.93
    /// ```
    ///
    /// # Errors
    ///
    /// Returns a CSV error if writing fails.
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<(), csv::Error> {
        let mut wtr = Writer::from_writer(writer);
        for line in &self.lines {
            wtr.serialize(line)?;
        }
        wtr.flush()?;
        Ok(())
    }
}

impl fmt::Display for ReceiptLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {{{}, {}, ", self.product, self.quantity, self.unit_cost)?;
        if let Some(price_per_item) = self.price_per_item {
            write!(f, "{price_per_item}, ")?;
        }
        write!(f, "{}}}", self.price)
    }
}

impl fmt::Display for Receipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }
        writeln!(f, "Total amount before discounts: EUR {}", self.sum_of_orders)?;
        writeln!(
            f,
            "Price with basic client discount: EUR {}",
            self.price_with_basic_discount
        )?;
        writeln!(
            f,
            "Price with additional client discount: EUR {}",
            self.price_with_additional_discount
        )
    }
}
