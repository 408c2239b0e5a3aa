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

//! Client discounting.
//!
//! A client's order total is the sum of its ordered products' prices. Two
//! progressively discounted totals are derived from it:
//!
//! 1. the basic discount, applied to every order,
//! 2. the additional discount, picked by the total number of ordered units.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use beverage_pricing::{Client, ClientId, Markup, Product, ProductName};
//!
//! let mut client = Client::new(ClientId(1), 20, 0, 0).unwrap();
//! let markup = Markup::FixedAmountPerUnit(dec!(1));
//! let product = Product::new(ProductName('A'), dec!(1), markup).unwrap();
//! client.add_ordered_product(product, 1).unwrap();
//! assert_eq!(client.sum_of_orders().unwrap(), dec!(2.00));
//! assert_eq!(client.price_with_basic_discount().unwrap(), dec!(1.60));
//! ```

use crate::PricingError;
use crate::base::{ClientId, ProductName};
use crate::product::Product;
use crate::rounding;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, trace};

/// Volume tier of an order, chosen by total ordered units.
///
/// Lower bounds are inclusive: exactly 10 000 units is [`Above10k`],
/// exactly 30 000 units is [`Above30k`].
///
/// [`Above10k`]: DiscountTier::Above10k
/// [`Above30k`]: DiscountTier::Above30k
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiscountTier {
    Basic,
    Above10k,
    Above30k,
}

impl DiscountTier {
    pub const ABOVE_10K_UNITS: i64 = 10_000;
    pub const ABOVE_30K_UNITS: i64 = 30_000;

    pub fn for_units(total_units: i64) -> Self {
        if total_units >= Self::ABOVE_30K_UNITS {
            Self::Above30k
        } else if total_units >= Self::ABOVE_10K_UNITS {
            Self::Above10k
        } else {
            Self::Basic
        }
    }
}

#[derive(Debug, Clone)]
struct OrderLine {
    product: Product,
    quantity: i64,
}

/// A client with its discount rates and current order.
///
/// Holds no internal synchronization; mutation goes through `&mut self`.
#[derive(Debug, Clone)]
pub struct Client {
    id: ClientId,
    basic_discount_percent: u32,
    above_10k_percent: u32,
    above_30k_percent: u32,
    /// Ordered products keyed by name, so iteration is name-ordered.
    ordered_products: BTreeMap<ProductName, OrderLine>,
}

impl Client {
    /// Creates a client with an empty order.
    ///
    /// # Errors
    ///
    /// [`PricingError::InvalidPercent`] if any rate is negative or
    /// `above_30k_percent < above_10k_percent`.
    pub fn new(
        id: ClientId,
        basic_discount_percent: i32,
        above_10k_percent: i32,
        above_30k_percent: i32,
    ) -> Result<Self, PricingError> {
        let basic_discount_percent = non_negative_percent(basic_discount_percent)?;
        let above_10k_percent = non_negative_percent(above_10k_percent)?;
        let above_30k_percent = non_negative_percent(above_30k_percent)?;
        if above_30k_percent < above_10k_percent {
            return Err(PricingError::InvalidPercent);
        }
        Ok(Self {
            id,
            basic_discount_percent,
            above_10k_percent,
            above_30k_percent,
            ordered_products: BTreeMap::new(),
        })
    }

    pub fn id(&self) -> ClientId {
        self.id
    }

    pub fn basic_discount_percent(&self) -> u32 {
        self.basic_discount_percent
    }

    pub fn above_10k_percent(&self) -> u32 {
        self.above_10k_percent
    }

    pub fn above_30k_percent(&self) -> u32 {
        self.above_30k_percent
    }

    /// # Errors
    ///
    /// [`PricingError::InvalidPercent`] if `percent` is negative.
    pub fn set_basic_discount_percent(&mut self, percent: i32) -> Result<(), PricingError> {
        self.basic_discount_percent = non_negative_percent(percent)?;
        Ok(())
    }

    /// # Errors
    ///
    /// [`PricingError::InvalidPercent`] if `percent` is negative or above
    /// the 30k rate.
    pub fn set_above_10k_percent(&mut self, percent: i32) -> Result<(), PricingError> {
        let percent = non_negative_percent(percent)?;
        if percent > self.above_30k_percent {
            return Err(PricingError::InvalidPercent);
        }
        self.above_10k_percent = percent;
        Ok(())
    }

    /// # Errors
    ///
    /// [`PricingError::InvalidPercent`] if `percent` is negative or below
    /// the 10k rate.
    pub fn set_above_30k_percent(&mut self, percent: i32) -> Result<(), PricingError> {
        let percent = non_negative_percent(percent)?;
        if percent < self.above_10k_percent {
            return Err(PricingError::InvalidPercent);
        }
        self.above_30k_percent = percent;
        Ok(())
    }

    /// Ordered products with their quantities, in product name order.
    pub fn ordered_products(&self) -> impl Iterator<Item = (&Product, i64)> {
        self.ordered_products
            .values()
            .map(|line| (&line.product, line.quantity))
    }

    /// Quantity ordered for `name`, if any.
    pub fn quantity_of(&self, name: ProductName) -> Option<i64> {
        self.ordered_products.get(&name).map(|line| line.quantity)
    }

    /// Adds `product` to the order, replacing the quantity if it is already
    /// there. Quantities never accumulate.
    ///
    /// # Errors
    ///
    /// [`PricingError::InvalidItemCount`] if `quantity` is not positive.
    pub fn add_ordered_product(
        &mut self,
        product: Product,
        quantity: i64,
    ) -> Result<(), PricingError> {
        if quantity <= 0 {
            return Err(PricingError::InvalidItemCount);
        }
        debug!(client = %self.id, product = %product.name(), quantity, "ordered product");
        self.ordered_products
            .insert(product.name(), OrderLine { product, quantity });
        Ok(())
    }

    /// Drops `name` from the order, returning the quantity it had.
    pub fn remove_ordered_product(&mut self, name: ProductName) -> Option<i64> {
        let line = self.ordered_products.remove(&name)?;
        debug!(client = %self.id, product = %name, "removed ordered product");
        Some(line.quantity)
    }

    /// Sum of all ordered quantities, saturating at `i64::MAX`.
    pub fn total_units(&self) -> i64 {
        self.ordered_products
            .values()
            .fold(0i64, |units, line| units.saturating_add(line.quantity))
    }

    pub fn discount_tier(&self) -> DiscountTier {
        DiscountTier::for_units(self.total_units())
    }

    /// Order total before discounts, rounded up to whole cents.
    ///
    /// # Errors
    ///
    /// [`PricingError::AmountOverflow`] if a line price or the total does
    /// not fit a [`Decimal`].
    pub fn sum_of_orders(&self) -> Result<Decimal, PricingError> {
        let mut total = Decimal::ZERO;
        for line in self.ordered_products.values() {
            let price = line.product.calculated_price(line.quantity)?;
            total = total
                .checked_add(price)
                .ok_or(PricingError::AmountOverflow)?;
        }
        let total = rounding::round_up(total);
        trace!(client = %self.id, %total, "sum of orders");
        Ok(total)
    }

    /// Order total less the basic discount.
    ///
    /// The discount amount is rounded up to whole cents before it is
    /// subtracted.
    ///
    /// # Errors
    ///
    /// Same as [`Client::sum_of_orders`].
    pub fn price_with_basic_discount(&self) -> Result<Decimal, PricingError> {
        let total = self.sum_of_orders()?;
        rounding::less_percent_rounded_up(total, self.basic_discount_percent)
            .ok_or(PricingError::AmountOverflow)
    }

    /// Basic-discounted total less the volume tier discount.
    ///
    /// | Total units | Rate applied |
    /// |-------------|--------------|
    /// | `< 10 000` | none |
    /// | `10 000 ..< 30 000` | `above_10k_percent` |
    /// | `>= 30 000` | `above_30k_percent` |
    ///
    /// # Errors
    ///
    /// Same as [`Client::sum_of_orders`].
    pub fn price_with_additional_discount(&self) -> Result<Decimal, PricingError> {
        let price = self.price_with_basic_discount()?;
        let percent = match self.discount_tier() {
            DiscountTier::Basic => return Ok(price),
            DiscountTier::Above10k => self.above_10k_percent,
            DiscountTier::Above30k => self.above_30k_percent,
        };
        rounding::less_percent_rounded_up(price, percent).ok_or(PricingError::AmountOverflow)
    }
}

fn non_negative_percent(percent: i32) -> Result<u32, PricingError> {
    u32::try_from(percent).map_err(|_| PricingError::InvalidPercent)
}
