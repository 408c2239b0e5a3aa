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

//! Product pricing.
//!
//! A product's per-item price is its unit cost plus markup, reduced by at
//! most one active promotion. Promotions average over the whole ordered
//! quantity: with "buy 2 get 1 free" ten items cost the same as seven.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use beverage_pricing::{Markup, Product, ProductName};
//!
//! let markup = Markup::FixedAmountPerUnit(dec!(1.00));
//! let mut product = Product::new(ProductName('D'), dec!(1.00), markup).unwrap();
//! product.add_free_items_promotion(2, 1).unwrap();
//! assert_eq!(product.calculated_price_per_item(10).unwrap(), dec!(1.40));
//! assert_eq!(product.calculated_price(10).unwrap(), dec!(14.00));
//! ```

use crate::PricingError;
use crate::base::ProductName;
use crate::rounding::{self, HUNDRED};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use tracing::debug;

/// Amount added to the unit cost before any promotion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Markup {
    /// Percentage of the unit cost, e.g. `80` for +80%.
    PercentOfCost(Decimal),
    /// Fixed money amount added to every unit.
    FixedAmountPerUnit(Decimal),
}

impl Markup {
    pub fn value(&self) -> Decimal {
        match self {
            Self::PercentOfCost(value) | Self::FixedAmountPerUnit(value) => *value,
        }
    }

    /// Unit cost with this markup applied, `None` if it does not fit a
    /// [`Decimal`].
    fn apply(&self, unit_cost: Decimal) -> Option<Decimal> {
        match self {
            Self::PercentOfCost(percent) => unit_cost
                .checked_mul(*percent)
                .and_then(|markup| markup.checked_div(HUNDRED))
                .and_then(|markup| unit_cost.checked_add(markup)),
            Self::FixedAmountPerUnit(amount) => unit_cost.checked_add(*amount),
        }
    }
}

/// Promotion attached to a product. Only one can be active at a time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Promotion {
    #[default]
    None,
    /// Straight percentage off the marked-up price.
    PercentOff { percent: u32 },
    /// Every `to_buy + free_items` items, `free_items` of them are free.
    BuyXGetYFree { to_buy: u32, free_items: u32 },
}

impl Promotion {
    pub fn is_active(&self) -> bool {
        !matches!(self, Self::None)
    }
}

/// A product with its pricing configuration.
///
/// Equality and ordering only look at the product name.
#[derive(Debug, Clone)]
pub struct Product {
    name: ProductName,
    unit_cost: Decimal,
    markup: Markup,
    /// Unit cost plus markup, kept in step with both.
    base_price: Decimal,
    promotion: Promotion,
}

impl Product {
    /// Creates a product without a promotion.
    ///
    /// # Errors
    ///
    /// - [`PricingError::InvalidUnitCost`] - `unit_cost` is not positive, or
    ///   the marked-up price is out of range.
    /// - [`PricingError::InvalidMarkup`] - markup value is not positive.
    pub fn new(
        name: ProductName,
        unit_cost: Decimal,
        markup: Markup,
    ) -> Result<Self, PricingError> {
        validate_unit_cost(unit_cost)?;
        validate_markup(&markup)?;
        let base_price = markup
            .apply(unit_cost)
            .ok_or(PricingError::InvalidUnitCost)?;
        Ok(Self {
            name,
            unit_cost,
            markup,
            base_price,
            promotion: Promotion::None,
        })
    }

    pub fn name(&self) -> ProductName {
        self.name
    }

    pub fn unit_cost(&self) -> Decimal {
        self.unit_cost
    }

    pub fn markup(&self) -> Markup {
        self.markup
    }

    pub fn promotion(&self) -> Promotion {
        self.promotion
    }

    /// # Errors
    ///
    /// [`PricingError::InvalidUnitCost`] if `unit_cost` is not positive or
    /// the marked-up price is out of range.
    pub fn set_unit_cost(&mut self, unit_cost: Decimal) -> Result<(), PricingError> {
        validate_unit_cost(unit_cost)?;
        self.base_price = self
            .markup
            .apply(unit_cost)
            .ok_or(PricingError::InvalidUnitCost)?;
        self.unit_cost = unit_cost;
        Ok(())
    }

    /// # Errors
    ///
    /// [`PricingError::InvalidMarkup`] if the markup value is not positive or
    /// the marked-up price is out of range.
    pub fn set_markup(&mut self, markup: Markup) -> Result<(), PricingError> {
        validate_markup(&markup)?;
        self.base_price = markup
            .apply(self.unit_cost)
            .ok_or(PricingError::InvalidMarkup)?;
        self.markup = markup;
        Ok(())
    }

    /// Replaces any promotion with a percentage-off promotion.
    ///
    /// # Errors
    ///
    /// [`PricingError::InvalidPercent`] if `percent` is not positive.
    pub fn add_percent_promotion(&mut self, percent: i32) -> Result<(), PricingError> {
        let percent = u32::try_from(percent)
            .ok()
            .filter(|p| *p > 0)
            .ok_or(PricingError::InvalidPercent)?;
        self.promotion = Promotion::PercentOff { percent };
        debug!(product = %self.name, percent, "percent promotion set");
        Ok(())
    }

    /// Replaces any promotion with a "buy `to_buy`, get `free_items` free" promotion.
    ///
    /// # Errors
    ///
    /// [`PricingError::InvalidItemCount`] if either count is below one.
    pub fn add_free_items_promotion(
        &mut self,
        to_buy: i32,
        free_items: i32,
    ) -> Result<(), PricingError> {
        let (Some(to_buy), Some(free_items)) =
            (positive_count(to_buy), positive_count(free_items))
        else {
            return Err(PricingError::InvalidItemCount);
        };
        self.promotion = Promotion::BuyXGetYFree { to_buy, free_items };
        debug!(product = %self.name, to_buy, free_items, "free items promotion set");
        Ok(())
    }

    /// # Errors
    ///
    /// [`PricingError::NoPromotionActive`] if there is nothing to remove.
    pub fn remove_promotion(&mut self) -> Result<(), PricingError> {
        if !self.promotion.is_active() {
            return Err(PricingError::NoPromotionActive);
        }
        self.promotion = Promotion::None;
        debug!(product = %self.name, "promotion removed");
        Ok(())
    }

    /// Unit cost plus markup, before any promotion.
    pub fn base_price(&self) -> Decimal {
        self.base_price
    }

    /// Average price of one item when `quantity` items are ordered.
    ///
    /// | Promotion | Per-item price |
    /// |-----------|----------------|
    /// | None | base price, unrounded |
    /// | PercentOff | `base - base * (percent / 100)`, the fraction rounded half-even to cents |
    /// | BuyXGetYFree | `base * paid / quantity`, rounded half-even to cents |
    ///
    /// A zero quantity is priced at zero.
    ///
    /// # Errors
    ///
    /// - [`PricingError::NegativeQuantity`] - `quantity` is negative.
    /// - [`PricingError::AmountOverflow`] - the price does not fit a [`Decimal`].
    pub fn calculated_price_per_item(&self, quantity: i64) -> Result<Decimal, PricingError> {
        if quantity < 0 {
            return Err(PricingError::NegativeQuantity);
        }
        if quantity == 0 {
            return Ok(Decimal::ZERO);
        }

        let base = self.base_price;
        let price = match self.promotion {
            Promotion::None => Some(base),
            Promotion::PercentOff { percent } => base
                .checked_mul(rounding::percent_fraction(percent))
                .and_then(|discount| base.checked_sub(discount)),
            Promotion::BuyXGetYFree { to_buy, free_items } => {
                let bundle = i64::from(to_buy) + i64::from(free_items);
                let paid = quantity - quantity / bundle;
                base.checked_mul(Decimal::from(paid))
                    .and_then(|total| total.checked_div(Decimal::from(quantity)))
                    .map(rounding::round_half_even)
            }
        };
        price.ok_or(PricingError::AmountOverflow)
    }

    /// Price of `quantity` items: per-item price times quantity.
    ///
    /// # Errors
    ///
    /// - [`PricingError::NegativeQuantity`] - `quantity` is negative.
    /// - [`PricingError::AmountOverflow`] - the price does not fit a [`Decimal`].
    pub fn calculated_price(&self, quantity: i64) -> Result<Decimal, PricingError> {
        if quantity == 0 {
            return Ok(Decimal::ZERO);
        }
        self.calculated_price_per_item(quantity)?
            .checked_mul(Decimal::from(quantity))
            .ok_or(PricingError::AmountOverflow)
    }
}

impl PartialEq for Product {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Product {}

impl PartialOrd for Product {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Product {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name.cmp(&other.name)
    }
}

fn validate_unit_cost(unit_cost: Decimal) -> Result<(), PricingError> {
    if unit_cost <= Decimal::ZERO {
        return Err(PricingError::InvalidUnitCost);
    }
    Ok(())
}

fn validate_markup(markup: &Markup) -> Result<(), PricingError> {
    if markup.value() <= Decimal::ZERO {
        return Err(PricingError::InvalidMarkup);
    }
    Ok(())
}

fn positive_count(count: i32) -> Option<u32> {
    u32::try_from(count).ok().filter(|c| *c >= 1)
}
