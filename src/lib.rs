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

//! # Beverage Pricing
//!
//! This library computes order totals for a beverage distributor: per-item
//! prices from a product's markup and promotion, the order total, and two
//! progressively discounted totals per client.
//!
//! ## Core Components
//!
//! - [`Product`]: Unit cost, markup, and an optional [`Promotion`]
//! - [`Client`]: Discount rates and the ordered products
//! - [`Catalog`]: The distributor's products and clients
//! - [`Receipt`]: Printable snapshot of a client's order
//! - [`PricingError`]: Error types for validation failures
//!
//! ## Example
//!
//! ```
//! use beverage_pricing::{Catalog, ClientId, ProductName};
//! use rust_decimal_macros::dec;
//!
//! let mut catalog = Catalog::seeded().unwrap();
//!
//! // Order 10 of product A for client 1
//! let client = catalog
//!     .place_order(ClientId(1), &[(ProductName('A'), 10)])
//!     .unwrap();
//!
//! assert_eq!(client.sum_of_orders().unwrap(), dec!(9.36));
//! assert_eq!(client.price_with_basic_discount().unwrap(), dec!(8.89));
//! ```
//!
//! ## Rounding
//!
//! All money is [`rust_decimal::Decimal`]. Promotional per-item prices round
//! half-to-even, order totals and discount amounts round up to whole cents.
//! See [`rounding`].
//!
//! ## Thread Safety
//!
//! Products and clients hold no locks. Mutation needs `&mut`, so callers
//! sharing one across threads must serialize access themselves.

mod base;
pub mod catalog;
pub mod client;
pub mod error;
pub mod product;
pub mod receipt;
pub mod rounding;

pub use base::{ClientId, ProductName};
pub use catalog::Catalog;
pub use client::{Client, DiscountTier};
pub use error::PricingError;
pub use product::{Markup, Product, Promotion};
pub use receipt::{Receipt, ReceiptLine};
