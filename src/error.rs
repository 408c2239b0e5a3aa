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

//! Error types for pricing and ordering.

use crate::base::{ClientId, ProductName};
use thiserror::Error;

/// Pricing and ordering errors.
///
/// Every variant is reported by the call that detected it, before any
/// state is modified.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PricingError {
    /// Percentage is out of range (negative, zero where a positive rate is
    /// required, or breaking the volume tier ordering)
    #[error("invalid percent")]
    InvalidPercent,

    /// Item count is zero or negative where a positive count is required
    #[error("invalid count of items (must be positive)")]
    InvalidItemCount,

    /// Quantity passed to a price calculation is negative
    #[error("negative count of items")]
    NegativeQuantity,

    /// Unit cost is zero or negative
    #[error("invalid unit cost (must be positive)")]
    InvalidUnitCost,

    /// Markup value is zero or negative
    #[error("invalid markup (must be positive)")]
    InvalidMarkup,

    /// Attempted to remove a promotion from a product that has none
    #[error("no promotion to remove")]
    NoPromotionActive,

    /// A computed price or total does not fit a decimal
    #[error("amount out of range")]
    AmountOverflow,

    /// Client id is not present in the catalog
    #[error("unknown client {0}")]
    UnknownClient(ClientId),

    /// Product name is not present in the catalog
    #[error("unknown product {0}")]
    UnknownProduct(ProductName),
}

#[cfg(test)]
mod tests {
    use super::PricingError;
    use crate::base::{ClientId, ProductName};

    #[test]
    fn error_display_messages() {
        assert_eq!(PricingError::InvalidPercent.to_string(), "invalid percent");
        assert_eq!(
            PricingError::InvalidItemCount.to_string(),
            "invalid count of items (must be positive)"
        );
        assert_eq!(
            PricingError::NegativeQuantity.to_string(),
            "negative count of items"
        );
        assert_eq!(
            PricingError::InvalidUnitCost.to_string(),
            "invalid unit cost (must be positive)"
        );
        assert_eq!(
            PricingError::InvalidMarkup.to_string(),
            "invalid markup (must be positive)"
        );
        assert_eq!(
            PricingError::NoPromotionActive.to_string(),
            "no promotion to remove"
        );
        assert_eq!(
            PricingError::AmountOverflow.to_string(),
            "amount out of range"
        );
        assert_eq!(
            PricingError::UnknownClient(ClientId(9)).to_string(),
            "unknown client 9"
        );
        assert_eq!(
            PricingError::UnknownProduct(ProductName('Z')).to_string(),
            "unknown product Z"
        );
    }

    #[test]
    fn errors_are_comparable() {
        assert_eq!(PricingError::NegativeQuantity, PricingError::NegativeQuantity);
        assert_ne!(PricingError::InvalidPercent, PricingError::InvalidMarkup);
        assert_ne!(
            PricingError::UnknownClient(ClientId(1)),
            PricingError::UnknownClient(ClientId(2))
        );
    }
}
