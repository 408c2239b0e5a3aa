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

//! Numeric policy shared by product pricing and client discounting.
//!
//! Two rounding modes are in play and they must not be mixed up:
//!
//! - promotional per-item prices round to cents half-to-even,
//! - order totals and discount amounts round to cents away from zero.

use rust_decimal::{Decimal, RoundingStrategy};

/// Scale of a money amount in cents.
pub const CENTS: u32 = 2;

/// Divisor turning a whole percentage into a fraction.
pub(crate) const HUNDRED: Decimal = Decimal::ONE_HUNDRED;

/// Rounds to cents, ties to the even neighbour (banker's rounding).
pub fn round_half_even(amount: Decimal) -> Decimal {
    to_cents(amount, RoundingStrategy::MidpointNearestEven)
}

/// Rounds to cents, any remainder moves the amount away from zero.
pub fn round_up(amount: Decimal) -> Decimal {
    to_cents(amount, RoundingStrategy::AwayFromZero)
}

/// Result always carries exactly two decimal places, so `4` becomes `4.00`.
fn to_cents(amount: Decimal, strategy: RoundingStrategy) -> Decimal {
    let mut rounded = amount.round_dp_with_strategy(CENTS, strategy);
    rounded.rescale(CENTS);
    rounded
}

/// Percentage as a fraction rounded to cents half-to-even, e.g. `30` -> `0.30`.
pub(crate) fn percent_fraction(percent: u32) -> Decimal {
    round_half_even(Decimal::from(percent) / HUNDRED)
}

/// Subtracts `percent` of `amount`, with the discount itself rounded up to
/// whole cents before the subtraction. `None` if the discount does not fit
/// a [`Decimal`].
pub(crate) fn less_percent_rounded_up(amount: Decimal, percent: u32) -> Option<Decimal> {
    let discount = amount
        .checked_mul(Decimal::from(percent))?
        .checked_div(HUNDRED)
        .map(round_up)?;
    amount.checked_sub(discount)
}
