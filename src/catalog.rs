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

//! Product and client catalog.
//!
//! The catalog owns the distributor's products and clients and attaches
//! order quantities to a client. [`Catalog::seeded`] builds the fixed price
//! list and client rates the distributor works with.

use crate::PricingError;
use crate::base::{ClientId, ProductName};
use crate::client::Client;
use crate::product::{Markup, Product};
use rust_decimal_macros::dec;
use std::collections::BTreeMap;
use tracing::debug;

/// Products and clients indexed by their identifiers.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: BTreeMap<ProductName, Product>,
    clients: BTreeMap<ClientId, Client>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the distributor's catalog: products `A` to `D` and clients
    /// `1` to `5`.
    ///
    /// # Errors
    ///
    /// Propagates validation errors from [`Product::new`] and [`Client::new`].
    pub fn seeded() -> Result<Self, PricingError> {
        let mut catalog = Self::new();

        catalog.add_product(Product::new(
            ProductName('A'),
            dec!(0.52),
            Markup::PercentOfCost(dec!(80)),
        )?);

        let mut product_b = Product::new(
            ProductName('B'),
            dec!(0.38),
            Markup::PercentOfCost(dec!(120)),
        )?;
        product_b.add_percent_promotion(30)?;
        catalog.add_product(product_b);

        catalog.add_product(Product::new(
            ProductName('C'),
            dec!(0.41),
            Markup::FixedAmountPerUnit(dec!(0.90)),
        )?);

        let mut product_d = Product::new(
            ProductName('D'),
            dec!(0.60),
            Markup::FixedAmountPerUnit(dec!(1.00)),
        )?;
        product_d.add_free_items_promotion(2, 1)?;
        catalog.add_product(product_d);

        for (id, basic, above_10k, above_30k) in
            [(1, 5, 0, 2), (2, 4, 1, 2), (3, 3, 1, 3), (4, 2, 3, 5), (5, 0, 5, 7)]
        {
            catalog.add_client(Client::new(ClientId(id), basic, above_10k, above_30k)?);
        }

        Ok(catalog)
    }

    /// Adds or replaces a product.
    pub fn add_product(&mut self, product: Product) {
        self.products.insert(product.name(), product);
    }

    /// Adds or replaces a client.
    pub fn add_client(&mut self, client: Client) {
        self.clients.insert(client.id(), client);
    }

    pub fn product(&self, name: ProductName) -> Option<&Product> {
        self.products.get(&name)
    }

    pub fn client(&self, id: ClientId) -> Option<&Client> {
        self.clients.get(&id)
    }

    /// Products in name order.
    pub fn products(&self) -> impl Iterator<Item = &Product> {
        self.products.values()
    }

    /// Clients in id order.
    pub fn clients(&self) -> impl Iterator<Item = &Client> {
        self.clients.values()
    }

    /// Attaches order quantities to a client.
    ///
    /// Each product is copied into the client's order as it is at this
    /// moment. A zero quantity removes the product from the order, so placing
    /// an order again replaces every line it names. All entries are validated
    /// before the client is touched, so a failed call leaves the order
    /// unchanged.
    ///
    /// # Errors
    ///
    /// - [`PricingError::UnknownClient`] - no client with `client_id`.
    /// - [`PricingError::UnknownProduct`] - a quantity names a missing product.
    /// - [`PricingError::InvalidItemCount`] - a quantity is negative.
    pub fn place_order(
        &mut self,
        client_id: ClientId,
        quantities: &[(ProductName, i64)],
    ) -> Result<&Client, PricingError> {
        if !self.clients.contains_key(&client_id) {
            return Err(PricingError::UnknownClient(client_id));
        }

        let mut lines = Vec::with_capacity(quantities.len());
        for &(name, quantity) in quantities {
            let product = self
                .products
                .get(&name)
                .ok_or(PricingError::UnknownProduct(name))?;
            if quantity < 0 {
                return Err(PricingError::InvalidItemCount);
            }
            lines.push((name, (quantity > 0).then(|| (product.clone(), quantity))));
        }

        let client = self
            .clients
            .get_mut(&client_id)
            .ok_or(PricingError::UnknownClient(client_id))?;
        for (name, line) in lines {
            match line {
                Some((product, quantity)) => client.add_ordered_product(product, quantity)?,
                None => {
                    client.remove_ordered_product(name);
                }
            }
        }
        debug!(client = %client_id, units = client.total_units(), "order placed");

        Ok(client)
    }
}
