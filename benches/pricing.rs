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

//! Benchmarks for the pricing engine.
//!
//! Run with: cargo bench
//!
//! Benchmarks include:
//! - Per-item pricing for each promotion kind
//! - Client totals as the order grows
//! - Seeded catalog order and receipt

use beverage_pricing::{Catalog, Client, ClientId, Markup, Product, ProductName, Receipt};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rust_decimal_macros::dec;

// =============================================================================
// Helper Functions
// =============================================================================

fn make_product(name: char) -> Product {
    Product::new(ProductName(name), dec!(0.52), Markup::PercentOfCost(dec!(80))).unwrap()
}

fn make_client(products: usize, quantity: i64) -> Client {
    let mut client = Client::new(ClientId(1), 5, 3, 7).unwrap();
    for (i, name) in ('A'..='Z').take(products).enumerate() {
        let mut product = make_product(name);
        match i % 3 {
            0 => product.add_percent_promotion(30).unwrap(),
            1 => product.add_free_items_promotion(2, 1).unwrap(),
            _ => {}
        }
        client.add_ordered_product(product, quantity).unwrap();
    }
    client
}

// =============================================================================
// Product Benchmarks
// =============================================================================

fn bench_price_per_item(c: &mut Criterion) {
    let mut group = c.benchmark_group("price_per_item");

    let plain = make_product('A');
    group.bench_function("no_promotion", |b| {
        b.iter(|| plain.calculated_price_per_item(black_box(1_000)).unwrap())
    });

    let mut percent = make_product('B');
    percent.add_percent_promotion(30).unwrap();
    group.bench_function("percent_off", |b| {
        b.iter(|| percent.calculated_price_per_item(black_box(1_000)).unwrap())
    });

    let mut free_items = make_product('D');
    free_items.add_free_items_promotion(2, 1).unwrap();
    group.bench_function("buy_x_get_y_free", |b| {
        b.iter(|| free_items.calculated_price_per_item(black_box(1_000)).unwrap())
    });

    group.finish();
}

// =============================================================================
// Client Benchmarks
// =============================================================================

fn bench_client_totals(c: &mut Criterion) {
    let mut group = c.benchmark_group("client_totals");

    for products in [1usize, 4, 26].iter() {
        let client = make_client(*products, 12_000);
        group.throughput(Throughput::Elements(*products as u64));
        group.bench_with_input(BenchmarkId::from_parameter(products), &client, |b, client| {
            b.iter(|| black_box(client.price_with_additional_discount().unwrap()))
        });
    }
    group.finish();
}

fn bench_seeded_receipt(c: &mut Criterion) {
    c.bench_function("seeded_receipt", |b| {
        b.iter(|| {
            let mut catalog = Catalog::seeded().unwrap();
            let client = catalog
                .place_order(
                    ClientId(4),
                    &[
                        (ProductName('A'), 10),
                        (ProductName('B'), 20),
                        (ProductName('C'), 30),
                        (ProductName('D'), 40),
                    ],
                )
                .unwrap();
            black_box(Receipt::for_client(client).unwrap())
        })
    });
}

criterion_group!(products, bench_price_per_item);

criterion_group!(clients, bench_client_totals, bench_seeded_receipt);

criterion_main!(products, clients);
