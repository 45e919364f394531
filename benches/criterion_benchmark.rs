/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use digraph_algo::no_advice;
use digraph_algo::prelude::*;
use dsi_progress_logger::no_logging;
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::hint::black_box;

const NUM_VERTICES: usize = 100_000;

fn chain(n: usize) -> Graph<usize> {
    let mut graph = Graph::with_capacity(n);
    for label in 0..n {
        graph.add_vertex(label).unwrap();
    }
    for label in 1..n {
        graph.add_edge(label - 1, label).unwrap();
    }
    graph
}

fn random(n: usize, m: usize) -> Graph<usize> {
    let mut rng = StdRng::seed_from_u64(0);
    let mut graph = Graph::with_capacity(n);
    for label in 0..n {
        graph.add_vertex(label).unwrap();
    }
    for _ in 0..m {
        graph
            .add_edge(rng.random_range(0..n), rng.random_range(0..n))
            .unwrap();
    }
    graph
}

fn bench_cyclic(c: &mut Criterion) {
    let graph = chain(NUM_VERTICES);
    let mut group = c.benchmark_group("is_cyclic");
    group.throughput(Throughput::Elements(NUM_VERTICES as u64));
    group.bench_function("chain", |b| {
        b.iter(|| black_box(is_cyclic(black_box(&graph), no_advice![], no_logging![])))
    });
    group.finish();
}

fn bench_sccs(c: &mut Criterion) {
    let chain = chain(NUM_VERTICES);
    let random = random(NUM_VERTICES, 4 * NUM_VERTICES);
    let mut group = c.benchmark_group("kosaraju");
    group.throughput(Throughput::Elements(NUM_VERTICES as u64));
    group.bench_function("chain", |b| {
        b.iter(|| black_box(sccs::kosaraju(black_box(&chain), no_advice![], no_logging![])))
    });
    group.bench_function("random", |b| {
        b.iter(|| black_box(sccs::kosaraju(black_box(&random), no_advice![], no_logging![])))
    });
    group.finish();
}

criterion_group!(benches, bench_cyclic, bench_sccs);
criterion_main!(benches);
