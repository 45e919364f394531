/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use anyhow::Result;
use digraph_algo::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

#[test]
fn test_acyclic() -> Result<()> {
    let dag = Dag::from_successors([
        ("shirt", vec!["tie", "belt"]),
        ("tie", vec!["jacket"]),
        ("pants", vec!["shoes", "belt"]),
        ("belt", vec!["jacket"]),
        ("socks", vec!["shoes"]),
        ("shoes", vec![]),
        ("jacket", vec![]),
    ])?;
    assert_eq!(dag.num_vertices(), 7);
    assert!(!dag.is_cyclic());

    let order = dag.top_sort();
    let position = |label: &&str| order.iter().position(|x| x == label).unwrap();
    for edge in dag.edges() {
        assert!(position(edge.tail()) < position(edge.head()));
    }
    Ok(())
}

#[test]
fn test_cyclic() -> Result<()> {
    let graph = Graph::from_successors([(0, vec![1]), (1, vec![2]), (2, vec![0])])?;
    assert_eq!(Dag::try_from(graph).unwrap_err(), GraphError::Cyclic);

    assert_eq!(
        Dag::from_successors([(0, vec![0])]).unwrap_err(),
        GraphError::Cyclic
    );
    assert_eq!(
        Dag::from_successors([(0, vec![1])]).unwrap_err(),
        GraphError::UnknownVertex(1)
    );
    assert_eq!(
        GraphError::<i32>::Cyclic.to_string(),
        "the directed graph contains a cycle"
    );
    Ok(())
}

#[test]
fn test_into_inner() -> Result<()> {
    let graph = Graph::from_successors([(0, vec![1]), (1, vec![])])?;
    let mut graph = Dag::try_from(graph)?.into_inner();
    graph.add_edge(1, 0)?;
    assert!(graph.is_cyclic());
    assert!(Dag::try_from(graph).is_err());
    Ok(())
}

#[test]
fn test_random_top_sort() -> Result<()> {
    let mut rng = StdRng::seed_from_u64(0);
    for num_vertices in [1, 10, 50] {
        // Edges go from smaller to larger labels, and vertices are inserted in
        // a scrambled order
        let mut labels = (0..num_vertices).collect::<Vec<usize>>();
        for i in (1..num_vertices).rev() {
            labels.swap(i, rng.random_range(0..=i));
        }
        let mut graph = Graph::with_capacity(num_vertices);
        for &label in &labels {
            graph.add_vertex(label)?;
        }
        for _ in 0..3 * num_vertices {
            let a = rng.random_range(0..num_vertices);
            let b = rng.random_range(0..num_vertices);
            if a != b {
                graph.add_edge(a.min(b), a.max(b))?;
            }
        }

        let dag = Dag::try_from(graph)?;
        let order = dag.top_sort();
        assert_eq!(order.len(), num_vertices);
        let mut position = vec![0; num_vertices];
        for (i, &label) in order.iter().enumerate() {
            position[label] = i;
        }
        for edge in dag.edges() {
            assert!(position[*edge.tail()] < position[*edge.head()]);
        }
    }
    Ok(())
}
