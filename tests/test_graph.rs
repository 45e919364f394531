/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use anyhow::Result;
use digraph_algo::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn sample() -> Result<Graph<i32>> {
    Ok(Graph::from_successors([
        (0, vec![1]),
        (1, vec![2, 3]),
        (2, vec![3]),
        (3, vec![4, 6]),
        (4, vec![5, 6]),
        (5, vec![5]),
        (6, vec![6]),
    ])?)
}

fn random_graph(rng: &mut StdRng, num_vertices: usize, num_edges: usize) -> Result<Graph<usize>> {
    let mut graph = Graph::with_capacity(num_vertices);
    for label in 0..num_vertices {
        graph.add_vertex(label)?;
    }
    for _ in 0..num_edges {
        let tail = rng.random_range(0..num_vertices);
        let head = rng.random_range(0..num_vertices);
        graph.add_edge(tail, head)?;
    }
    Ok(graph)
}

#[test]
fn test_from_successors() -> Result<()> {
    let graph = sample()?;
    assert_eq!(graph.num_vertices(), 7);
    assert_eq!(graph.num_edges(), 10);
    assert_eq!(
        graph.vertices().map(|v| *v.label()).collect::<Vec<_>>(),
        (0..7).collect::<Vec<_>>()
    );
    let vertex = graph.vertex(&3).unwrap();
    assert_eq!(vertex.heads().copied().collect::<Vec<_>>(), vec![4, 6]);
    assert_eq!(vertex.outdegree(), 2);
    assert_eq!(vertex.indegree(), 2);
    assert_eq!(graph.vertex(&6).unwrap().indegree(), 3);
    Ok(())
}

#[test]
fn test_insertion_order_with_string_labels() -> Result<()> {
    let graph = Graph::from_successors([("z", vec!["a"]), ("a", vec![]), ("m", vec!["z", "a"])])?;
    assert_eq!(
        graph.vertices().map(|v| *v.label()).collect::<Vec<_>>(),
        vec!["z", "a", "m"]
    );
    assert!(graph.contains(&"m"));
    assert!(!graph.contains(&"b"));
    assert_eq!(graph.index_of(&"m"), Some(2));
    assert_eq!(graph.index_of(&"b"), None);
    assert_eq!(graph.vertex_at(1).map(|v| *v.label()), Some("a"));
    assert_eq!(graph.vertex_at(3).map(|v| *v.label()), None);
    Ok(())
}

#[test]
fn test_add_vertex() -> Result<()> {
    let mut graph = sample()?;
    assert_eq!(graph.add_vertex(7)?, 7);
    let vertex = graph.vertex(&7).unwrap();
    assert_eq!(vertex.outdegree(), 0);
    assert_eq!(vertex.indegree(), 0);
    assert!(vertex.edges().is_empty());
    assert_eq!(vertex.index(), 7);
    Ok(())
}

#[test]
fn test_add_duplicate_vertex() -> Result<()> {
    let mut graph = sample()?;
    graph.add_vertex(7)?;
    let num_vertices = graph.num_vertices();
    assert_eq!(graph.add_vertex(7), Err(GraphError::DuplicateVertex(7)));
    assert_eq!(graph.add_vertex(0), Err(GraphError::DuplicateVertex(0)));
    assert_eq!(graph.num_vertices(), num_vertices);
    Ok(())
}

#[test]
fn test_from_successors_duplicate() {
    let result = Graph::from_successors([(0, vec![1]), (1, vec![]), (0, vec![])]);
    assert_eq!(result.unwrap_err(), GraphError::DuplicateVertex(0));
}

#[test]
fn test_add_edge_unknown_vertex() -> Result<()> {
    let mut graph = sample()?;
    let num_edges = graph.num_edges();
    assert_eq!(graph.add_edge(0, 42), Err(GraphError::UnknownVertex(42)));
    assert_eq!(graph.add_edge(42, 0), Err(GraphError::UnknownVertex(42)));
    assert_eq!(graph.add_edge(41, 42), Err(GraphError::UnknownVertex(41)));
    assert_eq!(graph.num_edges(), num_edges);
    assert_eq!(graph.vertex(&0).unwrap().outdegree(), 1);
    assert_eq!(graph.vertex(&0).unwrap().indegree(), 0);

    let result = Graph::from_successors([(0, vec![1])]);
    assert_eq!(result.unwrap_err(), GraphError::UnknownVertex(1));
    Ok(())
}

#[test]
fn test_add_edge() -> Result<()> {
    let mut graph = sample()?;
    let indegree = graph.vertex(&0).unwrap().indegree();
    let outdegree = graph.vertex(&5).unwrap().outdegree();
    graph.add_edge(5, 0)?;
    assert_eq!(graph.vertex(&0).unwrap().indegree(), indegree + 1);
    assert_eq!(graph.vertex(&5).unwrap().outdegree(), outdegree + 1);
    let edge = graph.vertex(&5).unwrap().edges().last().unwrap();
    assert_eq!((*edge.tail(), *edge.head()), (5, 0));
    assert_eq!(edge.head_index(), 0);
    Ok(())
}

#[test]
fn test_error_messages() {
    assert_eq!(
        GraphError::DuplicateVertex("a").to_string(),
        "vertex \"a\" is already a vertex in this directed graph"
    );
    assert_eq!(
        GraphError::UnknownVertex(3).to_string(),
        "vertex 3 cannot be found in this directed graph"
    );
}

#[test]
fn test_degrees_random() -> Result<()> {
    let mut rng = StdRng::seed_from_u64(0);
    for num_vertices in [1, 5, 20, 50] {
        for density in [0, 1, 3] {
            let graph = random_graph(&mut rng, num_vertices, num_vertices * density)?;
            assert_eq!(graph.edges().count(), graph.num_edges());
            for vertex in graph.vertices() {
                let indegree = graph
                    .edges()
                    .filter(|edge| edge.head() == vertex.label())
                    .count();
                assert_eq!(vertex.indegree(), indegree);
                assert_eq!(vertex.outdegree(), vertex.edges().len());
                assert!(vertex.edges().iter().all(|edge| edge.tail() == vertex.label()));
            }
        }
    }
    Ok(())
}

#[test]
fn test_reversed() -> Result<()> {
    let graph = sample()?;
    graph.vertex(&0).unwrap().attrs().set("visited", true);
    let reversed = graph.reversed();
    assert_eq!(reversed.num_vertices(), graph.num_vertices());
    assert_eq!(reversed.num_edges(), graph.num_edges());
    assert_eq!(
        reversed.vertices().map(|v| *v.label()).collect::<Vec<_>>(),
        graph.vertices().map(|v| *v.label()).collect::<Vec<_>>()
    );
    for vertex in graph.vertices() {
        let reversed_vertex = reversed.vertex(vertex.label()).unwrap();
        assert_eq!(reversed_vertex.indegree(), vertex.outdegree());
        assert_eq!(reversed_vertex.outdegree(), vertex.indegree());
    }
    assert_eq!(
        reversed
            .vertex(&6)
            .unwrap()
            .heads()
            .copied()
            .collect::<Vec<_>>(),
        vec![3, 4, 6]
    );
    assert!(reversed.vertex(&0).unwrap().attrs().is_empty());
    Ok(())
}

#[test]
fn test_reset_attrs() -> Result<()> {
    let graph = sample()?;
    graph.vertex(&1).unwrap().attrs().set("activated", true);
    graph.vertex(&1).unwrap().edges()[0].attrs().set("disabled", true);
    graph.reset_attrs();
    assert!(graph.vertices().all(|v| v.attrs().is_empty()));
    assert!(graph.edges().all(|e| e.attrs().is_empty()));
    Ok(())
}

#[test]
fn test_clone_is_deep() -> Result<()> {
    let graph = sample()?;
    let mut copy = graph.clone();
    copy.add_vertex(7)?;
    copy.add_edge(7, 0)?;
    copy.vertex(&0).unwrap().attrs().set("visited", true);
    assert_eq!(graph.num_vertices(), 7);
    assert_eq!(graph.vertex(&0).unwrap().indegree(), 0);
    assert!(!graph.vertex(&0).unwrap().attrs().flag("visited"));
    Ok(())
}
