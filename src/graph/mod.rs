/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! The directed graph store.
//!
//! A [`Graph`] owns its [vertices](Vertex), each of which owns its outgoing
//! [edges](Edge). Vertices are identified by externally supplied labels, but
//! are also numbered by insertion position: algorithms work on positions, and
//! both visit order and results are reproducible given the same insertion
//! order.

mod attrs;
pub use attrs::*;

mod vertex;
pub use vertex::*;

use crate::{advisor::NoAdvice, algo, error::GraphError};
use dsi_progress_logger::no_logging;
use indexmap::IndexMap;
use std::collections::BTreeSet;
use std::fmt::{self, Debug, Display};
use std::hash::Hash;

/// The requirements on vertex labels.
///
/// Labels are opaque to the graph: they need only be hashable, totally
/// ordered (so that components can be returned as sorted sets), clonable,
/// and printable for diagnostics.
pub trait Label: Clone + Eq + Hash + Ord + Debug {}

impl<T: Clone + Eq + Hash + Ord + Debug> Label for T {}

/// A directed graph with labelled vertices.
///
/// The graph only grows: vertices and edges can be appended, but not
/// removed. Parallel edges and self-loops are allowed.
///
/// # Examples
///
/// ```
/// use digraph_algo::graph::Graph;
///
/// let graph = Graph::from_successors([(0, vec![1]), (1, vec![2]), (2, vec![0])])?;
/// assert_eq!(graph.num_edges(), 3);
/// assert!(graph.is_cyclic());
/// # Ok::<(), digraph_algo::error::GraphError<i32>>(())
/// ```
#[derive(Debug, Clone)]
pub struct Graph<L> {
    vertices: IndexMap<L, Vertex<L>>,
    num_edges: usize,
}

impl<L: Label> Default for Graph<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: Label> Graph<L> {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(num_vertices: usize) -> Self {
        Self {
            vertices: IndexMap::with_capacity(num_vertices),
            num_edges: 0,
        }
    }

    /// Builds a graph from a mapping from labels to lists of successors.
    ///
    /// All vertices are created first, in the order of the mapping; then
    /// edges are created in the order of the mapping and, for each vertex, in
    /// the order of its successor list.
    ///
    /// # Errors
    ///
    /// [`GraphError::DuplicateVertex`] if a label appears twice as a key,
    /// [`GraphError::UnknownVertex`] if a successor is not a key.
    pub fn from_successors<I, S>(successors: I) -> Result<Self, GraphError<L>>
    where
        I: IntoIterator<Item = (L, S)>,
        S: IntoIterator<Item = L>,
    {
        let successors = successors.into_iter().collect::<Vec<_>>();
        let mut graph = Self::with_capacity(successors.len());
        for (label, _) in &successors {
            graph.add_vertex(label.clone())?;
        }
        for (tail, heads) in successors {
            for head in heads {
                graph.add_edge(tail.clone(), head)?;
            }
        }
        Ok(graph)
    }

    /// Adds a vertex, returning its insertion position.
    ///
    /// # Errors
    ///
    /// [`GraphError::DuplicateVertex`] if `label` is already a vertex; the
    /// graph is not modified.
    pub fn add_vertex(&mut self, label: L) -> Result<usize, GraphError<L>> {
        if self.vertices.contains_key(&label) {
            return Err(GraphError::DuplicateVertex(label));
        }
        Ok(self.push_vertex(label))
    }

    /// Adds an edge from `tail` to `head`.
    ///
    /// The edge is appended to the edges of `tail`, and the indegree of `head`
    /// is incremented.
    ///
    /// # Errors
    ///
    /// [`GraphError::UnknownVertex`] if either endpoint is not a vertex; the
    /// graph is not modified.
    pub fn add_edge(&mut self, tail: L, head: L) -> Result<(), GraphError<L>> {
        let Some(tail_index) = self.vertices.get_index_of(&tail) else {
            return Err(GraphError::UnknownVertex(tail));
        };
        let Some(head_index) = self.vertices.get_index_of(&head) else {
            return Err(GraphError::UnknownVertex(head));
        };
        self.push_edge(tail_index, head_index);
        Ok(())
    }

    fn push_vertex(&mut self, label: L) -> usize {
        let index = self.vertices.len();
        self.vertices
            .insert(label.clone(), Vertex::new(label, index));
        index
    }

    // Both indices must be valid.
    fn push_edge(&mut self, tail_index: usize, head_index: usize) {
        let tail = self.vertices[tail_index].label.clone();
        let head = &mut self.vertices[head_index];
        head.indegree += 1;
        let edge = Edge {
            tail,
            head: head.label.clone(),
            head_index,
            attrs: Attributes::default(),
        };
        self.vertices[tail_index].edges.push(edge);
        self.num_edges += 1;
    }

    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    pub fn num_edges(&self) -> usize {
        self.num_edges
    }

    pub fn contains(&self, label: &L) -> bool {
        self.vertices.contains_key(label)
    }

    pub fn vertex(&self, label: &L) -> Option<&Vertex<L>> {
        self.vertices.get(label)
    }

    /// Returns the insertion position of the vertex with the given label.
    pub fn index_of(&self, label: &L) -> Option<usize> {
        self.vertices.get_index_of(label)
    }

    /// Returns the vertex inserted at position `index`.
    pub fn vertex_at(&self, index: usize) -> Option<&Vertex<L>> {
        self.vertices.get_index(index).map(|(_, vertex)| vertex)
    }

    // Positions handed out by visits are always valid.
    pub(crate) fn node(&self, index: usize) -> &Vertex<L> {
        &self.vertices[index]
    }

    /// Returns an iterator over the vertices in insertion order.
    pub fn vertices(&self) -> impl ExactSizeIterator<Item = &Vertex<L>> + '_ {
        self.vertices.values()
    }

    /// Returns an iterator over all edges, grouped by tail in vertex
    /// insertion order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge<L>> + '_ {
        self.vertices.values().flat_map(|vertex| vertex.edges.iter())
    }

    /// Returns a new graph with the same vertices, in the same order, and all
    /// edges reversed. Attributes are not copied.
    pub fn reversed(&self) -> Self {
        let mut reversed = Self::with_capacity(self.num_vertices());
        for vertex in self.vertices() {
            reversed.push_vertex(vertex.label.clone());
        }
        for vertex in self.vertices() {
            for edge in &vertex.edges {
                reversed.push_edge(edge.head_index, vertex.index);
            }
        }
        reversed
    }

    /// Clears the attributes of all vertices and edges.
    pub fn reset_attrs(&self) {
        for vertex in self.vertices() {
            vertex.attrs.clear();
            for edge in &vertex.edges {
                edge.attrs.clear();
            }
        }
    }

    /// Returns whether the graph contains a cycle.
    ///
    /// See [`is_cyclic`](algo::is_cyclic) for a version accepting an advisor
    /// and a progress logger.
    pub fn is_cyclic(&self) -> bool {
        algo::is_cyclic(self, &mut NoAdvice, no_logging![])
    }

    /// Returns the strongly connected components of the graph, computed with
    /// Kosaraju's algorithm, in extraction order.
    ///
    /// If `nontrivial` is true, singleton components without a self-loop are
    /// omitted.
    pub fn sccs(&self, nontrivial: bool) -> Vec<BTreeSet<L>> {
        let sccs = algo::sccs::kosaraju(self, &mut NoAdvice, no_logging![]);
        if nontrivial {
            sccs.nontrivial(self)
        } else {
            sccs.to_sets(self)
        }
    }
}

impl<L: Label> Display for Graph<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for vertex in self.vertices() {
            writeln!(
                f,
                "{:?}: outdegree: {}, indegree: {}, heads: {:?}",
                vertex.label,
                vertex.outdegree(),
                vertex.indegree,
                vertex.heads().collect::<Vec<_>>()
            )?;
        }
        Ok(())
    }
}
