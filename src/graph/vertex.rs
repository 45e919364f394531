/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::Attributes;

/// A directed edge, owned by its tail vertex.
#[derive(Debug, Clone)]
pub struct Edge<L> {
    pub(super) tail: L,
    pub(super) head: L,
    pub(super) head_index: usize,
    pub(super) attrs: Attributes,
}

impl<L> Edge<L> {
    /// The vertex this edge starts from.
    pub fn tail(&self) -> &L {
        &self.tail
    }

    /// The vertex this edge points to.
    pub fn head(&self) -> &L {
        &self.head
    }

    /// The insertion position of the head in the graph.
    pub fn head_index(&self) -> usize {
        self.head_index
    }

    pub fn attrs(&self) -> &Attributes {
        &self.attrs
    }
}

/// A vertex of a [`Graph`](super::Graph).
///
/// A vertex owns its outgoing edges, in insertion order, and keeps track of
/// its indegree.
#[derive(Debug, Clone)]
pub struct Vertex<L> {
    pub(super) label: L,
    pub(super) index: usize,
    pub(super) edges: Vec<Edge<L>>,
    pub(super) indegree: usize,
    pub(super) attrs: Attributes,
}

impl<L> Vertex<L> {
    pub(super) fn new(label: L, index: usize) -> Self {
        Self {
            label,
            index,
            edges: Vec::new(),
            indegree: 0,
            attrs: Attributes::default(),
        }
    }

    pub fn label(&self) -> &L {
        &self.label
    }

    /// The insertion position of this vertex in its graph.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The outgoing edges of this vertex, in insertion order.
    pub fn edges(&self) -> &[Edge<L>] {
        &self.edges
    }

    /// Returns an iterator over the heads of the outgoing edges.
    pub fn heads(&self) -> impl ExactSizeIterator<Item = &L> + '_ {
        self.edges.iter().map(|edge| &edge.head)
    }

    /// The number of edges of the graph whose head is this vertex.
    pub fn indegree(&self) -> usize {
        self.indegree
    }

    /// The number of edges owned by this vertex.
    pub fn outdegree(&self) -> usize {
        self.edges.len()
    }

    pub fn attrs(&self) -> &Attributes {
        &self.attrs
    }
}
