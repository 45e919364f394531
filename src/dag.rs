/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Directed acyclic graphs.

use crate::{
    algo,
    error::GraphError,
    graph::{Graph, Label},
};
use dsi_progress_logger::no_logging;
use std::ops::Deref;

/// A [graph](Graph) that is known to contain no cycle.
///
/// A `Dag` can only be obtained by checking a graph for cycles, and it
/// exposes the graph only through shared references, so it cannot be
/// mutated into a cyclic graph.
#[derive(Debug, Clone)]
pub struct Dag<L>(Graph<L>);

impl<L: Label> TryFrom<Graph<L>> for Dag<L> {
    type Error = GraphError<L>;

    /// Checks the graph for cycles.
    ///
    /// # Errors
    ///
    /// [`GraphError::Cyclic`] if the graph contains a cycle.
    fn try_from(graph: Graph<L>) -> Result<Self, Self::Error> {
        if graph.is_cyclic() {
            return Err(GraphError::Cyclic);
        }
        Ok(Dag(graph))
    }
}

impl<L: Label> Dag<L> {
    /// Builds a graph from a mapping from labels to lists of successors, as
    /// [`Graph::from_successors`], and checks it for cycles.
    pub fn from_successors<I, S>(successors: I) -> Result<Self, GraphError<L>>
    where
        I: IntoIterator<Item = (L, S)>,
        S: IntoIterator<Item = L>,
    {
        Self::try_from(Graph::from_successors(successors)?)
    }

    /// Returns the labels of the vertices in topological order.
    pub fn top_sort(&self) -> Vec<L> {
        algo::top_sort(&self.0, no_logging![])
            .iter()
            .map(|&node| self.0.node(node).label().clone())
            .collect()
    }

    pub fn into_inner(self) -> Graph<L> {
        self.0
    }
}

impl<L> Deref for Dag<L> {
    type Target = Graph<L>;

    fn deref(&self) -> &Graph<L> {
        &self.0
    }
}
