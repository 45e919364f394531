/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use std::fmt::Debug;
use thiserror::Error;

/// Errors raised while building a [`Graph`](crate::graph::Graph) or a
/// [`Dag`](crate::dag::Dag).
///
/// Construction errors are contract violations on the caller side (a
/// malformed successor mapping), so they are surfaced immediately and the
/// graph is left as it was before the failing call. The algorithms themselves
/// never fail on a valid graph.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError<L: Debug> {
    /// The label passed to [`add_vertex`](crate::graph::Graph::add_vertex)
    /// is already a vertex of the graph.
    #[error("vertex {0:?} is already a vertex in this directed graph")]
    DuplicateVertex(L),
    /// An endpoint passed to [`add_edge`](crate::graph::Graph::add_edge)
    /// is not a vertex of the graph. If both endpoints are missing, the tail
    /// is reported.
    #[error("vertex {0:?} cannot be found in this directed graph")]
    UnknownVertex(L),
    /// The graph was required to be acyclic, but it contains a cycle.
    #[error("the directed graph contains a cycle")]
    Cyclic,
}
