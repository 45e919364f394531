/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Depth-first visits.
//!
//! Implementations call back at the [start of the visit from a
//! root](EventPred::Init), [every time a new vertex is
//! discovered](EventPred::Previsit), [every time a vertex is
//! revisited](EventPred::Revisit), and, if predecessors are tracked, [every
//! time the enumeration of the edges of a vertex is
//! completed](EventPred::Postvisit).
//!
//! Since events with a predecessor carry the tail of the edge being
//! traversed, all events after the start can be interpreted as edge events,
//! except for the previsit and postvisit events of the root.

mod seq;
pub use seq::*;

/// Types of callback events generated during a depth-first visit
/// keeping track of parent vertices (and possibly of the visit path).
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum EventPred {
    /// Initialization: a visit is starting from `root`.
    Init { root: usize },
    /// The vertex has been encountered for the first time: we are traversing
    /// a new tree edge from `pred`, unless `depth` is zero, in which case
    /// `node`, `pred` and `root` coincide.
    Previsit {
        node: usize,
        pred: usize,
        root: usize,
        depth: usize,
    },
    /// The vertex has been encountered before: we are traversing the edge at
    /// position `arc` among the edges of `pred`, and it is a back edge, a
    /// forward edge, or a cross edge.
    ///
    /// If supported by the visit, `on_stack` tells whether `node` is
    /// currently on the visit path, that is, whether the edge is a back edge.
    Revisit {
        node: usize,
        pred: usize,
        arc: usize,
        root: usize,
        depth: usize,
        on_stack: bool,
    },
    /// The enumeration of the edges of the vertex has been completed: we are
    /// retreating from a tree edge to `pred`, unless `depth` is zero.
    Postvisit {
        node: usize,
        pred: usize,
        root: usize,
        depth: usize,
    },
    /// The visit from `root` has been completed.
    Done { root: usize },
}

/// Types of callback events generated during a depth-first visit
/// not keeping track of parent vertices.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum EventNoPred {
    /// Initialization: a visit is starting from `root`.
    Init { root: usize },
    /// The vertex has been encountered for the first time.
    Previsit {
        node: usize,
        root: usize,
        depth: usize,
    },
    /// The vertex has been encountered before.
    Revisit {
        node: usize,
        root: usize,
        depth: usize,
    },
    /// The visit from `root` has been completed.
    Done { root: usize },
}
