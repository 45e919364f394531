/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Observation of algorithm progress.
//!
//! Algorithms accept an [`Advisor`] and raise an [`Event`] at well-defined
//! points of their execution. Dispatch is synchronous: the algorithm does not
//! proceed until the advisor returns, so advisors see events in the exact
//! order in which they are raised, and any work they do (logging, annotating
//! the graph, taking snapshots) happens on the thread of the algorithm.
//!
//! Every handler of [`Advisor`] has an empty default implementation, so an
//! advisor implements only the events it cares about. An advisor can never
//! change the outcome of an algorithm.

mod logging;
pub use logging::*;

mod recorder;
pub use recorder::*;

use crate::graph::{Edge, Vertex};

/// Events raised by the algorithms of this crate.
///
/// The first five events are raised by [cycle
/// detection](crate::algo::is_cyclic()), the last two by [Kosaraju's
/// algorithm](crate::algo::sccs::kosaraju()).
#[derive(Debug)]
pub enum Event<'a, L> {
    /// A vertex has been entered for the first time, and it is now on the
    /// visit path.
    VisitVertex { vertex: &'a Vertex<L> },
    /// A cycle has been found through `vertex`, which is being left; raised
    /// for each vertex on the visit path except the root, from the deepest
    /// one.
    CycleReportedRecursive { vertex: &'a Vertex<L> },
    /// The edge from `tail` to `head` closes a cycle, as `head` is on the
    /// visit path.
    CycleFound {
        tail: &'a Vertex<L>,
        head: &'a Vertex<L>,
    },
    /// The visit has returned to `vertex` from one of its successors without
    /// finding a cycle.
    NoCycleReportedRecursive { vertex: &'a Vertex<L> },
    /// The head of `edge` has already been completely visited, so the edge
    /// cannot close a cycle.
    VertexAlreadyVisited { edge: &'a Edge<L> },
    /// `vertex` has been completely visited and pushed on the finishing-order
    /// stack at position `index`.
    AddVertexToStack { vertex: &'a Vertex<L>, index: usize },
    /// The graph is about to be reversed.
    ReverseDirectedGraph,
}

impl<L> Event<'_, L> {
    /// The name of the event, as the name of the corresponding handler of
    /// [`Advisor`].
    pub fn name(&self) -> &'static str {
        match self {
            Event::VisitVertex { .. } => "visit_vertex",
            Event::CycleReportedRecursive { .. } => "cycle_reported_recursive",
            Event::CycleFound { .. } => "cycle_found",
            Event::NoCycleReportedRecursive { .. } => "no_cycle_reported_recursive",
            Event::VertexAlreadyVisited { .. } => "vertex_already_visited",
            Event::AddVertexToStack { .. } => "add_vertex_to_stack",
            Event::ReverseDirectedGraph => "reverse_directed_graph",
        }
    }
}

/// An observer of algorithm progress.
///
/// Algorithms call [`advise`](Advisor::advise), whose default implementation
/// dispatches the event to the corresponding handler. Implementations can
/// override the handlers they need, or override `advise` to see all events
/// in a uniform way.
pub trait Advisor<L> {
    fn visit_vertex(&mut self, _vertex: &Vertex<L>) {}

    fn cycle_reported_recursive(&mut self, _vertex: &Vertex<L>) {}

    fn cycle_found(&mut self, _tail: &Vertex<L>, _head: &Vertex<L>) {}

    fn no_cycle_reported_recursive(&mut self, _vertex: &Vertex<L>) {}

    fn vertex_already_visited(&mut self, _edge: &Edge<L>) {}

    fn add_vertex_to_stack(&mut self, _vertex: &Vertex<L>, _index: usize) {}

    fn reverse_directed_graph(&mut self) {}

    /// Dispatches an event to its handler.
    fn advise(&mut self, event: Event<'_, L>) {
        match event {
            Event::VisitVertex { vertex } => self.visit_vertex(vertex),
            Event::CycleReportedRecursive { vertex } => self.cycle_reported_recursive(vertex),
            Event::CycleFound { tail, head } => self.cycle_found(tail, head),
            Event::NoCycleReportedRecursive { vertex } => {
                self.no_cycle_reported_recursive(vertex)
            }
            Event::VertexAlreadyVisited { edge } => self.vertex_already_visited(edge),
            Event::AddVertexToStack { vertex, index } => self.add_vertex_to_stack(vertex, index),
            Event::ReverseDirectedGraph => self.reverse_directed_graph(),
        }
    }
}

/// An advisor ignoring all events.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoAdvice;

impl<L> Advisor<L> for NoAdvice {}

/// `None` ignores all events; `Some` forwards them.
impl<L, A: Advisor<L>> Advisor<L> for Option<A> {
    fn visit_vertex(&mut self, vertex: &Vertex<L>) {
        if let Some(advisor) = self {
            advisor.visit_vertex(vertex);
        }
    }

    fn cycle_reported_recursive(&mut self, vertex: &Vertex<L>) {
        if let Some(advisor) = self {
            advisor.cycle_reported_recursive(vertex);
        }
    }

    fn cycle_found(&mut self, tail: &Vertex<L>, head: &Vertex<L>) {
        if let Some(advisor) = self {
            advisor.cycle_found(tail, head);
        }
    }

    fn no_cycle_reported_recursive(&mut self, vertex: &Vertex<L>) {
        if let Some(advisor) = self {
            advisor.no_cycle_reported_recursive(vertex);
        }
    }

    fn vertex_already_visited(&mut self, edge: &Edge<L>) {
        if let Some(advisor) = self {
            advisor.vertex_already_visited(edge);
        }
    }

    fn add_vertex_to_stack(&mut self, vertex: &Vertex<L>, index: usize) {
        if let Some(advisor) = self {
            advisor.add_vertex_to_stack(vertex, index);
        }
    }

    fn reverse_directed_graph(&mut self) {
        if let Some(advisor) = self {
            advisor.reverse_directed_graph();
        }
    }

    fn advise(&mut self, event: Event<'_, L>) {
        if let Some(advisor) = self {
            advisor.advise(event);
        }
    }
}

/// Expands to a mutable reference to a [`NoAdvice`], for use in place of an
/// advisor argument.
#[macro_export]
macro_rules! no_advice {
    () => {
        &mut $crate::advisor::NoAdvice
    };
}
