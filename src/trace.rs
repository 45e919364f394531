/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Frame-by-frame tracing of algorithm progress.
//!
//! A [`VizTracer`] is an [advisor](Advisor) that annotates the vertices and
//! edges of a graph as an algorithm proceeds, and takes a [`Frame`] (a
//! snapshot of all annotations) after each change. The sequence of frames is
//! what an external tool needs to draw the progress of the algorithm; drawing
//! and encoding are not part of this crate.

use crate::advisor::Advisor;
use crate::graph::{AttrValue, Edge, Graph, Label, Vertex};
use std::collections::BTreeMap;

/// The vertex currently examined by the algorithm.
pub const ACTIVATED: &str = "activated";
/// A vertex that is part of a detected cycle.
pub const IN_CYCLE: &str = "in_cycle";
/// A vertex that has been visited.
pub const VISITED: &str = "visited";
/// An edge that cannot close a cycle.
pub const DISABLED: &str = "disabled";
/// The position of a vertex on the finishing-order stack of Kosaraju's
/// algorithm.
pub const STACK_INDEX: &str = "S";

/// A snapshot of the annotations of a graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame<L> {
    /// The annotations of each vertex, in insertion order.
    pub vertices: Vec<(L, BTreeMap<String, AttrValue>)>,
    /// The annotations of each edge, as `(tail, head, annotations)`, grouped
    /// by tail in insertion order.
    pub edges: Vec<(L, L, BTreeMap<String, AttrValue>)>,
}

impl<L: Label> Frame<L> {
    fn of(graph: &Graph<L>) -> Self {
        Frame {
            vertices: graph
                .vertices()
                .map(|vertex| (vertex.label().clone(), vertex.attrs().snapshot()))
                .collect(),
            edges: graph
                .edges()
                .map(|edge| {
                    (
                        edge.tail().clone(),
                        edge.head().clone(),
                        edge.attrs().snapshot(),
                    )
                })
                .collect(),
        }
    }

    /// Returns the labels of the vertices whose annotation `name` is set to
    /// true in this frame.
    pub fn flagged(&self, name: &str) -> Vec<&L> {
        self.vertices
            .iter()
            .filter(|(_, attrs)| attrs.get(name) == Some(&AttrValue::Flag(true)))
            .map(|(label, _)| label)
            .collect()
    }
}

/// An advisor annotating a graph and recording a [`Frame`] after each change.
///
/// The tracer must be given the graph on which the algorithm runs. Events
/// are handled as follows:
///
/// * `visit_vertex`: the vertex becomes the only [activated](ACTIVATED)
///   vertex and is marked [visited](VISITED);
/// * `cycle_reported_recursive`: the vertex is marked [in cycle](IN_CYCLE)
///   and becomes the only activated vertex;
/// * `cycle_found`: the head is marked in cycle and becomes the only
///   activated vertex;
/// * `no_cycle_reported_recursive`: the vertex becomes the only activated
///   vertex;
/// * `vertex_already_visited`: the edge is [disabled](DISABLED) for one
///   frame, and then enabled again;
/// * `add_vertex_to_stack`: the vertex is annotated with its [stack
///   position](STACK_INDEX);
/// * `reverse_directed_graph`: all annotations are cleared, and all vertices
///   are activated for one frame.
///
/// Each event produces one frame, except for `vertex_already_visited` and
/// `reverse_directed_graph`, which produce two.
#[derive(Debug)]
pub struct VizTracer<'a, L> {
    graph: &'a Graph<L>,
    frames: Vec<Frame<L>>,
}

impl<'a, L: Label> VizTracer<'a, L> {
    pub fn new(graph: &'a Graph<L>) -> Self {
        Self {
            graph,
            frames: Vec::new(),
        }
    }

    pub fn frames(&self) -> &[Frame<L>] {
        &self.frames
    }

    pub fn into_frames(self) -> Vec<Frame<L>> {
        self.frames
    }

    /// Records a frame of the current annotations.
    pub fn snapshot(&mut self) {
        self.frames.push(Frame::of(self.graph));
    }

    /// Activates the first vertex of the graph and records a last frame.
    pub fn finish(&mut self) {
        if let Some(first) = self.graph.vertices().next() {
            self.change_activated_vertex(first);
        }
        self.snapshot();
    }

    fn change_activated_vertex(&self, vertex: &Vertex<L>) {
        for other in self.graph.vertices() {
            other.attrs().set(ACTIVATED, other.label() == vertex.label());
        }
    }

    fn set_graph_activated(&self, activated: bool) {
        for vertex in self.graph.vertices() {
            vertex.attrs().set(ACTIVATED, activated);
        }
    }
}

impl<L: Label> Advisor<L> for VizTracer<'_, L> {
    fn visit_vertex(&mut self, vertex: &Vertex<L>) {
        self.change_activated_vertex(vertex);
        vertex.attrs().set(VISITED, true);
        self.snapshot();
    }

    fn cycle_reported_recursive(&mut self, vertex: &Vertex<L>) {
        vertex.attrs().set(IN_CYCLE, true);
        self.change_activated_vertex(vertex);
        self.snapshot();
    }

    fn cycle_found(&mut self, _tail: &Vertex<L>, head: &Vertex<L>) {
        head.attrs().set(IN_CYCLE, true);
        self.change_activated_vertex(head);
        self.snapshot();
    }

    fn no_cycle_reported_recursive(&mut self, vertex: &Vertex<L>) {
        self.change_activated_vertex(vertex);
        self.snapshot();
    }

    fn vertex_already_visited(&mut self, edge: &Edge<L>) {
        edge.attrs().set(DISABLED, true);
        self.snapshot();
        edge.attrs().set(DISABLED, false);
        self.snapshot();
    }

    fn add_vertex_to_stack(&mut self, vertex: &Vertex<L>, index: usize) {
        vertex.attrs().set(STACK_INDEX, index);
        self.snapshot();
    }

    fn reverse_directed_graph(&mut self) {
        self.graph.reset_attrs();
        self.set_graph_activated(true);
        self.snapshot();
        self.set_graph_activated(false);
        self.snapshot();
    }
}
