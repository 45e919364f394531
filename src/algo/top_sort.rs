/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::advisor::{Advisor, Event, NoAdvice};
use crate::algo::visits::{
    depth_first::{EventPred, SeqPred},
    Sequential,
};
use crate::graph::{Graph, Label};
use dsi_progress_logger::ProgressLog;
use no_break::NoBreak;
use std::ops::ControlFlow::Continue;

/// Returns the vertices of the graph in order of completion of a depth-first
/// visit seeded in insertion order.
///
/// Each vertex is pushed after all its unvisited successors have been
/// completely visited, raising an
/// [`AddVertexToStack`](Event::AddVertexToStack) event whose index is the
/// position of the vertex in the returned vector.
pub(crate) fn finish_order<L: Label>(
    graph: &Graph<L>,
    advisor: &mut impl Advisor<L>,
    pl: &mut impl ProgressLog,
) -> Vec<usize> {
    let mut visit = SeqPred::new(graph);
    let mut stack = Vec::with_capacity(graph.num_vertices());

    visit
        .visit_all(|event| {
            if let EventPred::Postvisit { node, .. } = event {
                pl.light_update();
                advisor.advise(Event::AddVertexToStack {
                    vertex: graph.node(node),
                    index: stack.len(),
                });
                stack.push(node);
            }
            Continue(())
        })
        .continue_value_no_break();

    stack
}

/// Returns the insertion positions of the vertices of the graph in
/// topological order.
///
/// The order is the reverse of the order of completion of a depth-first
/// visit. If the graph is not acyclic, the result is a permutation of the
/// vertices that respects all edges that do not belong to a cycle.
pub fn top_sort<L: Label>(graph: &Graph<L>, pl: &mut impl ProgressLog) -> Box<[usize]> {
    pl.item_name("node");
    pl.expected_updates(Some(graph.num_vertices()));
    pl.start("Computing topological sort");

    let mut top_sort = finish_order(graph, &mut NoAdvice, pl);
    top_sort.reverse();

    pl.done();
    top_sort.into_boxed_slice()
}
