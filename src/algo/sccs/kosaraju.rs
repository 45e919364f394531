/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::Sccs;
use crate::advisor::{Advisor, Event};
use crate::algo::{
    top_sort::finish_order,
    visits::{
        depth_first::{EventNoPred, SeqNoPred},
        Sequential,
    },
};
use crate::graph::{Graph, Label};
use dsi_progress_logger::ProgressLog;
use no_break::NoBreak;
use std::ops::ControlFlow::Continue;

/// Computes the strongly connected components of a graph using Kosaraju's
/// algorithm.
///
/// The first pass computes the finishing order of a depth-first visit of
/// `graph`, raising an [`AddVertexToStack`](Event::AddVertexToStack) event
/// for each vertex. Then a [`ReverseDirectedGraph`](Event::ReverseDirectedGraph)
/// event is raised, the reversed graph is built, and a second depth-first
/// visit of the reversed graph, seeded by popping the finishing-order stack,
/// yields one component for each visit tree.
///
/// # Arguments
///
/// * `graph`: the graph.
///
/// * `advisor`: an advisor receiving the events of the algorithm.
///
/// * `pl`: a progress logger.
pub fn kosaraju<L: Label>(
    graph: &Graph<L>,
    advisor: &mut impl Advisor<L>,
    pl: &mut impl ProgressLog,
) -> Sccs {
    let num_vertices = graph.num_vertices();
    pl.item_name("node");
    pl.expected_updates(Some(2 * num_vertices));
    pl.start("Computing strongly connected components...");

    let stack = finish_order(graph, advisor, pl);

    advisor.advise(Event::ReverseDirectedGraph);
    let transpose = graph.reversed();

    let mut number_of_components = 0;
    let mut visit = SeqNoPred::new(&transpose);
    let mut components = vec![0; num_vertices].into_boxed_slice();

    visit
        .visit(stack.into_iter().rev(), |event| {
            match event {
                EventNoPred::Previsit { node, .. } => {
                    pl.light_update();
                    components[node] = number_of_components;
                }
                EventNoPred::Done { .. } => {
                    number_of_components += 1;
                }
                _ => (),
            }
            Continue(())
        })
        .continue_value_no_break();

    pl.done();

    Sccs::new(number_of_components, components)
}
