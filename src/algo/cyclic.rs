/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::advisor::{Advisor, Event};
use crate::algo::visits::{
    depth_first::{EventPred, SeqPath},
    Sequential, StoppedWhenDone,
};
use crate::graph::{Graph, Label};
use dsi_progress_logger::ProgressLog;
use std::ops::ControlFlow::{Break, Continue};

/// Returns whether the graph contains a cycle.
///
/// This function performs a depth-first visit of the graph, seeded in vertex
/// insertion order and following edges in insertion order, keeping track of
/// the vertices on the visit path. The visit stops as soon as an edge
/// pointing to a vertex on the visit path is found: no further vertex or edge
/// is examined, and no further event is raised except for the
/// [`CycleReportedRecursive`](Event::CycleReportedRecursive) events
/// unwinding the visit path.
///
/// # Arguments
///
/// * `graph`: the graph.
///
/// * `advisor`: an advisor receiving the events of the cycle detection.
///
/// * `pl`: a progress logger.
pub fn is_cyclic<L: Label>(
    graph: &Graph<L>,
    advisor: &mut impl Advisor<L>,
    pl: &mut impl ProgressLog,
) -> bool {
    pl.item_name("node");
    pl.expected_updates(Some(graph.num_vertices()));
    pl.start("Checking for cycles...");

    let mut visit = SeqPath::new(graph);

    let cyclic = visit
        .visit_all(|event| {
            match event {
                EventPred::Previsit { node, .. } => {
                    advisor.advise(Event::VisitVertex {
                        vertex: graph.node(node),
                    });
                }
                EventPred::Revisit {
                    node,
                    pred,
                    on_stack: true,
                    ..
                } => {
                    // Stop the visit as soon as a back edge is found
                    advisor.advise(Event::CycleFound {
                        tail: graph.node(pred),
                        head: graph.node(node),
                    });
                    return Break(StoppedWhenDone);
                }
                EventPred::Revisit { pred, arc, .. } => {
                    advisor.advise(Event::VertexAlreadyVisited {
                        edge: &graph.node(pred).edges()[arc],
                    });
                }
                EventPred::Postvisit { pred, depth, .. } => {
                    pl.light_update();
                    if depth > 0 {
                        advisor.advise(Event::NoCycleReportedRecursive {
                            vertex: graph.node(pred),
                        });
                    }
                }
                _ => (),
            }
            Continue(())
        })
        .is_break();

    if cyclic {
        // Every vertex on the visit path, except the root, reports the cycle
        // to its parent
        let depth = visit.stack().len();
        for node in visit.stack().take(depth.saturating_sub(1)) {
            advisor.advise(Event::CycleReportedRecursive {
                vertex: graph.node(node),
            });
        }
    }

    pl.done();
    cyclic
}
