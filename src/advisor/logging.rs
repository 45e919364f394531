/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::{Advisor, Event};
use crate::graph::Label;
use log::Level;

/// An advisor writing every event to the [`log`] facade.
///
/// Events are logged with target `digraph_algo::advisor` at the level
/// given at construction time.
#[derive(Debug, Clone, Copy)]
pub struct LogAdvisor {
    level: Level,
    count: usize,
}

impl Default for LogAdvisor {
    fn default() -> Self {
        Self::new(Level::Debug)
    }
}

impl LogAdvisor {
    pub fn new(level: Level) -> Self {
        Self { level, count: 0 }
    }

    /// The number of events logged so far.
    pub fn count(&self) -> usize {
        self.count
    }
}

impl<L: Label> Advisor<L> for LogAdvisor {
    fn advise(&mut self, event: Event<'_, L>) {
        self.count += 1;
        let name = event.name();
        match event {
            Event::VisitVertex { vertex }
            | Event::CycleReportedRecursive { vertex }
            | Event::NoCycleReportedRecursive { vertex } => {
                log::log!(target: "digraph_algo::advisor", self.level, "{name}: vertex {:?}", vertex.label());
            }
            Event::CycleFound { tail, head } => {
                log::log!(
                    target: "digraph_algo::advisor",
                    self.level,
                    "{name}: edge {:?} -> {:?}",
                    tail.label(),
                    head.label()
                );
            }
            Event::VertexAlreadyVisited { edge } => {
                log::log!(
                    target: "digraph_algo::advisor",
                    self.level,
                    "{name}: edge {:?} -> {:?}",
                    edge.tail(),
                    edge.head()
                );
            }
            Event::AddVertexToStack { vertex, index } => {
                log::log!(
                    target: "digraph_algo::advisor",
                    self.level,
                    "{name}: vertex {:?} at position {index}",
                    vertex.label()
                );
            }
            Event::ReverseDirectedGraph => {
                log::log!(target: "digraph_algo::advisor", self.level, "{name}");
            }
        }
    }
}
