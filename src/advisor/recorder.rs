/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::{Advisor, Event};
use crate::graph::Label;

/// An owned copy of an [`Event`], with vertices and edges replaced by labels.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub enum Record<L> {
    VisitVertex(L),
    CycleReportedRecursive(L),
    CycleFound { tail: L, head: L },
    NoCycleReportedRecursive(L),
    VertexAlreadyVisited { tail: L, head: L },
    AddVertexToStack { vertex: L, index: usize },
    ReverseDirectedGraph,
}

impl<L: Clone> From<&Event<'_, L>> for Record<L> {
    fn from(event: &Event<'_, L>) -> Self {
        match *event {
            Event::VisitVertex { vertex } => Record::VisitVertex(vertex.label().clone()),
            Event::CycleReportedRecursive { vertex } => {
                Record::CycleReportedRecursive(vertex.label().clone())
            }
            Event::CycleFound { tail, head } => Record::CycleFound {
                tail: tail.label().clone(),
                head: head.label().clone(),
            },
            Event::NoCycleReportedRecursive { vertex } => {
                Record::NoCycleReportedRecursive(vertex.label().clone())
            }
            Event::VertexAlreadyVisited { edge } => Record::VertexAlreadyVisited {
                tail: edge.tail().clone(),
                head: edge.head().clone(),
            },
            Event::AddVertexToStack { vertex, index } => Record::AddVertexToStack {
                vertex: vertex.label().clone(),
                index,
            },
            Event::ReverseDirectedGraph => Record::ReverseDirectedGraph,
        }
    }
}

/// An advisor recording all events, in order.
#[derive(Debug, Clone)]
pub struct Recorder<L> {
    records: Vec<Record<L>>,
}

impl<L> Default for Recorder<L> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
        }
    }
}

impl<L> Recorder<L> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[Record<L>] {
        &self.records
    }

    pub fn into_records(self) -> Vec<Record<L>> {
        self.records
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }
}

impl<L: Label> Advisor<L> for Recorder<L> {
    fn advise(&mut self, event: Event<'_, L>) {
        self.records.push(Record::from(&event));
    }
}
