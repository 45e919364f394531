/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

pub mod advisor;
pub mod algo;
pub mod dag;
pub mod error;
pub mod graph;
pub mod trace;

/// Module exposing all traits in a single level.
pub mod traits {
    use super::*;
    pub use advisor::Advisor;
    pub use algo::traits::*;
    pub use graph::Label;
}

/// Use `use digraph_algo::prelude::*;` to import common utilities, modules and
/// all traits.
pub mod prelude {
    use super::*;
    pub use advisor::{Event, LogAdvisor, NoAdvice, Record, Recorder};
    pub use algo::visits::depth_first;
    pub use algo::{is_cyclic, sccs, top_sort};
    pub use dag::Dag;
    pub use error::GraphError;
    pub use graph::{AttrValue, Edge, Graph, Vertex};
    pub use trace::{Frame, VizTracer};
    pub use traits::*;
}
