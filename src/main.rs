/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use anyhow::{bail, Context, Result};
use digraph_algo::algo::sccs;
use digraph_algo::prelude::*;
use dsi_progress_logger::prelude::*;

fn with_cycle() -> Result<Graph<u32>> {
    Ok(Graph::from_successors([
        (0, vec![1]),
        (1, vec![2]),
        (2, vec![3]),
        (3, vec![4, 11]),
        (4, vec![5]),
        (5, vec![6]),
        (6, vec![7, 8]),
        (7, vec![]),
        (8, vec![9]),
        (9, vec![10]),
        (10, vec![]),
        (11, vec![12]),
        (12, vec![13]),
        (13, vec![14]),
        (14, vec![3]),
    ])?)
}

fn without_cycle() -> Result<Graph<u32>> {
    Ok(Graph::from_successors([
        (0, vec![1]),
        (1, vec![2]),
        (2, vec![3]),
        (3, vec![4, 11]),
        (4, vec![5]),
        (5, vec![6]),
        (6, vec![7, 8]),
        (7, vec![]),
        (8, vec![9]),
        (9, vec![10]),
        (10, vec![]),
        (11, vec![12]),
        (12, vec![8, 13]),
        (13, vec![14]),
        (14, vec![]),
    ])?)
}

fn with_components() -> Result<Graph<u32>> {
    Ok(Graph::from_successors([
        (0, vec![1]),
        (1, vec![2, 3]),
        (2, vec![3]),
        (3, vec![4]),
        (4, vec![5, 2]),
        (5, vec![6]),
        (6, vec![7]),
        (7, vec![5]),
        (8, vec![8]),
        (9, vec![]),
    ])?)
}

fn main() -> Result<()> {
    let verbosity: usize = match std::env::args().nth(2) {
        Some(verbosity) => verbosity.parse().context("Expected integer verbosity")?,
        None => 2,
    };
    stderrlog::new()
        .verbosity(verbosity)
        .timestamp(stderrlog::Timestamp::Second)
        .init()?;

    let mut main_pl = progress_logger![];
    let operation = std::env::args().nth(1).context("No operation provided")?;

    match operation.as_str() {
        "cyclic" => {
            for graph in [with_cycle()?, without_cycle()?] {
                let cyclic = is_cyclic(&graph, &mut LogAdvisor::default(), &mut main_pl);
                main_pl.info(format_args!("Cyclic: {cyclic}"));
            }
        }
        "sccs" => {
            let graph = with_components()?;
            let components = sccs::kosaraju(&graph, &mut LogAdvisor::default(), &mut main_pl);
            for component in components.nontrivial(&graph) {
                main_pl.info(format_args!("Component: {component:?}"));
            }
        }
        "trace" => {
            for graph in [with_cycle()?, without_cycle()?] {
                let mut tracer = VizTracer::new(&graph);
                let cyclic = is_cyclic(&graph, &mut tracer, &mut main_pl);
                tracer.finish();
                let frames = tracer.into_frames();
                main_pl.info(format_args!(
                    "Cyclic: {cyclic}, {} frames, in cycle at the end: {:?}",
                    frames.len(),
                    frames
                        .last()
                        .map(|frame| frame.flagged(digraph_algo::trace::IN_CYCLE))
                        .unwrap_or_default()
                ));
            }
        }
        _ => bail!("Unknown operation {operation:?}: expected cyclic, sccs or trace"),
    }

    Ok(())
}
