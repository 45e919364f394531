/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Strongly connected components.

mod kosaraju;
pub use kosaraju::*;

use crate::graph::{Graph, Label};
use std::collections::BTreeSet;

/// The strongly connected components of a graph.
///
/// Components are numbered from zero in order of extraction, and the
/// component of each vertex is stored by insertion position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sccs {
    num_components: usize,
    components: Box<[usize]>,
}

impl Sccs {
    pub fn new(num_components: usize, components: Box<[usize]>) -> Self {
        Sccs {
            num_components,
            components,
        }
    }

    /// The number of strongly connected components.
    pub fn num_components(&self) -> usize {
        self.num_components
    }

    /// The component index of each vertex, by insertion position.
    pub fn components(&self) -> &[usize] {
        &self.components
    }

    /// The component index of the vertex inserted at position `node`.
    pub fn component_of(&self, node: usize) -> usize {
        self.components[node]
    }

    /// Returns the size array for this set of strongly connected components.
    pub fn compute_sizes(&self) -> Box<[usize]> {
        let mut sizes = vec![0; self.num_components()];
        for &node_component in self.components.iter() {
            sizes[node_component] += 1;
        }
        sizes.into_boxed_slice()
    }

    /// Renumbers by decreasing size the components of this set.
    ///
    /// After a call to this method, components are permuted so that their
    /// sizes are decreasing in the component index. Components of the same
    /// size keep their relative order.
    pub fn sort_by_size(&mut self) {
        let sizes = self.compute_sizes();
        let mut sort_perm = Vec::from_iter(0..sizes.len());
        sort_perm.sort_by(|&x, &y| sizes[y].cmp(&sizes[x]));
        let mut inv_perm = vec![0; sizes.len()];
        for (new, &old) in sort_perm.iter().enumerate() {
            inv_perm[old] = new;
        }
        self.components
            .iter_mut()
            .for_each(|node_component| *node_component = inv_perm[*node_component]);
    }

    /// Returns the components as sets of labels, in component order.
    pub fn to_sets<L: Label>(&self, graph: &Graph<L>) -> Vec<BTreeSet<L>> {
        let mut sets = vec![BTreeSet::new(); self.num_components];
        for (vertex, &component) in graph.vertices().zip(self.components.iter()) {
            sets[component].insert(vertex.label().clone());
        }
        sets
    }

    /// Returns the nontrivial components as sets of labels, in component
    /// order.
    ///
    /// A component is nontrivial if it has at least two vertices, or if its
    /// only vertex has indegree and outdegree one and its only edge is a
    /// self-loop.
    pub fn nontrivial<L: Label>(&self, graph: &Graph<L>) -> Vec<BTreeSet<L>> {
        self.to_sets(graph)
            .into_iter()
            .filter(|component| is_nontrivial(graph, component))
            .collect()
    }
}

fn is_nontrivial<L: Label>(graph: &Graph<L>, component: &BTreeSet<L>) -> bool {
    match component.len() {
        0 => false,
        1 => component
            .first()
            .and_then(|label| graph.vertex(label))
            .is_some_and(|vertex| {
                vertex.indegree() == 1
                    && vertex.outdegree() == 1
                    && vertex.edges()[0].head() == vertex.label()
            }),
        _ => true,
    }
}
