/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::algo::visits::{
    depth_first::{EventNoPred, EventPred},
    Sequential,
};
use crate::graph::{Graph, Label};
use sealed::sealed;
use std::ops::ControlFlow::{self, Continue};
use sux::bits::BitVec;

/// A depth-first visit which does not keep track of predecessors, or vertices
/// on the visit path.
pub type SeqNoPred<'a, L> = SeqIter<'a, TwoStates, L, false>;

/// A depth-first visit which keeps track of predecessors, but not of vertices
/// on the visit path.
pub type SeqPred<'a, L> = SeqIter<'a, TwoStates, L, true>;

/// A depth-first visit which keeps track of predecessors and of vertices on
/// the visit path.
pub type SeqPath<'a, L> = SeqIter<'a, ThreeStates, L, true>;

/// Sequential depth-first visits.
///
/// This is an iterative implementation that does not need a large stack
/// size: the visit path is kept in an explicit stack of frames, each made of
/// a vertex and the position of the next edge to examine. Edges are
/// examined in insertion order.
///
/// There are three versions of the visit, which are type aliases to the same
/// common implementation: [`SeqNoPred`], [`SeqPred`] and [`SeqPath`] (the
/// generic implementation should not be instantiated by the user).
///
/// * [`SeqNoPred`] does not keep track of predecessors, nor of vertices on
///   the visit path; it can be used, for example, to compute reachability.
/// * [`SeqPred`] keeps track of predecessors, but not of vertices on the
///   visit path; it can be used, for example, to compute a [finishing
///   order](crate::algo::top_sort()).
/// * [`SeqPath`] keeps track of predecessors and of vertices on the visit
///   path; it can be used, for example, to [detect
///   cycles](crate::algo::is_cyclic()).
///
/// [`SeqNoPred`] generates events of type [`EventNoPred`]; the other two
/// generate events of type [`EventPred`], with the proviso that for
/// [`SeqPred`] the `on_stack` field of [`Revisit`](EventPred::Revisit)
/// events is always false.
///
/// If the visit was interrupted, the vertices still on the visit path can be
/// retrieved using the [`stack`](SeqIter::stack) method.
///
/// # Examples
///
/// Let's test acyclicity:
///
/// ```
/// use digraph_algo::algo::visits::{Sequential, StoppedWhenDone};
/// use digraph_algo::algo::visits::depth_first::*;
/// use digraph_algo::graph::Graph;
/// use std::ops::ControlFlow::{Break, Continue};
///
/// let graph = Graph::from_successors([(0, vec![1]), (1, vec![2, 3]), (2, vec![0]), (3, vec![])])?;
/// let mut visit = SeqPath::new(&graph);
///
/// assert!(visit
///     .visit_all(|event| match event {
///         // Stop the visit as soon as a back edge is found
///         EventPred::Revisit { on_stack: true, .. } => Break(StoppedWhenDone),
///         _ => Continue(()),
///     })
///     .is_break()); // As the graph is not acyclic
/// # Ok::<(), digraph_algo::error::GraphError<i32>>(())
/// ```
pub struct SeqIter<'a, S, L, const PRED: bool> {
    graph: &'a Graph<L>,
    stack: Vec<Frame>,
    state: S,
}

#[derive(Debug, Clone, Copy)]
struct Frame {
    node: usize,
    /// The position of the next edge of `node` to examine.
    next_arc: usize,
}

impl<'a, S: NodeStates, L: Label, const PRED: bool> SeqIter<'a, S, L, PRED> {
    /// Creates a new sequential visit.
    ///
    /// # Arguments
    /// * `graph`: an immutable reference to the graph to visit.
    pub fn new(graph: &'a Graph<L>) -> Self {
        Self {
            graph,
            stack: Vec::with_capacity(16),
            state: S::new(graph.num_vertices()),
        }
    }

    /// Returns an iterator over the vertices on the visit path, from the
    /// deepest one to the root.
    ///
    /// This method is useful only in the case of interrupted visits, as in a
    /// completed visit the path is empty.
    pub fn stack(&self) -> impl DoubleEndedIterator<Item = usize> + ExactSizeIterator + '_ {
        self.stack.iter().rev().map(|frame| frame.node)
    }
}

#[doc(hidden)]
#[sealed]
pub trait NodeStates {
    fn new(n: usize) -> Self;
    fn set_on_stack(&mut self, node: usize);
    fn set_off_stack(&mut self, node: usize);
    fn on_stack(&self, node: usize) -> bool;
    fn set_known(&mut self, node: usize);
    fn known(&self, node: usize) -> bool;
    fn reset(&mut self);
}

#[doc(hidden)]
/// A two-state selector type for [sequential depth-first visits](SeqIter).
///
/// This implementation does not keep track of vertices on the visit path, so
/// events of type [`Revisit`](`EventPred::Revisit`) will always have
/// `on_stack` equal to false.
pub struct TwoStates(BitVec);

#[doc(hidden)]
/// A three-state selector type for [sequential depth-first visits](SeqIter).
///
/// A vertex is unknown, known and on the visit path, or known and completely
/// visited.
pub struct ThreeStates(BitVec);

#[sealed]
impl NodeStates for ThreeStates {
    fn new(n: usize) -> ThreeStates {
        ThreeStates(BitVec::new(2 * n))
    }
    #[inline(always)]
    fn set_on_stack(&mut self, node: usize) {
        self.0.set(node * 2 + 1, true);
    }
    #[inline(always)]
    fn set_off_stack(&mut self, node: usize) {
        self.0.set(node * 2 + 1, false);
    }
    #[inline(always)]
    fn on_stack(&self, node: usize) -> bool {
        self.0.get(node * 2 + 1)
    }
    #[inline(always)]
    fn set_known(&mut self, node: usize) {
        self.0.set(node * 2, true);
    }
    #[inline(always)]
    fn known(&self, node: usize) -> bool {
        self.0.get(node * 2)
    }
    fn reset(&mut self) {
        self.0 = BitVec::new(self.0.len());
    }
}

#[sealed]
impl NodeStates for TwoStates {
    fn new(n: usize) -> TwoStates {
        TwoStates(BitVec::new(n))
    }
    #[inline(always)]
    fn set_on_stack(&mut self, _node: usize) {}
    #[inline(always)]
    fn set_off_stack(&mut self, _node: usize) {}
    #[inline(always)]
    fn on_stack(&self, _node: usize) -> bool {
        false
    }
    #[inline(always)]
    fn set_known(&mut self, node: usize) {
        self.0.set(node, true);
    }
    #[inline(always)]
    fn known(&self, node: usize) -> bool {
        self.0.get(node)
    }
    fn reset(&mut self) {
        self.0 = BitVec::new(self.0.len());
    }
}

impl<S: NodeStates, L: Label> Sequential<EventPred> for SeqIter<'_, S, L, true> {
    fn visit<R: IntoIterator<Item = usize>, E, C: FnMut(EventPred) -> ControlFlow<E, ()>>(
        &mut self,
        roots: R,
        mut callback: C,
    ) -> ControlFlow<E, ()> {
        let graph = self.graph;
        self.stack.clear();

        for root in roots {
            if self.state.known(root) {
                continue;
            }

            callback(EventPred::Init { root })?;

            self.state.set_known(root);

            callback(EventPred::Previsit {
                node: root,
                pred: root,
                root,
                depth: 0,
            })?;

            self.stack.push(Frame {
                node: root,
                next_arc: 0,
            });
            self.state.set_on_stack(root);

            'recurse: loop {
                let Some(depth) = self.stack.len().checked_sub(1) else {
                    break;
                };
                let frame = &mut self.stack[depth];
                let node = frame.node;
                let edges = graph.node(node).edges();

                while frame.next_arc < edges.len() {
                    let arc = frame.next_arc;
                    frame.next_arc += 1;
                    let succ = edges[arc].head_index();

                    if self.state.known(succ) {
                        // Vertex has already been discovered
                        callback(EventPred::Revisit {
                            node: succ,
                            pred: node,
                            arc,
                            root,
                            depth: depth + 1,
                            on_stack: self.state.on_stack(succ),
                        })?;
                    } else {
                        // First time seeing vertex
                        self.state.set_known(succ);

                        callback(EventPred::Previsit {
                            node: succ,
                            pred: node,
                            root,
                            depth: depth + 1,
                        })?;

                        self.stack.push(Frame {
                            node: succ,
                            next_arc: 0,
                        });
                        self.state.set_on_stack(succ);

                        continue 'recurse;
                    }
                }

                // The parent is the frame below, or the root itself
                let pred = match depth {
                    0 => root,
                    _ => self.stack[depth - 1].node,
                };

                callback(EventPred::Postvisit {
                    node,
                    pred,
                    root,
                    depth,
                })?;

                self.state.set_off_stack(node);
                self.stack.pop();
            }

            callback(EventPred::Done { root })?;
        }

        Continue(())
    }

    fn visit_all<E, C: FnMut(EventPred) -> ControlFlow<E, ()>>(
        &mut self,
        callback: C,
    ) -> ControlFlow<E, ()> {
        let num_vertices = self.graph.num_vertices();
        self.visit(0..num_vertices, callback)
    }

    fn reset(&mut self) {
        self.stack.clear();
        self.state.reset();
    }
}

impl<L: Label> Sequential<EventNoPred> for SeqIter<'_, TwoStates, L, false> {
    fn visit<R: IntoIterator<Item = usize>, E, C: FnMut(EventNoPred) -> ControlFlow<E, ()>>(
        &mut self,
        roots: R,
        mut callback: C,
    ) -> ControlFlow<E, ()> {
        let graph = self.graph;
        self.stack.clear();

        for root in roots {
            if self.state.known(root) {
                continue;
            }

            callback(EventNoPred::Init { root })?;

            self.state.set_known(root);

            callback(EventNoPred::Previsit {
                node: root,
                root,
                depth: 0,
            })?;

            self.stack.push(Frame {
                node: root,
                next_arc: 0,
            });

            'recurse: loop {
                let Some(depth) = self.stack.len().checked_sub(1) else {
                    break;
                };
                let frame = &mut self.stack[depth];
                let edges = graph.node(frame.node).edges();

                while frame.next_arc < edges.len() {
                    let succ = edges[frame.next_arc].head_index();
                    frame.next_arc += 1;

                    if self.state.known(succ) {
                        callback(EventNoPred::Revisit {
                            node: succ,
                            root,
                            depth: depth + 1,
                        })?;
                    } else {
                        self.state.set_known(succ);

                        callback(EventNoPred::Previsit {
                            node: succ,
                            root,
                            depth: depth + 1,
                        })?;

                        self.stack.push(Frame {
                            node: succ,
                            next_arc: 0,
                        });

                        continue 'recurse;
                    }
                }

                self.stack.pop();
            }

            callback(EventNoPred::Done { root })?;
        }

        Continue(())
    }

    fn visit_all<E, C: FnMut(EventNoPred) -> ControlFlow<E, ()>>(
        &mut self,
        callback: C,
    ) -> ControlFlow<E, ()> {
        let num_vertices = self.graph.num_vertices();
        self.visit(0..num_vertices, callback)
    }

    fn reset(&mut self) {
        self.stack.clear();
        self.state.reset();
    }
}
