/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Visits on [graphs](crate::graph::Graph).
//!
//! Visits address vertices by their insertion position, and generate events
//! that are passed to a callback. The callback returns a [`ControlFlow`]:
//! [`Break`](ControlFlow::Break) stops the visit immediately, and the value
//! is returned to the caller.

pub mod depth_first;

use std::ops::ControlFlow;
use thiserror::Error;

/// An error that can be used to stop a visit as soon as the answer is known.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Stopped when done")]
pub struct StoppedWhenDone;

/// A sequential visit.
///
/// Implementations must provide a [`visit`](Sequential::visit) method,
/// which visits the graph starting from a sequence of roots, skipping roots
/// that have already been reached.
pub trait Sequential<A> {
    /// Visits the graph from the specified roots, in order.
    ///
    /// # Arguments
    ///
    /// * `roots`: the vertices to start the visit from; roots that have
    ///   already been visited are skipped.
    ///
    /// * `callback`: the callback function; if it returns
    ///   [`Break`](ControlFlow::Break), the visit stops and the value is
    ///   returned.
    fn visit<R: IntoIterator<Item = usize>, E, C: FnMut(A) -> ControlFlow<E, ()>>(
        &mut self,
        roots: R,
        callback: C,
    ) -> ControlFlow<E, ()>;

    /// Visits the whole graph, using all vertices as roots in insertion
    /// order.
    fn visit_all<E, C: FnMut(A) -> ControlFlow<E, ()>>(
        &mut self,
        callback: C,
    ) -> ControlFlow<E, ()>;

    /// Resets the visit status, making it possible to reuse it.
    fn reset(&mut self);
}
