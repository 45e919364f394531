/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap};

/// The value of an annotation attached to a vertex or an edge.
#[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum AttrValue {
    Flag(bool),
    Index(usize),
    Text(String),
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        AttrValue::Flag(value)
    }
}

impl From<usize> for AttrValue {
    fn from(value: usize) -> Self {
        AttrValue::Index(value)
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        AttrValue::Text(value)
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        AttrValue::Text(value.to_owned())
    }
}

/// Open-ended, string-keyed annotations of a vertex or an edge.
///
/// Annotations exist only for the benefit of observers (e.g., to drive the
/// styling of a drawing); algorithms never read them. They can be modified
/// through a shared reference, so that an [advisor](crate::advisor::Advisor)
/// can annotate the graph while an algorithm is visiting it.
///
/// Borrows of the underlying map never escape the methods of this type, so
/// no method can panic because of a conflicting borrow.
#[derive(Debug, Clone, Default)]
pub struct Attributes(RefCell<HashMap<String, AttrValue>>);

impl Attributes {
    /// Sets the attribute `name` to `value`, returning the previous value.
    pub fn set(&self, name: impl Into<String>, value: impl Into<AttrValue>) -> Option<AttrValue> {
        self.0.borrow_mut().insert(name.into(), value.into())
    }

    /// Returns a copy of the value of the attribute `name`, if set.
    pub fn get(&self, name: &str) -> Option<AttrValue> {
        self.0.borrow().get(name).cloned()
    }

    /// Returns true if the attribute `name` is set to [`AttrValue::Flag(true)`].
    pub fn flag(&self, name: &str) -> bool {
        matches!(self.0.borrow().get(name), Some(AttrValue::Flag(true)))
    }

    /// Removes the attribute `name`, returning its value.
    pub fn remove(&self, name: &str) -> Option<AttrValue> {
        self.0.borrow_mut().remove(name)
    }

    /// Removes all attributes.
    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }

    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }

    /// Returns a sorted copy of all attributes.
    pub fn snapshot(&self) -> BTreeMap<String, AttrValue> {
        self.0
            .borrow()
            .iter()
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect()
    }
}
