// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Edges between two vertices of a polyhedron

use serde::{Deserialize, Serialize};

/// Edge from vertex `a` to vertex `b`.
///
/// As a directed edge it belongs to exactly one face of a closed mesh; its
/// [`twin`](Edge::twin) belongs to the face on the other side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Edge {
    pub a: usize,
    pub b: usize,
}

impl Edge {
    pub fn new(a: usize, b: usize) -> Self {
        Self { a, b }
    }

    /// The same edge traversed the other way
    pub fn twin(&self) -> Self {
        Self { a: self.b, b: self.a }
    }

    /// Direction-independent key, smaller index first
    pub fn key(&self) -> (usize, usize) {
        if self.a < self.b {
            (self.a, self.b)
        } else {
            (self.b, self.a)
        }
    }

    pub fn has_vertex(&self, v: usize) -> bool {
        self.a == v || self.b == v
    }

    /// True if both edges join the same two vertices, in either direction
    pub fn same_as(&self, other: &Edge) -> bool {
        self.key() == other.key()
    }
}

impl From<(usize, usize)> for Edge {
    fn from((a, b): (usize, usize)) -> Self {
        Self::new(a, b)
    }
}

impl From<[usize; 2]> for Edge {
    fn from([a, b]: [usize; 2]) -> Self {
        Self::new(a, b)
    }
}
