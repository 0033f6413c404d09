// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Polyhedron comparison for round-trip and identity checks

use crate::geometry::Polyhedron;
use serde::{Deserialize, Serialize};

/// Result of polyhedron comparison
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PolyhedronComparison {
    pub vertex_count_match: bool,
    pub face_count_match: bool,
    /// Same face-type histogram and face adjacency fingerprint
    pub same_topology: bool,
    /// Largest distance between corresponding vertices, if the counts match
    pub max_vertex_distance: Option<f64>,
    pub tolerance: f64,
    pub passed: bool,
}

/// Compare two polyhedra, vertex by vertex where the counts allow
pub fn compare_polyhedra(a: &Polyhedron, b: &Polyhedron, tolerance: f64) -> PolyhedronComparison {
    let vertex_count_match = a.num_vertices() == b.num_vertices();
    let face_count_match = a.num_faces() == b.num_faces();
    let same_topology = a.is_same(b);

    let max_vertex_distance = vertex_count_match.then(|| {
        a.vertices()
            .iter()
            .zip(b.vertices())
            .map(|(p, q)| (p - q).norm())
            .fold(0.0, f64::max)
    });
    let positions_match = max_vertex_distance.map_or(false, |d| d <= tolerance);

    PolyhedronComparison {
        vertex_count_match,
        face_count_match,
        same_topology,
        max_vertex_distance,
        tolerance,
        passed: face_count_match && same_topology && positions_match,
    }
}
