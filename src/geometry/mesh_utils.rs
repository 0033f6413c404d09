// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Mesh validation utilities

use super::{Edge, Polyhedron};
use crate::error::Result;
use crate::utils::math::{approx_eq, PRECISION};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Count how many faces use each undirected edge
pub fn build_edge_counts(polyhedron: &Polyhedron) -> BTreeMap<(usize, usize), u32> {
    let mut edge_counts = BTreeMap::new();
    for face in polyhedron.face_list() {
        for edge in face.edges() {
            *edge_counts.entry(edge.key()).or_insert(0) += 1;
        }
    }
    edge_counts
}

/// Check if mesh is manifold (each edge shared by at most 2 faces)
pub fn is_manifold(polyhedron: &Polyhedron) -> bool {
    build_edge_counts(polyhedron).values().all(|&count| count <= 2)
}

/// Check if mesh is closed (each edge shared by exactly 2 faces)
pub fn is_closed(polyhedron: &Polyhedron) -> bool {
    build_edge_counts(polyhedron).values().all(|&count| count == 2)
}

/// Neighboring faces traverse every shared edge in opposite directions
pub fn has_consistent_winding(polyhedron: &Polyhedron) -> bool {
    let mut directed = BTreeMap::new();
    for face in polyhedron.face_list() {
        for edge in face.directed_edges() {
            if directed.insert((edge.a, edge.b), face.index()).is_some() {
                return false;
            }
        }
    }
    true
}

/// Every face normal points away from the centroid.
///
/// Only meaningful for convex solids, which covers the whole catalog.
pub fn has_outward_normals(polyhedron: &Polyhedron) -> bool {
    let centroid = polyhedron.centroid();
    polyhedron
        .face_list()
        .all(|face| face.normal().dot(&(face.centroid() - centroid)) > 0.0)
}

/// All edges have the same length within [`PRECISION`]
pub fn has_uniform_edges(polyhedron: &Polyhedron) -> bool {
    let length = polyhedron.edge_length();
    polyhedron.edges().iter().all(|edge| {
        let l = (polyhedron.vertex(edge.b) - polyhedron.vertex(edge.a)).norm();
        approx_eq(l, length, PRECISION)
    })
}

/// Edges used by exactly one face, in the direction that face uses them
pub fn find_boundary_edges(polyhedron: &Polyhedron) -> Vec<Edge> {
    let counts = build_edge_counts(polyhedron);
    polyhedron
        .face_list()
        .flat_map(|face| face.directed_edges())
        .filter(|edge| counts.get(&edge.key()) == Some(&1))
        .collect()
}

/// Mesh validation report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeshValidation {
    pub is_manifold: bool,
    pub is_closed: bool,
    pub has_consistent_winding: bool,
    pub has_outward_normals: bool,
    pub has_planar_faces: bool,
    pub has_uniform_edges: bool,
    pub edge_count: usize,
    pub boundary_edge_count: usize,
}

impl MeshValidation {
    /// A closed, oriented, planar, uniform-edge solid
    pub fn is_valid(&self) -> bool {
        self.is_manifold
            && self.is_closed
            && self.has_consistent_winding
            && self.has_outward_normals
            && self.has_planar_faces
            && self.has_uniform_edges
    }

    /// Names of the checks that failed
    pub fn failures(&self) -> Vec<&'static str> {
        let checks = [
            (self.is_manifold, "non-manifold edges"),
            (self.is_closed, "open boundary"),
            (self.has_consistent_winding, "inconsistent winding"),
            (self.has_outward_normals, "inward-facing normals"),
            (self.has_planar_faces, "non-planar faces"),
            (self.has_uniform_edges, "non-uniform edge lengths"),
        ];
        checks
            .iter()
            .filter(|(ok, _)| !ok)
            .map(|&(_, name)| name)
            .collect()
    }
}

pub fn validate_mesh(polyhedron: &Polyhedron) -> MeshValidation {
    let edge_counts = build_edge_counts(polyhedron);
    let boundary_edge_count = edge_counts.values().filter(|&&count| count == 1).count();

    MeshValidation {
        is_manifold: edge_counts.values().all(|&count| count <= 2),
        is_closed: edge_counts.values().all(|&count| count == 2),
        has_consistent_winding: has_consistent_winding(polyhedron),
        has_outward_normals: has_outward_normals(polyhedron),
        has_planar_faces: polyhedron.face_list().all(|face| face.is_planar()),
        has_uniform_edges: has_uniform_edges(polyhedron),
        edge_count: edge_counts.len(),
        boundary_edge_count,
    }
}

/// [`validate_mesh`] plus the structural checks of [`Polyhedron::validate`]
pub fn check(polyhedron: &Polyhedron) -> Result<MeshValidation> {
    polyhedron.validate()?;
    Ok(validate_mesh(polyhedron))
}
