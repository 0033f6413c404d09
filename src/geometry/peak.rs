// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Detection of caps (pyramids, cupolas, rotundas) standing on a polyhedron

use super::{Edge, Polyhedron};
use crate::error::{Error, Result};
use crate::utils::math::{Plane, PRECISION};
use nalgebra::Point3;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashSet};

/// How a peak is rooted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PeakKind {
    /// Fan of triangles around an apex vertex
    Pyramid { apex: usize },
    /// Top polygon ringed by squares and triangles
    Cupola { top: usize },
    /// Top pentagon ringed by triangles, pentagons and a lower band of triangles
    Rotunda { top: usize },
}

impl PeakKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Pyramid { .. } => "pyramid",
            Self::Cupola { .. } => "cupola",
            Self::Rotunda { .. } => "rotunda",
        }
    }
}

/// A maximal cap of faces that can be removed or rotated as a unit
#[derive(Debug, Clone, PartialEq)]
pub struct Peak {
    kind: PeakKind,
    faces: Vec<usize>,
    boundary: Vec<Edge>,
    inner_vertices: Vec<usize>,
    top_point: Point3<f64>,
}

impl Peak {
    /// Every valid peak of `polyhedron`: pyramids by apex index, then cupolas
    /// and rotundas by top face index
    pub fn get_all(polyhedron: &Polyhedron) -> Vec<Peak> {
        let mut candidates = Vec::new();

        for v in polyhedron.vertex_indices() {
            let faces = &polyhedron.vertex_faces()[v];
            if (3..=5).contains(&faces.len())
                && faces.iter().all(|&f| polyhedron.face(f).num_sides() == 3)
            {
                candidates.push((PeakKind::Pyramid { apex: v }, faces.clone()));
            }
        }

        for top in polyhedron.face_list() {
            let n = top.num_sides();
            if !(3..=5).contains(&n) {
                continue;
            }
            let neighbors = top.adjacent_faces();
            if neighbors.len() == n && neighbors.iter().all(|f| f.num_sides() == 4) {
                let faces: Vec<usize> = polyhedron
                    .adjacent_faces(top.vertices())
                    .iter()
                    .map(|f| f.index())
                    .collect();
                if is_cupola_shaped(polyhedron, top.index(), &faces) {
                    candidates.push((PeakKind::Cupola { top: top.index() }, faces));
                }
            }
            if n == 5 && neighbors.len() == 5 && neighbors.iter().all(|f| f.num_sides() == 3) {
                let mut ring: Vec<usize> = top.vertices().to_vec();
                for f in &neighbors {
                    ring.extend(f.vertices().iter().filter(|v| !top.contains_vertex(**v)));
                }
                let faces: Vec<usize> = polyhedron
                    .adjacent_faces(&ring)
                    .iter()
                    .map(|f| f.index())
                    .collect();
                if is_rotunda_shaped(polyhedron, &faces) {
                    candidates.push((PeakKind::Rotunda { top: top.index() }, faces));
                }
            }
        }

        let peaks: Vec<Peak> = candidates
            .into_iter()
            .filter_map(|(kind, faces)| Self::from_faces(polyhedron, kind, faces))
            .collect();
        tracing::trace!(count = peaks.len(), "detected peaks");
        peaks
    }

    /// The peak under `point`: the one containing the nearest face, closest
    /// top point first
    pub fn find_peak(polyhedron: &Polyhedron, point: &Point3<f64>) -> Option<Peak> {
        let hit = polyhedron.hit_face(point)?.index();
        Self::get_all(polyhedron)
            .into_iter()
            .filter(|peak| peak.contains_face(hit))
            .min_by(|a, b| {
                let da = (a.top_point - point).norm();
                let db = (b.top_point - point).norm();
                da.total_cmp(&db)
            })
    }

    fn from_faces(polyhedron: &Polyhedron, kind: PeakKind, mut faces: Vec<usize>) -> Option<Peak> {
        if faces.len() + 2 > polyhedron.num_faces() {
            return None;
        }
        faces.sort_unstable();
        let boundary = boundary_ring(polyhedron, &faces).ok()?;
        let boundary_vertices: Vec<usize> = boundary.iter().map(|e| e.a).collect();
        if !polyhedron.is_planar(&boundary_vertices) {
            return None;
        }

        let on_boundary: HashSet<usize> = boundary_vertices.iter().copied().collect();
        let inner_vertices: Vec<usize> = faces
            .iter()
            .flat_map(|&f| polyhedron.faces()[f].iter().copied())
            .filter(|v| !on_boundary.contains(v))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        if inner_vertices.is_empty() {
            return None;
        }

        let ring: Vec<Point3<f64>> = boundary_vertices
            .iter()
            .map(|&v| *polyhedron.vertex(v))
            .collect();
        let plane = Plane::from_points(&ring).ok()?;
        let heights: Vec<f64> = inner_vertices
            .iter()
            .map(|&v| plane.signed_distance(polyhedron.vertex(v)))
            .collect();
        let above = heights.iter().all(|&h| h > PRECISION);
        let below = heights.iter().all(|&h| h < -PRECISION);
        if !(above || below) {
            return None;
        }

        let top_point = match kind {
            PeakKind::Pyramid { apex } => *polyhedron.vertex(apex),
            PeakKind::Cupola { top } | PeakKind::Rotunda { top } => {
                polyhedron.face(top).centroid()
            }
        };

        Some(Peak {
            kind,
            faces,
            boundary,
            inner_vertices,
            top_point,
        })
    }

    pub fn kind(&self) -> PeakKind {
        self.kind
    }

    /// Apex position, or the centroid of the top face
    pub fn top_point(&self) -> Point3<f64> {
        self.top_point
    }

    /// Member face indices, ascending
    pub fn faces(&self) -> &[usize] {
        &self.faces
    }

    pub fn contains_face(&self, face: usize) -> bool {
        self.faces.binary_search(&face).is_ok()
    }

    /// Edges separating the peak from the rest of the mesh, as one ordered
    /// loop directed the way the peak's own faces traverse them
    pub fn boundary(&self) -> &[Edge] {
        &self.boundary
    }

    pub fn boundary_vertices(&self) -> Vec<usize> {
        self.boundary.iter().map(|e| e.a).collect()
    }

    /// Peak vertices not on the boundary, ascending
    pub fn inner_vertices(&self) -> &[usize] {
        &self.inner_vertices
    }

    /// True for caps with two rotational alignments (cupolas and rotundas)
    pub fn is_gyrate_ambiguous(&self) -> bool {
        !matches!(self.kind, PeakKind::Pyramid { .. })
    }
}

/// Top + n squares + n triangles
fn is_cupola_shaped(polyhedron: &Polyhedron, top: usize, faces: &[usize]) -> bool {
    let n = polyhedron.face(top).num_sides();
    let sides = count_sides(polyhedron, faces.iter().copied().filter(|&f| f != top));
    faces.len() == 2 * n + 1 && sides.get(&3) == Some(&n) && sides.get(&4) == Some(&n)
}

/// Top pentagon + 5 pentagons + 10 triangles
fn is_rotunda_shaped(polyhedron: &Polyhedron, faces: &[usize]) -> bool {
    let sides = count_sides(polyhedron, faces.iter().copied());
    faces.len() == 16 && sides.get(&3) == Some(&10) && sides.get(&5) == Some(&6)
}

fn count_sides(
    polyhedron: &Polyhedron,
    faces: impl Iterator<Item = usize>,
) -> BTreeMap<usize, usize> {
    let mut counts = BTreeMap::new();
    for f in faces {
        *counts.entry(polyhedron.face(f).num_sides()).or_insert(0) += 1;
    }
    counts
}

/// The directed edges of `faces` whose other side lies outside `faces`,
/// chained into one closed loop.
///
/// Fails if the region's border is empty, branches, or splits into several
/// loops.
pub fn boundary_ring(polyhedron: &Polyhedron, faces: &[usize]) -> Result<Vec<Edge>> {
    let members: HashSet<usize> = faces.iter().copied().collect();
    let mut edges = Vec::new();
    for &f in faces {
        let face = polyhedron
            .get_face(f)
            .ok_or_else(|| Error::structural(format!("face {} out of range", f)))?;
        for edge in face.directed_edges() {
            let outside = polyhedron
                .face_with_edge(&edge.twin())
                .map_or(true, |other| !members.contains(&other.index()));
            if outside {
                edges.push(edge);
            }
        }
    }
    order_loop(&edges)
}

fn order_loop(edges: &[Edge]) -> Result<Vec<Edge>> {
    let first = *edges
        .first()
        .ok_or_else(|| Error::structural("region has no boundary"))?;
    let mut by_start = BTreeMap::new();
    for edge in edges {
        if by_start.insert(edge.a, *edge).is_some() {
            return Err(Error::structural(format!(
                "boundary branches at vertex {}",
                edge.a
            )));
        }
    }

    let mut ring = vec![first];
    let mut current = first;
    while ring.len() < edges.len() {
        let next = *by_start.get(&current.b).ok_or_else(|| {
            Error::structural(format!("boundary is open at vertex {}", current.b))
        })?;
        if next == first {
            return Err(Error::structural("boundary splits into several loops"));
        }
        ring.push(next);
        current = next;
    }
    if current.b != first.a {
        return Err(Error::structural("boundary does not close"));
    }
    Ok(ring)
}
