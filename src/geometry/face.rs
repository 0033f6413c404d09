// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Borrowed per-face view of a polyhedron

use super::{Edge, Polyhedron};
use crate::utils::math::{self, Plane, PRECISION};
use nalgebra::{Point3, Vector3};

/// A face of a particular [`Polyhedron`] snapshot.
///
/// Views are plain `(polyhedron, index)` pairs borrowed from the mesh, so they
/// cost nothing to create and cannot outlive the snapshot they describe.
#[derive(Debug, Clone, Copy)]
pub struct Face<'a> {
    polyhedron: &'a Polyhedron,
    index: usize,
}

impl<'a> Face<'a> {
    pub(crate) fn new(polyhedron: &'a Polyhedron, index: usize) -> Self {
        Self { polyhedron, index }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn polyhedron(&self) -> &'a Polyhedron {
        self.polyhedron
    }

    /// Vertex indices in counter-clockwise order seen from outside
    pub fn vertices(&self) -> &'a [usize] {
        &self.polyhedron.faces()[self.index]
    }

    pub fn vertex_positions(&self) -> Vec<Point3<f64>> {
        self.vertices()
            .iter()
            .map(|&v| *self.polyhedron.vertex(v))
            .collect()
    }

    pub fn num_sides(&self) -> usize {
        self.vertices().len()
    }

    /// Edges of this face as undirected pairs (smaller index first)
    pub fn edges(&self) -> Vec<Edge> {
        self.directed_edges()
            .into_iter()
            .map(|e| {
                let (a, b) = e.key();
                Edge::new(a, b)
            })
            .collect()
    }

    /// Edges in face order, including the wrap-around edge
    pub fn directed_edges(&self) -> Vec<Edge> {
        let verts = self.vertices();
        let n = verts.len();
        (0..n).map(|i| Edge::new(verts[i], verts[(i + 1) % n])).collect()
    }

    /// Faces sharing an edge with this one, in edge order
    pub fn adjacent_faces(&self) -> Vec<Face<'a>> {
        let polyhedron = self.polyhedron;
        polyhedron.face_graph()[self.index]
            .iter()
            .map(|&f| polyhedron.face(f))
            .collect()
    }

    pub fn centroid(&self) -> Point3<f64> {
        let verts = self.vertices();
        let sum = verts
            .iter()
            .fold(Vector3::zeros(), |acc, &v| acc + self.polyhedron.vertex(v).coords);
        Point3::from(sum / verts.len() as f64)
    }

    /// Supporting plane, with the normal pointing out of the solid
    pub fn plane(&self) -> Plane {
        let verts = self.vertices();
        Plane::from_triangle(
            self.polyhedron.vertex(verts[0]),
            self.polyhedron.vertex(verts[1]),
            self.polyhedron.vertex(verts[2]),
        )
    }

    pub fn normal(&self) -> Vector3<f64> {
        self.plane().normal
    }

    /// Distance between the first two vertices
    pub fn edge_length(&self) -> f64 {
        let verts = self.vertices();
        (self.polyhedron.vertex(verts[1]) - self.polyhedron.vertex(verts[0])).norm()
    }

    /// Distance from this face's centroid to the polyhedron's centroid
    pub fn distance_to_center(&self) -> f64 {
        (self.centroid() - self.polyhedron.centroid()).norm()
    }

    pub fn contains_vertex(&self, v: usize) -> bool {
        self.vertices().contains(&v)
    }

    /// Vertex following `v` in this face's cyclic order
    pub fn next_vertex(&self, v: usize) -> Option<usize> {
        let verts = self.vertices();
        let i = verts.iter().position(|&x| x == v)?;
        Some(verts[(i + 1) % verts.len()])
    }

    /// Vertex preceding `v` in this face's cyclic order
    pub fn prev_vertex(&self, v: usize) -> Option<usize> {
        let verts = self.vertices();
        let i = verts.iter().position(|&x| x == v)?;
        Some(verts[(i + verts.len() - 1) % verts.len()])
    }

    pub fn is_planar(&self) -> bool {
        math::is_planar(&self.vertex_positions())
    }

    /// All sides equal and all vertices equidistant from the centroid
    pub fn is_regular(&self) -> bool {
        let positions = self.vertex_positions();
        let centroid = self.centroid();
        let side = self.edge_length();
        let radius = (positions[0] - centroid).norm();
        let n = positions.len();
        (0..n).all(|i| {
            let next = &positions[(i + 1) % n];
            math::approx_eq((next - positions[i]).norm(), side, PRECISION)
                && math::approx_eq((positions[i] - centroid).norm(), radius, PRECISION)
        })
    }

    /// Area by fanning triangles out from the centroid
    pub fn area(&self) -> f64 {
        let positions = self.vertex_positions();
        let centroid = self.centroid();
        let n = positions.len();
        (0..n)
            .map(|i| {
                let a = positions[i] - centroid;
                let b = positions[(i + 1) % n] - centroid;
                a.cross(&b).norm() / 2.0
            })
            .sum()
    }
}

impl PartialEq for Face<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.polyhedron, other.polyhedron) && self.index == other.index
    }
}

impl Eq for Face<'_> {}
