// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Unit-edge generators for the building-block solids.
//!
//! Every generator stands on the XY plane with its axis along +Z and winds its
//! faces counter-clockwise seen from outside.

use super::Polyhedron;
use nalgebra::Point3;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Building-block solids
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Primitive {
    /// Pyramid over an n-gon, n in 3..=5
    Pyramid(usize),
    Prism(usize),
    Antiprism(usize),
    /// Cupola with an n-gon top and a 2n-gon base, n in 3..=5
    Cupola(usize),
    /// Pentagonal rotunda
    Rotunda,
}

impl Primitive {
    pub fn to_polyhedron(&self) -> Polyhedron {
        match *self {
            Self::Pyramid(n) => pyramid(n),
            Self::Prism(n) => prism(n),
            Self::Antiprism(n) => antiprism(n),
            Self::Cupola(n) => cupola(n),
            Self::Rotunda => rotunda(),
        }
    }

    /// Index of the face resting on the XY plane
    pub fn base_face(&self) -> usize {
        match *self {
            Self::Pyramid(_) => 0,
            Self::Prism(_) | Self::Antiprism(_) => 1,
            Self::Cupola(n) => 2 * n + 1,
            Self::Rotunda => 16,
        }
    }

    /// Index of the face opposite the base, if there is one
    pub fn top_face(&self) -> Option<usize> {
        match *self {
            Self::Pyramid(_) => None,
            _ => Some(0),
        }
    }
}

/// Circumradius and inradius of a regular n-gon with unit sides
struct PolygonGeom {
    n: usize,
    in_radius: f64,
    out_radius: f64,
}

impl PolygonGeom {
    fn new(n: usize) -> Self {
        let half_angle = PI / n as f64;
        Self {
            n,
            in_radius: 1.0 / (2.0 * half_angle.tan()),
            out_radius: 1.0 / (2.0 * half_angle.sin()),
        }
    }

    /// Vertices at angles `2π (i + offset) / n`, at height `z`
    fn ring(&self, offset: f64, z: f64) -> Vec<Point3<f64>> {
        ring(self.n, self.out_radius, offset, z)
    }
}

fn ring(n: usize, radius: f64, offset: f64, z: f64) -> Vec<Point3<f64>> {
    (0..n)
        .map(|i| {
            let a = 2.0 * PI * (i as f64 + offset) / n as f64;
            Point3::new(radius * a.cos(), radius * a.sin(), z)
        })
        .collect()
}

/// Pyramid over a regular n-gon; face 0 is the base
pub fn pyramid(n: usize) -> Polyhedron {
    assert!((3..=5).contains(&n), "no regular pyramid over a {}-gon", n);
    let geom = PolygonGeom::new(n);
    let height = (1.0 - geom.out_radius * geom.out_radius).sqrt();

    let mut vertices = geom.ring(0.0, 0.0);
    vertices.push(Point3::new(0.0, 0.0, height));
    let apex = n;

    let mut faces = vec![(0..n).rev().collect::<Vec<_>>()];
    for i in 0..n {
        faces.push(vec![i, (i + 1) % n, apex]);
    }
    Polyhedron::new(vertices, faces)
}

/// Prism over a regular n-gon; face 0 is the top, face 1 the base
pub fn prism(n: usize) -> Polyhedron {
    assert!(n >= 3);
    let geom = PolygonGeom::new(n);
    let bottom = |i: usize| i % n;
    let top = |i: usize| n + i % n;

    let mut vertices = geom.ring(0.0, 0.0);
    vertices.extend(geom.ring(0.0, 1.0));

    let mut faces = vec![
        (0..n).map(top).collect::<Vec<_>>(),
        (0..n).rev().map(bottom).collect(),
    ];
    for i in 0..n {
        faces.push(vec![bottom(i), bottom(i + 1), top(i + 1), top(i)]);
    }
    Polyhedron::new(vertices, faces)
}

/// Antiprism over a regular n-gon; face 0 is the top, face 1 the base
pub fn antiprism(n: usize) -> Polyhedron {
    assert!(n >= 3);
    let geom = PolygonGeom::new(n);
    let r = geom.out_radius;
    let horizontal = 2.0 * r * r * (1.0 - (PI / n as f64).cos());
    let height = (1.0 - horizontal).sqrt();
    let bottom = |i: usize| i % n;
    let top = |i: usize| n + i % n;

    let mut vertices = geom.ring(0.0, 0.0);
    vertices.extend(geom.ring(0.5, height));

    let mut faces = vec![
        (0..n).map(top).collect::<Vec<_>>(),
        (0..n).rev().map(bottom).collect(),
    ];
    for i in 0..n {
        faces.push(vec![bottom(i), bottom(i + 1), top(i)]);
        faces.push(vec![bottom(i + 1), top(i + 1), top(i)]);
    }
    Polyhedron::new(vertices, faces)
}

/// Cupola joining an n-gon top to a 2n-gon base.
///
/// Face 0 is the top, faces `1..=2n` alternate triangle and square, and face
/// `2n + 1` is the base.
pub fn cupola(n: usize) -> Polyhedron {
    assert!((3..=5).contains(&n), "no regular cupola with a {}-gon top", n);
    let top_geom = PolygonGeom::new(n);
    let base_geom = PolygonGeom::new(2 * n);
    let rad_diff = base_geom.in_radius - top_geom.in_radius;
    let height = (1.0 - rad_diff * rad_diff).sqrt();
    let top = |i: usize| i % n;
    let bottom = |j: usize| n + j % (2 * n);

    let mut vertices = top_geom.ring(0.5, height);
    vertices.extend(base_geom.ring(0.5, 0.0));

    let mut faces = vec![(0..n).map(top).collect::<Vec<_>>()];
    for i in 0..n {
        faces.push(vec![bottom(2 * i), bottom(2 * i + 1), top(i)]);
        faces.push(vec![bottom(2 * i + 1), bottom(2 * i + 2), top(i + 1), top(i)]);
    }
    faces.push((0..2 * n).rev().map(bottom).collect());
    Polyhedron::new(vertices, faces)
}

/// Pentagonal rotunda: half an icosidodecahedron.
///
/// Face 0 is the top pentagon and face 16 the decagonal base.
pub fn rotunda() -> Polyhedron {
    let pentagon = PolygonGeom::new(5);
    let decagon = PolygonGeom::new(10);
    let base_radius = decagon.out_radius;
    // Every vertex lies on the circumsphere centred on the base
    let top_height = (base_radius.powi(2) - pentagon.out_radius.powi(2)).sqrt();
    let mid_radius =
        (2.0 * base_radius.powi(2) - 1.0) / (2.0 * base_radius * (PI / 10.0).cos());
    let mid_height = (base_radius.powi(2) - mid_radius.powi(2)).sqrt();

    let top = |i: usize| i % 5;
    let mid = |i: usize| 5 + i % 5;
    let bottom = |k: usize| 10 + k % 10;

    let mut vertices = pentagon.ring(0.0, top_height);
    vertices.extend(ring(5, mid_radius, 0.5, mid_height));
    vertices.extend(decagon.ring(0.5, 0.0));

    let mut faces = vec![(0..5).map(top).collect::<Vec<_>>()];
    for i in 0..5 {
        faces.push(vec![mid(i), top(i + 1), top(i)]);
        faces.push(vec![bottom(2 * i + 9), bottom(2 * i), mid(i), top(i), mid(i + 4)]);
        faces.push(vec![bottom(2 * i), bottom(2 * i + 1), mid(i)]);
    }
    faces.push((0..10).rev().map(bottom).collect());
    Polyhedron::new(vertices, faces)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::math::PRECISION;

    fn assert_unit_regular(poly: &Polyhedron) {
        assert!(poly.validate().is_ok(), "{:?}", poly.validate());
        let centroid = poly.centroid();
        for edge in poly.edges() {
            let length = (poly.vertex(edge.b) - poly.vertex(edge.a)).norm();
            assert!((length - 1.0).abs() < PRECISION, "edge length {}", length);
        }
        for face in poly.face_list() {
            assert!(face.is_planar(), "face {} is not planar", face.index());
            assert!(face.is_regular(), "face {} is not regular", face.index());
            assert!(
                face.normal().dot(&(face.centroid() - centroid)) > 0.0,
                "face {} points inwards",
                face.index()
            );
        }
    }

    #[test]
    fn test_pyramids() {
        for n in 3..=5 {
            let p = pyramid(n);
            assert_unit_regular(&p);
            assert_eq!(p.num_faces(), n + 1);
        }
    }

    #[test]
    fn test_prisms_and_antiprisms() {
        for n in [3, 4, 5, 6, 8, 10] {
            assert_unit_regular(&prism(n));
            assert_unit_regular(&antiprism(n));
        }
    }

    #[test]
    fn test_cupolas() {
        for n in 3..=5 {
            let c = cupola(n);
            assert_unit_regular(&c);
            assert_eq!(c.num_faces(), 2 * n + 2);
            assert_eq!(c.face(Primitive::Cupola(n).base_face()).num_sides(), 2 * n);
        }
        assert_eq!(cupola(3).face(7).num_sides(), 6);
    }

    #[test]
    fn test_rotunda() {
        let r = rotunda();
        assert_unit_regular(&r);
        assert_eq!(r.num_vertices(), 20);
        assert_eq!(r.num_faces(), 17);
        assert_eq!(r.num_faces_by_sides().get(&3), Some(&10));
        assert_eq!(r.num_faces_by_sides().get(&5), Some(&6));
        assert_eq!(r.face(Primitive::Rotunda.base_face()).num_sides(), 10);
    }

    #[test]
    fn test_primitive_enum_dispatch() {
        let p = Primitive::Prism(6).to_polyhedron();
        assert_eq!(p.face(Primitive::Prism(6).base_face()).num_sides(), 6);
        assert_eq!(Primitive::Pyramid(4).top_face(), None);
    }
}
