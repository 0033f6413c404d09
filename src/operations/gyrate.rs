// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Rotate a cupola or rotunda in place by one boundary step

use super::check_peak;
use crate::error::{Error, Result};
use crate::geometry::{Peak, Polyhedron};
use crate::utils::math;
use nalgebra::{Point3, Rotation3, Unit};
use std::collections::HashMap;
use std::f64::consts::PI;
use tracing::debug;

/// Turn `peak` by `2π / m` for an m-edge boundary, toggling ortho and gyro.
///
/// Face indices and counts are preserved; only inner vertex positions move
/// and the peak's faces re-pair with the boundary one vertex further along.
pub fn gyrate(polyhedron: &Polyhedron, peak: &Peak) -> Result<Polyhedron> {
    if !peak.is_gyrate_ambiguous() {
        return Err(Error::operation(format!(
            "a {} has a single alignment and cannot be gyrated",
            peak.kind().name()
        )));
    }
    check_peak(polyhedron, peak)?;

    let ring = peak.boundary_vertices();
    let m = ring.len();
    let positions: Vec<Point3<f64>> = ring.iter().map(|&v| *polyhedron.vertex(v)).collect();
    let center = math::centroid(&positions)?;
    let axis = Unit::new_normalize(math::normal(&center, &positions[0], &positions[1]));
    let rotation = Rotation3::from_axis_angle(&axis, 2.0 * PI / m as f64);

    let mut vertices = polyhedron.vertices().to_vec();
    for &v in peak.inner_vertices() {
        vertices[v] = center + rotation * (vertices[v] - center);
    }

    let next: HashMap<usize, usize> = (0..m).map(|i| (ring[i], ring[(i + 1) % m])).collect();
    let result = polyhedron.with_vertices(vertices)?.map_faces(|face| {
        if peak.contains_face(face.index()) {
            face.vertices()
                .iter()
                .map(|v| next.get(v).copied().unwrap_or(*v))
                .collect()
        } else {
            face.vertices().to_vec()
        }
    })?;
    debug!(
        kind = peak.kind().name(),
        boundary = m,
        "gyrated"
    );
    Ok(result)
}
