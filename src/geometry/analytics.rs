// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Polyhedron analytics and statistics

use super::{mesh_utils, Polyhedron};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Polyhedron statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolyhedronStats {
    pub name: Option<String>,
    pub vertex_count: usize,
    pub edge_count: usize,
    pub face_count: usize,
    /// Number of faces for each side count
    pub faces_by_sides: BTreeMap<usize, usize>,
    /// V - E + F, 2 for every closed genus-0 solid
    pub euler_characteristic: i64,
    pub edge_length: f64,
    pub volume: f64,
    pub surface_area: f64,
    /// Mean vertex position [x, y, z]
    pub centroid: [f64; 3],
    /// Bounding box [min_x, min_y, min_z, max_x, max_y, max_z]
    pub bbox: [f64; 6],
    pub is_closed: bool,
}

impl PolyhedronStats {
    /// Short face summary such as `8×3 + 6×4`
    pub fn face_summary(&self) -> String {
        self.faces_by_sides
            .iter()
            .map(|(sides, count)| format!("{}×{}", count, sides))
            .collect::<Vec<_>>()
            .join(" + ")
    }

    /// Pretty print statistics
    pub fn print(&self) {
        println!("╔══════════════════════════════════════════════════════════╗");
        println!("║              POLYHEDRON ANALYTICS                        ║");
        println!("╠══════════════════════════════════════════════════════════╣");
        println!(
            "║ Name:            {:<40}║",
            self.name.as_deref().unwrap_or("(unnamed)")
        );
        println!("║ Faces:           {:<40}║", self.face_summary());
        println!(
            "║ V / E / F:       {:<40}║",
            format!(
                "{} / {} / {}",
                self.vertex_count, self.edge_count, self.face_count
            )
        );
        println!(
            "║ Euler:           {:>10}                              ║",
            self.euler_characteristic
        );
        println!("║                                                          ║");
        println!(
            "║ Edge Length:     {:>10.4}                              ║",
            self.edge_length
        );
        println!(
            "║ Volume:          {:>10.4}                              ║",
            self.volume
        );
        println!(
            "║ Surface Area:    {:>10.4}                              ║",
            self.surface_area
        );
        println!(
            "║ Centroid:        ({:>7.2}, {:>7.2}, {:>7.2})            ║",
            self.centroid[0], self.centroid[1], self.centroid[2]
        );
        println!(
            "║   Size: {:>7.2} × {:>7.2} × {:>7.2}                      ║",
            self.bbox[3] - self.bbox[0],
            self.bbox[4] - self.bbox[1],
            self.bbox[5] - self.bbox[2]
        );
        println!(
            "║ Closed:          {:>10}                              ║",
            if self.is_closed { "Yes" } else { "No" }
        );
        println!("╚══════════════════════════════════════════════════════════╝");
    }
}

/// Analyze a polyhedron and compute statistics
pub fn analyze(polyhedron: &Polyhedron) -> PolyhedronStats {
    let vertex_count = polyhedron.num_vertices();
    let edge_count = polyhedron.edges().len();
    let face_count = polyhedron.num_faces();
    let centroid = polyhedron.centroid();

    PolyhedronStats {
        name: polyhedron.name().map(str::to_string),
        vertex_count,
        edge_count,
        face_count,
        faces_by_sides: polyhedron.num_faces_by_sides(),
        euler_characteristic: vertex_count as i64 - edge_count as i64 + face_count as i64,
        edge_length: polyhedron.edge_length(),
        volume: calculate_volume(polyhedron),
        surface_area: polyhedron.face_list().map(|f| f.area()).sum(),
        centroid: [centroid.x, centroid.y, centroid.z],
        bbox: calculate_bounding_box(polyhedron),
        is_closed: mesh_utils::is_closed(polyhedron),
    }
}

fn calculate_bounding_box(polyhedron: &Polyhedron) -> [f64; 6] {
    if polyhedron.num_vertices() == 0 {
        return [0.0; 6];
    }
    let mut bbox = [
        f64::MAX,
        f64::MAX,
        f64::MAX,
        f64::MIN,
        f64::MIN,
        f64::MIN,
    ];
    for p in polyhedron.vertices() {
        for axis in 0..3 {
            bbox[axis] = bbox[axis].min(p[axis]);
            bbox[axis + 3] = bbox[axis + 3].max(p[axis]);
        }
    }
    bbox
}

/// Volume by summing signed tetrahedra from the origin over each face fan
fn calculate_volume(polyhedron: &Polyhedron) -> f64 {
    let mut volume = 0.0;
    for face in polyhedron.face_list() {
        let c = face.centroid().coords;
        let positions = face.vertex_positions();
        let n = positions.len();
        for i in 0..n {
            let a = positions[i].coords;
            let b = positions[(i + 1) % n].coords;
            volume += c.dot(&a.cross(&b)) / 6.0;
        }
    }
    volume.abs()
}
