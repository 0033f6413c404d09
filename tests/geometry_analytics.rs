// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Geometry analytics verification tests

use anyhow::Result;
use approx::assert_relative_eq;
use polyhedra::catalog;
use polyhedra::geometry::{analyze, Peak};
use polyhedra::operations::diminish;

#[test]
fn test_cube_volume_and_surface_area() -> Result<()> {
    let stats = analyze(&catalog::get("cube")?);

    println!("Cube:");
    println!("  Volume: {:.4} (expected: 1)", stats.volume);
    println!("  Surface area: {:.4} (expected: 6)", stats.surface_area);

    assert_relative_eq!(stats.volume, 1.0, epsilon = 1e-9);
    assert_relative_eq!(stats.surface_area, 6.0, epsilon = 1e-9);
    assert_eq!(stats.vertex_count, 8);
    assert_eq!(stats.edge_count, 12);
    assert_eq!(stats.face_summary(), "6×4");
    // Square cross-section stands on a corner, so x and y span the diagonal
    assert_relative_eq!(stats.bbox[3] - stats.bbox[0], 2f64.sqrt(), epsilon = 1e-9);
    assert_relative_eq!(stats.bbox[4] - stats.bbox[1], 2f64.sqrt(), epsilon = 1e-9);
    assert_relative_eq!(stats.bbox[2], -0.5, epsilon = 1e-9);
    assert_relative_eq!(stats.bbox[5], 0.5, epsilon = 1e-9);
    Ok(())
}

#[test]
fn test_surface_area_from_face_counts() -> Result<()> {
    let triangle = 3f64.sqrt() / 4.0;
    let pentagon = (25.0 + 10.0 * 5f64.sqrt()).sqrt() / 4.0;
    let decagon = 2.5 * (5.0 + 2.0 * 5f64.sqrt()).sqrt();

    for name in ["icosahedron", "pentagonal-rotunda", "pentagonal-orthobirotunda"] {
        let stats = analyze(&catalog::get(name)?);
        let expected: f64 = stats
            .faces_by_sides
            .iter()
            .map(|(&sides, &count)| {
                count as f64
                    * match sides {
                        3 => triangle,
                        5 => pentagon,
                        10 => decagon,
                        _ => unreachable!("{} has a {}-gon", name, sides),
                    }
            })
            .sum();
        println!("{:<28} area {:.4} ({})", name, stats.surface_area, stats.face_summary());
        assert_relative_eq!(stats.surface_area, expected, epsilon = 1e-6);
    }
    Ok(())
}

#[test]
fn test_every_solid_is_a_sphere_topologically() -> Result<()> {
    for name in catalog::names() {
        let stats = analyze(&catalog::get(name)?);
        assert_eq!(stats.euler_characteristic, 2, "{}", name);
        assert!(stats.is_closed, "{}", name);
        assert!(stats.volume > 0.0, "{}", name);
        assert_relative_eq!(stats.edge_length, 1.0, epsilon = 1e-6);
        for c in stats.centroid {
            assert!(c.abs() < 1e-6, "{} centroid {:?}", name, stats.centroid);
        }
    }
    Ok(())
}

#[test]
fn test_diminish_removes_cap_volume() -> Result<()> {
    let octahedron = catalog::get("octahedron")?;
    let peak = Peak::get_all(&octahedron).remove(0);
    let pyramid = diminish(&octahedron, &peak)?;

    let whole = analyze(&octahedron).volume;
    let half = analyze(&pyramid).volume;
    println!("Octahedron {:.6}, square pyramid {:.6}", whole, half);
    assert_relative_eq!(half * 2.0, whole, epsilon = 1e-9);
    Ok(())
}

#[test]
fn test_stats_serialize() -> Result<()> {
    let stats = analyze(&catalog::get("square-gyrobicupola")?);
    let json = serde_json::to_value(&stats)?;
    assert_eq!(json["name"], "square-gyrobicupola");
    assert_eq!(json["face_count"], 26);
    assert_eq!(json["faces_by_sides"]["3"], 8);
    assert_eq!(json["faces_by_sides"]["4"], 18);
    Ok(())
}
