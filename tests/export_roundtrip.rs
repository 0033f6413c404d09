// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Round-trip export/import tests

use anyhow::{Context, Result};
use nalgebra::Point3;
use polyhedra::geometry::Polyhedron;
use polyhedra::operations::{augment, Alignment, AugmentOptions};
use polyhedra::{catalog, io};
use tempfile::{NamedTempFile, TempDir};

/// Rebuild a polyhedron from OBJ text written by `export_obj`
fn parse_obj(text: &str) -> Result<Polyhedron> {
    let mut vertices = Vec::new();
    let mut faces = Vec::new();
    for line in text.lines() {
        let mut parts = line.split_whitespace();
        match parts.next() {
            Some("v") => {
                let coords: Vec<f64> = parts.map(str::parse).collect::<Result<_, _>>()?;
                vertices.push(Point3::new(coords[0], coords[1], coords[2]));
            }
            Some("f") => {
                let face: Vec<usize> = parts
                    .map(|s| s.parse::<usize>().map(|i| i - 1))
                    .collect::<Result<_, _>>()?;
                faces.push(face);
            }
            _ => {}
        }
    }
    Ok(Polyhedron::of(vertices, faces)?)
}

#[test]
fn test_roundtrip_json_catalog() -> Result<()> {
    let dir = TempDir::new()?;
    for name in catalog::names() {
        let original = catalog::get(name)?;
        let path = dir.path().join(format!("{}.json", name));

        io::export_json(&original, &path, true)?;
        let imported = io::import_json(&path)?;

        let comparison = io::compare_polyhedra(&original, &imported, 1e-9);
        assert!(comparison.passed, "{}: {:?}", name, comparison);
        assert_eq!(imported.name(), Some(name));
        assert_eq!(imported.faces(), original.faces());
        assert_eq!(imported.edges(), original.edges());
    }
    Ok(())
}

#[test]
fn test_roundtrip_compact_json() -> Result<()> {
    let cupola = catalog::get("pentagonal-cupola")?;
    let pretty = io::to_json(&cupola, true)?;
    let compact = io::to_json(&cupola, false)?;
    println!(
        "JSON size: {} bytes pretty, {} bytes compact",
        pretty.len(),
        compact.len()
    );
    assert!(compact.len() < pretty.len());
    assert!(!compact.contains('\n'));

    let from_pretty = io::from_json(&pretty)?;
    let from_compact = io::from_json(&compact)?;
    assert_eq!(from_pretty, from_compact);
    Ok(())
}

#[test]
fn test_roundtrip_obj_export() -> Result<()> {
    let original = catalog::get("pentagonal-gyrocupolarotunda")?;
    let file = NamedTempFile::with_suffix(".obj")?;

    io::export_obj(&original, file.path())?;
    let text = std::fs::read_to_string(file.path())?;
    println!("OBJ file size: {} bytes", text.len());

    let first = text.lines().next().context("empty OBJ file")?;
    assert_eq!(first, "o pentagonal-gyrocupolarotunda");

    let imported = parse_obj(&text)?;
    assert!(imported.validate().is_ok());
    let comparison = io::compare_polyhedra(&original, &imported, 1e-5);
    assert!(comparison.passed, "{:?}", comparison);
    Ok(())
}

#[test]
fn test_operation_result_survives_export() -> Result<()> {
    let cupola = catalog::get("square-cupola")?;
    let top = cupola
        .face_list()
        .find(|f| f.num_sides() == 8)
        .map(|f| f.index())
        .context("square cupola has no octagon")?;
    let result = augment(&cupola, &AugmentOptions::new(top).gyrate(Alignment::Gyro))?;

    let file = NamedTempFile::with_suffix(".json")?;
    io::export_json(&result, file.path(), false)?;
    let imported = io::import_json(file.path())?;

    assert!(imported.is_same(&catalog::get("square-gyrobicupola")?));
    assert_eq!(imported.name(), None);
    Ok(())
}

#[test]
fn test_import_rejects_broken_snapshot() -> Result<()> {
    let mut snapshot = catalog::get("cube")?.snapshot();
    snapshot.faces[0].push(99);
    let json = serde_json::to_string(&snapshot)?;
    assert!(io::from_json(&json).is_err());

    let err = io::from_json("{\"vertices\": 3}").unwrap_err();
    println!("Import error: {}", err);
    Ok(())
}
