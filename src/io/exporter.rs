// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! JSON snapshot and Wavefront OBJ exporters

use crate::geometry::Polyhedron;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Export a polyhedron as a JSON snapshot `{vertices, faces, edges, name}`
pub fn export_json(polyhedron: &Polyhedron, path: impl AsRef<Path>, pretty: bool) -> Result<()> {
    let path = path.as_ref();
    let json = to_json(polyhedron, pretty)?;
    std::fs::write(path, json)
        .with_context(|| format!("Failed to write JSON file: {}", path.display()))
}

/// Serialize a polyhedron's snapshot to a JSON string
pub fn to_json(polyhedron: &Polyhedron, pretty: bool) -> Result<String> {
    let snapshot = polyhedron.snapshot();
    let json = if pretty {
        serde_json::to_string_pretty(&snapshot)?
    } else {
        serde_json::to_string(&snapshot)?
    };
    Ok(json)
}

/// Export a polyhedron to Wavefront OBJ with one polygon per face
pub fn export_obj(polyhedron: &Polyhedron, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)
        .with_context(|| format!("Failed to create OBJ file: {}", path.display()))?;
    let mut out = BufWriter::new(file);
    write_obj(polyhedron, &mut out)?;
    out.flush()?;
    Ok(())
}

/// Write OBJ text for `polyhedron` to `out`
pub fn write_obj(polyhedron: &Polyhedron, out: &mut impl Write) -> Result<()> {
    if let Some(name) = polyhedron.name() {
        writeln!(out, "o {}", name)?;
    }
    for p in polyhedron.vertices() {
        writeln!(out, "v {:.6} {:.6} {:.6}", p.x, p.y, p.z)?;
    }
    for face in polyhedron.faces() {
        // OBJ indices are 1-based
        let indices: Vec<String> = face.iter().map(|v| (v + 1).to_string()).collect();
        writeln!(out, "f {}", indices.join(" "))?;
    }
    Ok(())
}
