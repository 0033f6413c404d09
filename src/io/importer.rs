// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! JSON snapshot importer

use crate::geometry::{Polyhedron, PolyhedronSnapshot};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Import a JSON snapshot written by [`export_json`](super::export_json)
pub fn import_json(path: impl AsRef<Path>) -> Result<Polyhedron> {
    let path = path.as_ref();
    let source = fs::read_to_string(path)
        .with_context(|| format!("Failed to read JSON file: {}", path.display()))?;

    from_json(&source).with_context(|| format!("Failed to load polyhedron: {}", path.display()))
}

/// Parse a JSON snapshot string
pub fn from_json(source: &str) -> Result<Polyhedron> {
    let snapshot: PolyhedronSnapshot = serde_json::from_str(source)?;
    Ok(Polyhedron::from_snapshot(&snapshot)?)
}
