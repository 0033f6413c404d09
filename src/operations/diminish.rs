// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Remove a peak and cap the hole with a single face

use super::check_peak;
use crate::error::Result;
use crate::geometry::{Peak, Polyhedron};
use tracing::debug;

/// Remove `peak`'s faces and close the hole with one face along its boundary.
///
/// Vertices that only the peak used are dropped and the rest renumbered.
pub fn diminish(polyhedron: &Polyhedron, peak: &Peak) -> Result<Polyhedron> {
    check_peak(polyhedron, peak)?;

    // The boundary runs the way the peak's faces ran, so the new face keeps
    // their orientation
    let cover = peak.boundary_vertices();
    let result = polyhedron
        .remove_faces(peak.faces())
        .add_faces([cover])?
        .remove_unused_vertices();
    debug!(
        kind = peak.kind().name(),
        removed = peak.faces().len(),
        faces = result.num_faces(),
        "diminished"
    );
    Ok(result)
}
