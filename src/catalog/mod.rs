// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Named solids built on demand from primitives and augmentations.
//!
//! Every solid has unit edges and is centered on the origin.

use crate::error::{Error, Result};
use crate::geometry::{primitives, Polyhedron};
use crate::operations::{augment, Alignment, AugmentOptions, CapKind};
use serde::Serialize;
use std::fmt;
use tracing::debug;

/// Which family a catalog solid belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Family {
    Platonic,
    Archimedean,
    Prism,
    Antiprism,
    /// Johnson solid with its number
    Johnson(u8),
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Platonic => write!(f, "Platonic"),
            Self::Archimedean => write!(f, "Archimedean"),
            Self::Prism => write!(f, "Prism"),
            Self::Antiprism => write!(f, "Antiprism"),
            Self::Johnson(n) => write!(f, "J{}", n),
        }
    }
}

/// A catalog entry
#[derive(Clone, Copy)]
pub struct Entry {
    pub name: &'static str,
    pub family: Family,
    build: fn() -> Result<Polyhedron>,
}

impl fmt::Debug for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entry")
            .field("name", &self.name)
            .field("family", &self.family)
            .finish()
    }
}

impl Entry {
    /// Build the solid, centered and named
    pub fn build(&self) -> Result<Polyhedron> {
        let solid = (self.build)()?.center().with_name(self.name);
        debug!(
            name = self.name,
            vertices = solid.num_vertices(),
            faces = solid.num_faces(),
            "built catalog solid"
        );
        Ok(solid)
    }
}

const ALIASES: &[(&str, &str)] = &[("hexahedron", "cube")];

macro_rules! entry {
    ($name:literal, $family:expr, $build:expr) => {
        Entry {
            name: $name,
            family: $family,
            build: $build,
        }
    };
}

use Family::*;

static ENTRIES: &[Entry] = &[
    entry!("tetrahedron", Platonic, || Ok(primitives::pyramid(3))),
    entry!("cube", Platonic, || Ok(primitives::prism(4))),
    entry!("octahedron", Platonic, || cap(primitives::pyramid(4), 0)),
    entry!("dodecahedron", Platonic, dodecahedron),
    entry!("icosahedron", Platonic, icosahedron),
    entry!("cuboctahedron", Archimedean, || {
        cap_aligned(primitives::cupola(3), 7, Alignment::Gyro, None)
    }),
    entry!("rhombicuboctahedron", Archimedean, || {
        cap_across_band(primitives::prism(8), None, Alignment::Ortho, None)
    }),
    entry!("icosidodecahedron", Archimedean, || {
        cap_aligned(primitives::rotunda(), 16, Alignment::Gyro, Some(CapKind::Rotunda))
    }),
    entry!("triangular-prism", Prism, || Ok(primitives::prism(3))),
    entry!("pentagonal-prism", Prism, || Ok(primitives::prism(5))),
    entry!("hexagonal-prism", Prism, || Ok(primitives::prism(6))),
    entry!("octagonal-prism", Prism, || Ok(primitives::prism(8))),
    entry!("decagonal-prism", Prism, || Ok(primitives::prism(10))),
    entry!("square-antiprism", Antiprism, || Ok(primitives::antiprism(4))),
    entry!("pentagonal-antiprism", Antiprism, || Ok(primitives::antiprism(5))),
    entry!("hexagonal-antiprism", Antiprism, || Ok(primitives::antiprism(6))),
    entry!("octagonal-antiprism", Antiprism, || Ok(primitives::antiprism(8))),
    entry!("decagonal-antiprism", Antiprism, || Ok(primitives::antiprism(10))),
    // Pyramids, cupolas and the rotunda
    entry!("square-pyramid", Johnson(1), || Ok(primitives::pyramid(4))),
    entry!("pentagonal-pyramid", Johnson(2), || Ok(primitives::pyramid(5))),
    entry!("triangular-cupola", Johnson(3), || Ok(primitives::cupola(3))),
    entry!("square-cupola", Johnson(4), || Ok(primitives::cupola(4))),
    entry!("pentagonal-cupola", Johnson(5), || Ok(primitives::cupola(5))),
    entry!("pentagonal-rotunda", Johnson(6), || Ok(primitives::rotunda())),
    // Modified pyramids
    entry!("elongated-triangular-pyramid", Johnson(7), || {
        cap(primitives::prism(3), 0)
    }),
    entry!("elongated-square-pyramid", Johnson(8), || {
        cap(primitives::prism(4), 0)
    }),
    entry!("elongated-pentagonal-pyramid", Johnson(9), || {
        cap(primitives::prism(5), 0)
    }),
    entry!("gyroelongated-square-pyramid", Johnson(10), || {
        cap(primitives::antiprism(4), 0)
    }),
    entry!("gyroelongated-pentagonal-pyramid", Johnson(11), || {
        cap(primitives::antiprism(5), 0)
    }),
    entry!("triangular-bipyramid", Johnson(12), || {
        cap(primitives::pyramid(3), 0)
    }),
    entry!("pentagonal-bipyramid", Johnson(13), || {
        cap(primitives::pyramid(5), 0)
    }),
    entry!("elongated-triangular-bipyramid", Johnson(14), || {
        cap_both(primitives::prism(3))
    }),
    entry!("elongated-square-bipyramid", Johnson(15), || {
        cap_both(primitives::prism(4))
    }),
    entry!("elongated-pentagonal-bipyramid", Johnson(16), || {
        cap_both(primitives::prism(5))
    }),
    entry!("gyroelongated-square-bipyramid", Johnson(17), || {
        cap_both(primitives::antiprism(4))
    }),
    // Modified cupolas and rotundas
    entry!("elongated-triangular-cupola", Johnson(18), || {
        cap(primitives::prism(6), 0)
    }),
    entry!("elongated-square-cupola", Johnson(19), || {
        cap(primitives::prism(8), 0)
    }),
    entry!("elongated-pentagonal-cupola", Johnson(20), || {
        cap(primitives::prism(10), 0)
    }),
    entry!("elongated-pentagonal-rotunda", Johnson(21), || {
        cap_using(primitives::prism(10), 0, Some(CapKind::Rotunda))
    }),
    entry!("gyroelongated-triangular-cupola", Johnson(22), || {
        cap(primitives::antiprism(6), 0)
    }),
    entry!("gyroelongated-square-cupola", Johnson(23), || {
        cap(primitives::antiprism(8), 0)
    }),
    entry!("gyroelongated-pentagonal-cupola", Johnson(24), || {
        cap(primitives::antiprism(10), 0)
    }),
    entry!("gyroelongated-pentagonal-rotunda", Johnson(25), || {
        cap_using(primitives::antiprism(10), 0, Some(CapKind::Rotunda))
    }),
    // Bicupolas and birotundas
    entry!("triangular-orthobicupola", Johnson(27), || {
        cap_aligned(primitives::cupola(3), 7, Alignment::Ortho, None)
    }),
    entry!("square-orthobicupola", Johnson(28), || {
        cap_aligned(primitives::cupola(4), 9, Alignment::Ortho, None)
    }),
    entry!("square-gyrobicupola", Johnson(29), || {
        cap_aligned(primitives::cupola(4), 9, Alignment::Gyro, None)
    }),
    entry!("pentagonal-orthobicupola", Johnson(30), || {
        cap_aligned(primitives::cupola(5), 11, Alignment::Ortho, None)
    }),
    entry!("pentagonal-gyrobicupola", Johnson(31), || {
        cap_aligned(primitives::cupola(5), 11, Alignment::Gyro, None)
    }),
    entry!("pentagonal-orthocupolarotunda", Johnson(32), || {
        cap_aligned(primitives::cupola(5), 11, Alignment::Ortho, Some(CapKind::Rotunda))
    }),
    entry!("pentagonal-gyrocupolarotunda", Johnson(33), || {
        cap_aligned(primitives::cupola(5), 11, Alignment::Gyro, Some(CapKind::Rotunda))
    }),
    entry!("pentagonal-orthobirotunda", Johnson(34), || {
        cap_aligned(primitives::rotunda(), 16, Alignment::Ortho, Some(CapKind::Rotunda))
    }),
    // Elongated bicupolas and birotundas
    entry!("elongated-triangular-orthobicupola", Johnson(35), || {
        cap_across_band(primitives::prism(6), None, Alignment::Ortho, None)
    }),
    entry!("elongated-triangular-gyrobicupola", Johnson(36), || {
        cap_across_band(primitives::prism(6), None, Alignment::Gyro, None)
    }),
    entry!("elongated-square-gyrobicupola", Johnson(37), || {
        cap_across_band(primitives::prism(8), None, Alignment::Gyro, None)
    }),
    entry!("elongated-pentagonal-orthobicupola", Johnson(38), || {
        cap_across_band(primitives::prism(10), None, Alignment::Ortho, None)
    }),
    entry!("elongated-pentagonal-gyrobicupola", Johnson(39), || {
        cap_across_band(primitives::prism(10), None, Alignment::Gyro, None)
    }),
    entry!("elongated-pentagonal-orthocupolarotunda", Johnson(40), || {
        cap_across_band(primitives::prism(10), None, Alignment::Ortho, Some(CapKind::Rotunda))
    }),
    entry!("elongated-pentagonal-gyrocupolarotunda", Johnson(41), || {
        cap_across_band(primitives::prism(10), None, Alignment::Gyro, Some(CapKind::Rotunda))
    }),
    entry!("elongated-pentagonal-orthobirotunda", Johnson(42), || {
        let rotunda = Some(CapKind::Rotunda);
        cap_across_band(primitives::prism(10), rotunda, Alignment::Ortho, rotunda)
    }),
    entry!("elongated-pentagonal-gyrobirotunda", Johnson(43), || {
        let rotunda = Some(CapKind::Rotunda);
        cap_across_band(primitives::prism(10), rotunda, Alignment::Gyro, rotunda)
    }),
];

fn cap(solid: Polyhedron, face: usize) -> Result<Polyhedron> {
    cap_using(solid, face, None)
}

fn cap_using(solid: Polyhedron, face: usize, using: Option<CapKind>) -> Result<Polyhedron> {
    let options = AugmentOptions {
        face_index: face,
        gyrate: None,
        using,
    };
    augment(&solid, &options)
}

fn cap_aligned(
    solid: Polyhedron,
    face: usize,
    alignment: Alignment,
    using: Option<CapKind>,
) -> Result<Polyhedron> {
    let options = AugmentOptions {
        face_index: face,
        gyrate: Some(alignment),
        using,
    };
    augment(&solid, &options)
}

/// Cap both ends of a prism, the second cap aligned against the first
/// across the band of squares
fn cap_across_band(
    prism: Polyhedron,
    first: Option<CapKind>,
    alignment: Alignment,
    second: Option<CapKind>,
) -> Result<Polyhedron> {
    // Removing face 0 moves the other end down to index 0
    cap_aligned(cap_using(prism, 0, first)?, 0, alignment, second)
}

/// Cap face 0 and then the face that started out as face 1
fn cap_both(solid: Polyhedron) -> Result<Polyhedron> {
    // Removing face 0 moves the old face 1 down to index 0
    cap(cap(solid, 0)?, 0)
}

fn icosahedron() -> Result<Polyhedron> {
    cap_both(primitives::antiprism(5))
}

fn dodecahedron() -> Result<Polyhedron> {
    let dual = icosahedron()?.center().dual()?;
    let length = dual.edge_length();
    Ok(dual.scale(1.0 / length))
}

fn normalize(name: &str) -> String {
    name.trim().to_ascii_lowercase().replace([' ', '_'], "-")
}

fn resolve(name: &str) -> String {
    let name = normalize(name);
    ALIASES
        .iter()
        .find(|(alias, _)| *alias == name)
        .map(|(_, target)| target.to_string())
        .unwrap_or(name)
}

/// Every catalog entry, Platonic solids first and Johnson solids by number
pub fn entries() -> &'static [Entry] {
    ENTRIES
}

pub fn entry(name: &str) -> Option<&'static Entry> {
    let name = resolve(name);
    ENTRIES.iter().find(|e| e.name == name)
}

/// Canonical names, aliases excluded
pub fn names() -> Vec<&'static str> {
    ENTRIES.iter().map(|e| e.name).collect()
}

pub fn contains(name: &str) -> bool {
    entry(name).is_some()
}

/// Build the named solid.
///
/// Names are kebab-case; spaces, underscores and capitals are accepted.
pub fn get(name: &str) -> Result<Polyhedron> {
    entry(name)
        .ok_or_else(|| Error::InvalidNameError(name.to_string()))?
        .build()
}
