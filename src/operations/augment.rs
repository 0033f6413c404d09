// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Attach a pyramid, cupola or rotunda to a face

use crate::error::{Error, Result};
use crate::geometry::{Edge, Face, Polyhedron, Primitive};
use nalgebra::{Matrix3, Vector3};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// How the faces of a cap line up with the faces it is glued against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// Triangles meet triangles across the seam
    Ortho,
    /// Triangles meet non-triangles across the seam
    Gyro,
}

/// The kind of cap to attach
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CapKind {
    Pyramid,
    Cupola,
    Rotunda,
}

/// Options for [`augment`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AugmentOptions {
    pub face_index: usize,
    /// Required alignment; only valid for cupolas and rotundas.
    /// Without one the cap goes on ortho where the neighbors allow it.
    #[serde(default)]
    pub gyrate: Option<Alignment>,
    /// Cap to use; needed only to pick a rotunda over a cupola on a decagon
    #[serde(default)]
    pub using: Option<CapKind>,
}

impl AugmentOptions {
    pub fn new(face_index: usize) -> Self {
        Self {
            face_index,
            ..Self::default()
        }
    }

    pub fn gyrate(mut self, alignment: Alignment) -> Self {
        self.gyrate = Some(alignment);
        self
    }

    pub fn using(mut self, cap: CapKind) -> Self {
        self.using = Some(cap);
        self
    }
}

/// Attach a cap to `options.face_index`, scaled to that face's edge length.
///
/// The face is removed, the cap's base is removed, and the two rims are welded.
/// A requested alignment must hold on every seam edge. The neighbors of a face
/// in a prism band are all squares, so there the faces beyond the band decide.
pub fn augment(polyhedron: &Polyhedron, options: &AugmentOptions) -> Result<Polyhedron> {
    let primitive = plan(polyhedron, options)?;
    let face = polyhedron.face(options.face_index);
    let alignment = options.gyrate.unwrap_or(Alignment::Ortho);

    let cap = primitive.to_polyhedron().scale(face.edge_length());
    let base_index = primitive.base_face();
    let shift = match primitive {
        Primitive::Pyramid(_) => 0,
        _ => choose_shift(face, cap.face(base_index), options.gyrate)?,
    };
    let placed = place_cap(face, &cap, base_index, shift);

    let result = polyhedron
        .remove_face(options.face_index)
        .add_polyhedron(&placed.remove_face(base_index))
        .deduplicate_vertices();
    debug!(
        face = options.face_index,
        cap = ?primitive,
        ?alignment,
        shift,
        faces = result.num_faces(),
        "augmented"
    );
    Ok(result)
}

/// Check `options` against `polyhedron` and pick the cap to attach
pub(crate) fn plan(polyhedron: &Polyhedron, options: &AugmentOptions) -> Result<Primitive> {
    let face = polyhedron.get_face(options.face_index).ok_or_else(|| {
        Error::operation(format!(
            "face {} out of range, polyhedron has {} faces",
            options.face_index,
            polyhedron.num_faces()
        ))
    })?;
    let primitive = cap_for(face.num_sides(), options.using)?;
    if options.gyrate.is_some() && matches!(primitive, Primitive::Pyramid(_)) {
        return Err(Error::operation(
            "a pyramid has a single alignment, gyrate does not apply",
        ));
    }
    Ok(primitive)
}

/// The cap whose base matches a face with `sides` sides
pub fn cap_for(sides: usize, using: Option<CapKind>) -> Result<Primitive> {
    match (sides, using) {
        (3..=5, None | Some(CapKind::Pyramid)) => Ok(Primitive::Pyramid(sides)),
        (6 | 8 | 10, None | Some(CapKind::Cupola)) => Ok(Primitive::Cupola(sides / 2)),
        (10, Some(CapKind::Rotunda)) => Ok(Primitive::Rotunda),
        (_, Some(cap)) => Err(Error::operation(format!(
            "a {} cannot be attached to a {}-sided face",
            cap, sides
        ))),
        _ => Err(Error::operation(format!(
            "no cap fits a {}-sided face",
            sides
        ))),
    }
}

/// Pairing of face vertex `j` with base vertex `shift - j`
fn base_vertex(base: &[usize], shift: usize, j: usize) -> usize {
    let n = base.len();
    base[(shift + n - j % n) % n]
}

fn is_triangle(face: Face<'_>) -> bool {
    face.num_sides() == 3
}

/// For each rim edge of `face`, whether the face on the other side is a
/// triangle. When those faces are all alike and are squares, each square is
/// crossed to the face beyond its opposite edge instead.
fn rim_classes(face: Face<'_>) -> Vec<Option<bool>> {
    let mesh = face.polyhedron();
    let rim = face.vertices();
    let n = rim.len();
    let across: Vec<Option<Face<'_>>> = (0..n)
        .map(|j| mesh.face_with_edge(&(rim[(j + 1) % n], rim[j]).into()))
        .collect();
    let direct: Vec<Option<bool>> = across.iter().map(|f| f.map(is_triangle)).collect();
    if !is_uniform(&direct) {
        return direct;
    }

    let beyond: Option<Vec<bool>> = (0..n)
        .map(|j| {
            let square = across[j].filter(|f| f.num_sides() == 4)?;
            let p = square.next_vertex(rim[j])?;
            let q = square.next_vertex(p)?;
            mesh.face_with_edge(&(q, p).into()).map(is_triangle)
        })
        .collect();
    match beyond {
        Some(classes) => classes.into_iter().map(Some).collect(),
        None => direct,
    }
}

fn is_uniform(classes: &[Option<bool>]) -> bool {
    classes.windows(2).all(|pair| pair[0] == pair[1])
}

/// Number of seam edges whose two sides follow `alignment`
fn alignment_score(
    outer: &[Option<bool>],
    base: Face<'_>,
    shift: usize,
    alignment: Alignment,
) -> usize {
    let cap = base.polyhedron();
    let base_verts = base.vertices();

    (0..outer.len())
        .filter(|&j| {
            let inner = cap
                .face_with_edge(
                    &(
                        base_vertex(base_verts, shift, j),
                        base_vertex(base_verts, shift, j + 1),
                    )
                        .into(),
                )
                .map(is_triangle);
            match (outer[j], inner, alignment) {
                (Some(a), Some(b), Alignment::Ortho) => a == b,
                (Some(a), Some(b), Alignment::Gyro) => a != b,
                _ => false,
            }
        })
        .count()
}

/// The rotation of the cap that best matches the alignment (lowest shift on
/// ties). A requested alignment fails unless some rotation matches it on
/// every seam edge.
fn choose_shift(face: Face<'_>, base: Face<'_>, requested: Option<Alignment>) -> Result<usize> {
    let outer = rim_classes(face);
    let alignment = requested.unwrap_or(Alignment::Ortho);
    let n = outer.len();
    let (score, shift) = (0..n)
        .map(|shift| (alignment_score(&outer, base, shift, alignment), shift))
        .fold((0, 0), |best, candidate| {
            if candidate.0 > best.0 {
                candidate
            } else {
                best
            }
        });
    if requested.is_some() && score < n {
        return Err(Error::operation(format!(
            "no rotation of the cap puts the seam around face {} in {} alignment",
            face.index(),
            alignment
        )));
    }
    Ok(shift)
}

/// Orthonormal frame with `x` along an edge and `z` along a normal
fn frame(x: Vector3<f64>, z: Vector3<f64>) -> Matrix3<f64> {
    let x = x.normalize();
    let z = z.normalize();
    let y = z.cross(&x);
    Matrix3::from_columns(&[x, y, z])
}

/// Move `cap` so its base lies on `face`, base vertex `shift` on the face's
/// first vertex, pointing out of the mesh
fn place_cap(face: Face<'_>, cap: &Polyhedron, base_index: usize, shift: usize) -> Polyhedron {
    let base = cap.face(base_index);
    let rim = face.vertex_positions();
    let base_verts = base.vertices();
    let c0 = *cap.vertex(base_vertex(base_verts, shift, 0));
    let c1 = *cap.vertex(base_vertex(base_verts, shift, 1));

    let target = frame(rim[1] - rim[0], face.normal());
    let source = frame(c1 - c0, -base.normal());
    let rotation = target * source.transpose();
    let origin = rim[0];

    cap.map_vertices(|p| origin + rotation * (p - c0))
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ortho => write!(f, "ortho"),
            Self::Gyro => write!(f, "gyro"),
        }
    }
}

impl FromStr for Alignment {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "ortho" => Ok(Self::Ortho),
            "gyro" => Ok(Self::Gyro),
            other => Err(Error::operation(format!("unknown alignment '{}'", other))),
        }
    }
}

impl fmt::Display for CapKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pyramid => write!(f, "pyramid"),
            Self::Cupola => write!(f, "cupola"),
            Self::Rotunda => write!(f, "rotunda"),
        }
    }
}

impl FromStr for CapKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "pyramid" => Ok(Self::Pyramid),
            "cupola" => Ok(Self::Cupola),
            "rotunda" => Ok(Self::Rotunda),
            other => Err(Error::operation(format!("unknown cap '{}'", other))),
        }
    }
}

/// The alignment shared by every edge of `seam`, if there is one.
///
/// Each edge must border two faces; `None` for a mixed or open seam.
pub fn seam_alignment(polyhedron: &Polyhedron, seam: &[Edge]) -> Option<Alignment> {
    let mut classes = seam.iter().map(|edge| {
        let one = polyhedron.face_with_edge(edge)?;
        let other = polyhedron.face_with_edge(&edge.twin())?;
        Some((one.num_sides() == 3) == (other.num_sides() == 3))
    });
    let first = classes.next()??;
    if classes.all(|same| same == Some(first)) {
        Some(if first { Alignment::Ortho } else { Alignment::Gyro })
    } else {
        None
    }
}
