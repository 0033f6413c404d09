// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Geometry module - polyhedron representation and queries

pub mod analytics;
mod edge;
mod face;
pub mod mesh_utils;
mod peak;
mod polyhedron;
pub mod primitives;

pub use analytics::{analyze, PolyhedronStats};
pub use edge::Edge;
pub use face::Face;
pub use mesh_utils::MeshValidation;
pub use peak::{boundary_ring, Peak, PeakKind};
pub use polyhedron::{FaceSignature, Polyhedron, PolyhedronSnapshot};
pub use primitives::Primitive;
