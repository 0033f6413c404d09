// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Polyhedra Kernel
//!
//! Immutable polyhedron meshes with lazily derived adjacency graphs, cap
//! (peak) detection, and the augment/diminish/gyrate operations that build
//! the Johnson solids from pyramids, cupolas, rotundas, prisms and antiprisms.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod geometry;
pub mod io;
pub mod operations;
pub mod utils;

pub use config::Config;
pub use error::{Error, Result};
pub use geometry::{Edge, Face, Peak, PeakKind, Polyhedron, PolyhedronSnapshot, Primitive};
pub use io::{export_json, export_obj, import_json};
pub use operations::{
    augment, diminish, gyrate, Alignment, AugmentOptions, CapKind, Operation, OperationKind,
};

/// Look up a catalog solid by name
pub fn get(name: &str) -> Result<Polyhedron> {
    catalog::get(name)
}
