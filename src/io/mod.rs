// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! I/O module - snapshot import and export

mod compare;
mod exporter;
mod importer;

pub use compare::{compare_polyhedra, PolyhedronComparison};
pub use exporter::{export_json, export_obj, to_json, write_obj};
pub use importer::{from_json, import_json};
