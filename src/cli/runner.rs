// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Solid loading, timed operations and the parallel catalog check

use crate::catalog;
use crate::geometry::{mesh_utils, MeshValidation, Polyhedron};
use crate::io;
use crate::operations::Operation;
use anyhow::{Context, Result};
use rayon::prelude::*;
use std::path::Path;
use std::time::{Duration, Instant};

/// Result of a timed operation
pub struct RunResult {
    pub polyhedron: Polyhedron,
    pub duration: Duration,
}

/// Outcome of checking one catalog solid
#[derive(Debug, Clone)]
pub struct CheckResult {
    pub name: &'static str,
    pub validation: std::result::Result<MeshValidation, String>,
    pub duration: Duration,
}

impl CheckResult {
    pub fn passed(&self) -> bool {
        matches!(&self.validation, Ok(v) if v.is_valid())
    }
}

/// Runner for loading solids and executing operations
pub struct Runner {
    parallelism: Option<usize>,
}

impl Runner {
    pub fn new() -> Self {
        Self { parallelism: None }
    }

    pub fn with_parallelism(parallelism: Option<usize>) -> Self {
        Self { parallelism }
    }

    /// Load a catalog solid by name, or a JSON snapshot if `solid` is a file
    pub fn load_solid(&self, solid: &str) -> Result<Polyhedron> {
        if catalog::contains(solid) {
            return Ok(catalog::get(solid)?);
        }
        if Path::new(solid).is_file() {
            return io::import_json(solid);
        }
        Err(crate::Error::InvalidNameError(solid.to_string()))
            .context("Expected a catalog name or a JSON snapshot path")
    }

    /// Apply `operation` and time it
    pub fn run(&self, polyhedron: &Polyhedron, operation: &Operation) -> Result<RunResult> {
        let start = Instant::now();
        let result = operation
            .apply(polyhedron)
            .with_context(|| format!("Failed to {}", operation.kind()))?;
        Ok(RunResult {
            polyhedron: result,
            duration: start.elapsed(),
        })
    }

    /// Build and validate every catalog solid, in parallel
    pub fn check_catalog(&self) -> Result<Vec<CheckResult>> {
        let check = || {
            catalog::entries()
                .par_iter()
                .map(|entry| {
                    let start = Instant::now();
                    let validation = entry
                        .build()
                        .and_then(|solid| mesh_utils::check(&solid))
                        .map_err(|e| e.to_string());
                    CheckResult {
                        name: entry.name,
                        validation,
                        duration: start.elapsed(),
                    }
                })
                .collect::<Vec<_>>()
        };

        match self.parallelism {
            Some(threads) => {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .build()
                    .context("Failed to build thread pool")?;
                Ok(pool.install(check))
            }
            None => Ok(check()),
        }
    }
}

impl Default for Runner {
    fn default() -> Self {
        Self::new()
    }
}
