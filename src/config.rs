// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Configuration for the `polyhedra` tool

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default configuration file name, looked up in the working directory
pub const CONFIG_FILE: &str = "polyhedra.toml";

/// Tool configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory exports are written to
    pub output_dir: PathBuf,
    /// Pretty-print JSON snapshots
    pub pretty_json: bool,
    /// Verbose output
    pub verbose: bool,
    /// `tracing` filter directive, e.g. `polyhedra=debug`
    pub log_filter: String,
    /// Maximum parallel workers for `check`
    pub parallelism: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            pretty_json: true,
            verbose: false,
            log_filter: "warn".to_string(),
            parallelism: None, // Auto-detect
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path.as_ref()))?;
        Ok(config)
    }

    /// Load `polyhedra.toml` if present, then apply environment overrides
    pub fn load() -> Result<Self> {
        let mut config = if Path::new(CONFIG_FILE).exists() {
            Self::from_file(CONFIG_FILE)?
        } else {
            Self::default()
        };
        config.apply_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Apply `POLYHEDRA_*` overrides read through `lookup`
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(output_dir) = lookup("POLYHEDRA_OUTPUT_DIR") {
            self.output_dir = PathBuf::from(output_dir);
        }

        if let Some(pretty) = lookup("POLYHEDRA_PRETTY") {
            self.pretty_json = pretty.parse().unwrap_or(self.pretty_json);
        }

        if let Some(verbose) = lookup("POLYHEDRA_VERBOSE") {
            self.verbose = verbose.parse().unwrap_or(false);
        }

        if let Some(filter) = lookup("POLYHEDRA_LOG") {
            self.log_filter = filter;
        }

        if let Some(parallelism) = lookup("POLYHEDRA_PARALLELISM") {
            self.parallelism = parallelism.parse().ok();
        }
    }

    /// Save configuration to file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path.as_ref(), content)
            .with_context(|| format!("Failed to write config file: {:?}", path.as_ref()))?;
        Ok(())
    }

    /// Path inside [`output_dir`](Config::output_dir) for `file_name`
    pub fn output_path(&self, file_name: &str) -> PathBuf {
        self.output_dir.join(file_name)
    }
}
