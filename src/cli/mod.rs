// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! CLI subsystem for the polyhedra tool

pub mod reporter;
pub mod runner;

pub use reporter::Reporter;
pub use runner::{CheckResult, RunResult, Runner};
