// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Shared math utilities

pub mod math;

pub use math::{Plane, PRECISION};
