// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Error types for polyhedron construction, queries and operations

use thiserror::Error;

/// Result type for polyhedron operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the catalog, the mesh queries and the operation engine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Catalog lookup for a name that is not registered
    #[error("Unknown polyhedron: {0}")]
    InvalidNameError(String),

    /// Malformed geometry or topology
    #[error("Structural error: {0}")]
    StructuralError(String),

    /// An augment/diminish/gyrate precondition failed
    #[error("Operation error: {0}")]
    OperationError(String),
}

impl Error {
    pub(crate) fn structural(msg: impl Into<String>) -> Self {
        Self::StructuralError(msg.into())
    }

    pub(crate) fn operation(msg: impl Into<String>) -> Self {
        Self::OperationError(msg.into())
    }
}
