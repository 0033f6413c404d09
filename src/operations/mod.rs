// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Operation engine: augment, diminish and gyrate.
//!
//! Every operation takes a polyhedron by reference and returns a new one;
//! on error no polyhedron is produced and the input is untouched.

mod augment;
mod diminish;
mod gyrate;

pub use augment::{augment, cap_for, seam_alignment, Alignment, AugmentOptions, CapKind};
pub use diminish::diminish;
pub use gyrate::gyrate;

use crate::error::{Error, Result};
use crate::geometry::{boundary_ring, Peak, Polyhedron};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Description of one option an operation accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OptionSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub required: bool,
}

const AUGMENT_OPTIONS: &[OptionSpec] = &[
    OptionSpec {
        name: "face",
        description: "index of the face to attach the cap to",
        required: true,
    },
    OptionSpec {
        name: "gyrate",
        description: "ortho or gyro alignment of a cupola or rotunda",
        required: false,
    },
    OptionSpec {
        name: "using",
        description: "cap to attach to a decagon: cupola or rotunda",
        required: false,
    },
];

const PEAK_OPTIONS: &[OptionSpec] = &[OptionSpec {
    name: "peak",
    description: "the peak to act on",
    required: true,
}];

/// The operations the engine knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationKind {
    Augment,
    Diminish,
    Gyrate,
}

impl OperationKind {
    pub const ALL: [OperationKind; 3] = [Self::Augment, Self::Diminish, Self::Gyrate];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Augment => "augment",
            Self::Diminish => "diminish",
            Self::Gyrate => "gyrate",
        }
    }

    /// Option schema
    pub fn options(&self) -> &'static [OptionSpec] {
        match self {
            Self::Augment => AUGMENT_OPTIONS,
            Self::Diminish | Self::Gyrate => PEAK_OPTIONS,
        }
    }

    /// Whether the operation has at least one valid target on `polyhedron`
    pub fn is_applicable(&self, polyhedron: &Polyhedron) -> bool {
        match self {
            Self::Augment => polyhedron
                .face_list()
                .any(|face| cap_for(face.num_sides(), None).is_ok()),
            Self::Diminish => !Peak::get_all(polyhedron).is_empty(),
            Self::Gyrate => Peak::get_all(polyhedron)
                .iter()
                .any(Peak::is_gyrate_ambiguous),
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// An operation together with its options
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    Augment(AugmentOptions),
    Diminish(Peak),
    Gyrate(Peak),
}

impl Operation {
    pub fn kind(&self) -> OperationKind {
        match self {
            Self::Augment(_) => OperationKind::Augment,
            Self::Diminish(_) => OperationKind::Diminish,
            Self::Gyrate(_) => OperationKind::Gyrate,
        }
    }

    /// Check the preconditions without building the result
    pub fn validate(&self, polyhedron: &Polyhedron) -> Result<()> {
        match self {
            Self::Augment(options) => augment::plan(polyhedron, options).map(|_| ()),
            Self::Diminish(peak) => check_peak(polyhedron, peak),
            Self::Gyrate(peak) => {
                if !peak.is_gyrate_ambiguous() {
                    return Err(Error::operation(format!(
                        "a {} has a single alignment and cannot be gyrated",
                        peak.kind().name()
                    )));
                }
                check_peak(polyhedron, peak)
            }
        }
    }

    pub fn apply(&self, polyhedron: &Polyhedron) -> Result<Polyhedron> {
        match self {
            Self::Augment(options) => augment(polyhedron, options),
            Self::Diminish(peak) => diminish(polyhedron, peak),
            Self::Gyrate(peak) => gyrate(polyhedron, peak),
        }
    }
}

/// `peak` was detected on `polyhedron` and its boundary is one closed loop
pub(crate) fn check_peak(polyhedron: &Polyhedron, peak: &Peak) -> Result<()> {
    if let Some(&f) = peak.faces().iter().find(|&&f| f >= polyhedron.num_faces()) {
        return Err(Error::operation(format!(
            "peak references face {} but the polyhedron has {} faces",
            f,
            polyhedron.num_faces()
        )));
    }
    let ring = boundary_ring(polyhedron, peak.faces())
        .map_err(|e| Error::operation(format!("peak boundary is not a single loop: {}", e)))?;
    if ring != peak.boundary() {
        return Err(Error::operation("peak does not belong to this polyhedron"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::primitives;

    #[test]
    fn test_applicability() {
        let cube = primitives::prism(4);
        assert!(OperationKind::Augment.is_applicable(&cube));
        assert!(!OperationKind::Diminish.is_applicable(&cube));
        assert!(!OperationKind::Gyrate.is_applicable(&cube));

        let elongated = augment(&cube, &AugmentOptions::new(0)).unwrap();
        assert!(OperationKind::Diminish.is_applicable(&elongated));
        assert!(!OperationKind::Gyrate.is_applicable(&elongated));
    }

    #[test]
    fn test_option_schema() {
        assert_eq!(OperationKind::Augment.options().len(), 3);
        assert!(OperationKind::Augment.options()[0].required);
        assert_eq!(OperationKind::Gyrate.options()[0].name, "peak");
        assert_eq!(OperationKind::Diminish.to_string(), "diminish");
    }

    #[test]
    fn test_dispatch() {
        let cube = primitives::prism(4);
        let op = Operation::Augment(AugmentOptions::new(0));
        assert_eq!(op.kind(), OperationKind::Augment);
        assert!(op.validate(&cube).is_ok());
        let augmented = op.apply(&cube).unwrap();

        let peak = Peak::get_all(&augmented).remove(0);
        let op = Operation::Gyrate(peak.clone());
        assert!(matches!(op.validate(&augmented), Err(Error::OperationError(_))));

        let op = Operation::Diminish(peak);
        assert!(op.validate(&augmented).is_ok());
        assert!(op.apply(&augmented).unwrap().is_same(&cube));
        assert!(matches!(op.validate(&cube), Err(Error::OperationError(_))));
    }
}
