// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Invariants every catalog solid must satisfy

use anyhow::Result;
use approx::assert_relative_eq;
use polyhedra::catalog;
use polyhedra::geometry::{analyze, mesh_utils, Polyhedron};
use polyhedra::utils::PRECISION;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Same solid with shuffled vertex indices, face order and face start vertices
fn relabeled(polyhedron: &Polyhedron, rng: &mut StdRng) -> Result<Polyhedron> {
    let n = polyhedron.num_vertices();
    let mut order: Vec<usize> = (0..n).collect();
    order.shuffle(rng);

    // order[new] = old
    let mut new_index = vec![0; n];
    for (new, &old) in order.iter().enumerate() {
        new_index[old] = new;
    }
    let vertices = order.iter().map(|&old| *polyhedron.vertex(old)).collect();

    let mut faces: Vec<Vec<usize>> = polyhedron
        .faces()
        .iter()
        .map(|face| {
            let mut face: Vec<usize> = face.iter().map(|&v| new_index[v]).collect();
            let start = rng.gen_range(0..face.len());
            face.rotate_left(start);
            face
        })
        .collect();
    faces.shuffle(rng);

    Ok(Polyhedron::of(vertices, faces)?)
}

#[test]
fn test_every_solid_is_closed_and_uniform() -> Result<()> {
    for name in catalog::names() {
        let solid = catalog::get(name)?;
        let validation = mesh_utils::check(&solid)?;

        println!(
            "{:<36} V={:<3} E={:<3} F={:<3}",
            name,
            solid.num_vertices(),
            validation.edge_count,
            solid.num_faces()
        );

        assert!(
            validation.is_valid(),
            "{}: {:?}",
            name,
            validation.failures()
        );
        assert_eq!(
            solid.num_vertices() + solid.num_faces(),
            validation.edge_count + 2,
            "{} breaks Euler's formula",
            name
        );
        assert_relative_eq!(solid.edge_length(), 1.0, epsilon = PRECISION);
        assert!(solid.centroid().coords.norm() < PRECISION, "{} is not centered", name);
        assert_eq!(solid.name(), Some(name));
    }
    Ok(())
}

#[test]
fn test_every_face_is_regular() -> Result<()> {
    for name in catalog::names() {
        let solid = catalog::get(name)?;
        for face in solid.face_list() {
            assert!(face.is_regular(), "{} face {} is irregular", name, face.index());
        }
    }
    Ok(())
}

#[test]
fn test_vertex_fans_are_cycles() -> Result<()> {
    for name in ["cube", "icosahedron", "pentagonal-gyrocupolarotunda"] {
        let solid = catalog::get(name)?;
        for v in solid.vertex_indices() {
            let fan = solid.directed_adjacent_faces(v)?;
            assert_eq!(fan.len(), solid.vertex_faces()[v].len());
        }
    }
    Ok(())
}

#[test]
fn test_of_round_trip() -> Result<()> {
    for name in catalog::names() {
        let solid = catalog::get(name)?;
        let rebuilt = Polyhedron::of(solid.vertices().to_vec(), solid.faces().to_vec())?;

        let mut expected = solid.snapshot();
        expected.name = None;
        assert_eq!(rebuilt.snapshot(), expected, "{}", name);
    }
    Ok(())
}

#[test]
fn test_is_same_under_relabeling() -> Result<()> {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for name in catalog::names() {
        let solid = catalog::get(name)?;
        assert!(solid.is_same(&solid));
        for _ in 0..3 {
            let shuffled = relabeled(&solid, &mut rng)?;
            assert!(solid.is_same(&shuffled), "{} lost its identity", name);
            assert!(shuffled.validate().is_ok());
        }
    }
    Ok(())
}

#[test]
fn test_distinct_solids_are_not_same() -> Result<()> {
    let pairs = [
        ("triangular-orthobicupola", "cuboctahedron"),
        ("square-orthobicupola", "square-gyrobicupola"),
        ("pentagonal-orthobirotunda", "icosidodecahedron"),
        ("pentagonal-orthocupolarotunda", "pentagonal-gyrocupolarotunda"),
        ("elongated-triangular-orthobicupola", "elongated-triangular-gyrobicupola"),
        ("rhombicuboctahedron", "elongated-square-gyrobicupola"),
        ("elongated-pentagonal-orthobirotunda", "elongated-pentagonal-gyrobirotunda"),
    ];
    for (a, b) in pairs {
        let a_solid = catalog::get(a)?;
        let b_solid = catalog::get(b)?;
        assert_eq!(a_solid.num_faces_by_sides(), b_solid.num_faces_by_sides());
        assert!(!a_solid.is_same(&b_solid), "{} and {} should differ", a, b);
    }
    Ok(())
}

#[test]
fn test_dihedral_angles() -> Result<()> {
    let cube = catalog::get("cube")?;
    for edge in cube.edges() {
        assert_relative_eq!(
            cube.dihedral_angle(edge)?,
            std::f64::consts::FRAC_PI_2,
            epsilon = PRECISION
        );
    }

    let tetrahedron = catalog::get("tetrahedron")?;
    let expected = (1.0f64 / 3.0).acos();
    for edge in tetrahedron.edges() {
        assert_relative_eq!(tetrahedron.dihedral_angle(edge)?, expected, epsilon = PRECISION);
    }

    let dodecahedron = catalog::get("dodecahedron")?;
    let expected = (-5f64.sqrt() / 5.0).acos();
    for edge in dodecahedron.edges() {
        assert_relative_eq!(dodecahedron.dihedral_angle(edge)?, expected, epsilon = PRECISION);
    }
    Ok(())
}

#[test]
fn test_known_volumes() -> Result<()> {
    let sqrt2 = 2f64.sqrt();
    let sqrt5 = 5f64.sqrt();
    let expected = [
        ("tetrahedron", sqrt2 / 12.0),
        ("cube", 1.0),
        ("octahedron", sqrt2 / 3.0),
        ("dodecahedron", (15.0 + 7.0 * sqrt5) / 4.0),
        ("icosahedron", 5.0 * (3.0 + sqrt5) / 12.0),
        ("cuboctahedron", 5.0 * sqrt2 / 3.0),
        ("icosidodecahedron", (45.0 + 17.0 * sqrt5) / 6.0),
        ("rhombicuboctahedron", (12.0 + 10.0 * sqrt2) / 3.0),
    ];
    for (name, volume) in expected {
        let stats = analyze(&catalog::get(name)?);
        println!("{:<20} volume {:.6} (expected {:.6})", name, stats.volume, volume);
        assert_relative_eq!(stats.volume, volume, epsilon = 1e-6);
    }
    Ok(())
}

#[test]
fn test_hit_face_just_outside() -> Result<()> {
    for name in ["cube", "icosahedron", "pentagonal-orthobirotunda"] {
        let solid = catalog::get(name)?;
        for face in solid.face_list() {
            let point = face.centroid() + face.normal() * 0.01;
            let hit = solid.hit_face(&point).map(|f| f.index());
            assert_eq!(hit, Some(face.index()), "{}", name);
        }
    }
    Ok(())
}
