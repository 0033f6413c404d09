// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Immutable polyhedron mesh with lazily derived adjacency graphs

use super::{Edge, Face};
use crate::error::{Error, Result};
use crate::utils::math::{self, PRECISION};
use nalgebra::Point3;
use serde::{Deserialize, Serialize};
use std::cell::OnceCell;
use std::cmp::Reverse;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::ops::Range;

/// Derived graphs, computed on first access and owned by one instance
#[derive(Debug, Clone, Default)]
struct Graphs {
    edges: OnceCell<Vec<Edge>>,
    vertex_graph: OnceCell<Vec<Vec<usize>>>,
    vertex_faces: OnceCell<Vec<Vec<usize>>>,
    face_graph: OnceCell<Vec<Vec<usize>>>,
    edge_faces: OnceCell<HashMap<(usize, usize), usize>>,
}

/// Polyhedron made of vertex positions and faces of vertex indices.
///
/// Instances are never modified: every transform returns a new polyhedron
/// whose derived graphs start out empty.
#[derive(Debug, Clone)]
pub struct Polyhedron {
    vertices: Vec<Point3<f64>>,
    faces: Vec<Vec<usize>>,
    edges: Option<Vec<Edge>>,
    name: Option<String>,
    graphs: Graphs,
}

/// Side count of a face plus the side counts of its neighbors
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct FaceSignature {
    pub sides: usize,
    /// `(side count, number of adjacent faces with that many sides)`, ascending
    pub adjacent: Vec<(usize, usize)>,
}

/// Plain-data form of a polyhedron, suitable for serialization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolyhedronSnapshot {
    pub vertices: Vec<[f64; 3]>,
    pub faces: Vec<Vec<usize>>,
    #[serde(default)]
    pub edges: Vec<[usize; 2]>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Polyhedron {
    pub(crate) fn new(vertices: Vec<Point3<f64>>, faces: Vec<Vec<usize>>) -> Self {
        Self {
            vertices,
            faces,
            edges: None,
            name: None,
            graphs: Graphs::default(),
        }
    }

    /// Build a polyhedron from raw vertex and face arrays
    pub fn of(vertices: Vec<Point3<f64>>, faces: Vec<Vec<usize>>) -> Result<Self> {
        check_faces(vertices.len(), &faces)?;
        Ok(Self::new(vertices, faces))
    }

    /// Look up a named solid in the catalog
    pub fn get(name: &str) -> Result<Self> {
        crate::catalog::get(name)
    }

    pub fn from_snapshot(snapshot: &PolyhedronSnapshot) -> Result<Self> {
        let vertices = snapshot
            .vertices
            .iter()
            .map(|&[x, y, z]| Point3::new(x, y, z))
            .collect();
        let mut polyhedron = Self::of(vertices, snapshot.faces.clone())?;
        if !snapshot.edges.is_empty() {
            polyhedron.edges = Some(snapshot.edges.iter().map(|&e| Edge::from(e)).collect());
        }
        polyhedron.name = snapshot.name.clone();
        Ok(polyhedron)
    }

    pub fn snapshot(&self) -> PolyhedronSnapshot {
        PolyhedronSnapshot {
            vertices: self.vertices.iter().map(|p| [p.x, p.y, p.z]).collect(),
            faces: self.faces.clone(),
            edges: self.edges().iter().map(|e| [e.a, e.b]).collect(),
            name: self.name.clone(),
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn with_name(&self, name: impl Into<String>) -> Self {
        let mut copy = self.clone();
        copy.name = Some(name.into());
        copy
    }

    // Basic accessors

    pub fn vertices(&self) -> &[Point3<f64>] {
        &self.vertices
    }

    pub fn faces(&self) -> &[Vec<usize>] {
        &self.faces
    }

    /// Position of vertex `index`; panics if out of range, see [`Self::get_vertex`]
    pub fn vertex(&self, index: usize) -> &Point3<f64> {
        &self.vertices[index]
    }

    pub fn get_vertex(&self, index: usize) -> Option<&Point3<f64>> {
        self.vertices.get(index)
    }

    /// View of face `index`; panics if out of range, see [`Self::get_face`]
    pub fn face(&self, index: usize) -> Face<'_> {
        assert!(index < self.faces.len(), "face {} out of range", index);
        Face::new(self, index)
    }

    pub fn get_face(&self, index: usize) -> Option<Face<'_>> {
        (index < self.faces.len()).then(|| Face::new(self, index))
    }

    pub fn face_list(&self) -> impl Iterator<Item = Face<'_>> + '_ {
        self.face_indices().map(move |i| Face::new(self, i))
    }

    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    pub fn num_faces(&self) -> usize {
        self.faces.len()
    }

    pub fn vertex_indices(&self) -> Range<usize> {
        0..self.vertices.len()
    }

    pub fn face_indices(&self) -> Range<usize> {
        0..self.faces.len()
    }

    // Derived graphs

    /// Every edge once, smaller vertex index first, in face traversal order
    pub fn edges(&self) -> &[Edge] {
        if let Some(edges) = &self.edges {
            return edges;
        }
        self.graphs.edges.get_or_init(|| {
            let mut seen = HashSet::new();
            let mut edges = Vec::new();
            for face in &self.faces {
                for (a, b) in cyclic_pairs(face) {
                    let edge = Edge::new(a, b);
                    if seen.insert(edge.key()) {
                        let (a, b) = edge.key();
                        edges.push(Edge::new(a, b));
                    }
                }
            }
            edges
        })
    }

    /// For each vertex, the vertices that follow it in the faces it belongs to
    pub fn vertex_graph(&self) -> &[Vec<usize>] {
        self.graphs.vertex_graph.get_or_init(|| {
            let mut graph = vec![Vec::new(); self.vertices.len()];
            for face in &self.faces {
                for (a, b) in cyclic_pairs(face) {
                    graph[a].push(b);
                }
            }
            graph
        })
    }

    /// For each vertex, the indices of the faces containing it
    pub fn vertex_faces(&self) -> &[Vec<usize>] {
        self.graphs.vertex_faces.get_or_init(|| {
            let mut membership = vec![Vec::new(); self.vertices.len()];
            for (f, face) in self.faces.iter().enumerate() {
                for &v in face {
                    membership[v].push(f);
                }
            }
            membership
        })
    }

    fn edge_faces(&self) -> &HashMap<(usize, usize), usize> {
        self.graphs.edge_faces.get_or_init(|| {
            let mut lookup = HashMap::new();
            for (f, face) in self.faces.iter().enumerate() {
                for pair in cyclic_pairs(face) {
                    lookup.insert(pair, f);
                }
            }
            lookup
        })
    }

    /// For each face, the faces across each of its edges, in edge order
    pub fn face_graph(&self) -> &[Vec<usize>] {
        self.graphs.face_graph.get_or_init(|| {
            let lookup = self.edge_faces();
            self.faces
                .iter()
                .map(|face| {
                    cyclic_pairs(face)
                        .filter_map(|(a, b)| lookup.get(&(b, a)).copied())
                        .collect()
                })
                .collect()
        })
    }

    /// The face containing the directed edge `edge`
    pub fn face_with_edge(&self, edge: &Edge) -> Option<Face<'_>> {
        self.edge_faces()
            .get(&(edge.a, edge.b))
            .map(|&f| Face::new(self, f))
    }

    // Face queries

    /// Number of faces for each side count
    pub fn num_faces_by_sides(&self) -> BTreeMap<usize, usize> {
        let mut counts = BTreeMap::new();
        for face in &self.faces {
            *counts.entry(face.len()).or_insert(0) += 1;
        }
        counts
    }

    /// Distinct side counts, ascending
    pub fn face_types(&self) -> Vec<usize> {
        self.num_faces_by_sides().into_keys().collect()
    }

    /// The face with the most sides (lowest index on ties)
    pub fn biggest_face(&self) -> Option<Face<'_>> {
        self.face_list().min_by_key(|f| Reverse(f.num_sides()))
    }

    /// Length of an arbitrary edge; meaningful because edges are uniform
    pub fn edge_length(&self) -> f64 {
        self.edges()
            .first()
            .map(|e| (self.vertices[e.b] - self.vertices[e.a]).norm())
            .unwrap_or(0.0)
    }

    /// Every face touching any of `vertices`, each listed once
    pub fn adjacent_faces(&self, vertices: &[usize]) -> Vec<Face<'_>> {
        let membership = self.vertex_faces();
        let mut seen = HashSet::new();
        vertices
            .iter()
            .flat_map(|&v| membership[v].iter().copied())
            .filter(|&f| seen.insert(f))
            .map(|f| Face::new(self, f))
            .collect()
    }

    /// Faces around vertex `v` in cyclic order (counter-clockwise from outside).
    ///
    /// Fails if the faces touching `v` do not close into exactly one fan.
    pub fn directed_adjacent_faces(&self, v: usize) -> Result<Vec<Face<'_>>> {
        let touching = self
            .vertex_faces()
            .get(v)
            .ok_or_else(|| Error::structural(format!("vertex {} out of range", v)))?;
        let first = *touching
            .first()
            .ok_or_else(|| Error::structural(format!("vertex {} belongs to no face", v)))?;

        let mut fan = vec![first];
        let mut current = first;
        while fan.len() < touching.len() {
            let prev = self
                .face(current)
                .prev_vertex(v)
                .ok_or_else(|| Error::structural(format!("face {} lost vertex {}", current, v)))?;
            let next = touching
                .iter()
                .copied()
                .find(|&f| self.face(f).next_vertex(v) == Some(prev))
                .ok_or_else(|| {
                    Error::structural(format!("faces around vertex {} do not close into a fan", v))
                })?;
            if fan.contains(&next) {
                return Err(Error::structural(format!(
                    "vertex {} is non-manifold: its faces form more than one fan",
                    v
                )));
            }
            fan.push(next);
            current = next;
        }

        let closing = self.face(current).prev_vertex(v);
        if closing.is_none() || self.face(first).next_vertex(v) != closing {
            return Err(Error::structural(format!(
                "faces around vertex {} do not form a closed cycle",
                v
            )));
        }

        Ok(fan.into_iter().map(|f| Face::new(self, f)).collect())
    }

    // Structural transforms
    //
    // Transforms taking caller-supplied indices check them like `of`;
    // the rest cannot produce a dangling reference.

    /// Replace the vertex positions, keeping faces, edges and name
    pub fn with_vertices(&self, vertices: Vec<Point3<f64>>) -> Result<Self> {
        check_faces(vertices.len(), &self.faces)?;
        Ok(self.reposition(vertices))
    }

    fn reposition(&self, vertices: Vec<Point3<f64>>) -> Self {
        let mut result = Self::new(vertices, self.faces.clone());
        result.edges = self.edges.clone();
        result.name = self.name.clone();
        result
    }

    pub fn with_faces(&self, faces: Vec<Vec<usize>>) -> Result<Self> {
        Self::of(self.vertices.clone(), faces)
    }

    pub fn add_vertices(&self, vertices: impl IntoIterator<Item = Point3<f64>>) -> Self {
        let mut all = self.vertices.clone();
        all.extend(vertices);
        Self::new(all, self.faces.clone())
    }

    pub fn add_faces(&self, faces: impl IntoIterator<Item = Vec<usize>>) -> Result<Self> {
        let mut all = self.faces.clone();
        all.extend(faces);
        Self::of(self.vertices.clone(), all)
    }

    /// Concatenate `other` onto this mesh, offsetting its vertex references
    pub fn add_polyhedron(&self, other: &Polyhedron) -> Self {
        let offset = self.vertices.len();
        let mut vertices = self.vertices.clone();
        vertices.extend(other.vertices.iter().copied());
        let mut faces = self.faces.clone();
        faces.extend(
            other
                .faces
                .iter()
                .map(|face| face.iter().map(|&v| v + offset).collect()),
        );
        Self::new(vertices, faces)
    }

    pub fn remove_face(&self, index: usize) -> Self {
        self.remove_faces(&[index])
    }

    pub fn remove_faces(&self, indices: &[usize]) -> Self {
        let removed: HashSet<usize> = indices.iter().copied().collect();
        let faces = self
            .faces
            .iter()
            .enumerate()
            .filter(|(i, _)| !removed.contains(i))
            .map(|(_, face)| face.clone())
            .collect();
        Self::new(self.vertices.clone(), faces)
    }

    pub fn map_vertices(&self, f: impl FnMut(&Point3<f64>) -> Point3<f64>) -> Self {
        self.reposition(self.vertices.iter().map(f).collect())
    }

    pub fn map_faces(&self, mut f: impl FnMut(Face<'_>) -> Vec<usize>) -> Result<Self> {
        let faces = self.face_list().map(|face| f(face)).collect();
        self.with_faces(faces)
    }

    /// Drop vertices no face refers to, renumbering the rest in order
    pub fn remove_unused_vertices(&self) -> Self {
        let used: BTreeSet<usize> = self.faces.iter().flatten().copied().collect();
        if used.len() == self.vertices.len() {
            return self.clone();
        }
        let mut remap = vec![usize::MAX; self.vertices.len()];
        let mut vertices = Vec::with_capacity(used.len());
        for &v in &used {
            remap[v] = vertices.len();
            vertices.push(self.vertices[v]);
        }
        let faces = self
            .faces
            .iter()
            .map(|face| face.iter().map(|&v| remap[v]).collect())
            .collect();
        Self::new(vertices, faces)
    }

    /// Weld vertices closer than [`PRECISION`] and drop unreferenced ones.
    ///
    /// The first vertex of each coincident group keeps its position.
    pub fn deduplicate_vertices(&self) -> Self {
        let mut kept: Vec<Point3<f64>> = Vec::with_capacity(self.vertices.len());
        let mut remap = Vec::with_capacity(self.vertices.len());
        for p in &self.vertices {
            match kept.iter().position(|q| (p - q).norm() < PRECISION) {
                Some(j) => remap.push(j),
                None => {
                    remap.push(kept.len());
                    kept.push(*p);
                }
            }
        }
        let faces = self
            .faces
            .iter()
            .map(|face| face.iter().map(|&v| remap[v]).collect())
            .collect();
        Self::new(kept, faces).remove_unused_vertices()
    }

    pub fn scale(&self, factor: f64) -> Self {
        self.map_vertices(|p| Point3::from(p.coords * factor))
    }

    /// Dual polyhedron: one vertex per face centroid, one face per vertex fan
    pub fn dual(&self) -> Result<Self> {
        let vertices = self.face_list().map(|f| f.centroid()).collect();
        let faces = self
            .vertex_indices()
            .map(|v| {
                self.directed_adjacent_faces(v)
                    .map(|fan| fan.iter().map(|f| f.index()).collect())
            })
            .collect::<Result<Vec<Vec<usize>>>>()?;
        Ok(Self::new(vertices, faces))
    }

    // Geometry

    pub fn is_planar(&self, vertices: &[usize]) -> bool {
        let points: Vec<_> = vertices.iter().map(|&v| self.vertices[v]).collect();
        math::is_planar(&points)
    }

    /// Mean of all vertex positions
    pub fn centroid(&self) -> Point3<f64> {
        math::centroid(&self.vertices).unwrap_or_else(|_| Point3::origin())
    }

    /// Copy translated so that the centroid is the origin
    pub fn center(&self) -> Self {
        let offset = self.centroid().coords;
        self.map_vertices(|p| *p - offset)
    }

    /// Distance from the centroid to the centroid of the biggest face
    pub fn distance_to_center(&self) -> f64 {
        self.biggest_face()
            .map(|f| f.distance_to_center())
            .unwrap_or(0.0)
    }

    /// Angle at `edge` between its two faces, measured between the face
    /// centroids as seen from the edge midpoint
    pub fn dihedral_angle(&self, edge: &Edge) -> Result<f64> {
        let adjacent: Vec<Face<'_>> = self
            .vertex_faces()
            .get(edge.a)
            .map(|faces| {
                faces
                    .iter()
                    .map(|&f| Face::new(self, f))
                    .filter(|f| {
                        f.next_vertex(edge.a) == Some(edge.b) || f.prev_vertex(edge.a) == Some(edge.b)
                    })
                    .collect()
            })
            .unwrap_or_default();
        if adjacent.len() != 2 {
            return Err(Error::structural(format!(
                "edge ({}, {}) borders {} faces, expected 2",
                edge.a,
                edge.b,
                adjacent.len()
            )));
        }
        let mid = math::midpoint(&self.vertices[edge.a], &self.vertices[edge.b]);
        let v1 = adjacent[0].centroid() - mid;
        let v2 = adjacent[1].centroid() - mid;
        Ok(math::angle(&v1, &v2))
    }

    /// Face whose plane is nearest to `point` (lowest index on ties).
    ///
    /// Meant for points just outside a convex solid. Such a point lies in
    /// front of the face it is over and behind the planes of all the other
    /// faces, so the unsigned distance picks the same face the signed one
    /// would, and a point slightly inside still resolves to the nearest face.
    pub fn hit_face(&self, point: &Point3<f64>) -> Option<Face<'_>> {
        self.face_list()
            .map(|f| (f.plane().distance(point), f))
            .fold(None, |best: Option<(f64, Face<'_>)>, (d, f)| match best {
                Some((bd, _)) if bd <= d => best,
                _ => Some((d, f)),
            })
            .map(|(_, f)| f)
    }

    /// Topology fingerprint: one signature per face, sorted
    pub fn face_adjacency_list(&self) -> Vec<FaceSignature> {
        let graph = self.face_graph();
        let mut list: Vec<FaceSignature> = self
            .faces
            .iter()
            .enumerate()
            .map(|(i, face)| {
                let mut histogram = BTreeMap::new();
                for &adj in &graph[i] {
                    *histogram.entry(self.faces[adj].len()).or_insert(0) += 1;
                }
                FaceSignature {
                    sides: face.len(),
                    adjacent: histogram.into_iter().collect(),
                }
            })
            .collect();
        list.sort();
        list
    }

    /// Structural equivalence, ignoring coordinates and index order
    pub fn is_same(&self, other: &Polyhedron) -> bool {
        self.num_faces_by_sides() == other.num_faces_by_sides()
            && self.face_adjacency_list() == other.face_adjacency_list()
    }

    /// Check index validity, closure and consistent orientation
    pub fn validate(&self) -> Result<()> {
        let mut directed: HashMap<(usize, usize), usize> = HashMap::new();
        for (i, face) in self.faces.iter().enumerate() {
            if face.len() < 3 {
                return Err(Error::structural(format!("face {} has fewer than 3 vertices", i)));
            }
            if face.iter().any(|&v| v >= self.vertices.len()) {
                return Err(Error::structural(format!("face {} has an invalid vertex index", i)));
            }
            for pair in cyclic_pairs(face) {
                *directed.entry(pair).or_insert(0) += 1;
            }
        }
        for (&(a, b), &count) in &directed {
            if count != 1 {
                return Err(Error::structural(format!(
                    "directed edge ({}, {}) appears in {} faces",
                    a, b, count
                )));
            }
            if !directed.contains_key(&(b, a)) {
                return Err(Error::structural(format!(
                    "edge ({}, {}) is on an open boundary",
                    a, b
                )));
            }
        }
        Ok(())
    }
}

impl PartialEq for Polyhedron {
    fn eq(&self, other: &Self) -> bool {
        self.vertices == other.vertices && self.faces == other.faces
    }
}

/// Every face has at least 3 vertices and only references existing ones
fn check_faces(num_vertices: usize, faces: &[Vec<usize>]) -> Result<()> {
    for (i, face) in faces.iter().enumerate() {
        if face.len() < 3 {
            return Err(Error::structural(format!(
                "face {} has {} vertices, at least 3 required",
                i,
                face.len()
            )));
        }
        if let Some(&v) = face.iter().find(|&&v| v >= num_vertices) {
            return Err(Error::structural(format!(
                "face {} references vertex {} but there are only {} vertices",
                i, v, num_vertices
            )));
        }
    }
    Ok(())
}

/// Consecutive vertex pairs of a face, including the wrap-around pair
pub(crate) fn cyclic_pairs(face: &[usize]) -> impl Iterator<Item = (usize, usize)> + '_ {
    let n = face.len();
    (0..n).map(move |i| (face[i], face[(i + 1) % n]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::primitives;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_of_rejects_bad_indices() {
        let result = Polyhedron::of(vec![Point3::origin()], vec![vec![0, 1, 2]]);
        assert!(matches!(result, Err(Error::StructuralError(_))));
        let result = Polyhedron::of(vec![Point3::origin(); 3], vec![vec![0, 1]]);
        assert!(matches!(result, Err(Error::StructuralError(_))));
    }

    #[test]
    fn test_face_transforms_reject_bad_indices() {
        let cube = primitives::prism(4);
        assert!(matches!(
            cube.with_faces(vec![vec![0, 1, 99]]),
            Err(Error::StructuralError(_))
        ));
        assert!(matches!(
            cube.add_faces([vec![0, 1]]),
            Err(Error::StructuralError(_))
        ));
        assert!(matches!(
            cube.map_faces(|face| face.vertices().iter().map(|v| v + 8).collect()),
            Err(Error::StructuralError(_))
        ));
        assert!(matches!(
            cube.with_vertices(cube.vertices()[..4].to_vec()),
            Err(Error::StructuralError(_))
        ));

        let reversed = cube
            .map_faces(|face| face.vertices().iter().rev().copied().collect())
            .unwrap();
        assert_eq!(reversed.num_faces(), 6);
        assert!(cube.with_faces(vec![vec![0, 1, 2]]).is_ok());
    }

    #[test]
    fn test_vertex_lookup() {
        let cube = primitives::prism(4);
        assert_eq!(cube.get_vertex(3), Some(cube.vertex(3)));
        assert_eq!(cube.get_vertex(8), None);
        assert!(cube.get_face(6).is_none());
    }

    #[test]
    fn test_cube_counts() {
        let cube = primitives::prism(4);
        assert_eq!(cube.num_vertices(), 8);
        assert_eq!(cube.num_faces(), 6);
        assert_eq!(cube.edges().len(), 12);
        assert_eq!(cube.face_types(), vec![4]);
        assert_eq!(cube.num_faces_by_sides().get(&4), Some(&6));
        assert!(cube.validate().is_ok());
    }

    #[test]
    fn test_cube_dihedral_angle() {
        let cube = primitives::prism(4);
        for edge in cube.edges() {
            let angle = cube.dihedral_angle(edge).unwrap();
            assert!((angle - FRAC_PI_2).abs() < PRECISION);
        }
    }

    #[test]
    fn test_dihedral_angle_requires_two_faces() {
        let open = primitives::prism(4).remove_face(0);
        let top = primitives::prism(4).faces()[0].clone();
        let top_edge = Edge::new(top[0], top[1]);
        assert!(matches!(
            open.dihedral_angle(&top_edge),
            Err(Error::StructuralError(_))
        ));
    }

    #[test]
    fn test_directed_adjacent_faces_is_cyclic() {
        let cube = primitives::prism(4);
        for v in cube.vertex_indices() {
            let fan = cube.directed_adjacent_faces(v).unwrap();
            assert_eq!(fan.len(), 3);
            for i in 0..fan.len() {
                let current = fan[i];
                let next = fan[(i + 1) % fan.len()];
                assert_eq!(next.next_vertex(v), current.prev_vertex(v));
            }
        }
    }

    #[test]
    fn test_directed_adjacent_faces_rejects_boundary() {
        let open = primitives::prism(4).remove_face(0);
        let v = primitives::prism(4).faces()[0][0];
        assert!(matches!(
            open.directed_adjacent_faces(v),
            Err(Error::StructuralError(_))
        ));
    }

    #[test]
    fn test_transforms_return_fresh_instances() {
        let cube = primitives::prism(4);
        assert_eq!(cube.edges().len(), 12);
        let open = cube.remove_face(0);
        assert_eq!(open.num_faces(), 5);
        assert_eq!(open.edges().len(), 12);
        assert!(open.validate().is_err());
        assert_eq!(cube.num_faces(), 6);
    }

    #[test]
    fn test_add_polyhedron_offsets_faces() {
        let a = primitives::prism(4);
        let b = primitives::pyramid(3);
        let merged = a.add_polyhedron(&b);
        assert_eq!(merged.num_vertices(), 12);
        assert_eq!(merged.num_faces(), 10);
        assert_eq!(merged.faces()[6], b.faces()[0].iter().map(|v| v + 8).collect::<Vec<_>>());
    }

    #[test]
    fn test_deduplicate_vertices_welds_and_prunes() {
        let cube = primitives::prism(4);
        let doubled = cube.add_vertices(cube.vertices().to_vec()).add_vertices([Point3::new(9.0, 9.0, 9.0)]);
        let welded = doubled.deduplicate_vertices();
        assert_eq!(welded.num_vertices(), 8);
        assert_eq!(welded.faces(), cube.faces());
    }

    #[test]
    fn test_center() {
        let pyramid = primitives::pyramid(4).center();
        let c = pyramid.centroid();
        assert!(c.coords.norm() < 1e-9);
    }

    #[test]
    fn test_hit_face() {
        let cube = primitives::prism(4).center();
        for face in cube.face_list() {
            let point = face.centroid() + face.normal() * 0.01;
            assert_eq!(cube.hit_face(&point).map(|f| f.index()), Some(face.index()));
        }
    }

    #[test]
    fn test_adjacent_faces_dedup() {
        let cube = primitives::prism(4);
        let face = cube.faces()[0].clone();
        let faces = cube.adjacent_faces(&face);
        assert_eq!(faces.len(), 5);
    }

    #[test]
    fn test_is_same() {
        let cube = primitives::prism(4);
        let prism = primitives::prism(3);
        assert!(cube.is_same(&cube));
        assert!(!cube.is_same(&prism));
    }

    #[test]
    fn test_snapshot_roundtrip() {
        let cube = primitives::prism(4).with_name("cube");
        let snapshot = cube.snapshot();
        let restored = Polyhedron::from_snapshot(&snapshot).unwrap();
        assert_eq!(restored, cube);
        assert_eq!(restored.name(), Some("cube"));
        assert_eq!(restored.snapshot(), snapshot);
    }

    #[test]
    fn test_dual_of_cube_is_octahedron() {
        let cube = primitives::prism(4).center();
        let dual = cube.dual().unwrap();
        assert_eq!(dual.num_vertices(), 6);
        assert_eq!(dual.num_faces(), 8);
        assert_eq!(dual.face_types(), vec![3]);
        assert!(dual.validate().is_ok());
    }
}
