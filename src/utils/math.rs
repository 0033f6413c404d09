// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Vector and plane math

use crate::error::{Error, Result};
use nalgebra::{Point3, Vector3};

/// Tolerance used for every geometric comparison in the crate
pub const PRECISION: f64 = 1e-3;

/// Position vector of a point
pub fn vec(point: &Point3<f64>) -> Vector3<f64> {
    point.coords
}

/// Midpoint between two points
pub fn midpoint(a: &Point3<f64>, b: &Point3<f64>) -> Point3<f64> {
    Point3::from((a.coords + b.coords) / 2.0)
}

/// Mean of a non-empty set of points
pub fn centroid<'a, I>(points: I) -> Result<Point3<f64>>
where
    I: IntoIterator<Item = &'a Point3<f64>>,
{
    let mut sum = Vector3::zeros();
    let mut count = 0usize;
    for p in points {
        sum += p.coords;
        count += 1;
    }
    if count == 0 {
        return Err(Error::structural("cannot take the centroid of zero points"));
    }
    Ok(Point3::from(sum / count as f64))
}

/// Calculate the normal of a triangle given three vertices
pub fn normal(p0: &Point3<f64>, p1: &Point3<f64>, p2: &Point3<f64>) -> Vector3<f64> {
    let v1 = p1 - p0;
    let v2 = p2 - p0;
    v1.cross(&v2).normalize()
}

/// Plane in Hessian normal form: `normal · p + constant = 0`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    pub normal: Vector3<f64>,
    pub constant: f64,
}

impl Plane {
    /// Plane through the first three of `points`, oriented by their winding
    pub fn from_points(points: &[Point3<f64>]) -> Result<Self> {
        match points {
            [a, b, c, ..] => Ok(Self::from_triangle(a, b, c)),
            _ => Err(Error::structural(format!(
                "a plane needs three points, got {}",
                points.len()
            ))),
        }
    }

    pub fn from_triangle(a: &Point3<f64>, b: &Point3<f64>, c: &Point3<f64>) -> Self {
        let normal = normal(a, b, c);
        Self {
            normal,
            constant: -normal.dot(&a.coords),
        }
    }

    /// Signed distance, positive on the side the normal points to
    pub fn signed_distance(&self, point: &Point3<f64>) -> f64 {
        self.normal.dot(&point.coords) + self.constant
    }

    pub fn distance(&self, point: &Point3<f64>) -> f64 {
        self.signed_distance(point).abs()
    }

    pub fn contains(&self, point: &Point3<f64>) -> bool {
        self.distance(point) < PRECISION
    }
}

/// True if every point lies on the plane through the first three
pub fn is_planar(points: &[Point3<f64>]) -> bool {
    if points.len() < 4 {
        return true;
    }
    match Plane::from_points(points) {
        Ok(plane) => points.iter().all(|p| plane.contains(p)),
        Err(_) => true,
    }
}

/// Unsigned angle between two vectors, in `[0, π]`
pub fn angle(a: &Vector3<f64>, b: &Vector3<f64>) -> f64 {
    a.angle(b)
}

/// Angle from `a` to `b`, positive when counter-clockwise around `axis`
pub fn signed_angle(a: &Vector3<f64>, b: &Vector3<f64>, axis: &Vector3<f64>) -> f64 {
    let unsigned = a.angle(b);
    if a.cross(b).dot(axis) < 0.0 {
        -unsigned
    } else {
        unsigned
    }
}

/// True if `a` and `-b` are equal within tolerance
pub fn is_inverse(a: &Vector3<f64>, b: &Vector3<f64>) -> bool {
    (a + b).norm() < PRECISION
}

/// Check if two floats are approximately equal
pub fn approx_eq(a: f64, b: f64, epsilon: f64) -> bool {
    (a - b).abs() < epsilon
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_approx_eq() {
        assert!(approx_eq(1.0, 1.0001, 0.001));
        assert!(!approx_eq(1.0, 1.1, 0.001));
    }

    #[test]
    fn test_centroid() {
        let points = [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(2.0, 0.0, 0.0),
            Point3::new(2.0, 2.0, 0.0),
            Point3::new(0.0, 2.0, 0.0),
        ];
        let c = centroid(&points).unwrap();
        assert!(approx_eq(c.x, 1.0, 1e-12));
        assert!(approx_eq(c.y, 1.0, 1e-12));
        let empty: [Point3<f64>; 0] = [];
        assert!(centroid(&empty).is_err());
    }

    #[test]
    fn test_midpoint() {
        let m = midpoint(&Point3::new(0.0, 0.0, 0.0), &Point3::new(2.0, 4.0, -2.0));
        assert_eq!(m, Point3::new(1.0, 2.0, -1.0));
    }

    #[test]
    fn test_plane_needs_three_points() {
        let err = Plane::from_points(&[Point3::origin(), Point3::new(1.0, 0.0, 0.0)]);
        assert!(matches!(err, Err(Error::StructuralError(_))));
    }

    #[test]
    fn test_plane_distance() {
        let plane = Plane::from_points(&[
            Point3::new(0.0, 0.0, 1.0),
            Point3::new(1.0, 0.0, 1.0),
            Point3::new(0.0, 1.0, 1.0),
        ])
        .unwrap();
        assert!(approx_eq(plane.signed_distance(&Point3::new(5.0, 5.0, 3.0)), 2.0, 1e-12));
        assert!(approx_eq(plane.signed_distance(&Point3::origin()), -1.0, 1e-12));
    }

    #[test]
    fn test_is_planar() {
        let square = [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        ];
        assert!(is_planar(&square));
        let bent = [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
            Point3::new(0.0, 1.0, 0.5),
        ];
        assert!(!is_planar(&bent));
    }

    #[test]
    fn test_angles() {
        let x = Vector3::x();
        let y = Vector3::y();
        let z = Vector3::z();
        assert!(approx_eq(angle(&x, &y), FRAC_PI_2, 1e-12));
        assert!(approx_eq(signed_angle(&x, &y, &z), FRAC_PI_2, 1e-12));
        assert!(approx_eq(signed_angle(&y, &x, &z), -FRAC_PI_2, 1e-12));
        assert!(approx_eq(angle(&x, &-x), PI, 1e-12));
    }

    #[test]
    fn test_is_inverse() {
        assert!(is_inverse(&Vector3::new(1.0, 2.0, 3.0), &Vector3::new(-1.0, -2.0, -3.0)));
        assert!(!is_inverse(&Vector3::x(), &Vector3::x()));
    }

    #[test]
    fn test_normal() {
        let n = normal(
            &Point3::new(0.0, 0.0, 0.0),
            &Point3::new(1.0, 0.0, 0.0),
            &Point3::new(0.0, 1.0, 0.0),
        );
        assert!(approx_eq(n.z, 1.0, 1e-12));
    }
}
