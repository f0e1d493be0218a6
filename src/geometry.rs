// src/geometry.rs

use std::f32::consts::{FRAC_PI_2, PI, TAU};

use glam::Vec2;

use crate::color::{Rgba, WHITE};
use crate::error::GeometryError;

/// A 2D coordinate in screen space (y grows downwards). Used for both
/// positions and displacements.
pub type Point2 = Vec2;

/// Euclidean length of `v`.
#[inline]
pub fn magnitude(v: Point2) -> f32 {
    (v.x * v.x + v.y * v.y).sqrt()
}

/// Unit vector pointing along `v`.
pub fn normalize(v: Point2) -> Result<Point2, GeometryError> {
    let mag = magnitude(v);
    if mag == 0.0 || !mag.is_finite() {
        return Err(GeometryError::DegenerateDirection);
    }
    Ok(Point2::new(v.x / mag, v.y / mag))
}

/// Angle of `v` from the positive x-axis towards the positive y-axis, in `[0, 2π)`.
///
/// With y pointing down this sweeps clockwise on screen. Axis-aligned vectors get
/// exact values and the zero vector maps to `0`.
pub fn angle_of(v: Point2) -> f32 {
    if v.x == 0.0 {
        return if v.y > 0.0 {
            FRAC_PI_2
        } else if v.y < 0.0 {
            3.0 * FRAC_PI_2
        } else {
            0.0
        };
    }
    if v.y == 0.0 {
        return if v.x > 0.0 { 0.0 } else { PI };
    }
    let angle = v.y.atan2(v.x).rem_euclid(TAU);
    // rem_euclid can round a tiny negative angle up to exactly TAU.
    if angle >= TAU {
        0.0
    } else {
        angle
    }
}

/// An ordered pair of endpoints with a display color. Boundaries and rays both
/// render as segments.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub start: Point2,
    pub end: Point2,
    pub color: Rgba,
}

impl Segment {
    pub fn new(start: Point2, end: Point2, color: Rgba) -> Self {
        Self { start, end, color }
    }

    /// White segment, the default look for boundaries.
    pub fn white(start: Point2, end: Point2) -> Self {
        Self::new(start, end, WHITE)
    }

    /// Displacement from `start` to `end`.
    #[inline]
    pub fn direction(&self) -> Point2 {
        self.end - self.start
    }

    pub fn length(&self) -> f32 {
        magnitude(self.direction())
    }

    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    pub vertices: [Point2; 3],
    pub color: Rgba,
}

impl Triangle {
    pub fn new(a: Point2, b: Point2, c: Point2, color: Rgba) -> Self {
        Self {
            vertices: [a, b, c],
            color,
        }
    }

    pub fn area(&self) -> f32 {
        let [a, b, c] = self.vertices;
        ((b - a).perp_dot(c - a)).abs() / 2.0
    }

    pub fn contains_vertex(&self, p: Point2) -> bool {
        self.vertices.contains(&p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn magnitude_of_3_4_is_5() {
        assert_eq!(magnitude(Point2::new(3.0, -4.0)), 5.0);
        assert_eq!(magnitude(Point2::ZERO), 0.0);
    }

    #[test]
    fn normalize_rejects_zero_vector() {
        assert_eq!(
            normalize(Point2::ZERO),
            Err(GeometryError::DegenerateDirection)
        );
        assert_eq!(
            normalize(Point2::new(f32::NAN, 1.0)),
            Err(GeometryError::DegenerateDirection)
        );
        assert_eq!(normalize(Point2::new(0.0, -7.0)), Ok(Point2::new(0.0, -1.0)));
    }

    #[test]
    fn axis_angles() {
        assert_eq!(angle_of(Point2::new(1.0, 0.0)), 0.0);
        assert_eq!(angle_of(Point2::new(0.0, 1.0)), FRAC_PI_2);
        assert_eq!(angle_of(Point2::new(-1.0, 0.0)), PI);
        assert_eq!(angle_of(Point2::new(0.0, -1.0)), 3.0 * FRAC_PI_2);
        assert_eq!(angle_of(Point2::ZERO), 0.0);
    }

    #[test]
    fn diagonal_angles_fall_in_their_quadrants() {
        let q = std::f32::consts::FRAC_PI_4;
        assert!((angle_of(Point2::new(1.0, 1.0)) - q).abs() < 1e-6);
        assert!((angle_of(Point2::new(-1.0, 1.0)) - 3.0 * q).abs() < 1e-6);
        assert!((angle_of(Point2::new(-1.0, -1.0)) - 5.0 * q).abs() < 1e-6);
        assert!((angle_of(Point2::new(1.0, -1.0)) - 7.0 * q).abs() < 1e-6);
    }

    #[test]
    fn triangle_area_and_vertices() {
        let t = Triangle::new(
            Point2::ZERO,
            Point2::new(4.0, 0.0),
            Point2::new(0.0, 3.0),
            WHITE,
        );
        assert_eq!(t.area(), 6.0);
        assert!(t.contains_vertex(Point2::new(4.0, 0.0)));
        assert!(!t.contains_vertex(Point2::new(1.0, 1.0)));
    }

    #[test]
    fn segment_direction_and_length() {
        let s = Segment::white(Point2::new(1.0, 1.0), Point2::new(4.0, 5.0));
        assert_eq!(s.direction(), Point2::new(3.0, 4.0));
        assert_eq!(s.length(), 5.0);
        assert!(!s.is_degenerate());
        assert!(Segment::white(s.start, s.start).is_degenerate());
    }

    proptest! {
        #[test]
        fn normalized_directions_have_unit_length(
            sx in -1000.0f32..1000.0, sy in -1000.0f32..1000.0,
            gx in -1000.0f32..1000.0, gy in -1000.0f32..1000.0,
        ) {
            let start = Point2::new(sx, sy);
            let goal = Point2::new(gx, gy);
            prop_assume!(start != goal);
            let unit = normalize(goal - start).unwrap();
            prop_assert!((magnitude(unit) - 1.0).abs() < 1e-5);
        }

        #[test]
        fn angle_is_in_range_and_matches_direction(
            x in -1000.0f32..1000.0, y in -1000.0f32..1000.0,
        ) {
            let v = Point2::new(x, y);
            prop_assume!(magnitude(v) > 1e-3);
            let a = angle_of(v);
            prop_assert!((0.0..TAU).contains(&a));
            let unit = normalize(v).unwrap();
            prop_assert!((a.cos() - unit.x).abs() < 1e-3);
            prop_assert!((a.sin() - unit.y).abs() < 1e-3);
        }
    }
}
