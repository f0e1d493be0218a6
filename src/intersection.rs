// src/intersection.rs

use crate::geometry::{Point2, Segment};

/// Default tolerance for treating a ray and a boundary as parallel. It is compared
/// against the sine of the angle between them (the determinant divided by both
/// lengths), so it does not depend on the scene scale.
pub const PARALLEL_EPSILON: f32 = 1e-6;

/// Outcome of intersecting a probe ray with one boundary.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Intersection {
    /// Valid hit: `t > 0` along the ray, `0 < u < 1` along the boundary.
    Hit { t: f32, u: f32 },
    /// Ray and boundary are (near) parallel; there is no single crossing point.
    Parallel,
    /// The lines cross, but behind the ray or outside the boundary.
    NoIntersection,
}

impl Intersection {
    /// Ray parameter of a valid hit.
    pub fn t(&self) -> Option<f32> {
        match self {
            Intersection::Hit { t, .. } => Some(*t),
            _ => None,
        }
    }
}

/// Intersects the line through `ray_start`/`ray_end` with `boundary`.
///
/// `t` is measured in units of `ray_end - ray_start`, so with a unit-length probe it
/// is the distance from `ray_start` to the hit.
pub fn intersect(
    ray_start: Point2,
    ray_end: Point2,
    boundary: &Segment,
    parallel_epsilon: f32,
) -> Intersection {
    let rs = ray_start;
    let re = ray_end;
    let bs = boundary.start;
    let be = boundary.end;

    let denominator = (rs.x - re.x) * (bs.y - be.y) - (rs.y - re.y) * (bs.x - be.x);
    let scale = (re - rs).length() * (be - bs).length();
    if !(denominator.abs() > parallel_epsilon * scale) {
        return Intersection::Parallel;
    }

    let t_numerator = (rs.x - bs.x) * (bs.y - be.y) - (rs.y - bs.y) * (bs.x - be.x);
    let u_numerator = -((rs.x - re.x) * (rs.y - bs.y) - (rs.y - re.y) * (rs.x - bs.x));

    let t = t_numerator / denominator;
    let u = u_numerator / denominator;

    if t > 0.0 && u > 0.0 && u < 1.0 {
        Intersection::Hit { t, u }
    } else {
        Intersection::NoIntersection
    }
}

/// Smallest valid `t` of the probe `ray_start -> ray_start + direction` against all
/// boundaries, or `None` when nothing is hit.
pub fn nearest_hit(
    ray_start: Point2,
    direction: Point2,
    boundaries: &[Segment],
    parallel_epsilon: f32,
) -> Option<f32> {
    let ray_end = ray_start + direction;
    boundaries
        .iter()
        .filter_map(|boundary| intersect(ray_start, ray_end, boundary, parallel_epsilon).t())
        .min_by(|a, b| a.total_cmp(b))
}
