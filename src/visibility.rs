// src/visibility.rs

use log::{debug, trace};

use crate::color::{hsv_to_rgba, Rgba};
use crate::config::{FanColoring, RaycasterConfig};
use crate::error::GeometryError;
use crate::geometry::{angle_of, normalize, Point2, Segment, Triangle};
use crate::intersection::nearest_hit;

/// Probes aimed per registered boundary: two per endpoint.
pub const PROBES_PER_BOUNDARY: usize = 4;

/// Anything that can draw the engine's output.
pub trait RenderTarget {
    fn draw_line(&mut self, segment: &Segment);
    fn draw_triangle(&mut self, triangle: &Triangle);
}

/// A probe segment pinned to the light. `goal` is the fixed aim point; `end` is
/// recomputed from it on every update.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    segment: Segment,
    goal: Point2,
}

impl Ray {
    fn new(source: Point2, goal: Point2, color: Rgba) -> Self {
        Self {
            segment: Segment::new(source, goal, color),
            goal,
        }
    }

    pub fn start(&self) -> Point2 {
        self.segment.start
    }

    pub fn end(&self) -> Point2 {
        self.segment.end
    }

    pub fn goal(&self) -> Point2 {
        self.goal
    }

    pub fn segment(&self) -> &Segment {
        &self.segment
    }

    /// Rendered displacement, `end - start`.
    pub fn direction(&self) -> Point2 {
        self.segment.direction()
    }
}

/// Read-only view of one light's state after an update.
#[derive(Clone, Copy, Debug)]
pub struct Snapshot<'a> {
    pub source: Point2,
    pub rays: &'a [Ray],
    pub polygon: &'a [Triangle],
    pub polygon_visible: bool,
}

/// One point light and the probe rays it casts towards registered boundaries.
///
/// The boundary list belongs to the caller and is passed to [`Raycaster::update`]
/// each frame, so several lights can share it.
#[derive(Clone, Debug)]
pub struct Raycaster {
    source: Point2,
    rays: Vec<Ray>,
    polygon: Vec<Triangle>,
    config: RaycasterConfig,
    polygon_visible: bool,
}

impl Raycaster {
    pub fn new(source: Point2, config: RaycasterConfig) -> Self {
        Self {
            source,
            rays: Vec::new(),
            polygon: Vec::new(),
            config,
            polygon_visible: true,
        }
    }

    pub fn source(&self) -> Point2 {
        self.source
    }

    pub fn rays(&self) -> &[Ray] {
        &self.rays
    }

    /// The visibility fan built by the last update.
    pub fn polygon(&self) -> &[Triangle] {
        &self.polygon
    }

    pub fn config(&self) -> &RaycasterConfig {
        &self.config
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            source: self.source,
            rays: &self.rays,
            polygon: &self.polygon,
            polygon_visible: self.polygon_visible,
        }
    }

    /// Moves the light. Ray ends are left alone until the next update.
    pub fn set_source(&mut self, source: Point2) {
        self.source = source;
        for ray in &mut self.rays {
            ray.segment.start = source;
        }
    }

    /// Adds four probes aimed just past each end of `boundary`, nudged both ways
    /// along the boundary's own direction.
    pub fn register_boundary(&mut self, boundary: &Segment) -> Result<(), GeometryError> {
        let offset = normalize(boundary.direction())? * self.config.probe_nudge;

        let requested = self.rays.len() + PROBES_PER_BOUNDARY;
        if let Some(capacity) = self.config.max_rays {
            if requested > capacity {
                return Err(GeometryError::CapacityExceeded {
                    requested,
                    capacity,
                });
            }
        }

        let goals = [
            boundary.start + offset,
            boundary.start - offset,
            boundary.end + offset,
            boundary.end - offset,
        ];
        let (source, color) = (self.source, self.config.ray_color);
        self.rays
            .extend(goals.into_iter().map(|goal| Ray::new(source, goal, color)));

        debug!(
            "registered boundary {:?} -> {:?}, light now has {} rays",
            boundary.start,
            boundary.end,
            self.rays.len()
        );
        Ok(())
    }

    /// Drops every ray and the current polygon.
    pub fn clear(&mut self) {
        self.rays.clear();
        self.polygon.clear();
    }

    /// Shortens every ray to its nearest boundary hit and rebuilds the polygon.
    ///
    /// A ray whose goal coincides with the light keeps its previous end. A ray that
    /// hits nothing reaches out to its goal.
    pub fn update(&mut self, boundaries: &[Segment]) {
        if self.rays.is_empty() {
            self.polygon.clear();
            return;
        }

        let parallel_epsilon = self.config.parallel_epsilon;
        let mut skipped = 0usize;
        for ray in &mut self.rays {
            let start = ray.start();
            let direction = match normalize(ray.goal - start) {
                Ok(direction) => direction,
                Err(_) => {
                    skipped += 1;
                    continue;
                }
            };
            ray.segment.end = match nearest_hit(start, direction, boundaries, parallel_epsilon) {
                Some(t) => start + direction * t,
                None => ray.goal,
            };
        }
        if skipped > 0 {
            trace!("skipped {skipped} rays with a degenerate direction");
        }

        self.update_polygon();
    }

    /// Rebuilds the triangle fan from the current ray ends, walking the rays in
    /// ascending angle and closing back onto the first one. Fewer than two rays
    /// leave the polygon empty.
    pub fn update_polygon(&mut self) {
        self.polygon.clear();
        let n = self.rays.len();
        if n < 2 {
            return;
        }

        let mut order: Vec<(f32, usize)> = self
            .rays
            .iter()
            .enumerate()
            .map(|(i, ray)| (angle_of(ray.direction()), i))
            .collect();
        order.sort_by(|a, b| a.0.total_cmp(&b.0));

        self.polygon.reserve(n);
        for i in 0..n {
            let a = self.rays[order[i].1].end();
            let b = self.rays[order[(i + 1) % n].1].end();
            let color = self.triangle_color(i, n);
            self.polygon.push(Triangle::new(self.source, a, b, color));
        }
    }

    fn triangle_color(&self, index: usize, count: usize) -> Rgba {
        match self.config.fan_coloring {
            FanColoring::Rainbow {
                saturation,
                value,
                alpha,
            } => {
                let hue = 360.0 / count as f32 * index as f32;
                hsv_to_rgba(hue, saturation, value, alpha)
            }
            FanColoring::Solid(color) => color,
        }
    }

    /// Draws every ray, then the fan if it is visible.
    pub fn render<T: RenderTarget + ?Sized>(&self, target: &mut T) {
        for ray in &self.rays {
            target.draw_line(ray.segment());
        }
        if !self.polygon_visible {
            return;
        }
        for triangle in &self.polygon {
            target.draw_triangle(triangle);
        }
    }

    pub fn polygon_visible(&self) -> bool {
        self.polygon_visible
    }

    pub fn set_polygon_visible(&mut self, visible: bool) {
        self.polygon_visible = visible;
    }

    pub fn toggle_polygon(&mut self) {
        self.polygon_visible = !self.polygon_visible;
    }

    /// Takes effect on the next polygon rebuild.
    pub fn set_fan_coloring(&mut self, coloring: FanColoring) {
        self.config.fan_coloring = coloring;
    }
}
