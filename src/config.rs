// src/config.rs

use crate::color::{Rgba, WHITE};
use crate::geometry::{Point2, Segment};
use crate::intersection::PARALLEL_EPSILON;

pub const DEFAULT_SCENE_WIDTH: f32 = 700.0;
pub const DEFAULT_SCENE_HEIGHT: f32 = 700.0;

/// How the visibility fan is colored.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FanColoring {
    /// Hue cycles with the triangle index around the full circle.
    Rainbow { saturation: f32, value: f32, alpha: f32 },
    Solid(Rgba),
}

impl Default for FanColoring {
    fn default() -> Self {
        FanColoring::Rainbow {
            saturation: 0.9,
            value: 1.0,
            alpha: 210.0 / 255.0,
        }
    }
}

impl FanColoring {
    pub const SOFT_LIGHT: FanColoring = FanColoring::Solid([1.0, 0.95, 0.7, 0.6]);

    /// Rainbow -> solid -> rainbow.
    pub fn cycled(self) -> Self {
        match self {
            FanColoring::Rainbow { .. } => FanColoring::SOFT_LIGHT,
            FanColoring::Solid(_) => FanColoring::default(),
        }
    }
}

/// Per-light tuning.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RaycasterConfig {
    /// Length of the tangential nudge applied to boundary endpoints when aiming probes.
    pub probe_nudge: f32,
    pub parallel_epsilon: f32,
    /// Hard limit on the number of probe rays; `None` grows without bound.
    pub max_rays: Option<usize>,
    pub fan_coloring: FanColoring,
    pub ray_color: Rgba,
}

impl Default for RaycasterConfig {
    fn default() -> Self {
        Self {
            probe_nudge: 1.0,
            parallel_epsilon: PARALLEL_EPSILON,
            max_rays: None,
            fan_coloring: FanColoring::default(),
            ray_color: WHITE,
        }
    }
}

/// Scene bounds and shared colors.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneConfig {
    pub width: f32,
    pub height: f32,
    /// Distance the enclosing walls sit outside the visible area.
    pub enclosure_margin: f32,
    pub boundary_color: Rgba,
    pub preview_color: Rgba,
    pub background: Rgba,
    pub raycaster: RaycasterConfig,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_SCENE_WIDTH,
            height: DEFAULT_SCENE_HEIGHT,
            enclosure_margin: 5.0,
            boundary_color: WHITE,
            preview_color: [0.6, 0.6, 0.6, 1.0],
            background: [0.0, 0.0, 0.0, 1.0],
            raycaster: RaycasterConfig::default(),
        }
    }
}

impl SceneConfig {
    pub fn with_size(mut self, width: f32, height: f32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// The four walls that keep every probe ray finite: top, left, bottom, right.
    pub fn enclosure(&self) -> [Segment; 4] {
        let m = self.enclosure_margin;
        let (w, h) = (self.width, self.height);
        let c = self.boundary_color;
        [
            Segment::new(Point2::new(-m, -m), Point2::new(w + m, -m), c),
            Segment::new(Point2::new(-m, -m), Point2::new(-m, h + m), c),
            Segment::new(Point2::new(-m, h + m), Point2::new(w + m, h + m), c),
            Segment::new(Point2::new(w + m, -m), Point2::new(w + m, h + m), c),
        ]
    }

    pub fn contains(&self, p: Point2) -> bool {
        p.x >= 0.0 && p.y >= 0.0 && p.x <= self.width && p.y <= self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enclosure_surrounds_the_window() {
        let config = SceneConfig::default().with_size(200.0, 100.0);
        let walls = config.enclosure();
        assert_eq!(walls.len(), 4);
        for wall in walls {
            assert!(!wall.is_degenerate());
            for p in [wall.start, wall.end] {
                assert!(!config.contains(p));
            }
        }
        assert_eq!(walls[3].end, Point2::new(205.0, 105.0));
    }

    #[test]
    fn coloring_cycles_back_to_rainbow() {
        let start = FanColoring::default();
        assert_eq!(start.cycled(), FanColoring::SOFT_LIGHT);
        assert_eq!(start.cycled().cycled(), start);
    }
}
