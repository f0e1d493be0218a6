// src/scene.rs

use log::{debug, info, warn};
use rand::Rng;

use crate::config::{FanColoring, SceneConfig};
use crate::error::GeometryError;
use crate::generator::BoundaryGenerator;
use crate::geometry::{Point2, Segment};
use crate::session::BoundaryDraft;
use crate::visibility::{Raycaster, RenderTarget};

const ENCLOSURE_WALLS: usize = 4;

/// Counts shown in the control panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SceneStats {
    pub lights: usize,
    pub boundaries: usize,
    pub rays: usize,
    pub triangles: usize,
}

/// The interactive world: one shared boundary list and any number of lights.
///
/// The first `ENCLOSURE_WALLS` boundaries are the walls around the window; user
/// boundaries follow in commit order. Light 0 follows the pointer.
#[derive(Debug)]
pub struct LightScene {
    config: SceneConfig,
    boundaries: Vec<Segment>,
    lights: Vec<Raycaster>,
    draft: BoundaryDraft,
}

impl LightScene {
    pub fn new(config: SceneConfig) -> Self {
        let center = Point2::new(config.width / 2.0, config.height / 2.0);
        let mut scene = Self {
            config,
            boundaries: config.enclosure().to_vec(),
            lights: Vec::new(),
            draft: BoundaryDraft::Idle,
        };
        scene.add_light(center);
        scene
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn boundaries(&self) -> &[Segment] {
        &self.boundaries
    }

    /// Boundaries committed by the user, without the enclosure.
    pub fn user_boundaries(&self) -> &[Segment] {
        &self.boundaries[ENCLOSURE_WALLS..]
    }

    pub fn lights(&self) -> &[Raycaster] {
        &self.lights
    }

    pub fn draft(&self) -> &BoundaryDraft {
        &self.draft
    }

    pub fn move_primary_light(&mut self, point: Point2) {
        if let Some(primary) = self.lights.first_mut() {
            primary.set_source(point);
        }
    }

    /// Pointer motion drags the primary light and the loose end of a draft.
    pub fn pointer_moved(&mut self, point: Point2) {
        self.move_primary_light(point);
        self.draft.hover(point);
    }

    /// Left click: start or finish a boundary.
    pub fn click(&mut self, point: Point2) {
        if let Some(boundary) = self.draft.click(point, self.config.boundary_color) {
            // Rejections are already logged.
            let _ = self.commit_boundary(boundary);
        }
    }

    pub fn cancel_draft(&mut self) {
        self.draft.cancel();
    }

    /// Adds a stationary light that sees every existing boundary.
    pub fn add_light(&mut self, source: Point2) {
        let mut light = Raycaster::new(source, self.config.raycaster);
        if let Some(primary) = self.lights.first() {
            light.set_polygon_visible(primary.polygon_visible());
            light.set_fan_coloring(primary.config().fan_coloring);
        }
        register_all(&mut light, &self.boundaries);
        self.lights.push(light);
        info!("added light #{} at {:?}", self.lights.len(), source);
    }

    /// Appends `boundary` to the shared list and aims every light at it.
    pub fn commit_boundary(&mut self, boundary: Segment) -> Result<(), GeometryError> {
        if boundary.is_degenerate() {
            warn!("ignoring zero-length boundary at {:?}", boundary.start);
            return Err(GeometryError::DegenerateDirection);
        }
        for light in &mut self.lights {
            if let Err(err) = light.register_boundary(&boundary) {
                warn!("light at {:?} cannot track new boundary: {err}", light.source());
            }
        }
        self.boundaries.push(boundary);
        debug!("committed boundary #{}", self.boundaries.len() - ENCLOSURE_WALLS);
        Ok(())
    }

    /// Removes every user boundary; the enclosure and the lights stay.
    pub fn clear_boundaries(&mut self) {
        self.boundaries.truncate(ENCLOSURE_WALLS);
        self.draft.cancel();
        self.reregister_lights();
        info!("cleared user boundaries");
    }

    /// Rebuilds the enclosure for a new window size, keeping user boundaries.
    pub fn resize(&mut self, width: f32, height: f32) {
        if width <= 0.0 || height <= 0.0 {
            return;
        }
        self.config = self.config.with_size(width, height);
        let enclosure = self.config.enclosure();
        self.boundaries[..ENCLOSURE_WALLS].copy_from_slice(&enclosure);
        self.reregister_lights();
        debug!("scene resized to {width}x{height}");
    }

    pub fn scatter_random(&mut self, rng: &mut impl Rng, count: usize) {
        let avg_length = self.config.width.min(self.config.height) / 8.0;
        let boundaries = BoundaryGenerator::scatter_boundaries(
            rng,
            self.config.width,
            self.config.height,
            avg_length,
            count,
            self.config.boundary_color,
        );
        for boundary in boundaries {
            let _ = self.commit_boundary(boundary);
        }
    }

    pub fn toggle_polygons(&mut self) {
        for light in &mut self.lights {
            light.toggle_polygon();
        }
    }

    pub fn set_polygons_visible(&mut self, visible: bool) {
        for light in &mut self.lights {
            light.set_polygon_visible(visible);
        }
    }

    pub fn polygons_visible(&self) -> bool {
        self.lights.first().map_or(true, Raycaster::polygon_visible)
    }

    pub fn fan_coloring(&self) -> FanColoring {
        self.lights
            .first()
            .map_or(self.config.raycaster.fan_coloring, |light| light.config().fan_coloring)
    }

    pub fn set_fan_coloring(&mut self, coloring: FanColoring) {
        for light in &mut self.lights {
            light.set_fan_coloring(coloring);
        }
    }

    pub fn cycle_coloring(&mut self) {
        let next = self.fan_coloring().cycled();
        self.set_fan_coloring(next);
    }

    /// One frame of ray casting for every light.
    pub fn update(&mut self) {
        for light in &mut self.lights {
            light.update(&self.boundaries);
        }
    }

    /// Lights first, then boundaries on top, then the draft preview.
    pub fn render<T: RenderTarget + ?Sized>(&self, target: &mut T) {
        for light in &self.lights {
            light.render(target);
        }
        for boundary in &self.boundaries {
            target.draw_line(boundary);
        }
        if let Some(preview) = self.draft.preview(self.config.preview_color) {
            target.draw_line(&preview);
        }
    }

    pub fn stats(&self) -> SceneStats {
        SceneStats {
            lights: self.lights.len(),
            boundaries: self.boundaries.len() - ENCLOSURE_WALLS,
            rays: self.lights.iter().map(|l| l.rays().len()).sum(),
            triangles: self.lights.iter().map(|l| l.polygon().len()).sum(),
        }
    }

    fn reregister_lights(&mut self) {
        for light in &mut self.lights {
            light.clear();
            register_all(light, &self.boundaries);
        }
    }
}

fn register_all(light: &mut Raycaster, boundaries: &[Segment]) {
    for boundary in boundaries {
        if let Err(err) = light.register_boundary(boundary) {
            warn!("skipping boundary {:?} -> {:?}: {err}", boundary.start, boundary.end);
        }
    }
}
