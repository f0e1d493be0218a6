// src/ui.rs

use raycaster2d::{FanColoring, SceneStats};

use crate::engine_lib::InputAction;

/// Scene state the panel displays.
pub struct UiView {
    pub stats: SceneStats,
    pub polygons_visible: bool,
    pub coloring: FanColoring,
}

pub fn build_ui(ctx: &egui::Context, view: &UiView) -> Option<InputAction> {
    let mut action = None;
    egui::Window::new("Raycasting")
        .anchor(egui::Align2::LEFT_TOP, egui::vec2(10.0, 10.0))
        .resizable(false)
        .show(ctx, |ui| {
            ui.vertical(|ui| {
                ui.label(format!("Lights: {}", view.stats.lights));
                ui.label(format!("Boundaries: {}", view.stats.boundaries));
                ui.label(format!("Rays: {}", view.stats.rays));
                ui.label(format!("Triangles: {}", view.stats.triangles));
                ui.separator();

                let mut visible = view.polygons_visible;
                if ui.checkbox(&mut visible, "Show light polygon").changed() {
                    action = Some(InputAction::TogglePolygons);
                }
                let mut rainbow = matches!(view.coloring, FanColoring::Rainbow { .. });
                if ui.checkbox(&mut rainbow, "Rainbow fan").changed() {
                    action = Some(InputAction::CycleColoring);
                }
                ui.horizontal(|ui| {
                    if ui.button("Scatter").clicked() {
                        action = Some(InputAction::ScatterBoundaries);
                    }
                    if ui.button("Clear").clicked() {
                        action = Some(InputAction::ClearBoundaries);
                    }
                });
                ui.separator();

                ui.label("Mouse: light follows the cursor");
                ui.label("   Left click twice: draw a boundary");
                ui.label("   Right click: place a fixed light");
                ui.label("Space: toggle polygon   R: coloring");
                ui.label("G: scatter   C: clear   Esc: cancel");
            });
        });
    action
}
