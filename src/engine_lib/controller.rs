// src/engine_lib/controller.rs

use raycaster2d::Point2;
use winit::{
    event::{ElementState, MouseButton, WindowEvent},
    keyboard::{KeyCode, PhysicalKey},
};

/// What a window event asks the scene to do.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputAction {
    PointerMoved(Point2),
    Click(Point2),
    PlaceLight(Point2),
    TogglePolygons,
    CycleColoring,
    ClearBoundaries,
    ScatterBoundaries,
    CancelDraft,
}

/// Tracks the cursor and maps raw winit input to [`InputAction`]s.
#[derive(Debug, Default)]
pub struct PointerController {
    cursor: Option<Point2>,
}

impl PointerController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle_window_event(&mut self, event: &WindowEvent) -> Option<InputAction> {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                let point = Point2::new(position.x as f32, position.y as f32);
                self.cursor = Some(point);
                Some(InputAction::PointerMoved(point))
            }
            WindowEvent::CursorLeft { .. } => {
                self.cursor = None;
                None
            }
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button,
                ..
            } => {
                let point = self.cursor?;
                match button {
                    MouseButton::Left => Some(InputAction::Click(point)),
                    MouseButton::Right => Some(InputAction::PlaceLight(point)),
                    _ => None,
                }
            }
            WindowEvent::KeyboardInput { event: key_event, .. } => {
                if key_event.state != ElementState::Pressed || key_event.repeat {
                    return None;
                }
                match key_event.physical_key {
                    PhysicalKey::Code(KeyCode::Space) => Some(InputAction::TogglePolygons),
                    PhysicalKey::Code(KeyCode::KeyR) => Some(InputAction::CycleColoring),
                    PhysicalKey::Code(KeyCode::KeyC) => Some(InputAction::ClearBoundaries),
                    PhysicalKey::Code(KeyCode::KeyG) => Some(InputAction::ScatterBoundaries),
                    PhysicalKey::Code(KeyCode::Escape) => Some(InputAction::CancelDraft),
                    _ => None,
                }
            }
            _ => None,
        }
    }
}
