// src/session.rs

use crate::color::Rgba;
use crate::geometry::{Point2, Segment};

/// Two-click boundary drawing: the first click anchors the start, the second
/// commits the segment.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum BoundaryDraft {
    #[default]
    Idle,
    Drawing { start: Point2, end: Point2 },
}

impl BoundaryDraft {
    /// Advances the draft. Returns the finished segment on the committing click.
    pub fn click(&mut self, point: Point2, color: Rgba) -> Option<Segment> {
        match *self {
            BoundaryDraft::Idle => {
                *self = BoundaryDraft::Drawing {
                    start: point,
                    end: point,
                };
                None
            }
            BoundaryDraft::Drawing { start, .. } => {
                *self = BoundaryDraft::Idle;
                Some(Segment::new(start, point, color))
            }
        }
    }

    /// Drags the loose end while drawing.
    pub fn hover(&mut self, point: Point2) {
        if let BoundaryDraft::Drawing { end, .. } = self {
            *end = point;
        }
    }

    pub fn cancel(&mut self) {
        *self = BoundaryDraft::Idle;
    }

    pub fn is_drawing(&self) -> bool {
        matches!(self, BoundaryDraft::Drawing { .. })
    }

    /// The in-progress segment, for rendering.
    pub fn preview(&self, color: Rgba) -> Option<Segment> {
        match *self {
            BoundaryDraft::Idle => None,
            BoundaryDraft::Drawing { start, end } => Some(Segment::new(start, end, color)),
        }
    }
}
