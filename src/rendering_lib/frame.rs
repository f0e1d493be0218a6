// src/rendering_lib/frame.rs

use std::ops::Range;

use raycaster2d::{RenderTarget, Segment, Triangle};

use super::vertex::Vertex;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Primitive {
    Lines,
    Triangles,
}

/// A run of consecutive vertices drawn with one pipeline.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Batch {
    pub primitive: Primitive,
    pub vertices: Range<u32>,
}

/// CPU-side vertex list for one frame. Draw order is preserved by splitting the
/// list into batches whenever the primitive type changes.
#[derive(Debug, Default)]
pub struct FrameBuilder {
    vertices: Vec<Vertex>,
    batches: Vec<Batch>,
}

impl FrameBuilder {
    pub fn with_capacity(vertices: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertices),
            batches: Vec::new(),
        }
    }

    pub fn clear(&mut self) {
        self.vertices.clear();
        self.batches.clear();
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn batches(&self) -> &[Batch] {
        &self.batches
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    fn push(&mut self, primitive: Primitive, vertices: &[Vertex]) {
        let start = self.vertices.len() as u32;
        self.vertices.extend_from_slice(vertices);
        let end = self.vertices.len() as u32;

        match self.batches.last_mut() {
            Some(batch) if batch.primitive == primitive => batch.vertices.end = end,
            _ => self.batches.push(Batch {
                primitive,
                vertices: start..end,
            }),
        }
    }
}

impl RenderTarget for FrameBuilder {
    fn draw_line(&mut self, segment: &Segment) {
        self.push(
            Primitive::Lines,
            &[
                Vertex::new(segment.start, segment.color),
                Vertex::new(segment.end, segment.color),
            ],
        );
    }

    fn draw_triangle(&mut self, triangle: &Triangle) {
        let [a, b, c] = triangle.vertices;
        self.push(
            Primitive::Triangles,
            &[
                Vertex::new(a, triangle.color),
                Vertex::new(b, triangle.color),
                Vertex::new(c, triangle.color),
            ],
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use raycaster2d::color::WHITE;
    use raycaster2d::Point2;

    #[test]
    fn batches_follow_draw_order() {
        let mut frame = FrameBuilder::default();
        let line = Segment::white(Point2::ZERO, Point2::new(1.0, 1.0));
        let tri = Triangle::new(Point2::ZERO, Point2::X, Point2::Y, WHITE);

        frame.draw_line(&line);
        frame.draw_line(&line);
        frame.draw_triangle(&tri);
        frame.draw_line(&line);

        assert_eq!(frame.vertices().len(), 9);
        assert_eq!(
            frame.batches(),
            &[
                Batch { primitive: Primitive::Lines, vertices: 0..4 },
                Batch { primitive: Primitive::Triangles, vertices: 4..7 },
                Batch { primitive: Primitive::Lines, vertices: 7..9 },
            ]
        );

        frame.clear();
        assert!(frame.is_empty());
        assert!(frame.batches().is_empty());
    }
}
