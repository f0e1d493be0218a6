// src/generator.rs

use rand::Rng;

use crate::color::Rgba;
use crate::geometry::{Point2, Segment};

pub struct BoundaryGenerator;

impl BoundaryGenerator {
    /// Scatters `count` boundaries with random orientation whose midpoints lie
    /// inside `width` x `height` (with a small inset). Lengths fall in
    /// `[0.8, 1.2] * avg_length`.
    pub fn scatter_boundaries(
        rng: &mut impl Rng,
        width: f32,
        height: f32,
        avg_length: f32,
        count: usize,
        color: Rgba,
    ) -> Vec<Segment> {
        let inset_x = width * 0.05;
        let inset_y = height * 0.05;
        let min_length = (avg_length * 0.8).max(1.0);
        let max_length = (avg_length * 1.2).max(min_length + 1.0);

        let mut boundaries = Vec::with_capacity(count);
        for _ in 0..count {
            let center = Point2::new(
                rng.gen_range(inset_x..(width - inset_x).max(inset_x + 1.0)),
                rng.gen_range(inset_y..(height - inset_y).max(inset_y + 1.0)),
            );
            let angle_rad = rng.gen_range(0.0..std::f32::consts::TAU);
            let half = rng.gen_range(min_length..max_length) / 2.0;
            let offset = Point2::new(half * angle_rad.cos(), half * angle_rad.sin());

            boundaries.push(Segment::new(center - offset, center + offset, color));
        }
        boundaries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::WHITE;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn scattered_boundaries_have_requested_count_and_length() {
        let mut rng = StdRng::seed_from_u64(7);
        let boundaries =
            BoundaryGenerator::scatter_boundaries(&mut rng, 700.0, 700.0, 80.0, 25, WHITE);
        assert_eq!(boundaries.len(), 25);
        for boundary in &boundaries {
            let length = boundary.length();
            assert!(length >= 64.0 - 1e-3 && length <= 96.0 + 1e-3, "length {length}");
            let mid = (boundary.start + boundary.end) / 2.0;
            assert!(mid.x >= 35.0 - 1e-3 && mid.x <= 665.0 + 1e-3);
            assert!(mid.y >= 35.0 - 1e-3 && mid.y <= 665.0 + 1e-3);
        }
    }
}
