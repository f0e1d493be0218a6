// src/color.rs

/// Linear RGBA in `[0, 1]`, the same layout the vertex buffer expects.
pub type Rgba = [f32; 4];

pub const WHITE: Rgba = [1.0, 1.0, 1.0, 1.0];

/// Converts hue (degrees), saturation and value to RGB with the given alpha.
///
/// Hue wraps, so `360.0` and `0.0` give the same color.
pub fn hsv_to_rgba(hue_deg: f32, saturation: f32, value: f32, alpha: f32) -> Rgba {
    let s = saturation.clamp(0.0, 1.0);
    let v = value.clamp(0.0, 1.0);
    if s <= 0.0 {
        return [v, v, v, alpha];
    }

    let h = hue_deg.rem_euclid(360.0) / 60.0;
    let sector = h.floor();
    let f = h - sector;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));

    let (r, g, b) = match sector as u32 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };
    [r, g, b, alpha]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Rgba, b: Rgba) -> bool {
        a.iter().zip(b.iter()).all(|(x, y)| (x - y).abs() < 1e-5)
    }

    #[test]
    fn primary_hues() {
        assert!(close(hsv_to_rgba(0.0, 1.0, 1.0, 1.0), [1.0, 0.0, 0.0, 1.0]));
        assert!(close(hsv_to_rgba(120.0, 1.0, 1.0, 1.0), [0.0, 1.0, 0.0, 1.0]));
        assert!(close(hsv_to_rgba(240.0, 1.0, 1.0, 0.5), [0.0, 0.0, 1.0, 0.5]));
    }

    #[test]
    fn hue_wraps_and_grey_ignores_hue() {
        assert!(close(hsv_to_rgba(360.0, 1.0, 1.0, 1.0), hsv_to_rgba(0.0, 1.0, 1.0, 1.0)));
        assert!(close(hsv_to_rgba(200.0, 0.0, 0.4, 1.0), [0.4, 0.4, 0.4, 1.0]));
    }
}
