//! Stage L2: barycentric triangle fill with a wireframe overlay.

use crate::canvas::Canvas;
use crate::color::Color;
use crate::line::draw_gradient_line;
use crate::projection::ScreenPoint;

/// Twice-signed-area threshold below which a triangle counts as degenerate.
pub const DEGENERATE_EPSILON: f64 = 1e-6;

/// Gradient used for the outline drawn over every filled face.
pub const WIREFRAME_START: Color = Color::WHITE;
pub const WIREFRAME_END: Color = Color::GRAY;

/// Barycentric weights relative to one screen-space triangle.
#[derive(Debug, Clone, Copy)]
pub struct Barycentric {
    corners: [(f64, f64); 3],
    denom: f64,
}

impl Barycentric {
    /// `None` when the triangle has (near) zero area.
    ///
    /// Coordinates are widened to `f64` before any arithmetic, so saturated
    /// projections cannot overflow.
    pub fn new(tri: [ScreenPoint; 3]) -> Option<Self> {
        let corners = tri.map(|p| (p.x as f64, p.y as f64));
        let [(x0, y0), (x1, y1), (x2, y2)] = corners;
        let area = (y1 - y2) * (x0 - x2) + (x2 - x1) * (y0 - y2);

        if area.abs() < DEGENERATE_EPSILON {
            return None;
        }

        Some(Self {
            corners,
            denom: area + DEGENERATE_EPSILON,
        })
    }

    /// Weights `(w0, w1, w2)` of the point `(x, y)`; `w2 = 1 - w0 - w1`.
    ///
    /// The shared denominator carries the `1e-6` guard, so a vertex weighs
    /// slightly under 1.
    pub fn weights(&self, x: f64, y: f64) -> [f64; 3] {
        let [(x0, y0), (x1, y1), (x2, y2)] = self.corners;

        let w0 = ((y1 - y2) * (x - x2) + (x2 - x1) * (y - y2)) / self.denom;
        let w1 = ((y2 - y0) * (x - x2) + (x0 - x2) * (y - y2)) / self.denom;
        let w2 = 1.0 - w0 - w1;

        [w0, w1, w2]
    }

    /// Closed membership test: points on an edge are inside.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        self.weights(x, y).iter().all(|&w| w >= 0.0)
    }
}

/// Weights of `p` relative to `tri`, or `None` for a degenerate triangle.
pub fn barycentric(tri: [ScreenPoint; 3], p: (f64, f64)) -> Option<[f64; 3]> {
    Barycentric::new(tri).map(|b| b.weights(p.0, p.1))
}

/// Fill the closed triangle, shading each pixel by its first weight:
/// `base * (0.7 + 0.3 * w0)`, truncated.
///
/// Degenerate triangles fill nothing.
pub fn fill_barycentric(canvas: &mut Canvas, tri: [ScreenPoint; 3], base: Color) {
    let Some(bary) = Barycentric::new(tri) else {
        log::debug!("skipping degenerate triangle {:?}", tri);
        return;
    };
    if canvas.size() == 0 {
        return;
    }

    let last = canvas.size() as i64 - 1;
    let min_x = tri.iter().map(|p| p.x as i64).min().unwrap_or(0).max(0);
    let max_x = tri.iter().map(|p| p.x as i64).max().unwrap_or(0).min(last);
    let min_y = tri.iter().map(|p| p.y as i64).min().unwrap_or(0).max(0);
    let max_y = tri.iter().map(|p| p.y as i64).max().unwrap_or(0).min(last);

    for y in min_y..=max_y {
        for x in min_x..=max_x {
            let [w0, w1, w2] = bary.weights(x as f64, y as f64);
            if w0 >= 0.0 && w1 >= 0.0 && w2 >= 0.0 {
                canvas.set_pixel(x as i32, y as i32, base.scale(w0 * 0.3 + 0.7));
            }
        }
    }
}

/// Fill a face and outline its three edges with the white-to-gray wireframe.
pub fn fill_triangle(canvas: &mut Canvas, tri: [ScreenPoint; 3], base: Color) {
    fill_barycentric(canvas, tri, base);
    for j in 0..3 {
        draw_gradient_line(canvas, tri[j], tri[(j + 1) % 3], WIREFRAME_START, WIREFRAME_END);
    }
}
