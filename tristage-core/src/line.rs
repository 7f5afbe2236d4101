//! Stage L1: parametric line drawing with a colour gradient.

use crate::canvas::Canvas;
use crate::color::Color;
use crate::projection::ScreenPoint;

/// A segment sampled at `t = i / steps` for `i` in `0..=steps`, where
/// `steps = max(|dx|, |dy|)`. Position and colour are truncated per sample;
/// colour endpoints stay unquantized.
#[derive(Debug, Clone, Copy)]
pub struct GradientLine {
    origin: ScreenPoint,
    dx: i64,
    dy: i64,
    steps: i64,
    start: [f64; 3],
    end: [f64; 3],
}

impl GradientLine {
    pub fn new(p1: ScreenPoint, p2: ScreenPoint, start: [f64; 3], end: [f64; 3]) -> Self {
        let dx = p2.x as i64 - p1.x as i64;
        let dy = p2.y as i64 - p1.y as i64;
        Self {
            origin: p1,
            dx,
            dy,
            steps: dx.abs().max(dy.abs()),
            start,
            end,
        }
    }

    pub fn steps(&self) -> i64 {
        self.steps
    }

    /// Pixel and colour of sample `i`. Coincident endpoints give `t = 1`.
    pub fn sample(&self, i: i64) -> (ScreenPoint, Color) {
        let t = if self.steps > 0 { i as f64 / self.steps as f64 } else { 1.0 };
        let x = (self.origin.x as f64 + self.dx as f64 * t) as i32;
        let y = (self.origin.y as f64 + self.dy as f64 * t) as i32;
        (ScreenPoint::new(x, y), Color::lerp_channels(self.start, self.end, t))
    }

    pub fn samples(&self) -> impl Iterator<Item = (ScreenPoint, Color)> {
        let line = *self;
        (0..=line.steps).map(move |i| line.sample(i))
    }

    /// Inclusive range of sample indices that may land on a `size` x `size`
    /// canvas. Samples outside it are off-canvas.
    pub fn visible_steps(&self, size: usize) -> Option<(i64, i64)> {
        let (x_first, x_last) = axis_window(self.origin.x, self.dx, self.steps, size)?;
        let (y_first, y_last) = axis_window(self.origin.y, self.dy, self.steps, size)?;
        let (first, last) = (x_first.max(y_first), x_last.min(y_last));
        (first <= last).then_some((first, last))
    }
}

/// Sample window for one axis, padded by one step on each side.
fn axis_window(from: i32, delta: i64, steps: i64, size: usize) -> Option<(i64, i64)> {
    let from = from as f64;
    let size = size as f64;
    // truncation toward zero maps (-1, size) onto the canvas
    if delta == 0 {
        return (from > -1.0 && from < size).then_some((0, steps));
    }

    let delta = delta as f64;
    let a = (-1.0 - from) / delta;
    let b = (size - from) / delta;
    let first = ((a.min(b) * steps as f64).floor() as i64 - 1).max(0);
    let last = ((a.max(b) * steps as f64).ceil() as i64 + 1).min(steps);
    (first <= last).then_some((first, last))
}

/// Draw the segment `p1 -> p2`, blending `start` into `end` along it.
///
/// A pixel may be visited twice. Coincident endpoints plot one pixel in `end`.
pub fn draw_gradient_line(
    canvas: &mut Canvas,
    p1: ScreenPoint,
    p2: ScreenPoint,
    start: Color,
    end: Color,
) {
    draw_gradient_line_f64(canvas, p1, p2, start.to_f64(), end.to_f64());
}

/// [`draw_gradient_line`] with fractional colour endpoints.
pub fn draw_gradient_line_f64(
    canvas: &mut Canvas,
    p1: ScreenPoint,
    p2: ScreenPoint,
    start: [f64; 3],
    end: [f64; 3],
) {
    let line = GradientLine::new(p1, p2, start, end);
    let Some((first, last)) = line.visible_steps(canvas.size()) else {
        return;
    };
    for i in first..=last {
        let (point, color) = line.sample(i);
        canvas.set_pixel(point.x, point.y, color);
    }
}

/// The `(pixel, colour)` sequence [`draw_gradient_line`] plots, unclipped.
pub fn gradient_samples(
    p1: ScreenPoint,
    p2: ScreenPoint,
    start: Color,
    end: Color,
) -> impl Iterator<Item = (ScreenPoint, Color)> {
    GradientLine::new(p1, p2, start.to_f64(), end.to_f64()).samples()
}

#[cfg(test)]
mod tests {
    use super::*;

    const START: Color = Color::new(0, 255, 100);
    const END: Color = Color::new(255, 100, 127);

    #[test]
    fn test_endpoint_colors() {
        let samples: Vec<_> =
            gradient_samples(ScreenPoint::new(2, 3), ScreenPoint::new(40, 17), START, END).collect();
        assert_eq!(samples.len(), 39);
        assert_eq!(samples[0], (ScreenPoint::new(2, 3), START));
        assert_eq!(samples[38], (ScreenPoint::new(40, 17), END));
    }

    #[test]
    fn test_colors_are_monotonic() {
        let samples: Vec<_> =
            gradient_samples(ScreenPoint::new(0, 0), ScreenPoint::new(-30, 55), START, END)
                .map(|(_, c)| c)
                .collect();
        for pair in samples.windows(2) {
            assert!(pair[1].r >= pair[0].r);
            assert!(pair[1].g <= pair[0].g);
            assert!(pair[1].b >= pair[0].b);
        }
    }

    #[test]
    fn test_single_point_uses_end_color() {
        let mut canvas = Canvas::new(8);
        let p = ScreenPoint::new(4, 4);
        draw_gradient_line(&mut canvas, p, p, START, END);
        assert_eq!(canvas.get_pixel(4, 4).unwrap(), END);
        assert_eq!(canvas.lit_pixel_count(), 1);
    }

    #[test]
    fn test_horizontal_line_pixels() {
        let mut canvas = Canvas::new(8);
        draw_gradient_line(
            &mut canvas,
            ScreenPoint::new(1, 2),
            ScreenPoint::new(5, 2),
            Color::BLACK,
            Color::new(200, 200, 200),
        );
        let row: Vec<u8> = (0..8).map(|x| canvas.get_pixel(x, 2).unwrap().r).collect();
        // pixel 1 is black at t = 0 and so stays indistinguishable from the background
        assert_eq!(row, vec![0, 0, 50, 100, 150, 200, 0, 0]);
    }

    #[test]
    fn test_reverse_direction_truncates_toward_zero() {
        let samples: Vec<_> =
            gradient_samples(ScreenPoint::new(3, 0), ScreenPoint::new(0, 1), START, END)
                .map(|(p, _)| p)
                .collect();
        // y = 0 + 1 * t stays 0 until t reaches 1
        assert_eq!(
            samples,
            vec![
                ScreenPoint::new(3, 0),
                ScreenPoint::new(2, 0),
                ScreenPoint::new(1, 0),
                ScreenPoint::new(0, 1),
            ]
        );
    }

    #[test]
    fn test_line_is_clipped_to_canvas() {
        let mut canvas = Canvas::new(10);
        draw_gradient_line(
            &mut canvas,
            ScreenPoint::new(-5, 5),
            ScreenPoint::new(15, 5),
            Color::WHITE,
            Color::WHITE,
        );
        assert_eq!(canvas.lit_pixel_count(), 10);
    }

    #[test]
    fn test_deterministic() {
        let a: Vec<_> =
            gradient_samples(ScreenPoint::new(7, 1), ScreenPoint::new(-9, 33), START, END).collect();
        let b: Vec<_> =
            gradient_samples(ScreenPoint::new(7, 1), ScreenPoint::new(-9, 33), START, END).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_fractional_end_color() {
        let mut canvas = Canvas::new(8);
        draw_gradient_line_f64(
            &mut canvas,
            ScreenPoint::new(0, 0),
            ScreenPoint::new(5, 0),
            [0.0, 0.0, 100.0],
            [0.0, 0.0, 127.5],
        );
        let blues: Vec<u8> = (0..6).map(|x| canvas.get_pixel(x, 0).unwrap().b).collect();
        assert_eq!(blues, vec![100, 105, 111, 116, 122, 127]);
    }

    #[test]
    fn test_far_endpoints_only_sample_visible_steps() {
        let line = GradientLine::new(
            ScreenPoint::new(-2_000_000_000, 5),
            ScreenPoint::new(2_000_000_000, 5),
            START.to_f64(),
            END.to_f64(),
        );
        let (first, last) = line.visible_steps(32).unwrap();
        assert!(last - first < 64, "window {}..={}", first, last);

        let mut canvas = Canvas::new(32);
        draw_gradient_line(
            &mut canvas,
            ScreenPoint::new(i32::MIN, i32::MIN),
            ScreenPoint::new(i32::MAX, i32::MAX),
            START,
            END,
        );
        assert!(canvas.lit_pixel_count() >= 32);
    }

    #[test]
    fn test_line_missing_canvas_has_no_window() {
        let line = GradientLine::new(
            ScreenPoint::new(-50, -10),
            ScreenPoint::new(50, -3),
            START.to_f64(),
            END.to_f64(),
        );
        assert_eq!(line.visible_steps(16), None);
    }

    #[test]
    fn test_windowed_drawing_matches_every_sample() {
        let segments = [
            (ScreenPoint::new(-40, 7), ScreenPoint::new(70, 19)),
            (ScreenPoint::new(25, -30), ScreenPoint::new(3, 60)),
            (ScreenPoint::new(31, 31), ScreenPoint::new(-1, -1)),
            (ScreenPoint::new(-1, 10), ScreenPoint::new(-1, 20)),
            (ScreenPoint::new(12, 12), ScreenPoint::new(12, 12)),
        ];
        for (p1, p2) in segments {
            let mut windowed = Canvas::new(32);
            draw_gradient_line(&mut windowed, p1, p2, START, END);

            let mut full = Canvas::new(32);
            for (p, c) in gradient_samples(p1, p2, START, END) {
                full.set_pixel(p.x, p.y, c);
            }
            assert_eq!(windowed, full, "segment {:?} -> {:?}", p1, p2);
        }
    }
}
