//! Stage L3: a 3x3 colour transform blended in by distance from the centre.

use std::fmt;
use std::str::FromStr;

use nalgebra::Matrix3;

use crate::canvas::Canvas;
use crate::color::Color;
use crate::error::{Error, Result};

/// Colour transforms available to the radial blend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterMode {
    #[default]
    Sepia,
}

impl FilterMode {
    /// Row-major transform applied as `output = matrix * rgb`.
    pub fn matrix(self) -> Matrix3<f64> {
        match self {
            FilterMode::Sepia => Matrix3::new(
                0.272, 0.534, 0.131, //
                0.349, 0.686, 0.168, //
                0.393, 0.769, 0.189,
            ),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            FilterMode::Sepia => "sepia",
        }
    }
}

impl FromStr for FilterMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sepia" => Ok(FilterMode::Sepia),
            _ => Err(Error::UnsupportedFilterMode(s.to_string())),
        }
    }
}

impl fmt::Display for FilterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Precomputed geometry of the radial mask for one canvas size.
#[derive(Debug, Clone, Copy)]
pub struct RadialMask {
    center: f64,
    max_distance: f64,
}

impl RadialMask {
    pub fn new(size: usize) -> Self {
        let center = size as f64 / 2.0;
        // farthest pixel is a corner; pixel coordinates run 0..=size-1
        let reach = center.max(size.saturating_sub(1) as f64 - center);
        Self {
            center,
            max_distance: (reach * reach + reach * reach).sqrt(),
        }
    }

    /// Distance of `(x, y)` from the centre over the largest such distance.
    pub fn at(&self, x: usize, y: usize) -> f64 {
        if self.max_distance == 0.0 {
            return 0.0;
        }
        let dx = x as f64 - self.center;
        let dy = y as f64 - self.center;
        (dx * dx + dy * dy).sqrt() / self.max_distance
    }
}

/// Mask value in `[0, 1]` for pixel `(x, y)` of a `size` x `size` canvas.
pub fn radial_mask(size: usize, x: usize, y: usize) -> f64 {
    RadialMask::new(size).at(x, y)
}

/// Apply `mode` to every pixel, weighted by the radial mask: the centre keeps
/// its colour, the farthest corner receives the full transform.
pub fn apply_radial_color_blend(canvas: &Canvas, mode: FilterMode) -> Canvas {
    let size = canvas.size();
    let m = mode.matrix();
    let mask = RadialMask::new(size);
    let mut out = Canvas::new(size);

    for (idx, color) in canvas.pixels().iter().enumerate() {
        let (x, y) = (idx % size, idx / size);
        let weight = mask.at(x, y);
        let [r, g, b] = color.to_unit();

        let mut blended = [0.0; 3];
        for (row, channel) in blended.iter_mut().enumerate() {
            let transformed = m[(row, 0)] * r + m[(row, 1)] * g + m[(row, 2)] * b;
            let original = [r, g, b][row];
            *channel = original * (1.0 - weight) + transformed * weight;
        }

        out.set_pixel(x as i32, y as i32, Color::from_unit(blended));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_parse_mode() {
        assert_eq!("sepia".parse::<FilterMode>(), Ok(FilterMode::Sepia));
        assert_eq!(" Sepia ".parse::<FilterMode>(), Ok(FilterMode::Sepia));
        assert_eq!(FilterMode::Sepia.to_string(), "sepia");
    }

    #[test]
    fn test_unknown_mode_is_rejected() {
        assert_eq!(
            "vintage".parse::<FilterMode>(),
            Err(Error::UnsupportedFilterMode("vintage".to_string()))
        );
    }

    #[test]
    fn test_mask_range() {
        let mask = RadialMask::new(400);
        assert_eq!(mask.at(200, 200), 0.0);
        assert_relative_eq!(mask.at(0, 0), 1.0);
        for &(x, y) in &[(399, 399), (0, 399), (123, 45), (200, 0)] {
            let m = mask.at(x, y);
            assert!((0.0..=1.0).contains(&m), "mask {} at ({}, {})", m, x, y);
        }
        assert_eq!(radial_mask(400, 17, 3), mask.at(17, 3));
    }

    #[test]
    fn test_center_nearly_unchanged_corner_fully_transformed() {
        let mut canvas = Canvas::new(400);
        let color = Color::new(200, 100, 50);
        for y in 0..400 {
            for x in 0..400 {
                canvas.set_pixel(x, y, color);
            }
        }
        let out = apply_radial_color_blend(&canvas, FilterMode::Sepia);

        let center = out.get_pixel(200, 200).unwrap();
        for (a, b) in center.to_array().iter().zip(color.to_array().iter()) {
            assert!((*a as i32 - *b as i32).abs() <= 1, "{:?} vs {:?}", center, color);
        }

        // full sepia of (200, 100, 50)
        let expected = Color::from_unit([
            0.272 * 200.0 / 255.0 + 0.534 * 100.0 / 255.0 + 0.131 * 50.0 / 255.0,
            0.349 * 200.0 / 255.0 + 0.686 * 100.0 / 255.0 + 0.168 * 50.0 / 255.0,
            0.393 * 200.0 / 255.0 + 0.769 * 100.0 / 255.0 + 0.189 * 50.0 / 255.0,
        ]);
        let corner = out.get_pixel(0, 0).unwrap();
        for (a, b) in corner.to_array().iter().zip(expected.to_array().iter()) {
            assert!((*a as i32 - *b as i32).abs() <= 1, "{:?} vs {:?}", corner, expected);
        }
    }

    #[test]
    fn test_white_saturates_without_overflow() {
        let mut canvas = Canvas::new(16);
        for y in 0..16 {
            for x in 0..16 {
                canvas.set_pixel(x, y, Color::WHITE);
            }
        }
        let out = apply_radial_color_blend(&canvas, FilterMode::Sepia);
        // sepia rows sum past 1.0 for green and blue; these clamp at 255
        assert_eq!(out.get_pixel(0, 0).unwrap(), Color::new(238, 255, 255));
    }

    #[test]
    fn test_black_stays_black() {
        let canvas = Canvas::new(32);
        let out = apply_radial_color_blend(&canvas, FilterMode::Sepia);
        assert_eq!(out, canvas);
    }

    #[test]
    fn test_input_is_not_modified() {
        let mut canvas = Canvas::new(8);
        canvas.set_pixel(0, 0, Color::new(10, 200, 30));
        let before = canvas.clone();
        let _ = apply_radial_color_blend(&canvas, FilterMode::Sepia);
        assert_eq!(canvas, before);
    }

    #[test]
    fn test_empty_canvas() {
        let out = apply_radial_color_blend(&Canvas::new(0), FilterMode::Sepia);
        assert_eq!(out.size(), 0);
    }
}
