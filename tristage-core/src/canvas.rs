//! Square RGB pixel buffers and the side-by-side triptych they compose into.

use crate::color::Color;
use crate::error::{Error, Result};

/// A square, row-major RGB buffer with its origin at the top-left corner.
///
/// Writes outside the canvas are dropped; reads outside it are errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    size: usize,
    pixels: Vec<Color>,
}

impl Canvas {
    /// Allocate a `size` x `size` canvas filled with black.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            pixels: vec![Color::BLACK; size * size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn clear(&mut self) {
        self.pixels.fill(Color::BLACK);
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        let size = self.size as i64;
        let (x, y) = (x as i64, y as i64);
        if x >= 0 && y >= 0 && x < size && y < size {
            Some(y as usize * self.size + x as usize)
        } else {
            None
        }
    }

    /// Write a pixel; coordinates outside the canvas are silently clipped.
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        if let Some(idx) = self.index(x, y) {
            self.pixels[idx] = color;
        }
    }

    pub fn get_pixel(&self, x: i32, y: i32) -> Result<Color> {
        self.index(x, y)
            .map(|idx| self.pixels[idx])
            .ok_or(Error::OutOfBounds {
                x,
                y,
                size: self.size,
            })
    }

    /// Row-major pixel slice.
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// Packed `RGBRGB...` bytes, row-major.
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|c| c.to_array()).collect()
    }

    /// Number of pixels that are not black.
    pub fn lit_pixel_count(&self) -> usize {
        self.pixels.iter().filter(|&&c| c != Color::BLACK).count()
    }
}

/// Three equally sized canvases laid out left to right as one RGB image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Triptych {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl Triptych {
    /// Concatenate the panels horizontally.
    ///
    /// Panels are expected to share one size; the first panel's size is used
    /// and smaller panels leave black gaps.
    pub fn compose(panels: [&Canvas; 3]) -> Self {
        let size = panels[0].size();
        let width = size * panels.len();
        let mut data = vec![0u8; width * size * 3];

        for (slot, panel) in panels.iter().enumerate() {
            let panel_size = panel.size().min(size);
            for y in 0..panel_size {
                for x in 0..panel_size {
                    let color = panel.pixels[y * panel.size() + x];
                    let dst = (y * width + slot * size + x) * 3;
                    data[dst..dst + 3].copy_from_slice(&color.to_array());
                }
            }
        }

        Self {
            width,
            height: size,
            data,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Packed RGB bytes, row-major.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn get_pixel(&self, x: usize, y: usize) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y * self.width + x) * 3;
        Some(Color::new(self.data[idx], self.data[idx + 1], self.data[idx + 2]))
    }
}
