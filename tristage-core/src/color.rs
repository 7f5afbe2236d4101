//! 8-bit RGB colour and the truncating arithmetic the stages share.

/// An RGB colour with one byte per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(255, 255, 255);
    pub const GRAY: Color = Color::new(150, 150, 150);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Per-channel linear interpolation, truncated toward zero.
    ///
    /// `t` is expected in `[0, 1]`; the result saturates into `[0, 255]`
    /// otherwise.
    pub fn lerp(start: Color, end: Color, t: f64) -> Color {
        Color::lerp_channels(start.to_f64(), end.to_f64(), t)
    }

    /// [`Color::lerp`] between unquantized endpoints; only the sample is
    /// truncated.
    pub fn lerp_channels(start: [f64; 3], end: [f64; 3], t: f64) -> Color {
        let mix = |a: f64, b: f64| (a * (1.0 - t) + b * t) as u8;
        Color::new(
            mix(start[0], end[0]),
            mix(start[1], end[1]),
            mix(start[2], end[2]),
        )
    }

    /// Multiply every channel by `factor`, truncating.
    pub fn scale(self, factor: f64) -> Color {
        let mul = |c: u8| (c as f64 * factor) as u8;
        Color::new(mul(self.r), mul(self.g), mul(self.b))
    }

    /// Channels normalized to `[0, 1]`.
    pub fn to_unit(self) -> [f64; 3] {
        [
            self.r as f64 / 255.0,
            self.g as f64 / 255.0,
            self.b as f64 / 255.0,
        ]
    }

    /// Inverse of [`Color::to_unit`]: scale by 255, clamp, truncate.
    pub fn from_unit(rgb: [f64; 3]) -> Color {
        let quantize = |c: f64| (c * 255.0).clamp(0.0, 255.0) as u8;
        Color::new(quantize(rgb[0]), quantize(rgb[1]), quantize(rgb[2]))
    }

    /// Channels as floats in `[0, 255]`.
    pub fn to_f64(self) -> [f64; 3] {
        [self.r as f64, self.g as f64, self.b as f64]
    }

    pub fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}
