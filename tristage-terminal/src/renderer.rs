//! Half-block true-colour renderer for triptych images.
use crossterm::{
    style::{Color as TermColor, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    QueueableCommand,
};
use std::io::Write;
use tristage_core::{Color, Triptych};

/// Upper half block: foreground paints the top pixel, background the bottom.
const HALF_BLOCK: char = '▀';

/// Downsamples an image into a grid of terminal cells, two pixels per cell.
pub struct TriptychRenderer {
    cols: usize,
    rows: usize,
}

impl TriptychRenderer {
    pub fn new(cols: usize, rows: usize) -> Self {
        Self { cols, rows }
    }

    pub fn resize(&mut self, cols: usize, rows: usize) {
        self.cols = cols;
        self.rows = rows;
    }

    /// Nearest-neighbour sample of `image` as `(top, bottom)` colour pairs,
    /// row-major, aspect ratio preserved. Returns the grid and its column count.
    pub fn sample(&self, image: &Triptych) -> (Vec<(Color, Color)>, usize) {
        if image.width() == 0 || image.height() == 0 || self.cols == 0 || self.rows == 0 {
            return (Vec::new(), 0);
        }

        let scale = (self.cols as f64 / image.width() as f64)
            .min((self.rows * 2) as f64 / image.height() as f64);
        let out_cols = ((image.width() as f64 * scale) as usize).clamp(1, self.cols);
        let out_rows = ((image.height() as f64 * scale / 2.0) as usize).clamp(1, self.rows);

        let pixel = |x: usize, y: usize| {
            let sx = ((x as f64 / scale) as usize).min(image.width() - 1);
            let sy = ((y as f64 / scale) as usize).min(image.height() - 1);
            image.get_pixel(sx, sy).unwrap_or(Color::BLACK)
        };

        let mut cells = Vec::with_capacity(out_cols * out_rows);
        for row in 0..out_rows {
            for col in 0..out_cols {
                cells.push((pixel(col, row * 2), pixel(col, row * 2 + 1)));
            }
        }
        (cells, out_cols)
    }

    pub fn draw<W: Write>(&self, image: &Triptych, writer: &mut W) -> std::io::Result<()> {
        let (cells, cols) = self.sample(image);
        if cols == 0 {
            return Ok(());
        }

        for line in cells.chunks(cols) {
            for &(top, bottom) in line {
                writer.queue(SetForegroundColor(term_color(top)))?;
                writer.queue(SetBackgroundColor(term_color(bottom)))?;
                writer.queue(Print(HALF_BLOCK))?;
            }
            writer.queue(ResetColor)?;
            writer.queue(Print("\r\n"))?;
        }
        writer.queue(ResetColor)?;
        Ok(())
    }
}

fn term_color(c: Color) -> TermColor {
    TermColor::Rgb { r: c.r, g: c.g, b: c.b }
}
