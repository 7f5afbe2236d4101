//! Frame composition: one rotation angle through all three stages.

use crate::canvas::{Canvas, Triptych};
use crate::color::Color;
use crate::fill::fill_triangle;
use crate::filter::{apply_radial_color_blend, FilterMode};
use crate::geometry::Mesh;
use crate::line::draw_gradient_line_f64;
use crate::projection::Axonometric;

/// Default side length of each stage canvas, in pixels.
pub const DEFAULT_CANVAS_SIZE: usize = 400;

/// Brightness pulse in `[0, 1]`: `(sin(angle) + 1) / 2`, angle in degrees.
pub fn pulse_brightness(angle_degrees: f64) -> f64 {
    (angle_degrees.to_radians().sin() + 1.0) / 2.0
}

/// Settings shared by every frame of a run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderConfig {
    pub canvas_size: usize,
    pub filter: FilterMode,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            canvas_size: DEFAULT_CANVAS_SIZE,
            filter: FilterMode::Sepia,
        }
    }
}

/// Colours for one frame. Edge gradient goes to the edges canvas; faces are
/// tinted per index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameStyle {
    pub edge_start: Color,
    /// Kept in floating point: the pulsing blue channel is only truncated
    /// per sample, after interpolation.
    pub edge_end: [f64; 3],
    /// Red channel shared by every face.
    pub face_red: u8,
}

impl FrameStyle {
    /// Style driven by a brightness value in `[0, 1]`.
    pub fn pulsing(brightness: f64) -> Self {
        Self {
            edge_start: Color::new(0, 255, 100),
            edge_end: [255.0, 100.0, brightness * 255.0],
            face_red: (brightness * 200.0) as u8,
        }
    }

    pub fn for_angle(angle_degrees: f64) -> Self {
        Self::pulsing(pulse_brightness(angle_degrees))
    }

    /// Base colour of face `index`; blue steps by 50 and cycles after five faces.
    pub fn face_color(&self, index: usize) -> Color {
        Color::new(self.face_red, 100, 50 + 50 * (index % 5) as u8)
    }
}

/// The three stage canvases for one angle.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub angle: f64,
    pub edges: Canvas,
    pub filled: Canvas,
    pub filtered: Canvas,
}

impl Frame {
    /// `edges | filled | filtered`, left to right.
    pub fn triptych(&self) -> Triptych {
        Triptych::compose([&self.edges, &self.filled, &self.filtered])
    }
}

/// Render `mesh` at `angle_degrees` with the angle's pulsing style.
pub fn render_frame(mesh: &Mesh, angle_degrees: f64, config: &RenderConfig) -> Frame {
    render_frame_with_style(mesh, angle_degrees, &FrameStyle::for_angle(angle_degrees), config)
}

/// Render `mesh` at `angle_degrees` with explicit colours.
pub fn render_frame_with_style(
    mesh: &Mesh,
    angle_degrees: f64,
    style: &FrameStyle,
    config: &RenderConfig,
) -> Frame {
    let size = config.canvas_size;
    let projected = Axonometric::for_canvas(size).project_mesh(mesh, angle_degrees);

    let mut edges = Canvas::new(size);
    let mut filled = Canvas::new(size);

    for (i, face) in mesh.faces().iter().enumerate() {
        let tri = [projected[face[0]], projected[face[1]], projected[face[2]]];

        fill_triangle(&mut filled, tri, style.face_color(i));

        for j in 0..3 {
            draw_gradient_line_f64(
                &mut edges,
                tri[j],
                tri[(j + 1) % 3],
                style.edge_start.to_f64(),
                style.edge_end,
            );
        }
    }

    let filtered = apply_radial_color_blend(&filled, config.filter);
    log::debug!(
        "rendered frame at {:.1} deg ({} faces, {} lit fill pixels)",
        angle_degrees,
        mesh.faces().len(),
        filled.lit_pixel_count()
    );

    Frame {
        angle: angle_degrees,
        edges,
        filled,
        filtered,
    }
}
