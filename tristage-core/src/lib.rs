//! Tristage core library: a three-stage software rasterizer for small meshes.
//!
//! A mesh is rotated about the vertical axis, projected axonometrically and
//! drawn three ways: gradient edges (L1), barycentric fill with a wireframe
//! overlay (L2), and a radially blended colour filter over the fill (L3).
//! Everything here is pure computation over in-memory buffers.

pub mod canvas;
pub mod color;
pub mod error;
pub mod fill;
pub mod filter;
pub mod frame;
pub mod geometry;
pub mod line;
pub mod obj;
pub mod projection;
pub mod sequence;
pub mod transform;

// Re-export commonly used types
pub use canvas::{Canvas, Triptych};
pub use color::Color;
pub use error::{Error, Result};
pub use fill::{barycentric, fill_triangle};
pub use filter::{apply_radial_color_blend, FilterMode};
pub use frame::{pulse_brightness, render_frame, render_frame_with_style, Frame, FrameStyle, RenderConfig};
pub use geometry::{Face, Mesh};
pub use line::{draw_gradient_line, draw_gradient_line_f64, GradientLine};
pub use projection::{Axonometric, ScreenPoint};
pub use sequence::{render_sequence, AngleSweep};
pub use transform::rotate_y;
