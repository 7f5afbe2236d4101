//! Fixed-angle axonometric projection to integer screen coordinates.
use nalgebra::Point3;

use crate::geometry::Mesh;
use crate::transform::rotate_y;

/// Model units to pixels.
pub const DEFAULT_SCALE: f64 = 100.0;

/// Axonometric tilt of the horizontal axes, in degrees.
pub const AXONOMETRIC_ANGLE: f64 = 30.0;

/// Integer pixel coordinate; `y` grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScreenPoint {
    pub x: i32,
    pub y: i32,
}

impl ScreenPoint {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Parallel projection with both horizontal axes tilted by 30 degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Axonometric {
    pub scale: f64,
    pub center: f64,
}

impl Axonometric {
    /// Projection centred on a `size` x `size` canvas at the default scale.
    pub fn for_canvas(size: usize) -> Self {
        Self {
            scale: DEFAULT_SCALE,
            center: (size / 2) as f64,
        }
    }

    /// Project a model-space point. Coordinates are truncated, not rounded.
    pub fn project(&self, point: &Point3<f64>) -> ScreenPoint {
        let tilt = AXONOMETRIC_ANGLE.to_radians();
        let u = (point.x - point.z) * tilt.cos();
        let v = point.y + (point.x + point.z) * tilt.sin();
        ScreenPoint::new(
            (u * self.scale + self.center) as i32,
            (-v * self.scale + self.center) as i32,
        )
    }

    /// Rotate every reference vertex of `mesh` and project it.
    ///
    /// Output index `i` corresponds to `mesh.vertices()[i]`.
    pub fn project_mesh(&self, mesh: &Mesh, angle_degrees: f64) -> Vec<ScreenPoint> {
        mesh.vertices()
            .iter()
            .map(|v| self.project(&rotate_y(v, angle_degrees)))
            .collect()
    }
}
