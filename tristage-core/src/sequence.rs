//! Angle sweeps and parallel rendering of a whole animation.

use rayon::prelude::*;

use crate::error::{Error, Result};
use crate::frame::{render_frame, Frame, RenderConfig};
use crate::geometry::Mesh;

/// Half-open range of angles `[start, end)` visited in fixed steps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AngleSweep {
    start: f64,
    end: f64,
    step: f64,
}

impl AngleSweep {
    pub fn new(start: f64, end: f64, step: f64) -> Result<Self> {
        let valid = start.is_finite() && end.is_finite() && step.is_finite() && step > 0.0 && end > start;
        if !valid {
            return Err(Error::InvalidSweep { start, end, step });
        }
        Ok(Self { start, end, step })
    }

    /// One full turn in 8 degree steps: 45 frames.
    pub fn full_turn() -> Self {
        Self {
            start: 0.0,
            end: 360.0,
            step: 8.0,
        }
    }

    pub fn len(&self) -> usize {
        self.angles().count()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// Angles in increasing order, computed as `start + i * step`.
    pub fn angles(&self) -> impl Iterator<Item = f64> {
        let Self { start, end, step } = *self;
        (0u64..)
            .map(move |i| start + i as f64 * step)
            .take_while(move |&angle| angle < end)
    }

    /// Position of `angle` in the sweep, if it is one of its samples.
    pub fn position(&self, angle: f64) -> Option<usize> {
        self.angles().position(|a| (a - angle).abs() < 1e-9)
    }
}

impl Default for AngleSweep {
    fn default() -> Self {
        Self::full_turn()
    }
}

/// Render every angle of `sweep` in parallel.
///
/// Each frame owns its canvases; the result is in increasing-angle order.
pub fn render_sequence(mesh: &Mesh, sweep: &AngleSweep, config: &RenderConfig) -> Vec<Frame> {
    let angles: Vec<f64> = sweep.angles().collect();
    log::info!(
        "rendering {} frames ({} faces, {}px canvases)",
        angles.len(),
        mesh.faces().len(),
        config.canvas_size
    );

    angles
        .par_iter()
        .map(|&angle| render_frame(mesh, angle, config))
        .collect()
}
