//! Error type shared by every pipeline stage.

/// Errors surfaced by the rendering pipeline.
///
/// Geometric degeneracy and out-of-canvas writes are recovered locally and
/// never show up here.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("pixel ({x}, {y}) is outside a {size}x{size} canvas")]
    OutOfBounds { x: i32, y: i32, size: usize },

    #[error("unsupported filter mode '{0}'")]
    UnsupportedFilterMode(String),

    #[error("face {face} references vertex {index}, mesh has {vertex_count} vertices")]
    InvalidFaceIndex {
        face: usize,
        index: usize,
        vertex_count: usize,
    },

    #[error("invalid angle sweep: start={start} end={end} step={step}")]
    InvalidSweep { start: f64, end: f64, step: f64 },

    #[error("parse error on line {line}: {message}")]
    Parse { line: usize, message: String },
}

pub type Result<T> = std::result::Result<T, Error>;
