//! Rotation about the vertical axis.
use nalgebra::Point3;

/// Rotate a point about the Y axis by `angle_degrees`; `y` is unchanged.
pub fn rotate_y(point: &Point3<f64>, angle_degrees: f64) -> Point3<f64> {
    let rad = angle_degrees.to_radians();
    let (sin, cos) = (rad.sin(), rad.cos());
    Point3::new(
        point.x * cos + point.z * sin,
        point.y,
        -point.x * sin + point.z * cos,
    )
}
