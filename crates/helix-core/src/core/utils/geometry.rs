use nalgebra::{Point3, Rotation3, Unit, UnitQuaternion, Vector3};
use std::f64::consts::PI;

/// Returns the point halfway between `a` and `b`.
pub fn midpoint(a: &Point3<f64>, b: &Point3<f64>) -> Point3<f64> {
    nalgebra::center(a, b)
}

/// Shortest rotation carrying `from` onto `to`.
///
/// Antiparallel vectors have no unique shortest rotation; a half turn about an
/// axis perpendicular to `from` is used instead. Returns `None` only when
/// either vector has zero length.
pub fn rotation_to_align(from: &Vector3<f64>, to: &Vector3<f64>) -> Option<UnitQuaternion<f64>> {
    if from.norm_squared() == 0.0 || to.norm_squared() == 0.0 {
        return None;
    }
    if let Some(rot) = Rotation3::rotation_between(from, to) {
        return Some(UnitQuaternion::from_rotation_matrix(&rot));
    }
    let helper = if from.x.abs() < 0.9 {
        Vector3::x()
    } else {
        Vector3::y()
    };
    let axis = Unit::new_normalize(from.cross(&helper));
    Some(UnitQuaternion::from_axis_angle(&axis, PI))
}

/// Rotation about +Z that turns the local +X axis toward `direction` in the XY plane.
pub fn yaw_towards(direction: &Vector3<f64>) -> UnitQuaternion<f64> {
    let angle = direction.y.atan2(direction.x);
    UnitQuaternion::from_axis_angle(&Vector3::z_axis(), angle)
}

/// Point on a circle of `radius` around the Z axis at `angle_degrees`, raised to `z`.
pub fn point_on_cylinder(radius: f64, angle_degrees: f64, z: f64) -> Point3<f64> {
    let theta = angle_degrees.to_radians();
    Point3::new(radius * theta.cos(), radius * theta.sin(), z)
}

/// Unit vector pointing from the circle at `angle_degrees` toward the Z axis.
pub fn inward_unit(angle_degrees: f64) -> Vector3<f64> {
    let theta = angle_degrees.to_radians();
    Vector3::new(-theta.cos(), -theta.sin(), 0.0)
}
