use nalgebra::{Point3, UnitQuaternion, Vector3};
use std::fmt;

/// An RGBA diffuse color with components in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Color {
    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub fn is_valid(&self) -> bool {
        [self.r, self.g, self.b, self.a]
            .iter()
            .all(|c| c.is_finite() && (0.0..=1.0).contains(c))
    }
}

impl From<[f64; 3]> for Color {
    fn from([r, g, b]: [f64; 3]) -> Self {
        Color::rgb(r, g, b)
    }
}

/// Mesh primitives the host knows how to construct.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Primitive {
    /// Axis-aligned cube with edge length `size`, centered on the origin.
    Cube { size: f64 },
    /// Cylinder along local +Z, centered on the origin.
    Cylinder { radius: f64, depth: f64 },
    UvSphere {
        radius: f64,
        segments: u32,
        rings: u32,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PrimitiveKind {
    Cube,
    Cylinder,
    UvSphere,
}

impl Primitive {
    pub fn kind(&self) -> PrimitiveKind {
        match self {
            Primitive::Cube { .. } => PrimitiveKind::Cube,
            Primitive::Cylinder { .. } => PrimitiveKind::Cylinder,
            Primitive::UvSphere { .. } => PrimitiveKind::UvSphere,
        }
    }

    /// Checks that every dimension is finite and strictly positive.
    pub fn is_valid(&self) -> bool {
        let positive = |v: f64| v.is_finite() && v > 0.0;
        match *self {
            Primitive::Cube { size } => positive(size),
            Primitive::Cylinder { radius, depth } => positive(radius) && positive(depth),
            Primitive::UvSphere {
                radius,
                segments,
                rings,
            } => positive(radius) && segments >= 3 && rings >= 2,
        }
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            PrimitiveKind::Cube => "cube",
            PrimitiveKind::Cylinder => "cylinder",
            PrimitiveKind::UvSphere => "uv-sphere",
        })
    }
}

/// Object placement: scale first, then rotation, then translation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub location: Point3<f64>,
    pub rotation: UnitQuaternion<f64>,
    pub scale: Vector3<f64>,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            location: Point3::origin(),
            rotation: UnitQuaternion::identity(),
            scale: Vector3::new(1.0, 1.0, 1.0),
        }
    }
}

impl Transform {
    pub fn at(location: Point3<f64>) -> Self {
        Self {
            location,
            ..Self::default()
        }
    }

    pub fn with_rotation(mut self, rotation: UnitQuaternion<f64>) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_scale(mut self, scale: Vector3<f64>) -> Self {
        self.scale = scale;
        self
    }

    pub fn is_finite(&self) -> bool {
        self.location.iter().all(|v| v.is_finite())
            && self.rotation.coords.iter().all(|v| v.is_finite())
            && self.scale.iter().all(|v| v.is_finite())
    }

    /// Maps a point from object space into world space.
    pub fn apply(&self, local: &Point3<f64>) -> Point3<f64> {
        let scaled = Point3::from(local.coords.component_mul(&self.scale));
        self.location + self.rotation * scaled.coords
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn color_validation_rejects_out_of_range_components() {
        assert!(Color::rgb(0.7, 0.7, 0.7).is_valid());
        assert!(!Color::rgb(1.2, 0.0, 0.0).is_valid());
        assert!(!Color::rgb(f64::NAN, 0.0, 0.0).is_valid());
    }

    #[test]
    fn primitive_validation_requires_positive_dimensions() {
        assert!(Primitive::Cube { size: 1.0 }.is_valid());
        assert!(!Primitive::Cylinder {
            radius: 0.05,
            depth: 0.0
        }
        .is_valid());
        assert!(!Primitive::UvSphere {
            radius: 0.05,
            segments: 2,
            rings: 8
        }
        .is_valid());
    }

    #[test]
    fn transform_apply_scales_then_rotates_then_translates() {
        let transform = Transform::at(Point3::new(1.0, 0.0, 0.0))
            .with_rotation(UnitQuaternion::from_axis_angle(&Vector3::z_axis(), FRAC_PI_2))
            .with_scale(Vector3::new(2.0, 1.0, 1.0));

        let world = transform.apply(&Point3::new(0.5, 0.0, 0.0));

        assert!((world - Point3::new(1.0, 1.0, 0.0)).norm() < 1e-12);
    }
}
