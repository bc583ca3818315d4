use super::config::{GenerationConfig, Palette};
use super::error::EngineError;
use super::helix::StrandPoint;
use crate::core::models::base::Base;
use crate::core::models::ids::{MaterialId, ObjectId};
use crate::core::models::primitive::{Primitive, Transform};
use crate::core::scene::traits::HostScene;
use crate::core::utils::geometry::{midpoint, rotation_to_align, yaw_towards};
use nalgebra::{Point3, Vector3};
use tracing::debug;

pub const BACKBONE_MATERIAL_NAME: &str = "Backbone";

/// Material handles created in the host for one generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaterialSet {
    adenine: MaterialId,
    thymine: MaterialId,
    guanine: MaterialId,
    cytosine: MaterialId,
    pub backbone: MaterialId,
}

impl MaterialSet {
    /// Creates one material per base, named after the base, and the backbone material.
    pub fn create<S: HostScene>(scene: &mut S, palette: &Palette) -> Result<Self, EngineError> {
        let mut make = |name: &str, color| {
            scene
                .create_material(name, color)
                .map_err(|e| EngineError::host("material", name, e))
        };
        Ok(Self {
            adenine: make("A", palette.adenine)?,
            thymine: make("T", palette.thymine)?,
            guanine: make("G", palette.guanine)?,
            cytosine: make("C", palette.cytosine)?,
            backbone: make(BACKBONE_MATERIAL_NAME, palette.backbone)?,
        })
    }

    pub fn for_base(&self, base: Base) -> MaterialId {
        match base {
            Base::A => self.adenine,
            Base::T => self.thymine,
            Base::G => self.guanine,
            Base::C => self.cytosine,
        }
    }
}

/// Transform of the flat block standing in for a base.
///
/// The block starts at the strand point and reaches half its length toward
/// the axis. Its local X axis is turned to face the axis; it never tilts.
pub fn base_block_transform(point: &StrandPoint, config: &GenerationConfig) -> Transform {
    let length = config.base_length();
    let location = point.position + point.inward * (length / 2.0);
    Transform::at(location)
        .with_rotation(yaw_towards(&point.inward))
        .with_scale(Vector3::new(
            length,
            config.geometry.base_width,
            config.geometry.base_height,
        ))
}

/// Cylinder primitive and transform joining two consecutive strand points.
pub fn backbone_segment(
    name: &str,
    start: &Point3<f64>,
    end: &Point3<f64>,
    radius: f64,
) -> Result<(Primitive, Transform), EngineError> {
    let direction = end - start;
    let depth = direction.norm();
    let rotation =
        rotation_to_align(&Vector3::z(), &direction).ok_or_else(|| EngineError::Geometry {
            name: name.to_string(),
            reason: "backbone endpoints coincide".to_string(),
        })?;
    Ok((
        Primitive::Cylinder { radius, depth },
        Transform::at(midpoint(start, end)).with_rotation(rotation),
    ))
}

pub fn place_base<S: HostScene>(
    scene: &mut S,
    name: &str,
    point: &StrandPoint,
    config: &GenerationConfig,
    materials: &MaterialSet,
) -> Result<ObjectId, EngineError> {
    let transform = base_block_transform(point, config);
    debug!("Placing base block '{}' at {:?}", name, transform.location);
    scene
        .add_primitive(
            name,
            Primitive::Cube { size: 1.0 },
            transform,
            Some(materials.for_base(point.base)),
        )
        .map_err(|e| EngineError::host("base block", name, e))
}

pub fn place_backbone<S: HostScene>(
    scene: &mut S,
    name: &str,
    start: &Point3<f64>,
    end: &Point3<f64>,
    config: &GenerationConfig,
    materials: &MaterialSet,
) -> Result<ObjectId, EngineError> {
    let (primitive, transform) =
        backbone_segment(name, start, end, config.geometry.backbone_radius)?;
    debug!("Placing backbone '{}' between {:?} and {:?}", name, start, end);
    scene
        .add_primitive(name, primitive, transform, Some(materials.backbone))
        .map_err(|e| EngineError::host("backbone", name, e))
}

pub fn place_joint<S: HostScene>(
    scene: &mut S,
    name: &str,
    location: &Point3<f64>,
    config: &GenerationConfig,
    materials: &MaterialSet,
) -> Result<ObjectId, EngineError> {
    let primitive = Primitive::UvSphere {
        radius: config.geometry.backbone_radius,
        segments: config.geometry.joint_segments,
        rings: config.geometry.joint_rings,
    };
    debug!("Placing joint '{}' at {:?}", name, location);
    scene
        .add_primitive(name, primitive, Transform::at(*location), Some(materials.backbone))
        .map_err(|e| EngineError::host("joint", name, e))
}
