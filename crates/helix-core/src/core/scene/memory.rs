use super::traits::HostScene;
use crate::core::models::ids::{MaterialId, ObjectId};
use crate::core::models::primitive::{Color, Primitive, PrimitiveKind, Transform};
use slotmap::SlotMap;
use std::collections::{BTreeMap, HashMap};
use thiserror::Error;
use tracing::trace;

const MAX_NAME_SUFFIX: u32 = 999;

#[derive(Debug, Error, PartialEq)]
pub enum SceneError {
    #[error("Primitive for object '{name}' has non-positive or non-finite dimensions: {primitive:?}")]
    InvalidPrimitive { name: String, primitive: Primitive },

    #[error("Transform for object '{name}' contains non-finite values")]
    NonFiniteTransform { name: String },

    #[error("Material {material:?} requested by object '{name}' does not exist")]
    UnknownMaterial { name: String, material: MaterialId },

    #[error("Color for material '{name}' is outside the [0, 1] range: {color:?}")]
    InvalidColor { name: String, color: Color },

    #[error("No free name left for '{0}'")]
    NameExhausted(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    pub name: String,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SceneObject {
    pub name: String,
    pub primitive: Primitive,
    pub transform: Transform,
    pub material: Option<MaterialId>,
}

/// A host scene kept entirely in memory.
///
/// Objects keep their creation order. Names are unique: a colliding name is
/// suffixed with `.001`, `.002`, and so on.
#[derive(Debug, Clone, Default)]
pub struct InMemoryScene {
    /// Primary storage for objects.
    objects: SlotMap<ObjectId, SceneObject>,
    /// Primary storage for materials.
    materials: SlotMap<MaterialId, Material>,
    /// Object ids in creation order.
    order: Vec<ObjectId>,
    /// Lookup map for finding objects by their final name.
    object_names: HashMap<String, ObjectId>,
    /// Lookup map for finding materials by their final name.
    material_names: HashMap<String, MaterialId>,
}

impl InMemoryScene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn object(&self, id: ObjectId) -> Option<&SceneObject> {
        self.objects.get(id)
    }

    pub fn material(&self, id: MaterialId) -> Option<&Material> {
        self.materials.get(id)
    }

    pub fn find_object_by_name(&self, name: &str) -> Option<ObjectId> {
        self.object_names.get(name).copied()
    }

    pub fn find_material_by_name(&self, name: &str) -> Option<MaterialId> {
        self.material_names.get(name).copied()
    }

    /// Returns an iterator over objects in creation order.
    pub fn objects_iter(&self) -> impl Iterator<Item = (ObjectId, &SceneObject)> {
        self.order
            .iter()
            .filter_map(move |&id| self.objects.get(id).map(|obj| (id, obj)))
    }

    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    pub fn material_count(&self) -> usize {
        self.materials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Counts objects per primitive kind.
    pub fn count_by_kind(&self) -> BTreeMap<PrimitiveKind, usize> {
        let mut counts = BTreeMap::new();
        for obj in self.objects.values() {
            *counts.entry(obj.primitive.kind()).or_insert(0) += 1;
        }
        counts
    }

    /// Returns the name of the material assigned to an object, if any.
    pub fn material_name_of(&self, id: ObjectId) -> Option<&str> {
        let material_id = self.objects.get(id)?.material?;
        self.materials.get(material_id).map(|m| m.name.as_str())
    }

    fn unique_name<V>(taken: &HashMap<String, V>, requested: &str) -> Result<String, SceneError> {
        if !taken.contains_key(requested) {
            return Ok(requested.to_string());
        }
        (1..=MAX_NAME_SUFFIX)
            .map(|n| format!("{}.{:03}", requested, n))
            .find(|candidate| !taken.contains_key(candidate))
            .ok_or_else(|| SceneError::NameExhausted(requested.to_string()))
    }
}

impl HostScene for InMemoryScene {
    type Error = SceneError;

    fn clear(&mut self) {
        self.objects.clear();
        self.order.clear();
        self.object_names.clear();
    }

    fn create_material(&mut self, name: &str, color: Color) -> Result<MaterialId, Self::Error> {
        if !color.is_valid() {
            return Err(SceneError::InvalidColor {
                name: name.to_string(),
                color,
            });
        }
        let final_name = Self::unique_name(&self.material_names, name)?;
        let id = self.materials.insert(Material {
            name: final_name.clone(),
            color,
        });
        self.material_names.insert(final_name, id);
        Ok(id)
    }

    fn add_primitive(
        &mut self,
        name: &str,
        primitive: Primitive,
        transform: Transform,
        material: Option<MaterialId>,
    ) -> Result<ObjectId, Self::Error> {
        if !primitive.is_valid() {
            return Err(SceneError::InvalidPrimitive {
                name: name.to_string(),
                primitive,
            });
        }
        if !transform.is_finite() {
            return Err(SceneError::NonFiniteTransform {
                name: name.to_string(),
            });
        }
        if let Some(material_id) = material {
            if !self.materials.contains_key(material_id) {
                return Err(SceneError::UnknownMaterial {
                    name: name.to_string(),
                    material: material_id,
                });
            }
        }

        let final_name = Self::unique_name(&self.object_names, name)?;
        trace!(
            "Adding {} '{}' at {:?}",
            primitive.kind(),
            final_name,
            transform.location
        );
        let id = self.objects.insert(SceneObject {
            name: final_name.clone(),
            primitive,
            transform,
            material,
        });
        self.order.push(id);
        self.object_names.insert(final_name, id);
        Ok(id)
    }
}
