use crate::core::models::ids::{MaterialId, ObjectId};
use crate::core::models::primitive::{Color, Primitive, Transform};
use std::error::Error;

/// Defines the object-creation contract of a host 3-D scene.
///
/// The generator never builds meshes itself. It asks the host to instantiate
/// primitives with a transform and a material, one blocking call at a time.
/// Implementors own tessellation, naming policy and storage.
pub trait HostScene {
    /// The error type reported by the host.
    type Error: Error + Send + Sync + 'static;

    /// Removes every object from the scene.
    ///
    /// Materials are not removed; a later [`HostScene::create_material`] with
    /// an existing name receives a fresh, suffixed name.
    fn clear(&mut self);

    /// Registers a material and returns its handle.
    ///
    /// # Errors
    ///
    /// Returns an error if the host rejects the color.
    fn create_material(&mut self, name: &str, color: Color) -> Result<MaterialId, Self::Error>;

    /// Instantiates a primitive and adds it to the scene.
    ///
    /// # Arguments
    ///
    /// * `name` - The requested object name. The host may rename on collision.
    /// * `primitive` - The primitive to construct.
    /// * `transform` - The object placement.
    /// * `material` - The material slot to assign, if any.
    ///
    /// # Return
    ///
    /// The id of the newly created object.
    ///
    /// # Errors
    ///
    /// Returns an error if the primitive, transform, or material is rejected.
    fn add_primitive(
        &mut self,
        name: &str,
        primitive: Primitive,
        transform: Transform,
        material: Option<MaterialId>,
    ) -> Result<ObjectId, Self::Error>;
}
