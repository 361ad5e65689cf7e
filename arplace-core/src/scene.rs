//! Render/geometry collaborator contract

use nalgebra::Matrix4;

use crate::geometry::Ray;
use crate::types::ObjectTransform;

/// Scene access the engine needs: ray casting for drag translation, plus the
/// reticle and object properties it mirrors its state into
///
/// Implemented by the host's render layer; the engine never touches the scene
/// graph beyond these setters.
pub trait SceneView {
    /// Cast a ray from the viewpoint through normalized device coordinates
    fn cast_ray(&self, ndc_x: f32, ndc_y: f32) -> Ray;

    fn set_reticle_visible(&mut self, visible: bool);

    fn set_reticle_pose(&mut self, pose: &Matrix4<f32>);

    fn set_object_visible(&mut self, visible: bool);

    fn set_object_transform(&mut self, transform: &ObjectTransform);
}
