//! Object and reticle pose types

use nalgebra::{Matrix4, Point3, Rotation3, Vector2, Vector3};
use serde::{Deserialize, Serialize};

/// A 3D point with floating point coordinates
pub type Point3f = Point3<f32>;

/// A 3D vector with floating point components
pub type Vector3f = Vector3<f32>;

/// A 2D screen-space vector with floating point components
pub type Vector2f = Vector2<f32>;

/// Smallest uniform scale a placed object may reach through gestures
pub const MIN_SCALE: f32 = 0.1;

/// Largest uniform scale a placed object may reach through gestures
pub const MAX_SCALE: f32 = 5.0;

/// Pose and uniform scale of the placed object
///
/// Rotation is about the vertical axis only; pitch and roll are never
/// altered by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObjectTransform {
    pub position: Point3f,
    /// Rotation about the vertical (Y) axis, in radians
    pub yaw: f32,
    /// Uniform scale applied identically to all three axes
    pub scale: f32,
}

impl ObjectTransform {
    pub fn new(position: Point3f, yaw: f32, scale: f32) -> Self {
        Self {
            position,
            yaw,
            scale,
        }
    }

    /// Set the uniform scale, clamped to the gesture range
    pub fn set_scale_clamped(&mut self, scale: f32) {
        self.scale = scale.clamp(MIN_SCALE, MAX_SCALE);
    }

    /// Build the full model matrix: translation * yaw rotation * uniform scale
    pub fn to_matrix(&self) -> Matrix4<f32> {
        let translation = Matrix4::new_translation(&self.position.coords);
        let rotation = Rotation3::from_axis_angle(&Vector3::y_axis(), self.yaw).to_homogeneous();
        let scaling = Matrix4::new_scaling(self.scale);
        translation * rotation * scaling
    }
}

impl Default for ObjectTransform {
    fn default() -> Self {
        Self {
            position: Point3f::origin(),
            yaw: 0.0,
            scale: 1.0,
        }
    }
}

/// Pose of the surface indicator shown while searching for a placement
///
/// Recomputed every frame from the best surface-detection hit; hidden and
/// frozen once the object is placed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReticlePose {
    pub visible: bool,
    pub matrix: Matrix4<f32>,
}

impl ReticlePose {
    /// An invisible reticle with an identity pose
    pub fn hidden() -> Self {
        Self {
            visible: false,
            matrix: Matrix4::identity(),
        }
    }

    /// Translation component of the pose
    pub fn position(&self) -> Point3f {
        Point3f::from(self.matrix.fixed_view::<3, 1>(0, 3).into_owned())
    }

    /// Rotation about the vertical axis, projected out of the pose orientation
    ///
    /// Pitch/roll in the detected surface pose are discarded; only the
    /// heading survives into the placed object.
    pub fn yaw(&self) -> f32 {
        self.matrix[(0, 2)].atan2(self.matrix[(2, 2)])
    }
}

impl Default for ReticlePose {
    fn default() -> Self {
        Self::hidden()
    }
}

/// Screen viewport in pixels, used to normalize pointer coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Convert screen pixel coordinates to normalized device coordinates
    ///
    /// X maps to [-1, 1] left-to-right, Y to [-1, 1] bottom-to-top.
    pub fn to_ndc(&self, x: f32, y: f32) -> (f32, f32) {
        let ndc_x = (x / self.width) * 2.0 - 1.0;
        let ndc_y = -(y / self.height) * 2.0 + 1.0;
        (ndc_x, ndc_y)
    }
}
