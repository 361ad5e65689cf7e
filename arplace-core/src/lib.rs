//! Core data structures and traits for arplace
//!
//! This crate provides the data model for surface-anchored object placement:
//! object transforms, reticle poses, ray/plane geometry, and the collaborator
//! traits the engine crate drives (surface detection and scene access).

pub mod error;
pub mod geometry;
pub mod scene;
pub mod surface;
pub mod types;

pub use error::*;
pub use geometry::*;
pub use scene::*;
pub use surface::*;
pub use types::*;

/// Re-export commonly used types from nalgebra
pub use nalgebra::{Matrix4, Point3, Vector2, Vector3};

/// Common result type for arplace operations
pub type Result<T> = std::result::Result<T, Error>;
