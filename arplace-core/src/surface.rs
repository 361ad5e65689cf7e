//! Surface-detection collaborator contract

use nalgebra::Matrix4;
use serde::{Deserialize, Serialize};

/// One candidate surface pose reported by the detection provider this frame
///
/// Providers rank their results; the first hit is the highest-confidence or
/// nearest candidate and is the one the reticle follows.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurfaceHit {
    /// Pose of the detected surface point (position + orientation)
    pub pose: Matrix4<f32>,
    pub confidence: f32,
}

impl SurfaceHit {
    pub fn new(pose: Matrix4<f32>, confidence: f32) -> Self {
        Self { pose, confidence }
    }
}

/// An active surface-detection request held by the provider
///
/// Exists only while searching for a placement; created lazily once per
/// placement cycle and invalidated on reset. Identity matters: the engine
/// compares handles and tickets to discard stale resolutions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SurfaceHandle(pub u64);

/// Identity of one in-flight handle request
///
/// Handle acquisition is asynchronous on real devices: the engine issues a
/// ticket with `SurfaceDetector::request_handle` and the host later delivers
/// the resolved handle together with the same ticket. A resolution carrying
/// a ticket the engine no longer waits on (a reset happened in between) is
/// discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HandleTicket(pub u64);

/// Surface-detection provider driven by the engine each frame
pub trait SurfaceDetector {
    /// Begin resolving a detection handle for this placement cycle
    ///
    /// The provider resolves at most once per ticket, delivering the handle
    /// back through the session's resolution entry point.
    fn request_handle(&mut self, ticket: HandleTicket);

    /// Poll this frame's candidate surfaces for a resolved handle
    ///
    /// May legitimately return no hits on any frame; an empty set simply
    /// hides the reticle.
    fn poll(&mut self, handle: SurfaceHandle) -> Vec<SurfaceHit>;
}
