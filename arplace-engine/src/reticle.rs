//! Surface reticle tracking

use arplace_core::{ReticlePose, SurfaceHit};

use crate::events::SessionEvent;

/// Follows the best surface-detection hit with a visible indicator pose
///
/// Updated once per frame while the session searches for a placement; the
/// committed object takes its pose from whatever the reticle showed when the
/// select trigger fired.
#[derive(Debug, Default)]
pub struct ReticleTracker {
    pose: ReticlePose,
}

impl ReticleTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pose(&self) -> &ReticlePose {
        &self.pose
    }

    /// Consume this frame's detection hits
    ///
    /// While placed the reticle stays hidden and its pose is left untouched.
    /// While searching, the first (best-ranked) hit drives the pose; an empty
    /// hit set hides the reticle. Returns [`SessionEvent::SurfaceFound`] on
    /// the hidden-to-visible edge.
    pub fn update(&mut self, hits: &[SurfaceHit], placed: bool) -> Option<SessionEvent> {
        if placed {
            self.pose.visible = false;
            return None;
        }

        match hits.first() {
            Some(hit) => {
                let was_visible = self.pose.visible;
                self.pose.visible = true;
                self.pose.matrix = hit.pose;
                (!was_visible).then_some(SessionEvent::SurfaceFound)
            }
            None => {
                self.pose.visible = false;
                None
            }
        }
    }

    pub fn hide(&mut self) {
        self.pose.visible = false;
    }
}
