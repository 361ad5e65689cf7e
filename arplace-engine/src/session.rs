//! Placement session: the context object tying the engine together

use std::time::Duration;

use tracing::{debug, trace};

use arplace_core::{
    HandleTicket, ObjectTransform, Point3f, ReticlePose, SceneView, SurfaceDetector,
    SurfaceHandle, Vector2f, Viewport,
};

use crate::animation::ScaleInAnimation;
use crate::events::SessionEvent;
use crate::gesture::{GesturePhase, GestureTracker, PointerId};
use crate::manipulate::{apply_drag, apply_pinch};
use crate::reticle::ReticleTracker;

/// Where the session is in its placement cycle
///
/// Object pose and scale are meaningful only while `Placed`; the reticle
/// pose is meaningful only while `Searching`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementPhase {
    /// Tracking candidate surfaces, waiting for a select trigger
    Searching,
    /// The object is anchored and responds to gestures
    Placed,
}

/// Lifecycle of the surface-detection handle for the current cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SurfaceBinding {
    /// No request issued yet; the next searching frame issues one
    Idle,
    /// Request in flight, identified by its ticket
    Pending(HandleTicket),
    Ready(SurfaceHandle),
}

/// The placement and manipulation engine
///
/// Owns all mutable state of one placement cycle: the placement phase, the
/// object transform, the reticle, the gesture tracker, the entry animation,
/// and the surface-handle binding. Collaborators are passed into each
/// operation rather than captured, so the session itself stays free of
/// platform types.
///
/// All operations are total: precondition misses (select without a visible
/// reticle, pointer events while searching) and geometric degeneracies are
/// silent no-ops, never errors.
#[derive(Debug)]
pub struct ArSession {
    phase: PlacementPhase,
    object: ObjectTransform,
    object_visible: bool,
    reticle: ReticleTracker,
    gestures: GestureTracker,
    animation: Option<ScaleInAnimation>,
    surface: SurfaceBinding,
    next_ticket: u64,
    viewport: Viewport,
}

impl ArSession {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            phase: PlacementPhase::Searching,
            object: ObjectTransform::default(),
            object_visible: false,
            reticle: ReticleTracker::new(),
            gestures: GestureTracker::new(),
            animation: None,
            surface: SurfaceBinding::Idle,
            next_ticket: 0,
            viewport,
        }
    }

    pub fn phase(&self) -> PlacementPhase {
        self.phase
    }

    pub fn object_transform(&self) -> &ObjectTransform {
        &self.object
    }

    pub fn object_visible(&self) -> bool {
        self.object_visible
    }

    pub fn reticle_pose(&self) -> &ReticlePose {
        self.reticle.pose()
    }

    pub fn gesture_phase(&self) -> GesturePhase {
        self.gestures.phase()
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Update the viewport after a window resize
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Per-frame update, called once before each render
    ///
    /// While searching this lazily requests a detection handle (once per
    /// cycle), polls the resolved handle for this frame's hits and updates
    /// the reticle. In either phase it then ticks the entry animation and
    /// mirrors reticle and object state into the scene.
    pub fn on_frame(
        &mut self,
        now: Duration,
        detector: &mut dyn SurfaceDetector,
        scene: &mut dyn SceneView,
    ) -> Option<SessionEvent> {
        let event = match self.phase {
            PlacementPhase::Searching => {
                let hits = match self.surface {
                    SurfaceBinding::Idle => {
                        let ticket = self.issue_ticket();
                        detector.request_handle(ticket);
                        self.surface = SurfaceBinding::Pending(ticket);
                        Vec::new()
                    }
                    // Not resolved yet: no data this frame.
                    SurfaceBinding::Pending(_) => Vec::new(),
                    SurfaceBinding::Ready(handle) => detector.poll(handle),
                };
                let event = self.reticle.update(&hits, false);
                if event.is_some() {
                    trace!("placement surface found");
                }
                event
            }
            PlacementPhase::Placed => {
                self.reticle.update(&[], true);
                None
            }
        };

        self.tick_animation(now);

        let reticle = self.reticle.pose();
        scene.set_reticle_visible(reticle.visible);
        if reticle.visible {
            scene.set_reticle_pose(&reticle.matrix);
        }
        scene.set_object_visible(self.object_visible);
        scene.set_object_transform(&self.object);

        event
    }

    /// Deliver a resolved surface handle for an earlier request
    ///
    /// A resolution whose ticket no longer matches the pending request (a
    /// reset superseded it) is discarded.
    pub fn resolve_surface_handle(&mut self, ticket: HandleTicket, handle: SurfaceHandle) {
        match self.surface {
            SurfaceBinding::Pending(pending) if pending == ticket => {
                debug!(?handle, "surface detection handle ready");
                self.surface = SurfaceBinding::Ready(handle);
            }
            _ => trace!(?ticket, "discarding stale surface handle resolution"),
        }
    }

    /// Commit the object onto the surface under the reticle
    ///
    /// No-op unless searching with a visible reticle, which also makes a
    /// second trigger per cycle a no-op. The object takes the reticle's
    /// position and heading, starts at scale zero and grows in through the
    /// entry animation.
    pub fn on_select(&mut self, now: Duration) -> Option<SessionEvent> {
        if self.phase != PlacementPhase::Searching || !self.reticle.pose().visible {
            return None;
        }

        let reticle = self.reticle.pose();
        self.object.position = reticle.position();
        self.object.yaw = reticle.yaw();
        self.object.scale = 0.0;
        self.object_visible = true;
        self.phase = PlacementPhase::Placed;
        self.reticle.hide();
        self.animation = Some(ScaleInAnimation::starting_at(now));

        debug!(
            x = self.object.position.x,
            y = self.object.position.y,
            z = self.object.position.z,
            yaw = self.object.yaw,
            "object placed"
        );
        Some(SessionEvent::ObjectPlaced)
    }

    /// Place the object at a fixed position without surface detection
    ///
    /// The non-AR path: hosts without a detection provider show the object
    /// at a preset spot and still get the entry animation. No-op while an
    /// object is already placed.
    pub fn place_unanchored(&mut self, position: Point3f, now: Duration) -> Option<SessionEvent> {
        if self.phase == PlacementPhase::Placed {
            return None;
        }

        self.object.position = position;
        self.object.yaw = 0.0;
        self.object.scale = 0.0;
        self.object_visible = true;
        self.phase = PlacementPhase::Placed;
        self.reticle.hide();
        self.animation = Some(ScaleInAnimation::starting_at(now));

        debug!(x = position.x, y = position.y, z = position.z, "object placed unanchored");
        Some(SessionEvent::ObjectPlaced)
    }

    /// Pointer press; ignored unless an object is placed
    pub fn pointer_down(&mut self, id: PointerId, x: f32, y: f32) {
        if self.phase != PlacementPhase::Placed {
            return;
        }
        self.gestures
            .pointer_down(id, Vector2f::new(x, y), &self.object);
    }

    /// Pointer movement; drives drag and pinch/rotate updates
    pub fn pointer_move(&mut self, id: PointerId, x: f32, y: f32, scene: &dyn SceneView) {
        if self.phase != PlacementPhase::Placed {
            return;
        }
        self.gestures.pointer_move(id, Vector2f::new(x, y));

        match self.gestures.phase() {
            GesturePhase::Drag => {
                if let Some(pointer) = self.gestures.drag_pointer() {
                    let (ndc_x, ndc_y) = self.viewport.to_ndc(pointer.x, pointer.y);
                    let ray = scene.cast_ray(ndc_x, ndc_y);
                    apply_drag(&mut self.object, &ray);
                }
            }
            GesturePhase::PinchRotate => {
                if let (Some(baseline), Some((p0, p1))) =
                    (self.gestures.baseline().copied(), self.gestures.pinch_pointers())
                {
                    apply_pinch(&mut self.object, &baseline, p0, p1);
                }
            }
            GesturePhase::None => {}
        }
    }

    /// Pointer release; any release ends the active gesture
    pub fn pointer_up(&mut self, id: PointerId) {
        if self.phase != PlacementPhase::Placed {
            return;
        }
        self.gestures.pointer_up(id);
    }

    /// Return to searching for a new placement
    ///
    /// Hides the object, restores the scale baseline to 1.0 (the entry
    /// animation replays only through a new commit), invalidates the surface
    /// handle so the next frame requests a fresh one, and clears all gesture
    /// state. Triggered by an explicit user action or by the detection
    /// provider's session-end notification.
    pub fn reset(&mut self) -> SessionEvent {
        debug!("session reset, searching for a new placement");
        self.phase = PlacementPhase::Searching;
        self.object_visible = false;
        self.object.scale = 1.0;
        self.surface = SurfaceBinding::Idle;
        self.gestures.clear();
        SessionEvent::SceneReset
    }

    fn issue_ticket(&mut self) -> HandleTicket {
        self.next_ticket += 1;
        HandleTicket(self.next_ticket)
    }

    /// Advance the entry animation, if one is running
    ///
    /// The animation has no cancel call: a tick that finds the session no
    /// longer placed drops it without mutating the object.
    fn tick_animation(&mut self, now: Duration) {
        let Some(animation) = self.animation else {
            return;
        };
        if self.phase != PlacementPhase::Placed {
            self.animation = None;
            return;
        }
        let (scale, finished) = animation.sample(now);
        self.object.scale = scale;
        if finished {
            trace!("entry animation complete");
            self.animation = None;
        }
    }
}
