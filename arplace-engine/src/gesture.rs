//! Touch gesture state machine
//!
//! Classifies the active pointer set into drag (one pointer) and
//! pinch/rotate (two pointers) gestures and snapshots the baseline a
//! 2-pointer gesture measures its deltas against.

use arplace_core::{ObjectTransform, Vector2f};

/// Host-assigned identifier of one touch pointer
pub type PointerId = u32;

/// Current gesture classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GesturePhase {
    #[default]
    None,
    /// Exactly one active pointer: translate the object along its surface
    Drag,
    /// Two active pointers: distance drives scale, angle drives yaw
    PinchRotate,
}

/// Snapshot of state at the moment a 2-pointer gesture begins
///
/// Read-only for the duration of the gesture; every move event measures the
/// live pointer pair against these values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PinchBaseline {
    /// Euclidean screen distance between the two pointers at gesture start
    pub initial_distance: f32,
    /// Object scale at gesture start
    pub initial_scale: f32,
    /// `atan2` of the inter-pointer screen vector at gesture start, radians
    pub initial_angle: f32,
    /// Object yaw at gesture start, radians
    pub initial_yaw: f32,
}

/// Euclidean screen distance between two pointers
pub fn pointer_distance(p0: Vector2f, p1: Vector2f) -> f32 {
    (p0 - p1).norm()
}

/// Screen-space angle of the vector between two pointers
pub fn pointer_angle(p0: Vector2f, p1: Vector2f) -> f32 {
    (p0.y - p1.y).atan2(p0.x - p1.x)
}

/// Tracks active pointers and the gesture they form
///
/// The session only feeds this tracker while an object is placed; pointer
/// events arriving in any other phase never reach it.
#[derive(Debug, Default)]
pub struct GestureTracker {
    phase: GesturePhase,
    pointers: Vec<(PointerId, Vector2f)>,
    drag_anchor: Option<Vector2f>,
    baseline: Option<PinchBaseline>,
}

impl GestureTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    pub fn baseline(&self) -> Option<&PinchBaseline> {
        self.baseline.as_ref()
    }

    /// Screen position recorded when the current drag started
    ///
    /// Kept for diagnostics; the drag algorithm itself is purely incremental
    /// from the live pointer.
    pub fn drag_anchor(&self) -> Option<Vector2f> {
        self.drag_anchor
    }

    /// Position of the single active pointer while dragging
    pub fn drag_pointer(&self) -> Option<Vector2f> {
        match self.phase {
            GesturePhase::Drag => self.pointers.first().map(|(_, p)| *p),
            _ => None,
        }
    }

    /// The first two active pointers, in press order
    pub fn pinch_pointers(&self) -> Option<(Vector2f, Vector2f)> {
        if self.pointers.len() < 2 {
            return None;
        }
        Some((self.pointers[0].1, self.pointers[1].1))
    }

    /// Register a pointer press and classify the resulting pointer set
    ///
    /// One active pointer starts a drag; two start a pinch/rotate, capturing
    /// the baseline from the object's current scale and yaw. Further pointers
    /// are tracked but cause no transition; only the first two feed the
    /// pinch math.
    pub fn pointer_down(&mut self, id: PointerId, position: Vector2f, object: &ObjectTransform) {
        match self.pointers.iter_mut().find(|(pid, _)| *pid == id) {
            Some(entry) => entry.1 = position,
            None => self.pointers.push((id, position)),
        }

        match self.pointers.len() {
            1 => {
                self.phase = GesturePhase::Drag;
                self.drag_anchor = Some(position);
                self.baseline = None;
            }
            2 => {
                let (p0, p1) = (self.pointers[0].1, self.pointers[1].1);
                self.phase = GesturePhase::PinchRotate;
                self.baseline = Some(PinchBaseline {
                    initial_distance: pointer_distance(p0, p1),
                    initial_scale: object.scale,
                    initial_angle: pointer_angle(p0, p1),
                    initial_yaw: object.yaw,
                });
            }
            _ => {}
        }
    }

    /// Update a tracked pointer's position; unknown ids are ignored
    pub fn pointer_move(&mut self, id: PointerId, position: Vector2f) {
        if let Some(entry) = self.pointers.iter_mut().find(|(pid, _)| *pid == id) {
            entry.1 = position;
        }
    }

    /// Register a pointer release
    ///
    /// Any release ends the gesture: a 2-pointer gesture dropping to one
    /// remaining pointer resets to `None` rather than falling back to a
    /// drag.
    pub fn pointer_up(&mut self, id: PointerId) {
        self.pointers.retain(|(pid, _)| *pid != id);
        self.phase = GesturePhase::None;
        self.drag_anchor = None;
        self.baseline = None;
    }

    /// Drop all pointers and gesture state
    pub fn clear(&mut self) {
        self.pointers.clear();
        self.phase = GesturePhase::None;
        self.drag_anchor = None;
        self.baseline = None;
    }
}
