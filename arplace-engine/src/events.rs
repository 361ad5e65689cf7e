//! Session events surfaced to the host UI

/// Notable state transitions the host UI reacts to
///
/// Returned by session operations instead of being pushed through a channel;
/// the host typically maps these to instruction text or button visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// The reticle became visible after being hidden: a placement surface
    /// is available.
    SurfaceFound,
    /// The object was committed onto a surface and the entry animation
    /// started.
    ObjectPlaced,
    /// The session returned to searching; the object is hidden.
    SceneReset,
}
