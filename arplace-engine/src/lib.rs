//! # arplace engine
//!
//! The stateful placement and manipulation engine. An [`ArSession`] owns the
//! whole placement lifecycle: it tracks the surface reticle while searching,
//! commits the object onto a detected surface on select, interprets 1- and
//! 2-finger touch sequences into drag and pinch/rotate pose updates, and
//! plays the scale-in entry animation after placement.
//!
//! The engine is single-threaded and cooperative. The host drives it from
//! three callback classes that never run concurrently: the per-frame render
//! callback ([`ArSession::on_frame`]), pointer event callbacks, and the
//! surface-detection provider's handle resolution
//! ([`ArSession::resolve_surface_handle`]).

pub mod animation;
pub mod events;
pub mod gesture;
pub mod manipulate;
pub mod reticle;
pub mod session;

pub use animation::*;
pub use events::*;
pub use gesture::*;
pub use manipulate::*;
pub use reticle::*;
pub use session::*;
