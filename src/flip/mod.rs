//! Flip system: the per-slot state machine and the animation boundary.
//!
//! ## Key Types
//!
//! - `FlipState`: Hidden/Shown, toggled only by selection events
//! - `FlipController`: applies selections, drives the sink
//! - `AnimationRequest` / `AnimationSink`: fire-and-forget boundary
//!   with the host's animation system
//! - `RecordingSink`: request-capturing sink for tests and demos

pub mod animation;
pub mod controller;

pub use animation::{AnimationRequest, AnimationSink, Easing, RecordingSink};
pub use controller::{FlipController, FlipState};
