//! The animation boundary with the host renderer.
//!
//! The core never tweens anything. On each flip transition it submits
//! one `AnimationRequest` through the host-supplied `AnimationSink`
//! and moves on; whether and how the host animates is its business.
//! The host reports tween completion back via
//! `FlipController::animation_finished`, which the core treats as a
//! pure synchronization acknowledgement.

use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use crate::board::slot::SlotIndex;
use crate::deck::instance::Orientation;

/// Timing curve for a flip animation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Easing {
    Linear,
    EaseIn,
    EaseOut,
    #[default]
    EaseInOut,
}

/// One orientation-animation request, fire-and-forget.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnimationRequest {
    /// Which slot's instance to animate.
    pub slot: SlotIndex,
    /// Orientation the instance should end up in.
    pub target: Orientation,
    /// Tween duration in milliseconds.
    pub duration_ms: u64,
    /// Tween timing curve.
    pub easing: Easing,
}

/// Receiver for animation requests.
///
/// Hosts implement this to route requests into their animation system.
/// `submit` must not block; a later request for the same slot
/// supersedes an in-flight one (last writer wins).
pub trait AnimationSink: Send + Sync {
    /// Accept one animation request.
    fn submit(&self, request: AnimationRequest);
}

/// Sink that records every request it receives.
///
/// Useful as a stand-in host in tests and demos.
#[derive(Debug, Default)]
pub struct RecordingSink {
    requests: Mutex<Vec<AnimationRequest>>,
}

impl RecordingSink {
    /// Create an empty recording sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of requests received so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// Check if no requests were received.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Take all recorded requests, oldest first.
    #[must_use]
    pub fn drain(&self) -> Vec<AnimationRequest> {
        std::mem::take(&mut *self.requests.lock().unwrap())
    }
}

impl AnimationSink for RecordingSink {
    fn submit(&self, request: AnimationRequest) {
        self.requests.lock().unwrap().push(request);
    }
}
