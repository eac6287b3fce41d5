//! The per-slot flip state machine.
//!
//! Two states per slot, `Hidden` and `Shown`, toggled by `select`.
//! Every accepted toggle submits exactly one animation request; the
//! controller never waits for the tween, so re-selecting a slot
//! mid-animation simply retargets it (last writer wins - no debounce,
//! no queue).
//!
//! Selections against out-of-range or unbound slots are routine input
//! (taps on empty table space) and resolve to a silent no-op.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::animation::{AnimationRequest, AnimationSink, Easing};
use crate::board::bindings::SlotBindings;
use crate::board::slot::SlotIndex;
use crate::deck::instance::Orientation;

/// Visibility state of one slot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlipState {
    /// Face-down; the symbol is not visible.
    #[default]
    Hidden,
    /// Face-up; the symbol is visible.
    Shown,
}

impl FlipState {
    /// The other state.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            FlipState::Hidden => FlipState::Shown,
            FlipState::Shown => FlipState::Hidden,
        }
    }

    /// The instance orientation presenting this state.
    #[must_use]
    pub fn orientation(self) -> Orientation {
        match self {
            FlipState::Hidden => Orientation::FaceDown,
            FlipState::Shown => Orientation::FaceUp,
        }
    }
}

/// Tracks flip state for every slot and drives the animation boundary.
///
/// Lives entirely on the host's event path; the only state it shares
/// with the load pipeline is the read side of `SlotBindings`.
pub struct FlipController {
    flips: Vec<FlipState>,
    sink: Arc<dyn AnimationSink>,
    duration_ms: u64,
    easing: Easing,
}

impl FlipController {
    /// Create a controller with every slot hidden.
    #[must_use]
    pub fn new(
        slot_count: usize,
        duration_ms: u64,
        easing: Easing,
        sink: Arc<dyn AnimationSink>,
    ) -> Self {
        Self {
            flips: vec![FlipState::Hidden; slot_count],
            sink,
            duration_ms,
            easing,
        }
    }

    /// Flip state of one slot, or `None` for an out-of-range index.
    #[must_use]
    pub fn flip_state(&self, index: SlotIndex) -> Option<FlipState> {
        self.flips.get(index.raw() as usize).copied()
    }

    /// Flip states of all slots, in slot order.
    #[must_use]
    pub fn states(&self) -> &[FlipState] {
        &self.flips
    }

    /// Handle a selection event for one slot.
    ///
    /// Toggles the slot, submits one animation request toward the new
    /// orientation, and returns the new state. Out-of-range indices
    /// and unbound slots are ignored: no state changes, no request is
    /// submitted, and `None` is returned.
    pub fn select(&mut self, index: SlotIndex, bindings: &SlotBindings) -> Option<FlipState> {
        let Some(state) = self.flips.get_mut(index.raw() as usize) else {
            tracing::trace!(slot = %index, "selection out of range, ignored");
            return None;
        };
        if !bindings.is_bound(index) {
            tracing::trace!(slot = %index, "selection on unbound slot, ignored");
            return None;
        }

        *state = state.toggled();
        let new_state = *state;
        tracing::debug!(slot = %index, state = ?new_state, "slot flipped");

        self.sink.submit(AnimationRequest {
            slot: index,
            target: new_state.orientation(),
            duration_ms: self.duration_ms,
            easing: self.easing,
        });

        Some(new_state)
    }

    /// Acknowledge that the host finished animating a slot.
    ///
    /// A pure synchronization point: the state already changed when
    /// the flip was accepted, so there is nothing left to do here.
    pub fn animation_finished(&self, index: SlotIndex) {
        tracing::trace!(slot = %index, "flip animation finished");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::template::{AssetName, Bounds, MeshData, Template};
    use crate::board::binder;
    use crate::deck::instance::PlaceableInstance;
    use crate::flip::animation::RecordingSink;

    /// A fully bound 4-slot board plus a controller wired to a
    /// recording sink.
    fn bound_board() -> (FlipController, SlotBindings, Arc<RecordingSink>) {
        let bindings = SlotBindings::new(4);
        let deck: Vec<_> = (0..4)
            .map(|i| {
                let template = Template::new(
                    AssetName::new(format!("{i:02}")),
                    Arc::new(MeshData::new(vec![i as u8], Bounds::unit())),
                );
                PlaceableInstance::stamp(&template, 1.0)
            })
            .collect();
        binder::bind(&bindings, deck).unwrap();

        let sink = Arc::new(RecordingSink::new());
        let controller = FlipController::new(4, 250, Easing::EaseInOut, Arc::clone(&sink) as _);
        (controller, bindings, sink)
    }

    #[test]
    fn test_starts_all_hidden() {
        let (controller, _, _) = bound_board();
        assert!(controller.states().iter().all(|s| *s == FlipState::Hidden));
    }

    #[test]
    fn test_select_toggles_and_requests_animation() {
        let (mut controller, bindings, sink) = bound_board();
        let slot = SlotIndex::new(1);

        let state = controller.select(slot, &bindings);
        assert_eq!(state, Some(FlipState::Shown));

        let requests = sink.drain();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].slot, slot);
        assert_eq!(requests[0].target, Orientation::FaceUp);
        assert_eq!(requests[0].duration_ms, 250);
        assert_eq!(requests[0].easing, Easing::EaseInOut);
    }

    #[test]
    fn test_double_select_restores_state() {
        let (mut controller, bindings, sink) = bound_board();
        let slot = SlotIndex::new(2);

        controller.select(slot, &bindings);
        controller.select(slot, &bindings);

        assert_eq!(controller.flip_state(slot), Some(FlipState::Hidden));

        // Both transitions animated, the second retargeting the first.
        let requests = sink.drain();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].target, Orientation::FaceUp);
        assert_eq!(requests[1].target, Orientation::FaceDown);
    }

    #[test]
    fn test_select_out_of_range_is_noop() {
        let (mut controller, bindings, sink) = bound_board();

        assert_eq!(controller.select(SlotIndex::new(20), &bindings), None);

        assert!(controller.states().iter().all(|s| *s == FlipState::Hidden));
        assert!(sink.is_empty());
    }

    #[test]
    fn test_select_unbound_is_noop() {
        let bindings = SlotBindings::new(4);
        let sink = Arc::new(RecordingSink::new());
        let mut controller =
            FlipController::new(4, 250, Easing::EaseInOut, Arc::clone(&sink) as _);

        assert_eq!(controller.select(SlotIndex::new(0), &bindings), None);

        assert_eq!(controller.flip_state(SlotIndex::new(0)), Some(FlipState::Hidden));
        assert!(sink.is_empty());
    }

    #[test]
    fn test_selects_are_independent_per_slot() {
        let (mut controller, bindings, _) = bound_board();

        controller.select(SlotIndex::new(0), &bindings);
        controller.select(SlotIndex::new(3), &bindings);

        assert_eq!(controller.flip_state(SlotIndex::new(0)), Some(FlipState::Shown));
        assert_eq!(controller.flip_state(SlotIndex::new(1)), Some(FlipState::Hidden));
        assert_eq!(controller.flip_state(SlotIndex::new(2)), Some(FlipState::Hidden));
        assert_eq!(controller.flip_state(SlotIndex::new(3)), Some(FlipState::Shown));
    }

    #[test]
    fn test_animation_finished_is_noop() {
        let (mut controller, bindings, sink) = bound_board();
        let slot = SlotIndex::new(0);

        controller.select(slot, &bindings);
        let before = controller.flip_state(slot);

        controller.animation_finished(slot);

        assert_eq!(controller.flip_state(slot), before);
        assert_eq!(sink.len(), 1);
    }
}
