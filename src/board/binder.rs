//! Binding the shuffled deck onto the board.
//!
//! Index-aligned and all-or-nothing: slot `i` receives `deck[i]`, and
//! any precondition failure binds nothing. Each instance is turned
//! face-down before publication so the card-back presentation and the
//! `Hidden` flip state start out consistent.
//!
//! One setup task binds per session; the one-time cells reject any
//! second attempt.

use super::bindings::SlotBindings;
use super::slot::SlotIndex;
use crate::core::error::BindError;
use crate::deck::instance::{Orientation, PlaceableInstance};

/// Bind `deck[i]` onto slot `i` for every slot.
///
/// Fails with `CountMismatch` when the deck and slot counts disagree,
/// or `AlreadyBound` when any slot already holds an instance; in both
/// cases no slot is modified.
pub fn bind(bindings: &SlotBindings, deck: Vec<PlaceableInstance>) -> Result<(), BindError> {
    if deck.len() != bindings.len() {
        return Err(BindError::CountMismatch {
            slots: bindings.len(),
            deck: deck.len(),
        });
    }

    if let Some(bound) =
        (0..bindings.len()).find(|&i| bindings.is_bound(SlotIndex::new(i as u16)))
    {
        return Err(BindError::AlreadyBound {
            slot: SlotIndex::new(bound as u16),
        });
    }

    let count = deck.len();
    for (slot, mut instance) in deck.into_iter().enumerate() {
        instance.set_orientation(Orientation::FaceDown);
        bindings.set(slot, instance)?;
    }

    tracing::info!(slots = count, "deck bound onto board");
    Ok(())
}
