//! Per-slot instance storage.
//!
//! Each slot holds its bound instance in a one-time cell. Binding is
//! a single atomic publication per slot: once `set` succeeds, every
//! later `get` - including from the selection path on another thread -
//! observes the instance. Before that, `get` returns `None` and the
//! slot reads as unbound.
//!
//! This is what lets the flip controller run lock-free alongside an
//! in-flight load: the two paths share only these cells, and the cells
//! are written exactly once.

use std::sync::OnceLock;

use super::slot::SlotIndex;
use crate::core::error::BindError;
use crate::deck::instance::PlaceableInstance;

/// One-time instance cells, one per slot.
#[derive(Debug)]
pub struct SlotBindings {
    cells: Vec<OnceLock<PlaceableInstance>>,
}

impl SlotBindings {
    /// Create unbound cells for `slot_count` slots.
    #[must_use]
    pub fn new(slot_count: usize) -> Self {
        Self {
            cells: (0..slot_count).map(|_| OnceLock::new()).collect(),
        }
    }

    /// Number of slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check if there are no slots.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The instance bound to a slot, if any.
    ///
    /// `None` for an out-of-range index or a slot not yet bound.
    #[must_use]
    pub fn get(&self, index: SlotIndex) -> Option<&PlaceableInstance> {
        self.cells.get(index.raw() as usize)?.get()
    }

    /// Check whether a slot holds an instance.
    #[must_use]
    pub fn is_bound(&self, index: SlotIndex) -> bool {
        self.get(index).is_some()
    }

    /// Number of slots currently bound.
    #[must_use]
    pub fn bound_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.get().is_some()).count()
    }

    /// Publish an instance into a slot's cell.
    ///
    /// Fails if the cell is already occupied; a slot binds exactly
    /// once per session.
    pub(crate) fn set(&self, slot: usize, instance: PlaceableInstance) -> Result<(), BindError> {
        self.cells[slot].set(instance).map_err(|_| BindError::AlreadyBound {
            slot: SlotIndex::new(slot as u16),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::template::{AssetName, Bounds, MeshData, Template};

    use std::sync::Arc;

    fn instance(name: &str) -> PlaceableInstance {
        let template = Template::new(
            AssetName::new(name),
            Arc::new(MeshData::new(vec![0], Bounds::unit())),
        );
        PlaceableInstance::stamp(&template, 1.0)
    }

    #[test]
    fn test_starts_unbound() {
        let bindings = SlotBindings::new(4);

        assert_eq!(bindings.len(), 4);
        assert_eq!(bindings.bound_count(), 0);
        for i in 0..4 {
            assert!(!bindings.is_bound(SlotIndex::new(i)));
        }
    }

    #[test]
    fn test_set_then_get() {
        let bindings = SlotBindings::new(4);

        bindings.set(2, instance("01")).unwrap();

        assert!(bindings.is_bound(SlotIndex::new(2)));
        assert_eq!(
            bindings.get(SlotIndex::new(2)).unwrap().symbol,
            AssetName::new("01")
        );
        assert_eq!(bindings.bound_count(), 1);
    }

    #[test]
    fn test_set_twice_fails() {
        let bindings = SlotBindings::new(4);

        bindings.set(0, instance("01")).unwrap();
        let err = bindings.set(0, instance("02")).unwrap_err();

        assert_eq!(
            err,
            BindError::AlreadyBound {
                slot: SlotIndex::new(0)
            }
        );
        // The first publication survives.
        assert_eq!(
            bindings.get(SlotIndex::new(0)).unwrap().symbol,
            AssetName::new("01")
        );
    }

    #[test]
    fn test_out_of_range_reads_as_unbound() {
        let bindings = SlotBindings::new(4);

        assert!(bindings.get(SlotIndex::new(99)).is_none());
        assert!(!bindings.is_bound(SlotIndex::new(99)));
    }
}
