//! Slot identity and placement.
//!
//! A slot is a fixed grid position. Its index and coordinate are
//! computed once at layout time and never change; the mutable parts of
//! a slot (flip state, bound instance) live in `FlipController` and
//! `SlotBindings` respectively, which keeps the selection path and the
//! load path on disjoint state.

use serde::{Deserialize, Serialize};

/// Stable index of a grid slot, `0..rows*cols` in row-major order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SlotIndex(pub u16);

impl SlotIndex {
    /// Create a new slot index.
    #[must_use]
    pub const fn new(index: u16) -> Self {
        Self(index)
    }

    /// Get the raw index value.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }
}

impl std::fmt::Display for SlotIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Slot({})", self.0)
    }
}

/// A point on the board's base plane, in meters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Position {
    /// Create a position.
    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

/// One slot's fixed placement: index plus board coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SlotPlacement {
    /// Stable slot index.
    pub index: SlotIndex,
    /// Coordinate on the base plane, computed once at layout.
    pub position: Position,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_index() {
        let index = SlotIndex::new(5);
        assert_eq!(index.raw(), 5);
        assert_eq!(format!("{index}"), "Slot(5)");
    }

    #[test]
    fn test_position() {
        let position = Position::new(0.1, 0.0, 0.3);
        assert_eq!(position.x, 0.1);
        assert_eq!(position.y, 0.0);
        assert_eq!(position.z, 0.3);
    }

    #[test]
    fn test_placement_serialization() {
        let placement = SlotPlacement {
            index: SlotIndex::new(3),
            position: Position::new(0.3, 0.0, 0.0),
        };

        let json = serde_json::to_string(&placement).unwrap();
        let back: SlotPlacement = serde_json::from_str(&json).unwrap();
        assert_eq!(back, placement);
    }
}
