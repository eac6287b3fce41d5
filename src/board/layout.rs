//! Grid layout generation.
//!
//! A pure function of its parameters: `rows * cols` placements in
//! row-major order on the base plane, columns along x, rows along z.
//! Layout runs at session creation, before and independent of any
//! asset load.

use super::slot::{Position, SlotIndex, SlotPlacement};

/// Generate the slot placements for a grid.
///
/// Slot `i` sits at `(col * spacing, 0, row * spacing)` where
/// `row = i / cols` and `col = i % cols`.
#[must_use]
pub fn generate(rows: usize, cols: usize, spacing: f32) -> Vec<SlotPlacement> {
    let mut placements = Vec::with_capacity(rows * cols);

    for row in 0..rows {
        for col in 0..cols {
            let index = row * cols + col;
            placements.push(SlotPlacement {
                index: SlotIndex::new(index as u16),
                position: Position::new(col as f32 * spacing, 0.0, row as f32 * spacing),
            });
        }
    }

    placements
}
