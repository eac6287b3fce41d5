//! Board system: slot placement, layout, and instance binding.
//!
//! ## Key Types
//!
//! - `SlotIndex` / `Position` / `SlotPlacement`: fixed slot identity
//!   and coordinates, computed once at layout
//! - `layout::generate`: pure row-major grid generation
//! - `SlotBindings`: one-time per-slot instance cells
//! - `binder::bind`: index-aligned, all-or-nothing deck binding

pub mod binder;
pub mod bindings;
pub mod layout;
pub mod slot;

pub use binder::bind;
pub use bindings::SlotBindings;
pub use slot::{Position, SlotIndex, SlotPlacement};
