//! Placeable instances - the cards' runtime state.
//!
//! A `PlaceableInstance` is one independent copy stamped from a
//! loaded `Template`. The mesh payload stays shared and immutable;
//! everything mutable (transform, collision geometry) is owned per
//! instance, so turning one card over never moves its sibling.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::assets::template::{AssetName, Bounds, MeshData, Template};

/// Which way an instance faces.
///
/// `FaceDown` is the card-back orientation: the model rotated half a
/// turn about the x-axis so its face points into the board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Orientation {
    /// Face visible.
    #[default]
    FaceUp,
    /// Face hidden against the board.
    FaceDown,
}

impl Orientation {
    /// Rotation about the x-axis, in radians.
    #[must_use]
    pub fn angle_radians(self) -> f32 {
        match self {
            Orientation::FaceUp => 0.0,
            Orientation::FaceDown => std::f32::consts::PI,
        }
    }

    /// The opposite orientation.
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Orientation::FaceUp => Orientation::FaceDown,
            Orientation::FaceDown => Orientation::FaceUp,
        }
    }
}

/// Per-instance spatial state: uniform scale plus facing.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    /// Uniform scale applied on every axis.
    pub scale: f32,
    /// Current facing.
    pub orientation: Orientation,
}

impl Transform {
    /// Create a face-up transform with the given uniform scale.
    #[must_use]
    pub fn new(scale: f32) -> Self {
        Self {
            scale,
            orientation: Orientation::FaceUp,
        }
    }

    /// Rotation about the x-axis implied by the facing, in radians.
    #[must_use]
    pub fn rotation_x_radians(&self) -> f32 {
        self.orientation.angle_radians()
    }
}

/// Interaction geometry generated for an instance at build time.
///
/// An axis-aligned box in world scale, derived from the template's
/// local bounds and the instance's uniform scale.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CollisionBox {
    /// Half-edge lengths per axis.
    pub half_extents: [f32; 3],
}

impl CollisionBox {
    /// Generate a collision box from local bounds and a uniform scale.
    #[must_use]
    pub fn from_bounds(bounds: Bounds, scale: f32) -> Self {
        let extents = bounds.extents();
        Self {
            half_extents: [
                extents[0] * scale / 2.0,
                extents[1] * scale / 2.0,
                extents[2] * scale / 2.0,
            ],
        }
    }
}

/// One placeable copy of a loaded template.
///
/// Stamped by the deck builder, shuffled, then owned by exactly one
/// slot for the rest of the session.
#[derive(Clone, Debug, PartialEq)]
pub struct PlaceableInstance {
    /// Which symbol this card shows.
    pub symbol: AssetName,
    /// Shared immutable mesh payload for the renderer.
    pub mesh: Arc<MeshData>,
    /// Per-instance spatial state.
    pub transform: Transform,
    /// Per-instance interaction geometry.
    pub collision: CollisionBox,
}

impl PlaceableInstance {
    /// Stamp an instance from a template.
    ///
    /// Applies the uniform scale and generates collision geometry; the
    /// instance starts face-up, matching the raw model orientation.
    #[must_use]
    pub fn stamp(template: &Template, scale: f32) -> Self {
        Self {
            symbol: template.name.clone(),
            mesh: Arc::clone(&template.mesh),
            transform: Transform::new(scale),
            collision: CollisionBox::from_bounds(template.bounds(), scale),
        }
    }

    /// Set the facing.
    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.transform.orientation = orientation;
    }

    /// Current facing.
    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.transform.orientation
    }
}
