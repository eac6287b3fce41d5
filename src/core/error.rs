//! Error types for session setup.
//!
//! Three stages can fail on the way to a playable board: loading an
//! asset, validating the configured shape, and binding the deck onto
//! the slots. Selection is deliberately absent here — taps on empty
//! space or unbound slots are routine input and resolve to a silent
//! no-op, not an error.
//!
//! Nothing is retried inside the core. A host that wants retry
//! re-runs setup from scratch.

use thiserror::Error;

use crate::assets::AssetName;
use crate::board::SlotIndex;

/// A single asset failed to load.
///
/// Any one of these fails the whole pipeline: the aggregate load
/// resolves to the first error and no deck is assembled.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// No asset exists under this name.
    #[error("asset not found: {name}")]
    NotFound { name: AssetName },

    /// The asset exists but could not be parsed into a template.
    #[error("asset {name} is corrupt: {detail}")]
    Corrupt { name: AssetName, detail: String },

    /// The underlying storage failed while reading the asset.
    #[error("i/o failure loading {name}: {detail}")]
    Io { name: AssetName, detail: String },
}

impl LoadError {
    /// The name of the asset that failed.
    #[must_use]
    pub fn name(&self) -> &AssetName {
        match self {
            LoadError::NotFound { name }
            | LoadError::Corrupt { name, .. }
            | LoadError::Io { name, .. } => name,
        }
    }
}

/// Binding the deck onto the slots failed.
///
/// Both variants are fatal to the session's setup and bind nothing:
/// silently truncating or padding would leave slots permanently
/// unbound or instances permanently orphaned.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BindError {
    /// Slot count and deck size disagree.
    #[error("cannot bind {deck} instances onto {slots} slots")]
    CountMismatch { slots: usize, deck: usize },

    /// A slot already holds an instance. Slots bind exactly once per
    /// session.
    #[error("slot {slot} is already bound")]
    AlreadyBound { slot: SlotIndex },
}

/// The configured grid cannot hold the configured deck.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// `rows * cols` disagrees with `asset_names * copies_per_template`.
    #[error("grid holds {slots} slots but the asset list produces {deck} instances")]
    ShapeMismatch { slots: usize, deck: usize },
}

/// Aggregate outcome of a failed session setup.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SetupError {
    /// The load pipeline failed; deck assembly was skipped.
    #[error(transparent)]
    Load(#[from] LoadError),

    /// The assembled deck could not be bound onto the slots.
    #[error(transparent)]
    Bind(#[from] BindError),

    /// The setup task stopped without reporting an outcome, e.g. the
    /// runtime shut down underneath it.
    #[error("setup task was interrupted before completion")]
    Interrupted,
}
