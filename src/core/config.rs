//! Session configuration.
//!
//! Hosts configure a game session at startup by providing a
//! `GameConfig`: which assets make up the symbol set, how many copies
//! of each go onto the board, the grid shape, and the presentation
//! constants (instance scale, card footprint, flip animation).
//!
//! The defaults reproduce the classic 4x4 board: 8 symbols, 2 copies
//! each, 16 slots.

use serde::{Deserialize, Serialize};

use crate::assets::AssetName;
use crate::core::error::ConfigError;
use crate::flip::Easing;

/// Complete session configuration.
///
/// Build one with the `with_*` methods, then hand it to
/// `GameSession::new`, which validates that the grid capacity matches
/// the deck the asset list will produce.
///
/// ## Example
///
/// ```
/// use memory_grid::GameConfig;
///
/// let config = GameConfig::default()
///     .with_grid(4, 4)
///     .with_spacing(0.1);
///
/// assert_eq!(config.slot_count(), 16);
/// assert_eq!(config.deck_size(), 16);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameConfig {
    /// Ordered list of asset names to load; one symbol per name.
    pub asset_names: Vec<AssetName>,

    /// Placeable instances stamped from each loaded template.
    pub copies_per_template: usize,

    /// Grid rows.
    pub rows: usize,

    /// Grid columns.
    pub cols: usize,

    /// Distance between adjacent slot centers, in meters.
    pub spacing: f32,

    /// Uniform scale applied to every instance at creation.
    pub instance_scale: f32,

    /// Footprint of the face-down card blank (width, height, depth),
    /// exposed for hosts that render the placeholders.
    pub card_extent: [f32; 3],

    /// Flip animation duration in milliseconds.
    pub flip_duration_ms: u64,

    /// Flip animation timing curve.
    pub easing: Easing,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            asset_names: (1..=8).map(|n| AssetName::new(format!("{n:02}"))).collect(),
            copies_per_template: 2,
            rows: 4,
            cols: 4,
            spacing: 0.1,
            instance_scale: 0.002,
            card_extent: [0.04, 0.002, 0.04],
            flip_duration_ms: 250,
            easing: Easing::EaseInOut,
        }
    }
}

impl GameConfig {
    /// Replace the asset name list.
    #[must_use]
    pub fn with_asset_names<I, N>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<AssetName>,
    {
        self.asset_names = names.into_iter().map(Into::into).collect();
        self
    }

    /// Set the number of copies stamped from each template.
    #[must_use]
    pub fn with_copies_per_template(mut self, copies: usize) -> Self {
        self.copies_per_template = copies;
        self
    }

    /// Set the grid dimensions.
    #[must_use]
    pub fn with_grid(mut self, rows: usize, cols: usize) -> Self {
        self.rows = rows;
        self.cols = cols;
        self
    }

    /// Set the slot spacing.
    #[must_use]
    pub fn with_spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }

    /// Set the uniform instance scale.
    #[must_use]
    pub fn with_instance_scale(mut self, scale: f32) -> Self {
        self.instance_scale = scale;
        self
    }

    /// Set the flip animation duration.
    #[must_use]
    pub fn with_flip_duration_ms(mut self, duration_ms: u64) -> Self {
        self.flip_duration_ms = duration_ms;
        self
    }

    /// Set the flip animation timing curve.
    #[must_use]
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Total number of slots the grid will hold.
    #[must_use]
    pub fn slot_count(&self) -> usize {
        self.rows * self.cols
    }

    /// Total number of instances the deck will contain.
    #[must_use]
    pub fn deck_size(&self) -> usize {
        self.asset_names.len() * self.copies_per_template
    }

    /// Check that the grid capacity matches the deck size.
    ///
    /// A mismatch here would be rejected at bind time anyway; catching
    /// it before any load is spawned keeps a misconfigured session
    /// from doing useless work.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.slot_count() != self.deck_size() {
            return Err(ConfigError::ShapeMismatch {
                slots: self.slot_count(),
                deck: self.deck_size(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();

        assert_eq!(config.asset_names.len(), 8);
        assert_eq!(config.asset_names[0].as_str(), "01");
        assert_eq!(config.asset_names[7].as_str(), "08");
        assert_eq!(config.copies_per_template, 2);
        assert_eq!(config.slot_count(), 16);
        assert_eq!(config.deck_size(), 16);
        assert_eq!(config.flip_duration_ms, 250);
        assert_eq!(config.easing, Easing::EaseInOut);
    }

    #[test]
    fn test_config_builder() {
        let config = GameConfig::default()
            .with_asset_names(["a", "b", "c"])
            .with_copies_per_template(2)
            .with_grid(2, 3)
            .with_spacing(0.25)
            .with_instance_scale(0.01)
            .with_flip_duration_ms(100)
            .with_easing(Easing::Linear);

        assert_eq!(config.asset_names.len(), 3);
        assert_eq!(config.rows, 2);
        assert_eq!(config.cols, 3);
        assert_eq!(config.spacing, 0.25);
        assert_eq!(config.instance_scale, 0.01);
        assert_eq!(config.flip_duration_ms, 100);
        assert_eq!(config.easing, Easing::Linear);
    }

    #[test]
    fn test_validate_default() {
        assert!(GameConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_shape_mismatch() {
        let config = GameConfig::default().with_grid(3, 3);

        let err = config.validate().unwrap_err();
        assert_eq!(err, ConfigError::ShapeMismatch { slots: 9, deck: 16 });
    }

    #[test]
    fn test_config_serialization() {
        let config = GameConfig::default();

        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GameConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(config.asset_names, deserialized.asset_names);
        assert_eq!(config.slot_count(), deserialized.slot_count());
        assert_eq!(config.easing, deserialized.easing);
    }
}
