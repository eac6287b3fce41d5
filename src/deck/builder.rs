//! Deck building - templates in, placeable instances out.
//!
//! For every loaded template the builder stamps a fixed number of
//! independent instances (two, for a matching game), each with the
//! configured uniform scale and freshly generated collision geometry.
//! The output order is unspecified; the caller shuffles it immediately.

use smallvec::SmallVec;

use super::instance::PlaceableInstance;
use crate::assets::template::Template;

/// Stamps placeable instances from loaded templates.
#[derive(Clone, Copy, Debug)]
pub struct DeckBuilder {
    copies_per_template: usize,
    instance_scale: f32,
}

impl DeckBuilder {
    /// Create a builder.
    #[must_use]
    pub fn new(copies_per_template: usize, instance_scale: f32) -> Self {
        Self {
            copies_per_template,
            instance_scale,
        }
    }

    /// Stamp the full deck.
    ///
    /// Output length is `templates.len() * copies_per_template`; every
    /// template contributes exactly `copies_per_template` independent
    /// instances.
    #[must_use]
    pub fn build(&self, templates: &[Template]) -> Vec<PlaceableInstance> {
        let mut deck = Vec::with_capacity(templates.len() * self.copies_per_template);

        for template in templates {
            let copies: SmallVec<[PlaceableInstance; 2]> = (0..self.copies_per_template)
                .map(|_| PlaceableInstance::stamp(template, self.instance_scale))
                .collect();
            deck.extend(copies);
        }

        tracing::debug!(
            templates = templates.len(),
            instances = deck.len(),
            "deck built"
        );
        deck
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::template::{AssetName, Bounds, MeshData};
    use crate::deck::instance::Orientation;

    use std::sync::Arc;

    fn templates(count: usize) -> Vec<Template> {
        (0..count)
            .map(|i| {
                Template::new(
                    AssetName::new(format!("{:02}", i + 1)),
                    Arc::new(MeshData::new(vec![i as u8], Bounds::unit())),
                )
            })
            .collect()
    }

    #[test]
    fn test_pairing_invariant() {
        let templates = templates(8);
        let deck = DeckBuilder::new(2, 0.002).build(&templates);

        assert_eq!(deck.len(), 16);

        // Every template maps to exactly two instances.
        for template in &templates {
            let count = deck.iter().filter(|i| i.symbol == template.name).count();
            assert_eq!(count, 2);
        }
    }

    #[test]
    fn test_instances_carry_scale_and_start_face_up() {
        let deck = DeckBuilder::new(2, 0.002).build(&templates(2));

        for instance in &deck {
            assert_eq!(instance.transform.scale, 0.002);
            assert_eq!(instance.orientation(), Orientation::FaceUp);
            assert_eq!(instance.collision.half_extents, [0.001, 0.001, 0.001]);
        }
    }

    #[test]
    fn test_copies_are_independent() {
        let mut deck = DeckBuilder::new(2, 0.002).build(&templates(1));

        deck[0].set_orientation(Orientation::FaceDown);

        assert_eq!(deck[0].orientation(), Orientation::FaceDown);
        assert_eq!(deck[1].orientation(), Orientation::FaceUp);
    }

    #[test]
    fn test_empty_templates() {
        let deck = DeckBuilder::new(2, 0.002).build(&[]);
        assert!(deck.is_empty());
    }

    #[test]
    fn test_other_copy_counts() {
        let deck = DeckBuilder::new(3, 0.01).build(&templates(4));
        assert_eq!(deck.len(), 12);
    }
}
