//! Game session: the explicit owner of all per-game state.
//!
//! A `GameSession` owns the slot placements, the per-slot bindings and
//! flip states, and the session RNG. Creating one lays out the grid
//! immediately; `begin_setup` then starts the asset pipeline and
//! chains deck building, shuffling, and binding as a continuation off
//! the aggregate load - never by polling.
//!
//! Selection works from the moment the session exists. While assets
//! are still loading every slot is unbound, so selections fall into
//! the documented no-op path; the first selection that can actually
//! flip a card is one that lands after its slot's bind was published.
//!
//! ## Setup outcome
//!
//! `begin_setup` hands back a `SetupHandle` wrapping a single-fire
//! channel. The task sends exactly one outcome; the handle is consumed
//! by value to await it, so the subscription is released exactly once
//! by construction. A failed setup binds nothing - the host may call
//! `begin_setup` again to retry from scratch.

use std::sync::Arc;

use tokio::sync::oneshot;

use crate::assets::pipeline;
use crate::assets::source::AssetSource;
use crate::assets::template::AssetName;
use crate::board::bindings::SlotBindings;
use crate::board::slot::{Position, SlotIndex, SlotPlacement};
use crate::board::{binder, layout};
use crate::core::config::GameConfig;
use crate::core::error::{ConfigError, SetupError};
use crate::core::rng::GameRng;
use crate::deck::builder::DeckBuilder;
use crate::deck::instance::PlaceableInstance;
use crate::flip::animation::AnimationSink;
use crate::flip::controller::{FlipController, FlipState};

/// Read view of one slot: placement, flip state, bound instance.
#[derive(Clone, Copy, Debug)]
pub struct SlotView<'a> {
    /// Stable slot index.
    pub index: SlotIndex,
    /// Fixed board coordinate.
    pub position: Position,
    /// Current flip state.
    pub flip: FlipState,
    /// The bound instance, once setup has published it.
    pub instance: Option<&'a PlaceableInstance>,
}

/// Awaitable outcome of one setup run.
///
/// Consuming `outcome` takes the handle by value: the underlying
/// single-fire subscription cannot be awaited twice or leak.
#[derive(Debug)]
pub struct SetupHandle {
    outcome: oneshot::Receiver<Result<(), SetupError>>,
}

impl SetupHandle {
    /// Wait for the setup task to finish and return its outcome.
    pub async fn outcome(self) -> Result<(), SetupError> {
        match self.outcome.await {
            Ok(result) => result,
            // The task died without reporting, e.g. runtime shutdown.
            Err(_) => Err(SetupError::Interrupted),
        }
    }
}

/// One game of memory: a grid of slots, a deck bound onto it, and the
/// flip state machine over it.
pub struct GameSession {
    config: GameConfig,
    placements: Vec<SlotPlacement>,
    bindings: Arc<SlotBindings>,
    controller: FlipController,
    rng: GameRng,
}

impl GameSession {
    /// Create a session: validates the config shape and lays out the
    /// grid. No assets are touched yet.
    pub fn new(
        config: GameConfig,
        rng: GameRng,
        sink: Arc<dyn AnimationSink>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let placements = layout::generate(config.rows, config.cols, config.spacing);
        let slot_count = placements.len();
        tracing::info!(slots = slot_count, "session created");

        Ok(Self {
            controller: FlipController::new(
                slot_count,
                config.flip_duration_ms,
                config.easing,
                sink,
            ),
            bindings: Arc::new(SlotBindings::new(slot_count)),
            placements,
            config,
            rng,
        })
    }

    /// Start loading assets and assembling the board.
    ///
    /// Spawns the pipeline on the current tokio runtime. Deck
    /// building, shuffling, and binding run inside the spawned task as
    /// a continuation of the aggregate load; a failure at any stage
    /// becomes the handle's outcome and leaves every slot unbound.
    ///
    /// Panics if called outside a tokio runtime.
    pub fn begin_setup(&mut self, source: Arc<dyn AssetSource>) -> SetupHandle {
        let (tx, rx) = oneshot::channel();

        let bindings = Arc::clone(&self.bindings);
        let names = self.config.asset_names.clone();
        let builder = DeckBuilder::new(self.config.copies_per_template, self.config.instance_scale);
        let mut rng = self.rng.fork();

        tracing::info!(assets = names.len(), "setup started");
        tokio::spawn(async move {
            let outcome = assemble(source.as_ref(), &names, builder, &mut rng, &bindings).await;
            if let Err(ref err) = outcome {
                tracing::warn!(error = %err, "setup failed");
            }
            // The host may have dropped the handle; the outcome is
            // delivered at most once either way.
            let _ = tx.send(outcome);
        });

        SetupHandle { outcome: rx }
    }

    /// Handle a selection event resolved to a slot index by the host's
    /// hit-testing.
    ///
    /// Returns the slot's new flip state, or `None` when the selection
    /// was ignored (out of range or unbound).
    pub fn select(&mut self, index: SlotIndex) -> Option<FlipState> {
        self.controller.select(index, &self.bindings)
    }

    /// Acknowledge a finished flip animation. A no-op synchronization
    /// point for the host's animation system.
    pub fn animation_finished(&self, index: SlotIndex) {
        self.controller.animation_finished(index);
    }

    /// The session configuration.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Fixed slot placements for the host to anchor into its scene.
    #[must_use]
    pub fn placements(&self) -> &[SlotPlacement] {
        &self.placements
    }

    /// The instance bound to a slot, once setup has published it.
    #[must_use]
    pub fn instance(&self, index: SlotIndex) -> Option<&PlaceableInstance> {
        self.bindings.get(index)
    }

    /// Flip state of one slot.
    #[must_use]
    pub fn flip_state(&self, index: SlotIndex) -> Option<FlipState> {
        self.controller.flip_state(index)
    }

    /// Read view of one slot.
    #[must_use]
    pub fn slot(&self, index: SlotIndex) -> Option<SlotView<'_>> {
        let placement = self.placements.get(index.raw() as usize)?;
        Some(SlotView {
            index: placement.index,
            position: placement.position,
            flip: self.controller.flip_state(index)?,
            instance: self.bindings.get(index),
        })
    }

    /// Read views of every slot, in slot order.
    pub fn slots(&self) -> impl Iterator<Item = SlotView<'_>> {
        self.placements
            .iter()
            .map(|p| self.slot(p.index).expect("placement indices are in range"))
    }

    /// Whether every slot holds an instance.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.bindings.bound_count() == self.bindings.len()
    }
}

/// The continuation chained off the aggregate load: build, shuffle,
/// bind. Runs inside the setup task.
async fn assemble(
    source: &dyn AssetSource,
    names: &[AssetName],
    builder: DeckBuilder,
    rng: &mut GameRng,
    bindings: &SlotBindings,
) -> Result<(), SetupError> {
    let templates = pipeline::load_all(source, names).await?;

    let mut deck = builder.build(&templates);
    rng.shuffle(&mut deck);
    binder::bind(bindings, deck)?;
    Ok(())
}
