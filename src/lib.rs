//! # memory-grid
//!
//! Core engine for a spatial memory-matching card game: a fixed grid
//! of face-down cards is dealt paired symbols, and a player flips
//! cards by selecting them.
//!
//! This is an in-process library. Rendering, plane tracking, and
//! hit-testing live in the host application; the core owns asset
//! acquisition, deck assembly, and per-slot flip state.
//!
//! ## Design Principles
//!
//! 1. **Explicit session state**: one `GameSession` owns the board,
//!    the deck bindings, the flip states, and the RNG. No ambient
//!    globals.
//!
//! 2. **Structured async setup**: the N asset loads run under a
//!    single order-preserving, fail-fast join; deck building,
//!    shuffling, and binding are chained off it as a continuation and
//!    report through a single-fire outcome channel.
//!
//! 3. **Lock-free selection**: flip state lives on the host's event
//!    path, bound instances in one-time per-slot cells. The two paths
//!    share nothing else, so taps are handled while loads are in
//!    flight - selections on unbound slots are routine no-ops.
//!
//! ## Modules
//!
//! - `core`: configuration, errors, session RNG
//! - `assets`: asset names, templates, sources, the load pipeline
//! - `deck`: placeable instances and the deck builder
//! - `board`: slot layout and instance binding
//! - `flip`: the flip state machine and the animation boundary
//! - `session`: the session object wiring it all together
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use memory_grid::assets::{Bounds, MemorySource, MeshData};
//! use memory_grid::{FlipState, GameConfig, GameRng, GameSession, RecordingSink, SlotIndex};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let mut source = MemorySource::new();
//! for n in 1..=8 {
//!     source.register(format!("{n:02}"), MeshData::new(vec![n], Bounds::unit()));
//! }
//!
//! let sink = Arc::new(RecordingSink::new());
//! let mut session =
//!     GameSession::new(GameConfig::default(), GameRng::new(42), sink).unwrap();
//!
//! let setup = session.begin_setup(Arc::new(source));
//! setup.outcome().await.unwrap();
//!
//! assert!(session.is_ready());
//! assert_eq!(session.select(SlotIndex::new(3)), Some(FlipState::Shown));
//! # }
//! ```

pub mod assets;
pub mod board;
pub mod core;
pub mod deck;
pub mod flip;
pub mod session;

// Re-export commonly used types
pub use crate::core::{BindError, ConfigError, GameConfig, GameRng, LoadError, SetupError};

pub use crate::assets::{AssetName, AssetSource, Bounds, MemorySource, MeshData, Template};

pub use crate::deck::{CollisionBox, DeckBuilder, Orientation, PlaceableInstance, Transform};

pub use crate::board::{Position, SlotBindings, SlotIndex, SlotPlacement};

pub use crate::flip::{
    AnimationRequest, AnimationSink, Easing, FlipController, FlipState, RecordingSink,
};

pub use crate::session::{GameSession, SetupHandle, SlotView};
