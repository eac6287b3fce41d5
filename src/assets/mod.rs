//! Asset system: names, loaded templates, sources, and the aggregate
//! load pipeline.
//!
//! ## Key Types
//!
//! - `AssetName`: opaque identifier for one visual asset
//! - `MeshData` / `Bounds`: immutable model payload and its extents
//! - `Template`: one loaded asset, the stamp instances are cloned from
//! - `AssetSource`: async loader seam the host implements
//! - `MemorySource`: registry-backed in-memory source
//! - `load_all`: order-preserving, fail-fast aggregate load

pub mod pipeline;
pub mod source;
pub mod template;

pub use pipeline::load_all;
pub use source::{AssetSource, MemorySource};
pub use template::{AssetName, Bounds, MeshData, Template};
