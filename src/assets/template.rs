//! Loaded asset templates - immutable stamps for instances.
//!
//! A `Template` is one successfully loaded visual asset. It is never
//! mutated after load; the deck builder stamps placeable instances
//! from it and the template itself may then be discarded. The mesh
//! payload is shared behind an `Arc` so stamping a copy never clones
//! model data, only the per-instance mutable state.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Opaque identifier naming one visual asset.
///
/// The default symbol set is `"01"` through `"08"`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AssetName(String);

impl AssetName {
    /// Create a new asset name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The raw name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AssetName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AssetName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for AssetName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// Local-space axis-aligned bounding box of a model.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    /// Minimum corner.
    pub min: [f32; 3],
    /// Maximum corner.
    pub max: [f32; 3],
}

impl Bounds {
    /// Create bounds from two corners.
    #[must_use]
    pub const fn new(min: [f32; 3], max: [f32; 3]) -> Self {
        Self { min, max }
    }

    /// A unit cube centered on the origin.
    #[must_use]
    pub const fn unit() -> Self {
        Self::new([-0.5, -0.5, -0.5], [0.5, 0.5, 0.5])
    }

    /// Edge lengths per axis.
    #[must_use]
    pub fn extents(&self) -> [f32; 3] {
        [
            self.max[0] - self.min[0],
            self.max[1] - self.min[1],
            self.max[2] - self.min[2],
        ]
    }
}

/// Immutable model payload plus its local bounds.
///
/// The bytes are opaque to the core; the host's renderer interprets
/// them. The bounds feed collision-box generation at deck build time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MeshData {
    /// Opaque model payload for the renderer.
    pub bytes: Vec<u8>,
    /// Local-space bounding box.
    pub bounds: Bounds,
}

impl MeshData {
    /// Create a mesh payload.
    #[must_use]
    pub fn new(bytes: Vec<u8>, bounds: Bounds) -> Self {
        Self { bytes, bounds }
    }
}

/// One successfully loaded visual asset.
#[derive(Clone, Debug, PartialEq)]
pub struct Template {
    /// The name this template was loaded under.
    pub name: AssetName,
    /// Shared immutable mesh payload.
    pub mesh: Arc<MeshData>,
}

impl Template {
    /// Create a template from a loaded mesh.
    #[must_use]
    pub fn new(name: AssetName, mesh: Arc<MeshData>) -> Self {
        Self { name, mesh }
    }

    /// Local-space bounds of the model.
    #[must_use]
    pub fn bounds(&self) -> Bounds {
        self.mesh.bounds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_name() {
        let name = AssetName::new("01");
        assert_eq!(name.as_str(), "01");
        assert_eq!(format!("{name}"), "01");
        assert_eq!(AssetName::from("01"), name);
    }

    #[test]
    fn test_bounds_extents() {
        let bounds = Bounds::new([-1.0, 0.0, -2.0], [1.0, 0.5, 2.0]);
        assert_eq!(bounds.extents(), [2.0, 0.5, 4.0]);

        assert_eq!(Bounds::unit().extents(), [1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_template_shares_mesh() {
        let mesh = Arc::new(MeshData::new(vec![1, 2, 3], Bounds::unit()));
        let template = Template::new(AssetName::new("01"), Arc::clone(&mesh));

        assert_eq!(template.bounds(), Bounds::unit());
        assert_eq!(Arc::strong_count(&mesh), 2);
    }

    #[test]
    fn test_asset_name_serialization() {
        let name = AssetName::new("07");
        let json = serde_json::to_string(&name).unwrap();
        assert_eq!(json, "\"07\"");

        let back: AssetName = serde_json::from_str(&json).unwrap();
        assert_eq!(back, name);
    }
}
