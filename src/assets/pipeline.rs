//! Aggregate asset loading.
//!
//! `load_all` turns N individual loads into one aggregate future with
//! two guarantees:
//!
//! - **Order preservation**: index i of the output is the template for
//!   `names[i]`, regardless of which underlying loads finish first.
//! - **All-or-nothing**: the aggregate resolves `Ok` only when every
//!   load succeeded; the first failure resolves the aggregate to that
//!   error and no partial result is ever produced.
//!
//! The loads run concurrently under a single structured join; the
//! degree of concurrency is an implementation freedom the contract
//! does not fix.

use futures::future::try_join_all;

use super::source::AssetSource;
use super::template::{AssetName, Template};
use crate::core::error::LoadError;

/// Load every named asset, preserving input order in the output.
///
/// Fails fast: the first `LoadError` becomes the aggregate outcome and
/// deck assembly downstream is skipped entirely.
pub async fn load_all(
    source: &dyn AssetSource,
    names: &[AssetName],
) -> Result<Vec<Template>, LoadError> {
    tracing::debug!(count = names.len(), "loading asset set");

    let result = try_join_all(names.iter().map(|name| source.load(name))).await;

    match &result {
        Ok(templates) => tracing::debug!(count = templates.len(), "asset set loaded"),
        Err(err) => tracing::warn!(asset = %err.name(), error = %err, "asset load failed"),
    }
    result
}
